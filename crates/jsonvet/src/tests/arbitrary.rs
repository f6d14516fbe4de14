use quickcheck::{Arbitrary, Gen};
use serde_json::{Map, Number, Value};

/// An arbitrary JSON document, generated as a `serde_json::Value` so the
/// oracle-backed properties can serialize it any way they like.
///
/// Keys are always non-empty (an empty key is rejected by this validator on
/// purpose) and maps deduplicate on their own, so every generated document
/// is accepted under default options.
#[derive(Debug, Clone)]
pub(crate) struct ArbitraryJson(pub Value);

impl Arbitrary for ArbitraryJson {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 3;
        Self(gen_value(g, depth))
    }
}

fn gen_value(g: &mut Gen, depth: usize) -> Value {
    let scalar_only = depth == 0;
    match usize::arbitrary(g) % if scalar_only { 4 } else { 6 } {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::Number(gen_number(g)),
        3 => Value::String(String::arbitrary(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| gen_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(gen_key(g), gen_value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

fn gen_key(g: &mut Gen) -> String {
    let key = String::arbitrary(g);
    if key.is_empty() { String::from("k") } else { key }
}

fn gen_number(g: &mut Gen) -> Number {
    if bool::arbitrary(g) {
        Number::from(i64::arbitrary(g))
    } else {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }
        Number::from_f64(value).expect("finite f64")
    }
}
