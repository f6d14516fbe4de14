#![no_main]

use jsonvet::{Parser, ValidateOptions};
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 1; // option flags

fn validate(data: &[u8]) {
    let Some((&flags, payload)) = data.split_first() else {
        return;
    };

    let parser = Parser::new(0);
    let options = ValidateOptions {
        expect_document: flags & 1 != 0,
        allow_duplicate_keys: flags & 2 != 0,
    };

    let verdict = parser.validate(payload, options);

    // Compaction must agree with plain validation under default options,
    // and must be idempotent whenever it succeeds.
    let mut buf = payload.to_vec();
    match parser.validate_compact(&mut buf) {
        Ok(compacted) => {
            assert!(
                parser
                    .validate(compacted, ValidateOptions::default())
                    .is_ok()
            );
            let compacted = compacted.to_vec();
            let mut again = compacted.clone();
            let twice = parser.validate_compact(&mut again).unwrap();
            assert_eq!(twice, compacted.as_slice());
        }
        Err(err) => {
            assert_ne!(err.kind.debug_code(), 0);
            assert!(err.offset <= payload.len());
            assert!(
                parser
                    .validate(payload, ValidateOptions::default())
                    .is_err()
            );
        }
    }

    // Printable ASCII acceptance implies the reference parser can consume
    // the same bytes as a value stream.
    if verdict.is_ok()
        && !options.allow_duplicate_keys
        && payload
            .iter()
            .all(|&b| (0x20..0x7f).contains(&b))
    {
        let text = std::str::from_utf8(payload).expect("printable ASCII");
        let mut ok = true;
        for result in serde_json::Deserializer::from_str(text).into_iter::<serde_json::Value>() {
            if let Err(e) = result {
                ok = e.to_string().contains("number out of range");
                break;
            }
        }
        assert!(ok, "accepted input the reference parser rejects: {text:?}");
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() >= HEADER {
        validate(data);
    }
});
