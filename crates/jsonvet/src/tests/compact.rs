//! In-place compaction: whitespace stripping, payload preservation,
//! idempotence, and shared diagnostics with plain validation.

use crate::{ErrorKind, Parser, ValidateOptions};

fn compacted(input: &str) -> String {
    let parser = Parser::new(0);
    let mut buf = input.as_bytes().to_vec();
    let out = parser.validate_compact(&mut buf).unwrap();
    String::from_utf8(out.to_vec()).unwrap()
}

#[test]
fn already_compact_inputs_pass_through() {
    for input in [
        "{}",
        "[]",
        "null",
        "42",
        r#"{"foo":"bar"}"#,
        r#"{"foo":{"bar":"baz"}}"#,
        r#"{"a":[]}"#,
        r#"{"a":["b","c","d"]}"#,
        r#"{"a":["b",true,null]}"#,
        r#"[1,2.5e3,-0.25]"#,
    ] {
        assert_eq!(compacted(input), input);
    }
}

#[test]
fn whitespace_is_stripped_outside_strings() {
    assert_eq!(
        compacted(" { \" foo \" : \" bar \" } "),
        r#"{" foo ":" bar "}"#
    );
    assert_eq!(
        compacted("\n{\n\"foo\"\n:\n  \"bar\"\t\t} "),
        r#"{"foo":"bar"}"#
    );
    assert_eq!(compacted(" [ 1 , 2 , [ ] , { } ] "), "[1,2,[],{}]");
    assert_eq!(compacted(" [ 1 , 2.5e3 ] "), "[1,2.5e3]");
    assert_eq!(compacted("\t true \n"), "true");
}

#[test]
fn escapes_survive_compaction_verbatim() {
    let input = r#"{"\rf\"o\to":"b\"a\\r"}"#;
    assert_eq!(compacted(input), input);
    // The full escape set is legal in both validation and compaction.
    let all = "[ \"a\\r\\nb\\b\\t\\\"\\\\\\/\\f\\uAAAA\" ]";
    assert_eq!(compacted(all), "[\"a\\r\\nb\\b\\t\\\"\\\\\\/\\f\\uAAAA\"]");
}

#[test]
fn compaction_is_idempotent() {
    let once = compacted(" { \"a\" : [ 1 , true , \"x y\" ] } ");
    assert_eq!(compacted(&once), once);
}

#[test]
fn top_level_values_keep_one_separating_byte() {
    // Whitespace between top-level values separates tokens; collapsing it
    // entirely would merge `1 2` into a different document.
    assert_eq!(compacted("null  true \n 1"), "null true 1");
    assert_eq!(compacted("1   2"), "1 2");
    assert_eq!(compacted("1\n2"), "1\n2");
    assert_eq!(compacted(" [ ] "), "[]");
    assert_eq!(compacted("[] []"), "[] []");
}

#[test]
fn compaction_reports_the_same_diagnostics() {
    let parser = Parser::new(0);

    let mut buf = br#"{"x":123.23.2}"#.to_vec();
    let err = parser.validate_compact(&mut buf).unwrap_err();
    assert_eq!((err.kind, err.offset), (ErrorKind::BadNumber, 11));

    let mut buf = br#"{"x":1,"x":2}"#.to_vec();
    let err = parser.validate_compact(&mut buf).unwrap_err();
    assert_eq!((err.kind, err.offset), (ErrorKind::DuplicateKey, 9));

    let mut buf = b"".to_vec();
    let err = parser.validate_compact(&mut buf).unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyInput);
}

#[test]
fn compaction_agrees_with_validation() {
    let parser = Parser::new(0);
    for input in [
        " { \"a\" : null } ",
        "[ [ [ 0 ] ] ]",
        "\"plain\"",
        " -12.5e-3 ",
        "{\"k\":\"\\u0041\"}",
    ] {
        let validated = parser.validate(input, ValidateOptions::default());
        let mut buf = input.as_bytes().to_vec();
        let compacted = parser.validate_compact(&mut buf).map(drop);
        assert_eq!(validated, compacted, "input {input:?}");
    }
}
