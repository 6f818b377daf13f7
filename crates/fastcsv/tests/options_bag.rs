#![cfg(feature = "serde")]

use fastcsv::Options;
use serde_json::json;

fn resolve(bag: serde_json::Value) -> Options {
    serde_json::from_value(bag).unwrap()
}

#[test]
fn empty_bag_takes_defaults() {
    let options = resolve(json!({}));
    assert_eq!(options, Options::default());
}

#[test]
fn named_options_override_defaults() {
    let options = resolve(json!({
        "delimiter": ";",
        "hasHeader": false,
        "skipEmptyLines": false
    }));
    assert_eq!(options.delimiter, ';');
    assert!(!options.has_header);
    assert!(!options.skip_empty_lines);
}

#[test]
fn unknown_names_are_ignored() {
    let options = resolve(json!({
        "delimiter": "|",
        "encoding": "utf-8",
        "chunkSize": 4096
    }));
    assert_eq!(options.delimiter, '|');
    assert!(options.has_header);
}

#[test]
fn multi_character_delimiter_is_rejected() {
    let result: Result<Options, _> = serde_json::from_value(json!({ "delimiter": ",," }));
    assert!(result.is_err());
}

#[test]
fn resolved_options_still_validate() {
    let options = resolve(json!({ "delimiter": "\"" }));
    assert!(fastcsv::CsvParser::new(options).is_err());
}

#[test]
fn records_serialize_in_header_order() {
    let out = fastcsv::parse_to_records("b,a\n1,2", &Options::default()).unwrap();
    let encoded = serde_json::to_string(&out.records).unwrap();
    assert_eq!(encoded, r#"[{"b":"1","a":"2"}]"#);
}
