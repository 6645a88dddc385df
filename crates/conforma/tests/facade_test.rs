use conforma::{
    IntegerScheme, ListScheme, RecordScheme, StringScheme, UnknownKeys, ValidationErrorKind,
    validate,
};
use regex::Regex;
use serde_json::json;

#[test]
fn validate_decoded_json() {
    let scheme = RecordScheme::new()
        .field("host", StringScheme::new().pattern(Regex::new(r"^[a-z.]+$").unwrap()))
        .field("port", IntegerScheme::new().min(1).max(65535))
        .field("aliases", ListScheme::of(StringScheme::new()).optional(true));

    let mut config = conforma::json::from_json(&json!({
        "host": "example.org",
        "port": 8080,
    }))
    .unwrap();

    validate("config", &mut config, &scheme).unwrap();
    assert_eq!(
        conforma::json::to_json(&config).unwrap(),
        json!({"host": "example.org", "port": 8080})
    );
}

#[test]
fn delete_unknown_prunes_before_round_trip() {
    let scheme = RecordScheme::new()
        .field("keep", IntegerScheme::new())
        .unknown_keys(UnknownKeys::Delete);

    let mut config = conforma::json::from_json(&json!({
        "keep": 1,
        "stale": true,
    }))
    .unwrap();

    validate("config", &mut config, &scheme).unwrap();
    assert_eq!(
        conforma::json::to_json(&config).unwrap(),
        json!({"keep": 1})
    );
}

#[test]
fn failure_reports_one_fully_addressed_error() {
    let scheme = RecordScheme::new().field("port", IntegerScheme::new().min(1));
    let mut config = conforma::json::from_json(&json!({"port": 0})).unwrap();

    let err = validate("config", &mut config, &scheme).unwrap_err();
    assert_eq!(err.path().to_string(), "config[\"port\"]");
    assert!(matches!(
        err.kind(),
        ValidationErrorKind::InvalidValue { .. }
    ));
}
