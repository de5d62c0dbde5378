// sanitree-core/tests/sanitizer_tests.rs
//! End-to-end behaviour of a sanitization run: rule parsing, path resolution and
//! filter chains working together on realistic documents.

use serde_json::{json, Value};
use test_log::test;

use sanitree_core::{headless_sanitize, Sanitizer, SanitizerError};

fn sanitize(data: &Value, rules: &[(&str, &str)]) -> Result<Value, SanitizerError> {
    headless_sanitize(data, rules.iter().copied())
}

#[test]
fn test_combine_filters() -> Result<(), SanitizerError> {
    let data = json!({ "name": "  hello world   " });
    let out = sanitize(&data, &[("name", "trim|capitalize")])?;
    assert_eq!(out["name"], json!("Hello world"));
    Ok(())
}

#[test]
fn test_chain_order_is_observable() -> Result<(), SanitizerError> {
    let data = json!({ "name": "  hello world   " });
    let out = sanitize(&data, &[("name", "capitalize|trim")])?;
    assert_eq!(out["name"], json!("hello world"));
    Ok(())
}

#[test]
fn test_input_unchanged_if_no_filter() -> Result<(), SanitizerError> {
    let data = json!({ "name": "  HellO EverYboDy   ", "nested": { "list": [" a "] } });
    let out = sanitize(&data, &[("name", ""), ("nested.list.*", "|"), ("nested", "")])?;
    assert_eq!(out, data);
    Ok(())
}

#[test]
fn test_only_nested_rule_input() -> Result<(), SanitizerError> {
    let data = json!({ "id": "nope", "label": "lol" });
    let out = sanitize(&data, &[("data.*.id", "capitalize"), ("label", "capitalize")])?;
    assert_eq!(out["id"], json!("nope"));
    assert_eq!(out["label"], json!("Lol"));
    Ok(())
}

#[test]
fn test_nested_input() -> Result<(), SanitizerError> {
    let data = json!({
        "first_level": { "name": "  HellO EverYboDy   ", "other": "  keep  " },
        "first_level_arr": [
            { "name": "  HellO   " },
            { "name": "  WaTeVeR   ", "list": ["  lol  ", ["  nested  "]] },
        ],
    });
    let rules = [
        ("first_level.name", "trim|capitalize"),
        ("first_level_arr.*.name", "trim|capitalize"),
        ("first_level_arr.*.list.*", "trim|capitalize"),
        ("first_level_arr.*.wasad.*.wate", "trim|capitalize"),
    ];

    let out = sanitize(&data, &rules)?;
    assert_eq!(out["first_level"]["name"], json!("Hello everybody"));
    assert_eq!(out["first_level"]["other"], json!("  keep  "));
    assert_eq!(out["first_level_arr"][0]["name"], json!("Hello"));
    assert_eq!(out["first_level_arr"][1]["name"], json!("Watever"));
    assert_eq!(out["first_level_arr"][1]["list"][0], json!("Lol"));
    assert_eq!(out["first_level_arr"][1]["list"][1], json!(["  nested  "]));
    assert!(out["first_level_arr"][0].get("wasad").is_none());
    Ok(())
}

#[test]
fn test_throws_if_non_existing_filter() {
    let data = json!({ "name": "  HellO EverYboDy   " });
    let err = sanitize(&data, &[("name", "non-filter")]).err().unwrap();
    assert_eq!(err, SanitizerError::UnknownFilter("non-filter".to_string()));
}

#[test]
fn test_unknown_filter_on_unmatched_path_still_fails() {
    let data = json!({ "name": "x" });
    let err = sanitize(&data, &[("name", "trim"), ("absent.*", "trim|non-filter")]).err().unwrap();
    assert_eq!(err, SanitizerError::UnknownFilter("non-filter".to_string()));
}

#[test]
fn test_filter_names_are_not_trimmed() {
    let data = json!({ "name": "x" });
    let err = sanitize(&data, &[("name", "trim | uppercase")]).err().unwrap();
    assert_eq!(err, SanitizerError::UnknownFilter("trim ".to_string()));
}

#[test]
fn test_falsy_present_values_are_sanitized() -> Result<(), SanitizerError> {
    let data = json!({ "zero": 0, "empty": "", "off": false, "nothing": null });
    let out = sanitize(
        &data,
        &[
            ("zero", "cast:string"),
            ("empty", "cast:bool"),
            ("off", "cast:int"),
            ("nothing", "cast:array"),
        ],
    )?;
    assert_eq!(out, json!({ "zero": "0", "empty": false, "off": 0, "nothing": [] }));
    Ok(())
}

#[test]
fn test_caller_input_is_not_mutated() -> Result<(), SanitizerError> {
    let data = json!({ "items": [{ "name": " a " }] });
    let snapshot = data.clone();
    let out = sanitize(&data, &[("items.*.name", "trim")])?;
    assert_eq!(data, snapshot);
    assert_ne!(out, data);
    Ok(())
}

#[test]
fn test_idempotent_chain_applied_twice() -> Result<(), SanitizerError> {
    let sanitizer = Sanitizer::from_definitions([
        ("users.*.name", "trim|capitalize"),
        ("tags.*", "trim|lowercase"),
    ]);
    let data = json!({
        "users": [{ "name": "  aDA lovelace " }, { "name": "ALAN" }],
        "tags": [" Rust ", "SERDE"],
    });
    let once = sanitizer.sanitize(&data)?;
    let twice = sanitizer.sanitize(&once)?;
    assert_eq!(once, twice);
    assert_eq!(once["users"][0]["name"], json!("Ada lovelace"));
    Ok(())
}

#[test]
fn test_mapping_key_order_is_preserved() -> Result<(), SanitizerError> {
    let data: Value =
        serde_json::from_str(r#"{"zeta": " z ", "alpha": " a ", "mid": " m "}"#).unwrap();
    let out = sanitize(&data, &[("alpha", "trim"), ("zeta", "trim")])?;
    let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    Ok(())
}

#[test]
fn test_overlapping_paths_apply_in_order() -> Result<(), SanitizerError> {
    let data = json!({ "rows": [{ "when": " 21/03/2016 " }] });
    let out = sanitize(
        &data,
        &[("rows.*.when", "trim"), ("rows.0.when", "format-date:%d/%m/%Y, %Y-%m-%d")],
    )?;
    assert_eq!(out["rows"][0]["when"], json!("2016-03-21"));
    Ok(())
}

#[test]
fn test_invalid_filter_options_fail_the_run() {
    let data = json!({ "when": "21/03/2016" });
    let err = sanitize(&data, &[("when", "format-date:%d/%m/%Y")]).err().unwrap();
    assert!(matches!(err, SanitizerError::InvalidFilterOptions { .. }));
}

#[test]
fn test_escape_over_mapping_wildcard() -> Result<(), SanitizerError> {
    let data = json!({
        "comments": { "c1": { "body": "<b>hi</b> & bye" }, "c2": { "author": "x" } }
    });
    let out = sanitize(&data, &[("comments.*.body", "escape-html")])?;
    assert_eq!(out["comments"]["c1"]["body"], json!("hi &amp; bye"));
    assert_eq!(out["comments"]["c2"], json!({ "author": "x" }));
    Ok(())
}
