use serde_json::{json, Value as Json};
use shroud::{process, process_with_report, Document, Outcome, ProcessError, Skip};
use std::convert::Infallible;
use std::error::Error as _;

fn tag(s: &str) -> Result<String, Infallible> {
    Ok(format!("<{}>", s))
}

fn run(keys: &[&str], input: Json) -> Json {
    let mut doc = Document::from(input);
    process(keys, &mut doc, tag).unwrap();
    Json::from(doc)
}

// ============================================================================
// Empty key list
// ============================================================================

#[test]
fn test_no_keys_is_noop() {
    let input = json!({"a": "x", "b": [{"c": "y"}], "d": {"e": "z"}});
    assert_eq!(run(&[], input.clone()), input);
}

#[test]
fn test_no_keys_never_calls_transform() {
    let mut doc = Document::from(json!({"a": "x"}));
    let keys: Vec<String> = Vec::new();
    process(&keys, &mut doc, |_: &str| -> Result<String, Infallible> {
        panic!("transform must not be called")
    })
    .unwrap();
}

#[test]
fn test_returns_same_document() {
    let mut doc = Document::from(json!({"a": "x"}));
    let returned = process(&["a"], &mut doc, tag).unwrap();
    *returned = Document::Null;
    assert_eq!(doc, Document::Null);
}

// ============================================================================
// Simple keys
// ============================================================================

#[test]
fn test_simple_string_rewritten() {
    assert_eq!(run(&["name"], json!({"name": "abc", "x": 1})), json!({"name": "<abc>", "x": 1}));
}

#[test]
fn test_simple_non_strings_untouched() {
    let input = json!({
        "n": 42,
        "f": 1.5,
        "b": true,
        "z": null,
        "o": {"name": "x"},
        "a": ["x"]
    });
    assert_eq!(run(&["n", "f", "b", "z", "o", "a"], input.clone()), input);
}

#[test]
fn test_simple_absent_untouched() {
    let input = json!({"other": "x"});
    assert_eq!(run(&["name"], input.clone()), input);
}

#[test]
fn test_simple_on_non_object_root() {
    for input in [json!(["name"]), json!("name"), json!(3), json!(null)] {
        assert_eq!(run(&["name"], input.clone()), input);
    }
}

#[test]
fn test_empty_string_is_still_a_string() {
    assert_eq!(run(&["a"], json!({"a": ""})), json!({"a": "<>"}));
}

// ============================================================================
// Nested keys
// ============================================================================

#[test]
fn test_nested_rewritten() {
    assert_eq!(run(&["a:b"], json!({"a": {"b": "x", "c": "y"}})), json!({"a": {"b": "<x>", "c": "y"}}));
}

#[test]
fn test_nested_missing_child() {
    assert_eq!(run(&["a:b"], json!({"a": {}})), json!({"a": {}}));
}

#[test]
fn test_nested_missing_parent() {
    assert_eq!(run(&["a:b"], json!({})), json!({}));
}

#[test]
fn test_nested_parent_is_scalar() {
    for parent in [json!("b"), json!(1), json!(null), json!(false)] {
        let input = json!({"a": parent});
        assert_eq!(run(&["a:b"], input.clone()), input);
    }
}

#[test]
fn test_nested_parent_is_array_is_not_broadcast() {
    let input = json!({"a": [{"b": "x"}, {"b": "y"}]});
    assert_eq!(run(&["a:b"], input.clone()), input);
}

#[test]
fn test_nested_child_not_string() {
    let input = json!({"a": {"b": {"c": "x"}}});
    assert_eq!(run(&["a:b"], input.clone()), input);
}

// ============================================================================
// Array broadcast
// ============================================================================

#[test]
fn test_broadcast_under_field() {
    assert_eq!(
        run(&["arr[]:c"], json!({"arr": [{"c": "1"}, {"c": "2"}, {"other": 1}]})),
        json!({"arr": [{"c": "<1>"}, {"c": "<2>"}, {"other": 1}]})
    );
}

#[test]
fn test_broadcast_root_array() {
    assert_eq!(run(&["[]:c"], json!([{"c": "x"}])), json!([{"c": "<x>"}]));
}

#[test]
fn test_broadcast_skips_elements_individually() {
    // Elements after a non-matching one are still processed, each at its own index.
    assert_eq!(
        run(
            &["arr[]:c"],
            json!({"arr": [{"d": "0"}, {"c": 5}, "scalar", [1], null, {"c": "5"}, {"c": "6"}]})
        ),
        json!({"arr": [{"d": "0"}, {"c": 5}, "scalar", [1], null, {"c": "<5>"}, {"c": "<6>"}]})
    );
}

#[test]
fn test_broadcast_target_not_array() {
    for target in [json!({"c": "x"}), json!("x"), json!(1), json!(null)] {
        let input = json!({"arr": target});
        assert_eq!(run(&["arr[]:c"], input.clone()), input);
    }
}

#[test]
fn test_broadcast_missing_array() {
    let input = json!({"other": [{"c": "x"}]});
    assert_eq!(run(&["arr[]:c"], input.clone()), input);
}

#[test]
fn test_root_broadcast_on_object_root() {
    let input = json!({"c": "x"});
    assert_eq!(run(&["[]:c"], input.clone()), input);
}

#[test]
fn test_broadcast_empty_array() {
    assert_eq!(run(&["arr[]:c"], json!({"arr": []})), json!({"arr": []}));
}

#[test]
fn test_broadcast_visits_in_index_order() {
    let mut doc = Document::from(json!({"arr": [{"c": "a"}, {"c": "b"}, {"c": "c"}]}));
    let mut seen = Vec::new();
    process(&["arr[]:c"], &mut doc, |s: &str| {
        seen.push(s.to_string());
        Ok::<_, Infallible>(s.to_string())
    })
    .unwrap();
    assert_eq!(seen, vec!["a", "b", "c"]);
}

// ============================================================================
// Multiple keys
// ============================================================================

#[test]
fn test_keys_applied_in_order_and_independently() {
    let input = json!({
        "ssn": "1",
        "card": {"number": "2", "exp": 12},
        "contacts": [{"email": "3"}, {"phone": "4"}]
    });
    let expected = json!({
        "ssn": "<1>",
        "card": {"number": "<2>", "exp": 12},
        "contacts": [{"email": "<3>"}, {"phone": "4"}]
    });
    assert_eq!(
        run(&["missing", "ssn", "card:number", "card:exp", "contacts[]:email", "x[]:y"], input),
        expected
    );
}

#[test]
fn test_same_key_twice_applies_twice() {
    assert_eq!(run(&["a", "a"], json!({"a": "x"})), json!({"a": "<<x>>"}));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unsupported_nesting_aborts_remaining_keys() {
    let mut doc = Document::from(json!({"a": "1", "b": "2"}));
    let err = process(&["a", "x:y:z", "b"], &mut doc, tag).unwrap_err();

    assert!(matches!(err, ProcessError::UnsupportedNesting(_)));
    assert!(err.is_bad_request());
    // earlier key kept, later key never attempted
    assert_eq!(Json::from(doc), json!({"a": "<1>", "b": "2"}));
}

#[test]
fn test_unsupported_nesting_regardless_of_document() {
    for input in [json!({}), json!([]), json!(null), json!({"a": {"b": {"c": "x"}}})] {
        let mut doc = Document::from(input);
        let err = process(&["a:b:c"], &mut doc, tag).unwrap_err();
        assert!(err.is_bad_request());
    }
}

#[derive(Debug)]
struct Refused;

impl std::fmt::Display for Refused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "refused")
    }
}

impl std::error::Error for Refused {}

#[test]
fn test_transform_failure_is_wrapped_and_aborts() {
    let mut doc = Document::from(json!({"a": "ok", "b": "bad", "c": "ok"}));
    let err = process(&["a", "b", "c"], &mut doc, |s: &str| {
        if s == "bad" { Err(Refused) } else { Ok(s.to_uppercase()) }
    })
    .unwrap_err();

    assert!(!err.is_bad_request());
    match &err {
        ProcessError::Processing { key, .. } => assert_eq!(key, "b"),
        other => panic!("Expected Processing, got {:?}", other),
    }
    assert!(err.to_string().contains("non-existent member"));
    assert_eq!(err.source().map(|e| e.to_string()), Some("refused".to_string()));
    assert_eq!(Json::from(doc), json!({"a": "OK", "b": "bad", "c": "ok"}));
}

#[test]
fn test_transform_failure_mid_broadcast_keeps_earlier_elements() {
    let mut doc = Document::from(json!([{"c": "1"}, {"c": "bad"}, {"c": "3"}]));
    let err = process(&["[]:c"], &mut doc, |s: &str| {
        if s == "bad" { Err(Refused) } else { Ok(format!("#{}", s)) }
    })
    .unwrap_err();

    assert!(matches!(err, ProcessError::Processing { .. }));
    assert_eq!(Json::from(doc), json!([{"c": "#1"}, {"c": "bad"}, {"c": "3"}]));
}

#[test]
fn test_string_errors_are_accepted() {
    let mut doc = Document::from(json!({"a": "x"}));
    let err = process(&["a"], &mut doc, |_: &str| Err::<String, _>("boom")).unwrap_err();
    assert!(err.to_string().contains("boom"));
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_report_per_key() {
    let mut doc = Document::from(json!({"a": "x", "n": 1, "arr": [{"c": "1"}, {"c": "2"}]}));
    let reports = process_with_report(&["a", "n", "missing", "arr[]:c"], &mut doc, tag).unwrap();

    let outcomes: Vec<Outcome> = reports.into_iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::Applied(1),
            Outcome::Skipped(Skip::WrongShape {
                path: "n".into(),
                expected: "string",
                found: "integer"
            }),
            Outcome::Skipped(Skip::Absent { path: "missing".into() }),
            Outcome::Applied(2),
        ]
    );
}
