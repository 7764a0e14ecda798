#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Data-driven operation tests
///
/// Cases live in `tests/fixtures/operations.json`. Each entry is either a
/// section comment (a plain string) or an operation case. A JSON `null` or a
/// missing `value` is an absent value, and a JSON object is a value shape
/// the query mapping cannot hold.
use serde::Deserialize;
use urlparams::{MultiValueEncoding, UrlParams, Value};

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
enum TestCase {
    /// An operation test case
    Operation {
        operation: String,
        input: String,
        name: String,
        #[serde(default)]
        value: serde_json::Value,
        #[serde(default)]
        encoding: Option<String>,
        #[serde(default)]
        expected: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
struct FixtureResult {
    passed: usize,
    failures: Vec<String>,
}

fn load_cases() -> Vec<TestCase> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/operations.json");
    let data = std::fs::read_to_string(path).expect("fixture file should be readable");
    serde_json::from_str(&data).expect("fixture file should be valid JSON")
}

fn to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Absent,
        serde_json::Value::Bool(b) => Value::from(*b),
        serde_json::Value::Number(n) => Value::Scalar(n.to_string()),
        serde_json::Value::String(s) => Value::from(s),
        serde_json::Value::Array(items) => Value::List(items.iter().map(to_value).collect()),
        serde_json::Value::Object(_) => Value::Unsupported,
    }
}

fn params_for(encoding: Option<&str>) -> UrlParams {
    match encoding {
        None | Some("plus") => UrlParams::new(),
        Some("repeated") => UrlParams::new().with_encoding(MultiValueEncoding::RepeatedKeys),
        Some(other) => panic!("unknown encoding in fixture: {other}"),
    }
}

fn run_cases(cases: &[TestCase]) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut section = String::new();

    for case in cases {
        let TestCase::Operation {
            operation,
            input,
            name,
            value,
            encoding,
            expected,
            failure,
        } = case
        else {
            if let TestCase::Comment(comment) = case {
                section.clone_from(comment);
            }
            continue;
        };

        let params = params_for(encoding.as_deref());
        let json = value;
        let value = to_value(json);
        let actual = match operation.as_str() {
            "add" => params.add(input, name, value),
            "remove" => params.remove(input, name, value),
            "set" => params.set(input, name, value),
            other => panic!("unknown operation in fixture: {other}"),
        };

        let expect_failure = failure.unwrap_or(false);
        match (&actual, expect_failure) {
            (Err(_), true) => result.passed += 1,
            (Ok(url), false) if Some(url) == expected.as_ref() => result.passed += 1,
            _ => result.failures.push(format!(
                "[{section}] {operation}({input:?}, {name:?}, {json}): expected {expected:?}, got {actual:?}"
            )),
        }
    }

    result
}

#[test]
fn test_operation_fixtures() {
    let cases = load_cases();
    let result = run_cases(&cases);

    assert!(
        result.failures.is_empty(),
        "{} fixture case(s) failed:\n{}",
        result.failures.len(),
        result.failures.join("\n")
    );
    assert!(result.passed > 0, "no fixture cases were run");
}
