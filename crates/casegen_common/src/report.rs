//! Response validation and shaping.
//!
//! The model is asked for a single JSON object with a `test_cases` list.
//! This module checks that shape and nothing more: sub-fields of any JSON
//! type are tolerated, missing ones become placeholders. Only text that is
//! not JSON at all is an error, and the original text rides along with it.

use crate::error::CasegenError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder rendered for fields the model omitted.
pub const MISSING_FIELD: &str = "N/A";

/// One structured test case shaped from the model's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub title: String,
    pub preconditions: String,
    pub steps: Vec<String>,
    pub expected_result: String,
}

/// All test cases extracted from one reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestCaseReport {
    pub cases: Vec<TestCase>,
}

impl TestCaseReport {
    /// A missing or empty `test_cases` list is "no results", not an error.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn count(&self) -> usize {
        self.cases.len()
    }
}

/// Parse the raw response text into a report.
pub fn parse_report(raw: &str) -> Result<TestCaseReport, CasegenError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| CasegenError::MalformedResponse {
        reason: e.to_string(),
        raw: raw.to_string(),
    })?;

    let cases = match value.get("test_cases").and_then(Value::as_array) {
        Some(entries) => entries.iter().map(shape_case).collect(),
        None => Vec::new(),
    };

    Ok(TestCaseReport { cases })
}

fn shape_case(entry: &Value) -> TestCase {
    TestCase {
        title: text_field(entry, "title"),
        preconditions: text_field(entry, "preconditions"),
        steps: step_list(entry),
        expected_result: text_field(entry, "expected_result"),
    }
}

/// Extract a text field, tolerating absent, null, or non-string values.
fn text_field(entry: &Value, key: &str) -> String {
    match entry.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => MISSING_FIELD.to_string(),
        Some(other) => other.to_string(),
    }
}

fn step_list(entry: &Value) -> Vec<String> {
    match entry.get("steps") {
        Some(Value::Array(steps)) => steps
            .iter()
            .map(|step| match step {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect(),
        // A lone string becomes a single step rather than being dropped
        Some(Value::String(step)) => vec![step.clone()],
        _ => Vec::new(),
    }
}
