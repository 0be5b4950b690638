//! Shared CLI utilities.

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Read an integer list option. File sources such as INI only produce
/// strings, so `"1, 2 3"` and `"[1, 2, 3]"` are accepted as well as arrays.
pub fn integer_list(value: &Value) -> Result<Vec<i64>> {
    match value {
        Value::Array(items) => items.iter().map(integer).collect(),
        Value::String(s) => parse_csv(s)
            .iter()
            .map(|part| part.parse::<i64>().with_context(|| format!("Not an integer: {part}")))
            .collect(),
        other => integer(other).map(|n| vec![n]),
    }
}

fn integer(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => n.as_i64().with_context(|| format!("Not an integer: {n}")),
        Value::String(s) => s.trim().parse().with_context(|| format!("Not an integer: {s}")),
        other => bail!("Not an integer: {other}"),
    }
}

/// Split on commas and whitespace, ignoring surrounding brackets and empty
/// segments.
pub fn parse_csv(value: &str) -> Vec<String> {
    value
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
