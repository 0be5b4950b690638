//! Passed-value resolution

use crate::error::Result;
use crate::schema::{OptionMap, Schema};
use std::ffi::OsString;

/// Parse `args` and keep only the options whose value differs from `defaults`.
///
/// An option passed explicitly with its default value cannot be told apart
/// from one that was not passed at all, and is left out.
pub fn compute_passed<I, T>(schema: &Schema, args: I, defaults: &OptionMap) -> Result<OptionMap>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let parsed = schema.parse_from(args)?;
    Ok(passed_subset(parsed, defaults))
}

/// The entries of `parsed` that have a default and differ from it.
pub fn passed_subset(parsed: OptionMap, defaults: &OptionMap) -> OptionMap {
    parsed
        .into_iter()
        .filter(|(key, value)| defaults.get(key).is_some_and(|default| default != value))
        .collect()
}
