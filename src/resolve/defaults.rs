//! Default snapshot

use crate::error::Result;
use crate::schema::{OptionMap, Schema};

/// Every option's default value, as the parser reports it for empty input.
pub fn compute_defaults(schema: &Schema) -> Result<OptionMap> {
    schema.parse_from(std::iter::empty::<String>())
}
