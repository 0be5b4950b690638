//! Per-call resolution context

use crate::schema::{OptionMap, Schema};
use std::path::{Path, PathBuf};

/// Everything a [`Source`](crate::source::Source) may consult during one
/// resolution. Built once per call and dropped when it returns.
pub struct ResolutionContext<'a> {
    schema: &'a Schema,
    defaults: OptionMap,
    passed: OptionMap,
    config_path: Option<PathBuf>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        schema: &'a Schema,
        defaults: OptionMap,
        passed: OptionMap,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self { schema, defaults, passed, config_path }
    }

    pub fn schema(&self) -> &Schema {
        self.schema
    }

    pub fn defaults(&self) -> &OptionMap {
        &self.defaults
    }

    pub fn passed(&self) -> &OptionMap {
        &self.passed
    }

    /// Config file named with `--config`, already home-expanded.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
