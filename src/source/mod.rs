//! Information sources
//!
//! A [`Source`] contributes a partial [`OptionMap`] for one resolution. The
//! pipeline folds the contributions together, later sources winning.

use crate::error::Result;
use crate::resolve::ResolutionContext;
use crate::schema::OptionMap;

pub mod env;
pub mod file;
pub mod loader;

pub use env::EnvSource;
pub use file::{FileFormat, FileSource, PathStrategy, DEFAULT_INI_SECTION};

pub trait Source {
    /// Label used when listing overrides and in log output.
    fn name(&self) -> String;

    fn produce(&self, ctx: &ResolutionContext<'_>) -> Result<OptionMap>;
}

/// The schema's default values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defaults;

impl Source for Defaults {
    fn name(&self) -> String {
        "defaults".to_string()
    }

    fn produce(&self, ctx: &ResolutionContext<'_>) -> Result<OptionMap> {
        Ok(ctx.defaults().clone())
    }
}

/// Options given on the command line whose value differs from the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassedArgs;

impl Source for PassedArgs {
    fn name(&self) -> String {
        "passed".to_string()
    }

    fn produce(&self, ctx: &ResolutionContext<'_>) -> Result<OptionMap> {
        Ok(ctx.passed().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn builtin_sources_read_the_context() {
        let schema = Schema::new("demo");
        let defaults = OptionMap::from([("a".to_string(), json!("x"))]);
        let passed = OptionMap::from([("a".to_string(), json!("z"))]);
        let ctx = ResolutionContext::new(&schema, defaults.clone(), passed.clone(), None);

        assert_eq!(Defaults.produce(&ctx).expect("defaults"), defaults);
        assert_eq!(PassedArgs.produce(&ctx).expect("passed"), passed);
    }
}
