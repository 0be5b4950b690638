//! Environment variable source

use super::Source;
use crate::error::{Error, Result};
use crate::resolve::ResolutionContext;
use crate::schema::OptionMap;
use figment::providers::Env;
use figment::Figment;

/// Options read from `PREFIX`-prefixed environment variables.
///
/// `APP_COUNT=3` with prefix `APP_` yields `count = 3`. Values are parsed the
/// way figment parses them (numbers, booleans, `[a, b]` arrays, otherwise
/// strings). Variables that do not name a schema option are ignored.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Source for EnvSource {
    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }

    fn produce(&self, ctx: &ResolutionContext<'_>) -> Result<OptionMap> {
        let found: OptionMap = Figment::from(Env::prefixed(&self.prefix))
            .extract()
            .map_err(|e| Error::Env(Box::new(e)))?;

        let mut options = OptionMap::new();
        for (key, value) in found {
            if ctx.defaults().contains_key(&key) {
                options.insert(key, value);
            } else {
                tracing::warn!("Ignoring {}{}: not a known option", self.prefix, key.to_uppercase());
            }
        }
        Ok(options)
    }
}
