//! Ordered source pipeline
//!
//! Sources run strictly in order. Each contribution is kept verbatim for
//! `--list_overrides` and folded into the merged mapping key by key, so the
//! last source to mention a key decides its value.

use crate::error::Result;
use crate::resolve::ResolutionContext;
use crate::schema::OptionMap;
use crate::source::{Defaults, FileFormat, FileSource, PassedArgs, Source};

pub struct Pipeline {
    sources: Vec<Box<dyn Source>>,
}

/// Result of running every source once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineRun {
    pub merged: OptionMap,
    /// Each source's own contribution, in pipeline order.
    pub overrides: Vec<(String, OptionMap)>,
}

impl Pipeline {
    /// A pipeline with no sources; resolves to an empty mapping.
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    /// Defaults, then the `--config` file, then passed arguments.
    pub fn standard() -> Self {
        Self::new()
            .with(Defaults)
            .with(FileSource::passed(FileFormat::Auto))
            .with(PassedArgs)
    }

    /// Append `source`, giving it precedence over every source already added.
    pub fn with(mut self, source: impl Source + 'static) -> Self {
        self.push(Box::new(source));
        self
    }

    pub fn push(&mut self, source: Box<dyn Source>) {
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Run every source against `ctx`. The first failing source aborts the run.
    pub fn run(&self, ctx: &ResolutionContext<'_>) -> Result<PipelineRun> {
        let mut run = PipelineRun::default();
        for source in &self.sources {
            let name = source.name();
            let contribution = source.produce(ctx)?;
            tracing::debug!(
                source = %name,
                keys = ?contribution.keys().collect::<Vec<_>>(),
                "Source contributed {} option(s)",
                contribution.len()
            );
            run.merged.extend(contribution.iter().map(|(k, v)| (k.clone(), v.clone())));
            run.overrides.push((name, contribution));
        }
        Ok(run)
    }
}

/// Same as [`Pipeline::new`]: no sources. Use [`Pipeline::standard`] for the
/// usual defaults, config file, passed arguments layering.
impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
