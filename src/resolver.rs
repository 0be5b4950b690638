//! Resolution entry point
//!
//! [`Resolver`] adds the reserved `--config`, `--write_config` and
//! `--list_overrides` options to a schema, runs the pipeline and handles the
//! two reserved actions. It never exits the process; when an action has been
//! carried out it returns [`Outcome::Terminated`] and the caller decides.

use crate::error::{Error, Result};
use crate::pipeline::{Pipeline, PipelineRun};
use crate::render::{render_config, render_overrides};
use crate::resolve::{compute_defaults, compute_passed, ResolutionContext};
use crate::schema::{OptionKind, OptionMap, OptionSpec, Schema};
use crate::utils::expand_home;
use serde_json::Value;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

pub const CONFIG: &str = "config";
pub const WRITE_CONFIG: &str = "write_config";
pub const LIST_OVERRIDES: &str = "list_overrides";

/// Option names the resolver owns. They never appear in resolved options.
pub const RESERVED: [&str; 3] = [CONFIG, WRITE_CONFIG, LIST_OVERRIDES];

/// `--write_config` destination meaning "standard output only".
pub const STDOUT_DESTINATION: &str = "stdout";

/// A reserved action that ran instead of returning options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Every source's contribution was printed.
    ListedOverrides,
    /// The merged options were printed, and saved to `destination` if set.
    WroteConfig { destination: Option<PathBuf> },
}

impl Termination {
    /// Process exit status for this action. Both actions are successes.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Resolved(OptionMap),
    Terminated(Termination),
}

impl Outcome {
    pub fn into_resolved(self) -> Option<OptionMap> {
        match self {
            Outcome::Resolved(options) => Some(options),
            Outcome::Terminated(_) => None,
        }
    }
}

pub struct Resolver {
    schema: Schema,
    pipeline: Pipeline,
}

impl Resolver {
    /// Register the reserved options on `schema` and check it is usable.
    ///
    /// Fails with [`Error::Schema`] when the caller already defines one of the
    /// reserved names or their flags (`-c`, `-wc`).
    pub fn new(mut schema: Schema, pipeline: Pipeline) -> Result<Self> {
        if let Some(name) = RESERVED.iter().find(|name| schema.contains(name)) {
            return Err(Error::Schema(format!("option '{name}' is reserved")));
        }
        for spec in reserved_options() {
            schema.push(spec);
        }
        schema.validate()?;
        Ok(Self { schema, pipeline })
    }

    /// The schema including the reserved options.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Resolve the process arguments, printing reserved-action output to stdout.
    pub fn resolve(&self) -> Result<Outcome> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let outcome = self.resolve_from(std::env::args_os().skip(1), &mut out)?;
        out.flush().map_err(Error::Output)?;
        Ok(outcome)
    }

    /// Resolve `args` (without the program name). Reserved-action output goes
    /// to `out`.
    pub fn resolve_from<I, T>(&self, args: I, out: &mut dyn Write) -> Result<Outcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut defaults = compute_defaults(&self.schema)?;
        let mut passed = compute_passed(&self.schema, args, &defaults)?;

        // Sources never see the reserved options
        let config_path = take_path(&mut passed, CONFIG).map(|path| expand_home(&path));
        let write_config = take_path(&mut passed, WRITE_CONFIG);
        let list_overrides = passed.remove(LIST_OVERRIDES) == Some(Value::Bool(true));
        strip_reserved(&mut defaults);

        tracing::debug!(
            passed = ?passed.keys().collect::<Vec<_>>(),
            config = ?config_path,
            "Resolving options through {} source(s)",
            self.pipeline.len()
        );

        let ctx = ResolutionContext::new(&self.schema, defaults, passed, config_path);
        let PipelineRun { mut merged, overrides } = self.pipeline.run(&ctx)?;
        strip_reserved(&mut merged);

        // Listing takes precedence; --write_config is not honoured alongside it
        if list_overrides {
            let listing = render_overrides(&overrides)?;
            out.write_all(listing.as_bytes()).map_err(Error::Output)?;
            return Ok(Outcome::Terminated(Termination::ListedOverrides));
        }

        if let Some(destination) = write_config {
            let rendered = render_config(&merged)?;
            out.write_all(rendered.as_bytes()).map_err(Error::Output)?;

            let destination =
                (destination != STDOUT_DESTINATION).then(|| expand_home(&destination));
            if let Some(path) = &destination {
                std::fs::write(path, &rendered)
                    .map_err(|source| Error::Io { path: path.clone(), source })?;
                tracing::info!("Current options saved to {}", path.display());
            }
            return Ok(Outcome::Terminated(Termination::WroteConfig { destination }));
        }

        Ok(Outcome::Resolved(merged))
    }
}

fn reserved_options() -> [OptionSpec; 3] {
    [
        OptionSpec::new(CONFIG, OptionKind::String)
            .short('c')
            .value_name("FILENAME")
            .optional_value(None)
            .help("Read option values from this config file"),
        OptionSpec::new(WRITE_CONFIG, OptionKind::String)
            .dash_alias("wc")
            .value_name("FILENAME")
            .optional_value(Some(STDOUT_DESTINATION))
            .help("Print the resolved options (and save them to FILENAME unless it is 'stdout'), then exit"),
        OptionSpec::new(LIST_OVERRIDES, OptionKind::Flag)
            .help("List the options from every source, then exit. Later sources override earlier ones"),
    ]
}

/// Remove a reserved path option; empty strings count as unset.
fn take_path(options: &mut OptionMap, key: &str) -> Option<String> {
    match options.remove(key) {
        Some(Value::String(path)) if !path.is_empty() => Some(path),
        _ => None,
    }
}

fn strip_reserved(options: &mut OptionMap) {
    for name in RESERVED {
        options.remove(name);
    }
}
