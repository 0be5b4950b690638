//! argconfig: layer defaults, config files, environment and command-line
//! arguments into one resolved option set.
//!
//! Options are declared once in a [`Schema`]. A [`Resolver`] runs an ordered
//! [`Pipeline`] of [`Source`]s; each source contributes a partial
//! [`OptionMap`] and later sources override earlier ones key by key.
//!
//! ```no_run
//! use argconfig::{OptionKind, OptionSpec, Outcome, Pipeline, Resolver, Schema};
//! use serde_json::json;
//!
//! # fn main() -> argconfig::Result<()> {
//! let schema = Schema::new("demo")
//!     .option(OptionSpec::new("name", OptionKind::String).default_value(json!("world")));
//! let resolver = Resolver::new(schema, Pipeline::standard())?;
//! if let Outcome::Resolved(options) = resolver.resolve()? {
//!     println!("hello {}", options["name"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod resolver;
pub mod schema;
pub mod source;
pub mod utils;

pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineRun};
pub use resolve::{compute_defaults, compute_passed, ResolutionContext};
pub use resolver::{Outcome, Resolver, Termination};
pub use schema::{OptionKind, OptionMap, OptionSpec, ScalarKind, Schema};
pub use source::{Defaults, EnvSource, FileFormat, FileSource, PassedArgs, PathStrategy, Source};
