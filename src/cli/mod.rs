//! Command-line interface for the argconfig demo
//!
//! Resolves the demo options through the layered pipeline, then prints the
//! resolved options and the accumulated result.

use anyhow::{Context, Result};
use argconfig::{Error, Outcome, Resolver, Termination};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod demo;
mod utils;

pub fn run() -> Result<()> {
    // RUST_LOG in the environment takes precedence; otherwise only warnings.
    let filter = EnvFilter::from_default_env().add_directive(Level::WARN.into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let resolver =
        Resolver::new(demo::schema(), demo::pipeline()).context("Invalid demo option schema")?;

    let outcome = match resolver.resolve() {
        Ok(outcome) => outcome,
        // clap prints usage and picks the exit status
        Err(Error::Parse(err)) => err.exit(),
        Err(err) => return Err(err).context("Failed to resolve options"),
    };

    let options = match outcome {
        Outcome::Resolved(options) => options,
        Outcome::Terminated(termination) => {
            if let Termination::WroteConfig { destination: Some(path) } = &termination {
                eprintln!("Current options saved to: {}", path.display());
            }
            std::process::exit(termination.exit_code());
        }
    };

    println!("Options: {}", serde_json::to_string(&options)?);
    println!("Result: {}", demo::accumulate(&options)?);
    Ok(())
}
