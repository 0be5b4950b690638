//! Error types for option resolution

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The option schema is unusable (e.g. a caller option shadows a reserved one).
    #[error("invalid option schema: {0}")]
    Schema(String),

    /// Command-line input was rejected by clap. Call [`clap::Error::exit`] to
    /// report it the usual way.
    #[error(transparent)]
    Parse(#[from] clap::Error),

    #[error("failed to load config file {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },

    #[error("failed to read environment options: {0}")]
    Env(#[from] Box<figment::Error>),

    #[error("failed to render options: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed writing output: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn config_file(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::ConfigFile { path: path.into(), message: message.to_string() }
    }
}
