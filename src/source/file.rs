//! File-backed sources

use super::{loader, Source};
use crate::error::Result;
use crate::resolve::ResolutionContext;
use crate::schema::OptionMap;
use crate::utils::expand_home;
use std::path::{Path, PathBuf};

/// Section an INI file is read from unless told otherwise.
pub const DEFAULT_INI_SECTION: &str = "CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFormat {
    /// Pick the format from the file extension, falling back to JSON.
    Auto,
    Json,
    Toml,
    Yaml,
    /// Only the named section is read, and every value is a string.
    Ini { section: String },
}

impl FileFormat {
    pub fn ini() -> Self {
        Self::ini_section(DEFAULT_INI_SECTION)
    }

    pub fn ini_section(section: impl Into<String>) -> Self {
        FileFormat::Ini { section: section.into() }
    }

    /// Format for `path` by extension. Unknown extensions are read as JSON,
    /// the format `--write_config` produces.
    pub fn detect(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "toml" => FileFormat::Toml,
            "yaml" | "yml" => FileFormat::Yaml,
            "ini" | "cfg" | "conf" => FileFormat::ini(),
            _ => FileFormat::Json,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileFormat::Auto => "auto",
            FileFormat::Json => "json",
            FileFormat::Toml => "toml",
            FileFormat::Yaml => "yaml",
            FileFormat::Ini { .. } => "ini",
        }
    }
}

/// Where a [`FileSource`] finds its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStrategy {
    /// The path given with `--config`.
    Passed,
    /// A path fixed by the program. `~` is expanded; an empty path reads nothing.
    Fixed(PathBuf),
}

#[derive(Debug, Clone)]
pub struct FileSource {
    format: FileFormat,
    path: PathStrategy,
}

impl FileSource {
    pub fn new(format: FileFormat, path: PathStrategy) -> Self {
        Self { format, path }
    }

    /// Read the `--config` file in `format`.
    pub fn passed(format: FileFormat) -> Self {
        Self::new(format, PathStrategy::Passed)
    }

    /// Read the file at `path` in `format`.
    pub fn fixed(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self::new(format, PathStrategy::Fixed(path.into()))
    }

    pub fn format(&self) -> &FileFormat {
        &self.format
    }

    fn resolve_path(&self, ctx: &ResolutionContext<'_>) -> Option<PathBuf> {
        match &self.path {
            PathStrategy::Passed => ctx.config_path().map(Path::to_path_buf),
            PathStrategy::Fixed(path) if path.as_os_str().is_empty() => None,
            PathStrategy::Fixed(path) => {
                Some(path.to_str().map(expand_home).unwrap_or_else(|| path.clone()))
            }
        }
    }
}

impl Source for FileSource {
    fn name(&self) -> String {
        let location = match &self.path {
            PathStrategy::Passed => "--config".to_string(),
            PathStrategy::Fixed(path) => path.display().to_string(),
        };
        match &self.format {
            FileFormat::Ini { section } => format!("ini[{section}]:{location}"),
            format => format!("{}:{location}", format.label()),
        }
    }

    fn produce(&self, ctx: &ResolutionContext<'_>) -> Result<OptionMap> {
        let Some(path) = self.resolve_path(ctx) else {
            tracing::debug!("{}: no config file given", self.name());
            return Ok(OptionMap::new());
        };
        tracing::info!("Reading config file {}", path.display());
        loader::load_file(&path, &self.format)
    }
}
