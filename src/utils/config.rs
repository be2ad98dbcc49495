use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::error::{StepError, StepResult};

/// Build step configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StepConfig {
    /// Directory the artifact tree is created under
    pub base_dir: PathBuf,
    pub directory_mode: DirectoryMode,
    pub render_format: RenderFormat,
    pub verbose: bool,
}

/// How the artifact directory is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryMode {
    /// Fail if the directory already exists
    #[default]
    Strict,
    /// Create the directory if missing, reuse it otherwise
    Ensure,
}

/// How the payload is rendered on standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenderFormat {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented multi-line JSON
    Pretty,
}

/// Values supplied on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub base_dir: Option<PathBuf>,
    pub directory_mode: Option<DirectoryMode>,
    pub render_format: Option<RenderFormat>,
    /// Can only switch verbose output on
    pub verbose: bool,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            directory_mode: DirectoryMode::default(),
            render_format: RenderFormat::default(),
            verbose: false,
        }
    }
}

impl StepConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> StepResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            StepError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            StepError::Configuration(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn with_directory_mode(mut self, mode: DirectoryMode) -> Self {
        self.directory_mode = mode;
        self
    }

    pub fn with_render_format(mut self, format: RenderFormat) -> Self {
        self.render_format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Layer command-line values over this configuration
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base_dir) = overrides.base_dir {
            self.base_dir = base_dir;
        }
        if let Some(mode) = overrides.directory_mode {
            self.directory_mode = mode;
        }
        if let Some(format) = overrides.render_format {
            self.render_format = format;
        }
        if overrides.verbose {
            self.verbose = true;
        }
        self
    }
}

impl std::fmt::Display for DirectoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryMode::Strict => write!(f, "strict"),
            DirectoryMode::Ensure => write!(f, "ensure"),
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Compact => write!(f, "compact"),
            RenderFormat::Pretty => write!(f, "pretty"),
        }
    }
}
