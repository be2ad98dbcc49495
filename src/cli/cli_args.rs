use clap::Parser;
use std::path::PathBuf;
use crate::utils::config::{ConfigOverrides, DirectoryMode, RenderFormat};

/// Artifact step CLI - reads a task payload on stdin and writes a public build artifact
#[derive(Parser, Debug)]
#[command(name = "artifact-step")]
#[command(about = "Reads a task payload from stdin and writes a public build artifact")]
#[command(version = "0.1.0")]
pub struct CliArgs {
    /// Directory to create the artifact tree under (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// How to create the artifact directory
    #[arg(short, long, value_name = "MODE")]
    pub dir_mode: Option<DirectoryMode>,

    /// How to render the payload on stdout
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<RenderFormat>,

    /// Step configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Flag values that take precedence over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_dir: self.base_dir.clone(),
            directory_mode: self.dir_mode,
            render_format: self.format,
            verbose: self.verbose,
        }
    }
}
