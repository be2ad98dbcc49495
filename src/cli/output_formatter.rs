use colored::*;
use std::io::{self, IsTerminal};
use crate::step::StepOutcome;
use crate::utils::error::StepError;

/// Formats diagnostics for CLI output
pub struct OutputFormatter;

impl OutputFormatter {
    /// Turn off colors for diagnostics when stderr is redirected.
    ///
    /// `colored` only inspects stdout, so `2> file` would otherwise capture escape codes.
    pub fn configure_stderr_colors() {
        let force = std::env::var_os("CLICOLOR_FORCE").is_some_and(|v| v != "0");
        if let Some(enabled) = Self::stderr_color_override(io::stderr().is_terminal(), force) {
            colored::control::set_override(enabled);
        }
    }

    /// Color override for stderr, `None` leaves the `colored` defaults in place
    pub fn stderr_color_override(stderr_is_terminal: bool, force_color: bool) -> Option<bool> {
        if force_color || stderr_is_terminal {
            None
        } else {
            Some(false)
        }
    }

    /// Format error message for CLI display
    pub fn format_error(error: &StepError) -> String {
        format!(
            "{} {} {}",
            "Error:".red().bold(),
            error.to_string().red(),
            format!("(exit {}: {})", error.exit_code(), error.exit_status()).dimmed()
        )
    }

    /// Format success message for CLI display
    pub fn format_success(message: &str) -> String {
        format!("{} {}", "Success:".green().bold(), message)
    }

    /// Format info message for CLI display
    pub fn format_info(message: &str) -> String {
        format!("{} {}", "Info:".blue().bold(), message)
    }

    /// Summary line for a completed run
    pub fn format_outcome(outcome: &StepOutcome) -> String {
        Self::format_success(&format!(
            "wrote {} for {}",
            outcome.artifact_path.display().to_string().cyan(),
            outcome.build_url.yellow()
        ))
    }
}
