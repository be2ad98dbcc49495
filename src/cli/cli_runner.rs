use clap::Parser;
use std::io::{self, Read, Write};
use crate::cli::{CliArgs, OutputFormatter};
use crate::step::{BuildStep, StepOutcome};
use crate::utils::{
    config::StepConfig,
    error::StepResult,
};

/// Main CLI runner that drives one build step invocation
pub struct CliRunner {
    step: BuildStep,
    verbose: bool,
}

impl CliRunner {
    /// Create a runner from parsed arguments, layering flags over the config file
    pub fn new(args: &CliArgs) -> StepResult<Self> {
        let config = Self::resolve_config(args)?;
        let verbose = config.verbose;

        Ok(Self {
            step: BuildStep::new(config),
            verbose,
        })
    }

    /// Build the effective configuration: defaults, then file, then flags
    pub fn resolve_config(args: &CliArgs) -> StepResult<StepConfig> {
        let config = match &args.config {
            Some(path) => StepConfig::from_file(path)?,
            None => StepConfig::default(),
        };

        Ok(config.apply_overrides(args.overrides()))
    }

    pub fn step(&self) -> &BuildStep {
        &self.step
    }

    fn info(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", OutputFormatter::format_info(message));
        }
    }

    /// Run the step against the given streams
    pub fn execute<R: Read, W: Write>(&self, input: R, output: &mut W) -> StepResult<StepOutcome> {
        let context = self.step.context();
        self.info(&format!(
            "Base directory: {} (directory mode: {})",
            context.base_dir.display(),
            context.dir_mode
        ));

        self.info("Reading payload from stdin");
        let payload = self.step.load(input)?;
        self.info(&format!("Payload parsed successfully. {} field(s)", payload.len()));

        self.step.report(output, &payload)?;

        self.info(&format!(
            "Writing artifact to {}",
            self.step.writer().artifact_path().display()
        ));
        let outcome = self.step.write_artifact(&payload)?;

        if self.verbose {
            eprintln!("{}", OutputFormatter::format_outcome(&outcome));
        }

        Ok(outcome)
    }
}

/// Main entry point for CLI execution
pub fn run_cli() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    OutputFormatter::configure_stderr_colors();

    let runner = match CliRunner::new(&args) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("{}", OutputFormatter::format_error(&e));
            std::process::exit(e.exit_code());
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match runner.execute(stdin.lock(), &mut stdout) {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{}", OutputFormatter::format_error(&e));
            std::process::exit(e.exit_code());
        }
    }
}
