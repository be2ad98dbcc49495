use std::io::{Read, Write};
use std::path::PathBuf;
use crate::step::{artifact_writer::ArtifactWriter, payload_loader, reporter};
use crate::utils::{
    config::{DirectoryMode, RenderFormat, StepConfig},
    error::StepResult,
    types::Payload,
};

/// Settings the stages of one run read from
#[derive(Debug, Clone, PartialEq)]
pub struct StepContext {
    pub base_dir: PathBuf,
    pub dir_mode: DirectoryMode,
    pub render_format: RenderFormat,
}

impl From<&StepConfig> for StepContext {
    fn from(config: &StepConfig) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            dir_mode: config.directory_mode,
            render_format: config.render_format,
        }
    }
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub artifact_path: PathBuf,
    pub build_url: String,
}

/// One invocation of the build step: load, report, write the artifact
#[derive(Debug, Clone)]
pub struct BuildStep {
    config: StepConfig,
    context: StepContext,
    writer: ArtifactWriter,
}

impl BuildStep {
    pub fn new(config: StepConfig) -> Self {
        let context = StepContext::from(&config);
        let writer = ArtifactWriter::new(context.base_dir.clone(), context.dir_mode);
        Self { config, context, writer }
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    pub fn context(&self) -> &StepContext {
        &self.context
    }

    pub fn writer(&self) -> &ArtifactWriter {
        &self.writer
    }

    /// Read and decode the payload from the input stream
    pub fn load<R: Read>(&self, input: R) -> StepResult<Payload> {
        payload_loader::load_payload(input)
    }

    /// Print the payload to the output stream
    pub fn report<W: Write>(&self, output: &mut W, payload: &Payload) -> StepResult<()> {
        reporter::report_payload(output, payload, self.context.render_format)
    }

    /// Write the artifact for the payload
    pub fn write_artifact(&self, payload: &Payload) -> StepResult<StepOutcome> {
        let artifact_path = self.writer.write(payload)?;

        Ok(StepOutcome {
            artifact_path,
            build_url: payload.build_url()?.to_string(),
        })
    }

    /// Run all stages in order, stopping at the first error.
    ///
    /// Effects of stages that already completed are left in place.
    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut W) -> StepResult<StepOutcome> {
        let payload = self.load(input)?;
        self.report(output, &payload)?;
        self.write_artifact(&payload)
    }
}
