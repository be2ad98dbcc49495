use std::io::Write;
use crate::utils::{
    config::RenderFormat,
    error::{StepError, StepResult},
    types::Payload,
};

/// Label line printed ahead of the payload
pub const PAYLOAD_LABEL: &str = "Payload given:";

/// Render the payload as text
pub fn render_payload(payload: &Payload, format: RenderFormat) -> StepResult<String> {
    let rendered = match format {
        RenderFormat::Compact => serde_json::to_string(payload),
        RenderFormat::Pretty => serde_json::to_string_pretty(payload),
    };
    rendered.map_err(render_error)
}

fn render_error(error: serde_json::Error) -> StepError {
    StepError::Render(error.to_string())
}

/// Write the label line followed by the rendered payload
pub fn report_payload<W: Write>(out: &mut W, payload: &Payload, format: RenderFormat) -> StepResult<()> {
    let rendered = render_payload(payload, format)?;

    writeln!(out, "{}", PAYLOAD_LABEL)?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;

    Ok(())
}
