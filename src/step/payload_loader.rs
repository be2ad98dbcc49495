use std::io::{ErrorKind, Read};
use serde_json::Value;
use crate::utils::{
    error::{StepError, StepResult},
    types::Payload,
};

/// Consume the whole input stream and decode it as a JSON object
pub fn load_payload<R: Read>(mut input: R) -> StepResult<Payload> {
    let mut raw = String::new();
    input.read_to_string(&mut raw).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => StepError::InputParse("input is not valid UTF-8".to_string()),
        _ => StepError::Io(e),
    })?;

    parse_payload(&raw)
}

/// Decode an already-read input blob
pub fn parse_payload(raw: &str) -> StepResult<Payload> {
    let value: Value = serde_json::from_str(raw)?;
    Payload::from_value(value)
}
