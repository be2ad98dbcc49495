use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a build step invocation
#[derive(Debug, Error)]
pub enum StepError {
    #[error("Input parsing error: {0}")]
    InputParse(String),

    #[error("Directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing payload field: {0}")]
    MissingField(String),

    #[error("Invalid payload field '{field}': expected {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Payload rendering error: {0}")]
    Render(String),

    #[error("Stream error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<serde_json::Error> for StepError {
    fn from(error: serde_json::Error) -> Self {
        StepError::InputParse(error.to_string())
    }
}

impl StepError {
    /// Wrap an I/O error with the path it happened on
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StepError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Exit status reported to the task-runner for this error
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            StepError::InputParse(_) => ExitStatus::FatalInternalError,
            StepError::MissingField(_) | StepError::InvalidField { .. } => ExitStatus::MalformedPayload,
            StepError::DirectoryExists(_) => ExitStatus::Failed,
            StepError::Filesystem { .. } | StepError::Io(_) => ExitStatus::FatalInternalError,
            StepError::Render(_) => ExitStatus::FatalInternalError,
            StepError::Configuration(_) => ExitStatus::FatalInternalError,
        }
    }

    /// Numeric process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.exit_status().code()
    }
}

/// Exit codes understood by the script engine of the task-runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Task completed
    Success,
    /// Task failed
    Failed,
    /// Payload did not have the expected shape
    MalformedPayload,
    /// Recoverable error that should not count against the task
    NonFatalError,
    /// Contract violation between runner and step
    FatalInternalError,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failed => 1,
            ExitStatus::MalformedPayload => 2,
            ExitStatus::NonFatalError => 3,
            ExitStatus::FatalInternalError => 4,
        }
    }
}

impl std::fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitStatus::Success => write!(f, "success"),
            ExitStatus::Failed => write!(f, "failed"),
            ExitStatus::MalformedPayload => write!(f, "malformed-payload"),
            ExitStatus::NonFatalError => write!(f, "non-fatal-error"),
            ExitStatus::FatalInternalError => write!(f, "fatal-internal-error"),
        }
    }
}

/// Result type alias for build step operations
pub type StepResult<T> = Result<T, StepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let step_error: StepError = json_error.into();

        match step_error {
            StepError::InputParse(msg) => assert!(msg.contains("expected")),
            _ => panic!("Expected InputParse error"),
        }
    }

    #[test]
    fn test_step_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let step_error: StepError = io_error.into();

        match step_error {
            StepError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = StepError::MissingField("buildUrl".to_string());
        assert_eq!(format!("{}", error), "Missing payload field: buildUrl");

        let error = StepError::DirectoryExists(PathBuf::from("artifacts/public"));
        assert!(format!("{}", error).contains("artifacts/public"));

        let error = StepError::InvalidField {
            field: "buildUrl".to_string(),
            expected: "string".to_string(),
            found: "number".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid payload field 'buildUrl': expected string, found number"
        );

        let error = StepError::Render("key must be a string".to_string());
        assert_eq!(format!("{}", error), "Payload rendering error: key must be a string");
    }

    #[test]
    fn test_filesystem_error_keeps_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = StepError::filesystem("artifacts/public", io_error);

        assert!(std::error::Error::source(&error).is_some());
        assert!(format!("{}", error).contains("denied"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(StepError::InputParse("bad".to_string()).exit_code(), 4);
        assert_eq!(StepError::MissingField("buildUrl".to_string()).exit_code(), 2);
        assert_eq!(StepError::DirectoryExists(PathBuf::from("x")).exit_code(), 1);
        assert_eq!(
            StepError::filesystem("x", std::io::Error::new(std::io::ErrorKind::Other, "boom")).exit_code(),
            4
        );
        assert_eq!(StepError::Configuration("bad".to_string()).exit_code(), 4);
        assert_eq!(StepError::Render("bad".to_string()).exit_code(), 4);
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::NonFatalError.code(), 3);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            StepError::InputParse("bad".to_string()),
            StepError::DirectoryExists(PathBuf::from("x")),
            StepError::MissingField("buildUrl".to_string()),
            StepError::InvalidField {
                field: "buildUrl".to_string(),
                expected: "string".to_string(),
                found: "number".to_string(),
            },
            StepError::filesystem("x", std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")),
            StepError::Render("bad".to_string()),
            StepError::Configuration("bad".to_string()),
            StepError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
        ];

        for error in errors {
            assert_ne!(error.exit_code(), 0, "{} exited with 0", error);
        }
    }

    #[test]
    fn test_step_result_type() {
        let success: StepResult<String> = Ok("success".to_string());
        let failure: StepResult<String> = Err(StepError::Configuration("test error".to_string()));

        assert!(success.is_ok());
        match failure {
            Err(StepError::Configuration(msg)) => assert_eq!(msg, "test error"),
            _ => panic!("Expected Configuration error"),
        }
    }
}
