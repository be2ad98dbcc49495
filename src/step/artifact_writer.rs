use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use crate::utils::{
    config::DirectoryMode,
    error::{StepError, StepResult},
    types::Payload,
};

/// Artifact directory, relative to the base directory
pub const ARTIFACT_DIR: &str = "artifacts/public";

/// Name of the artifact file inside `ARTIFACT_DIR`
pub const ARTIFACT_FILE: &str = "test-artifact.txt";

/// Text written ahead of the build URL
pub const ARTIFACT_PREFIX: &str = "buildUrl given was: ";

/// Exact contents of the artifact for a build URL
pub fn render_artifact(build_url: &str) -> String {
    format!("{}{}", ARTIFACT_PREFIX, build_url)
}

/// Writes the public test artifact under a base directory
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    base_dir: PathBuf,
    mode: DirectoryMode,
}

impl ArtifactWriter {
    pub fn new(base_dir: impl Into<PathBuf>, mode: DirectoryMode) -> Self {
        Self {
            base_dir: base_dir.into(),
            mode,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn mode(&self) -> DirectoryMode {
        self.mode
    }

    pub fn artifact_dir(&self) -> PathBuf {
        self.base_dir.join(ARTIFACT_DIR)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.artifact_dir().join(ARTIFACT_FILE)
    }

    /// Create the artifact directory according to the directory mode
    pub fn prepare_dir(&self) -> StepResult<PathBuf> {
        let dir = self.artifact_dir();

        match self.mode {
            DirectoryMode::Strict => {
                // Only the leaf is strict; `artifacts/` itself may already be there
                if let Some(parent) = dir.parent() {
                    fs::create_dir_all(parent).map_err(|e| StepError::filesystem(parent, e))?;
                }
                fs::create_dir(&dir).map_err(|e| match e.kind() {
                    ErrorKind::AlreadyExists => StepError::DirectoryExists(dir.clone()),
                    _ => StepError::filesystem(&dir, e),
                })?;
            }
            DirectoryMode::Ensure => {
                fs::create_dir_all(&dir).map_err(|e| StepError::filesystem(&dir, e))?;
            }
        }

        Ok(dir)
    }

    /// Write the artifact for a payload and return its path
    ///
    /// The payload is validated before anything touches the filesystem, so a
    /// payload without `buildUrl` leaves no directories behind.
    pub fn write(&self, payload: &Payload) -> StepResult<PathBuf> {
        let build_url = payload.build_url()?;
        self.write_build_url(build_url)
    }

    /// Write the artifact for an already-extracted build URL
    pub fn write_build_url(&self, build_url: &str) -> StepResult<PathBuf> {
        self.prepare_dir()?;

        let path = self.artifact_path();
        let mut file = File::create(&path).map_err(|e| StepError::filesystem(&path, e))?;
        file.write_all(render_artifact(build_url).as_bytes())
            .map_err(|e| StepError::filesystem(&path, e))?;
        file.flush().map_err(|e| StepError::filesystem(&path, e))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_render_artifact() {
        assert_eq!(
            render_artifact("https://example.com/1"),
            "buildUrl given was: https://example.com/1"
        );
        assert_eq!(render_artifact(""), "buildUrl given was: ");
    }

    #[test]
    fn test_paths() {
        let writer = ArtifactWriter::new("/work", DirectoryMode::Strict);

        assert_eq!(writer.artifact_dir(), PathBuf::from("/work/artifacts/public"));
        assert_eq!(
            writer.artifact_path(),
            PathBuf::from("/work/artifacts/public/test-artifact.txt")
        );
    }

    #[test]
    fn test_strict_prepare_fails_when_dir_exists() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let writer = ArtifactWriter::new(temp_dir.path(), DirectoryMode::Strict);

        writer.prepare_dir().unwrap();
        match writer.prepare_dir() {
            Err(StepError::DirectoryExists(path)) => assert_eq!(path, writer.artifact_dir()),
            other => panic!("Expected DirectoryExists error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_prepare_tolerates_existing_parent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("artifacts")).expect("Failed to create artifacts dir");

        let writer = ArtifactWriter::new(temp_dir.path(), DirectoryMode::Strict);
        assert!(writer.prepare_dir().is_ok());
    }

    #[test]
    fn test_ensure_prepare_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let writer = ArtifactWriter::new(temp_dir.path(), DirectoryMode::Ensure);

        writer.prepare_dir().unwrap();
        writer.prepare_dir().unwrap();
        assert!(writer.artifact_dir().is_dir());
    }

    #[test]
    fn test_prepare_fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("artifacts"), "blocking file").expect("Failed to write file");

        let writer = ArtifactWriter::new(temp_dir.path(), DirectoryMode::Ensure);
        assert!(matches!(writer.prepare_dir(), Err(StepError::Filesystem { .. })));
    }

    #[test]
    fn test_write_artifact() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let writer = ArtifactWriter::new(temp_dir.path(), DirectoryMode::Strict);
        let payload = Payload::from_value(json!({"buildUrl": "https://example.com/1"})).unwrap();

        let path = writer.write(&payload).unwrap();

        assert_eq!(path, writer.artifact_path());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "buildUrl given was: https://example.com/1"
        );
    }

    #[test]
    fn test_write_without_build_url_touches_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let writer = ArtifactWriter::new(temp_dir.path(), DirectoryMode::Strict);
        let payload = Payload::from_value(json!({})).unwrap();

        assert!(matches!(writer.write(&payload), Err(StepError::MissingField(_))));
        assert!(!temp_dir.path().join("artifacts").exists());
    }

    #[test]
    fn test_ensure_mode_overwrites_existing_artifact() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let writer = ArtifactWriter::new(temp_dir.path(), DirectoryMode::Ensure);

        writer.write_build_url("https://example.com/a-much-longer-first-url").unwrap();
        let path = writer.write_build_url("https://example.com/2").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "buildUrl given was: https://example.com/2");
    }
}
