use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The slice of the environment this program touches: the home directory
/// (for the token file) and plain file reads. Mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn home_dir(&self) -> Option<PathBuf>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    #[tracing::instrument(skip(self))]
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self))]
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_read_to_string() {
        let rt = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        fs::write(&file_path, "hello").unwrap();
        assert_eq!(rt.read_to_string(&file_path).unwrap(), "hello");
    }

    #[test]
    fn test_real_runtime_read_missing_file() {
        let rt = RealRuntime;
        let dir = tempdir().unwrap();
        assert!(rt.read_to_string(&dir.path().join("non_existent")).is_err());
    }

    #[test]
    fn test_real_runtime_home_dir() {
        let rt = RealRuntime;
        assert!(rt.home_dir().is_some());
    }
}
