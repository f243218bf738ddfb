use anyhow::{Context, Result, anyhow};
use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Token file expected under the user's home directory.
pub const ACCESS_TOKEN_FILENAME: &str = ".that-thingg.github_access_token";

/// Reads and trims the GitHub access token. Called before any network
/// activity; a missing, unreadable or empty token file is a hard error,
/// never a silent empty-token fallback.
#[tracing::instrument(skip(runtime, override_path))]
pub fn read_access_token<R: Runtime>(
    runtime: &R,
    override_path: Option<&Path>,
) -> Result<String> {
    let path: PathBuf = match override_path {
        Some(p) => p.to_path_buf(),
        None => runtime
            .home_dir()
            .context("Could not determine home directory for the access token file")?
            .join(ACCESS_TOKEN_FILENAME),
    };

    debug!("Reading access token from {}...", path.display());

    let contents = runtime
        .read_to_string(&path)
        .with_context(|| format!("Failed to read access token file {}", path.display()))?;

    let token = contents.trim();
    if token.is_empty() {
        return Err(anyhow!("Access token file {} is empty", path.display()));
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, RealRuntime};
    use crate::test_utils::{configure_mock_runtime_with_token, test_home};
    use mockall::predicate::eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_access_token_trims_whitespace() {
        let mut runtime = MockRuntime::new();
        configure_mock_runtime_with_token(&mut runtime, "abc123");

        let token = read_access_token(&runtime, None).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn test_read_access_token_missing_file() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| Some(test_home()));
        runtime
            .expect_read_to_string()
            .returning(|_| Err(anyhow!("No such file or directory")));

        let result = read_access_token(&runtime, None);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains(ACCESS_TOKEN_FILENAME)
        );
    }

    #[test]
    fn test_read_access_token_empty_file() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| Some(test_home()));
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("  \n".to_string()));

        let result = read_access_token(&runtime, None);
        assert!(result.unwrap_err().to_string().contains("is empty"));
    }

    #[test]
    fn test_read_access_token_no_home_dir() {
        let mut runtime = MockRuntime::new();
        runtime.expect_home_dir().returning(|| None);

        assert!(read_access_token(&runtime, None).is_err());
    }

    #[test]
    fn test_read_access_token_override_path() {
        let mut runtime = MockRuntime::new();
        let override_path = test_home().join("elsewhere").join("token");
        runtime
            .expect_read_to_string()
            .with(eq(override_path.clone()))
            .returning(|_| Ok("tok\n".to_string()));

        let token = read_access_token(&runtime, Some(&override_path)).unwrap();
        assert_eq!(token, "tok");
    }

    #[test]
    fn test_read_access_token_from_real_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "real-token\n").unwrap();

        let token = read_access_token(&RealRuntime, Some(&path)).unwrap();
        assert_eq!(token, "real-token");
    }
}
