pub mod credentials;
pub mod fetch;
pub mod github;
pub mod parse;
pub mod release;
pub mod runtime;
pub mod watch;

/// Test utilities for cross-platform path handling.
#[cfg(test)]
pub mod test_utils {
    use crate::credentials::ACCESS_TOKEN_FILENAME;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    /// Returns a test home directory path based on the platform.
    /// - Unix: `/home/user`
    /// - Windows: `C:\Users\user`
    pub fn test_home() -> PathBuf {
        #[cfg(not(windows))]
        {
            PathBuf::from("/home/user")
        }
        #[cfg(windows)]
        {
            PathBuf::from(r"C:\Users\user")
        }
    }

    /// Configure a mock runtime whose home directory holds a token file
    /// containing `token` (with a trailing newline, as written by hand).
    pub fn configure_mock_runtime_with_token(runtime: &mut MockRuntime, token: &'static str) {
        runtime.expect_home_dir().returning(|| Some(test_home()));

        runtime
            .expect_read_to_string()
            .with(eq(test_home().join(ACCESS_TOKEN_FILENAME)))
            .returning(move |_| Ok(format!("{}\n", token)));
    }
}
