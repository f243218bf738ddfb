mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GitHub, ReleaseApi};
pub use repo::{GitHubRepo, RepoSpec};
pub use types::{CreateRelease, Release, User};

#[cfg(test)]
pub use client::MockReleaseApi;
