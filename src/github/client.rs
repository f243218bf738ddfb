use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::repo::GitHubRepo;
use super::types::{CreateRelease, Release, User};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Release-hosting collaborator. Listing and creation are two independent
/// calls; both propagate API failures as fatal errors since the program
/// cannot safely decide anything without knowing prior state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseApi: Send + Sync {
    async fn authenticated_user(&self) -> Result<String>;
    async fn list_release_titles(&self, repo: &GitHubRepo) -> Result<Vec<String>>;
    async fn create_release(
        &self,
        repo: &GitHubRepo,
        tag: &str,
        title: &str,
        body: &str,
    ) -> Result<()>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }
}

#[async_trait]
impl ReleaseApi for GitHub {
    #[tracing::instrument(skip(self))]
    async fn authenticated_user(&self) -> Result<String> {
        let url = format!("{}/user", self.api_url);

        debug!("Fetching authenticated user from {}...", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let user = response
            .error_for_status()?
            .json::<User>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(user.login)
    }

    #[tracing::instrument(skip(self, repo))]
    async fn list_release_titles(&self, repo: &GitHubRepo) -> Result<Vec<String>> {
        let mut titles = Vec::new();
        let mut page = 1;

        // Limit to 10 pages (1000 releases) to be safe for now/prevent infinite loop
        while page <= 10 {
            let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);

            debug!("Fetching releases page {} from {}...", page, url);

            let response = self
                .client
                .get(&url)
                .query(&[("per_page", "100"), ("page", &page.to_string())])
                .send()
                .await
                .context("Failed to send request to GitHub API")?;

            let parsed: Vec<Release> = response
                .error_for_status()?
                .json()
                .await
                .context("Failed to parse JSON response from GitHub API")?;

            if parsed.is_empty() {
                break;
            }

            let len = parsed.len();
            titles.extend(parsed.into_iter().map(Release::title));

            if len < 100 {
                break;
            }

            page += 1;
        }

        Ok(titles)
    }

    #[tracing::instrument(skip(self, repo, body))]
    async fn create_release(
        &self,
        repo: &GitHubRepo,
        tag: &str,
        title: &str,
        body: &str,
    ) -> Result<()> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo);
        let data = CreateRelease {
            tag_name: tag.to_string(),
            name: title.to_string(),
            body: body.to_string(),
        };

        debug!("Creating release \"{}\" at {}...", title, url);

        let response = self
            .client
            .post(&url)
            .json(&data)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        response
            .error_for_status()
            .context("GitHub API refused to create the release")?;

        Ok(())
    }
}
