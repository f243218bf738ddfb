use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::credentials::read_access_token;
use crate::fetch::fetch_page;
use crate::github::{GitHubRepo, ReleaseApi, RepoSpec};
use crate::parse::parse_minimum_age;
use crate::release::{release_message, release_name};
use crate::runtime::Runtime;

pub mod config;

use config::Config;

/// What a single run observed and did.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// A new age value was seen and a release was created for it.
    Published(String),
    /// The derived release name was already published.
    NoNewRelease,
    /// The page could not be fetched (non-200 status or transport failure).
    PageUnavailable,
    /// The page was fetched but no age could be extracted from it.
    AgeUnavailable,
}

pub struct WatchOptions {
    pub page_url: String,
    pub repo: String,
    pub api_url: Option<String>,
    pub token_file: Option<PathBuf>,
}

/// One full invocation: credential, prior releases, page, age, decision.
/// The credential is loaded before any network call is made.
#[tracing::instrument(skip(runtime, options))]
pub async fn run<R: Runtime>(runtime: &R, options: &WatchOptions) -> Result<Outcome> {
    let access_token = read_access_token(runtime, options.token_file.as_deref())?;
    let config = Config::new(&access_token, options.api_url.clone())?;
    watch(&config.github, &config.page_client, options).await
}

/// Pipeline body, generic over the release-hosting collaborator so tests can
/// substitute a mock.
#[tracing::instrument(skip(github, page_client, options))]
pub async fn watch<G: ReleaseApi>(
    github: &G,
    page_client: &reqwest::Client,
    options: &WatchOptions,
) -> Result<Outcome> {
    let spec: RepoSpec = options.repo.parse()?;
    let repo = match spec.owner {
        Some(owner) => GitHubRepo {
            owner,
            repo: spec.name,
        },
        None => {
            let owner = github
                .authenticated_user()
                .await
                .context("Failed to resolve the repository owner from the access token")?;
            GitHubRepo {
                owner,
                repo: spec.name,
            }
        }
    };

    let previously_published = github
        .list_release_titles(&repo)
        .await
        .with_context(|| format!("Failed to list releases for {}", repo))?;

    let Some(raw_html) = fetch_page(page_client, &options.page_url).await else {
        return Ok(Outcome::PageUnavailable);
    };

    let Some(minimum_age) = parse_minimum_age(&raw_html) else {
        return Ok(Outcome::AgeUnavailable);
    };

    decide_and_publish(github, &repo, minimum_age, &previously_published).await
}

/// Zero or one creation call per run. Listing and creating are two separate
/// API calls: overlapping invocations may both observe "not yet published"
/// and race to create the same release, with the outcome decided by GitHub.
#[tracing::instrument(skip(github, previously_published))]
pub async fn decide_and_publish<G: ReleaseApi>(
    github: &G,
    repo: &GitHubRepo,
    minimum_age: u32,
    previously_published: &[String],
) -> Result<Outcome> {
    let name = release_name(minimum_age);
    if previously_published.iter().any(|title| title == &name) {
        info!("No new release");
        return Ok(Outcome::NoNewRelease);
    }

    info!("New release! {}", name);
    let message = release_message(minimum_age);
    github
        .create_release(repo, &name, &name, &message)
        .await
        .with_context(|| format!("Failed to publish release {} for {}", name, repo))?;

    Ok(Outcome::Published(name))
}
