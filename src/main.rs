use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vacina_watch::fetch::DEFAULT_PAGE_URL;
use vacina_watch::runtime::RealRuntime;
use vacina_watch::watch::{self, Outcome, WatchOptions};

/// vacina-watch - vaccination eligibility-age watcher
///
/// Checks the COVID-19 scheduling page for the published minimum eligibility
/// age and publishes a GitHub release the first time a new age is observed.
///
/// The GitHub access token is read from ~/.that-thingg.github_access_token
/// unless --token-file points elsewhere. Meant to be invoked from a periodic
/// scheduler such as cron; every failure is terminal for the run.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Page to monitor for the eligibility sentence
    #[arg(
        long = "url",
        env = "VACINA_WATCH_URL",
        value_name = "URL",
        default_value = DEFAULT_PAGE_URL
    )]
    pub page_url: String,

    /// Repository releases are published to, as "repo" or "owner/repo".
    /// A bare name is resolved against the token's user.
    #[arg(
        long = "repo",
        env = "VACINA_WATCH_REPO",
        value_name = "[OWNER/]REPO",
        default_value = "that-thing"
    )]
    pub repo: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Access token file (overrides the default under the home directory)
    #[arg(long = "token-file", value_name = "PATH")]
    pub token_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let options = WatchOptions {
        page_url: cli.page_url,
        repo: cli.repo,
        api_url: cli.api_url,
        token_file: cli.token_file,
    };

    match watch::run(&runtime, &options).await? {
        Outcome::Published(_) | Outcome::NoNewRelease => Ok(ExitCode::SUCCESS),
        Outcome::PageUnavailable | Outcome::AgeUnavailable => Ok(ExitCode::FAILURE),
    }
}
