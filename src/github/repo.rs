use anyhow::{Result, anyhow};
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(GitHubRepo {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// A repository argument that may leave the owner implicit.
/// Format: "owner/repo" or just "repo"; a bare name is resolved against the
/// user the access token authenticates as.
#[derive(Debug, PartialEq, Clone)]
pub struct RepoSpec {
    pub owner: Option<String>,
    pub name: String,
}

impl std::fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.owner {
            Some(owner) => write!(f, "{}/{}", owner, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for RepoSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [name] if !name.is_empty() => Ok(RepoSpec {
                owner: None,
                name: name.to_string(),
            }),
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepoSpec {
                owner: Some(owner.to_string()),
                name: name.to_string(),
            }),
            _ => Err(anyhow!(
                "Invalid repository format. Expected 'repo' or 'owner/repo'."
            )),
        }
    }
}
