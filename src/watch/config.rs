use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::github::{GitHub, ReleaseApi};

/// Clients for the two outbound surfaces: the GitHub API (authenticated) and
/// the scheduling page (anonymous; the browser-mimicking headers are attached
/// per request).
pub struct Config<G: ReleaseApi> {
    pub github: G,
    pub page_client: Client,
}

impl Config<GitHub> {
    pub fn new(access_token: &str, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", access_token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        debug!("Using access token for authentication ({} chars)", access_token.len());

        let api_client = Client::builder()
            .user_agent("vacina-watch")
            .default_headers(headers)
            .build()?;

        // The page request must not carry the GitHub credential.
        let page_client = Client::builder().build()?;

        Ok(Self {
            github: GitHub::new(api_client, api_url),
            page_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the API client sends the token as a bearer Authorization header
    #[tokio::test]
    async fn test_config_new_authenticates_api_client() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer test_token")
            .create_async()
            .await;

        let config = Config::new("test_token", None).unwrap();
        let _ = config.github.client.get(server.url()).send().await;

        mock.assert_async().await;
    }

    // the page client must not leak the credential
    #[tokio::test]
    async fn test_config_new_page_client_has_no_credential() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", mockito::Matcher::Missing)
            .create_async()
            .await;

        let config = Config::new("test_token", None).unwrap();
        let _ = config.page_client.get(server.url()).send().await;

        mock.assert_async().await;
    }

    #[test]
    fn test_config_new_default_api_url() {
        let config = Config::new("test_token", None).unwrap();
        assert_eq!(config.github.api_url, crate::github::DEFAULT_API_URL);
    }
}
