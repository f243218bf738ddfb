//! Single-shot page fetcher with browser-mimicking headers.

use log::{error, info};
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, HeaderMap, HeaderValue,
    USER_AGENT,
};
use reqwest::{Client, StatusCode};

/// Scheduling page monitored by default.
pub const DEFAULT_PAGE_URL: &str = "https://covid19.min-saude.pt/pedido-de-agendamento";

// The most common user agent as listed on
// https://techblog.willshouse.com/2012/01/03/most-common-user-agents/
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.141 Safari/537.36";

/// Generic headers attached to every outgoing page request so it resembles an
/// ordinary browser request.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

/// Headers specific to the scheduling page request.
fn page_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers
}

/// Merges request-specific headers over the generic browser set.
/// Request-specific values win on key collision.
fn merged_headers(request_headers: HeaderMap) -> HeaderMap {
    let mut merged = browser_headers();
    for (key, value) in request_headers {
        if let Some(key) = key {
            merged.insert(key, value);
        }
    }
    merged
}

/// Performs the single GET against the scheduling page. Returns the body on
/// HTTP 200 and `None` for every other outcome; failures are logged, never
/// raised, and there are no retries.
#[tracing::instrument(skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Option<String> {
    perform_request(client, url, page_headers()).await
}

#[tracing::instrument(skip(client, request_headers))]
async fn perform_request(
    client: &Client,
    url: &str,
    request_headers: HeaderMap,
) -> Option<String> {
    info!("Fetching \"{}\"...", url);

    let response = match client
        .get(url)
        .headers(merged_headers(request_headers))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to fetch: {}", e);
            return None;
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        error!("Failed to fetch: HTTP {}", status.as_u16());
        return None;
    }

    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            error!("Failed to read response body: {}", e);
            None
        }
    }
}
