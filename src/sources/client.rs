// src/sources/client.rs
use crate::utils::error::FetchError;
use reqwest::header;
use std::time::Duration;

// Identify ourselves to Gutenberg and the study site; anonymous clients get
// throttled or blocked on both.
const USER_AGENT: &str = "scripture_extractor/0.1 (public-domain scripture corpus builder)";
// Stay well under any rate limit; one request at a time with a small gap.
const REQUEST_DELAY_MS: u64 = 150;

/// Creates a reqwest client configured for source downloads.
/// Every request carries a fixed 30 second timeout; a timed-out request
/// surfaces as `FetchError::Network`.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Downloads a document from its URL and returns the body as text.
/// Includes basic rate limiting and HTTP status checking.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    tracing::info!("Fetching: {}", url);

    tokio::time::sleep(Duration::from_millis(REQUEST_DELAY_MS)).await;

    let response = client
        .get(url)
        .header(header::ACCEPT, "text/html,text/plain,*/*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        return Err(FetchError::Http(status));
    }

    let body = response.text().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}
