//! Feed HTTP fetcher
//!
//! Downloads the feed document and parses it into an untyped JSON object.
//! The body is always decoded as ISO-8859-1, whatever the server claims in
//! its `Content-Type`, and line breaks are dropped before parsing.

use std::time::Duration;

use serde_json::Value;

use super::domain::{FetchError, RawDocument};

/// Default user agent sent with every request
pub const USER_AGENT: &str = concat!("video-catalog/", env!("CARGO_PKG_VERSION"));

/// Default limit for connecting and reading the whole response
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches feed documents over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http_client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_settings(DEFAULT_TIMEOUT, USER_AGENT)
    }

    /// Create a fetcher with a custom timeout and user agent
    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self { http_client })
    }

    /// Download `url` and parse the body into a JSON object.
    ///
    /// The response is dropped, closing the connection, on every return path.
    pub async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Connection(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        parse_document(&body)
    }
}

/// Decode a feed body and parse it as a JSON object.
pub fn parse_document(body: &[u8]) -> Result<RawDocument, FetchError> {
    let text = decode_joined_lines(body);

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(FetchError::Decode(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(FetchError::Decode(e.to_string())),
    }
}

/// ISO-8859-1 decode with every CR and LF removed.
///
/// Each byte maps to the code point with the same value, so decoding can't fail.
fn decode_joined_lines(body: &[u8]) -> String {
    body.iter()
        .filter(|&&b| b != b'\n' && b != b'\r')
        .map(|&b| char::from(b))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
