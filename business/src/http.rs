//! Read-only HTTP client with Send-safe futures on native and wasm.
//!
//! On wasm, `reqwest::Response` wraps JS values and is not `Send`. The request
//! therefore runs on the JS thread via `spawn_local` and its result comes back
//! through a `flume` channel, which keeps [`RequestBuilder::send`] `Send` on
//! every target.

use thiserror::Error;

/// A response reduced to plain, Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, Clone, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
}

impl RequestBuilder {
    /// Sends the request. No headers, body or query are attached.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            let url = self.url;

            wasm_bindgen_futures::spawn_local(async move {
                let result = execute(url).await;
                // Receiver gone means the caller stopped waiting.
                drop(tx.send_async(result).await);
            });

            rx.recv_async()
                .await
                .map_err(|_disconnected| HttpError::new("Request cancelled"))?
        }
    }
}

async fn execute(url: String) -> HttpResult<Response> {
    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

/// Entry point for building requests.
///
/// ```ignore
/// let response = Client::get("https://example.com/api/teams/").send().await?;
/// if response.is_success() {
///     let teams: Vec<Team> = response.json()?;
/// }
/// ```
pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(301, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        let resp = response(200, br#"[{"id": 1}]"#);
        let parsed: Vec<serde_json::Value> = resp.json().unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["id"], 1);
    }

    #[test]
    fn test_http_error_display() {
        let err = HttpError::new("connection refused");
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }
}
