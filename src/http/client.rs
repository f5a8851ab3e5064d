use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};

use crate::error::{AppError, AppResult, HttpError};

use super::header::HeaderSet;

/// Outbound HTTP capability used by the request producer.
///
/// Implementations return the response status code. A non-2xx status is not
/// an error; only transport failures are.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be delivered.
    async fn get(&self, url: &Url, headers: &HeaderSet) -> AppResult<u16>;

    /// Sends a PUT request with `body`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be delivered.
    async fn put(&self, url: &Url, headers: &HeaderSet, body: &str) -> AppResult<u16>;
}

/// [`HttpClient`] backed by `reqwest` with its default timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Builds the underlying `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or resolver cannot be initialized.
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url, headers: &HeaderSet) -> AppResult<u16> {
        let builder = apply_headers(self.client.get(url.clone()), headers);
        send("GET", url, builder).await
    }

    async fn put(&self, url: &Url, headers: &HeaderSet, body: &str) -> AppResult<u16> {
        let builder = apply_headers(self.client.put(url.clone()), headers).body(body.to_owned());
        send("PUT", url, builder).await
    }
}

fn apply_headers(mut builder: RequestBuilder, headers: &HeaderSet) -> RequestBuilder {
    for (key, value) in headers {
        builder = builder.header(key, value);
    }
    builder
}

async fn send(method: &'static str, url: &Url, builder: RequestBuilder) -> AppResult<u16> {
    let transport_error = |err: reqwest::Error| {
        AppError::http(HttpError::Transport {
            method,
            url: url.to_string(),
            source: err,
        })
    };
    let response = builder.send().await.map_err(transport_error)?;
    let status = response.status().as_u16();
    // Drain the body so the exchange completes before the next request.
    response.bytes().await.map_err(transport_error)?;
    Ok(status)
}
