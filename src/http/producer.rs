use rand::thread_rng;
use reqwest::Url;

use crate::domain::run::{RequestKind, RunConfig};
use crate::error::{AppError, AppResult, HttpError};

use super::client::HttpClient;
use super::header::{AddressKind, HeaderMode, build_header, random_ipv4, variant_address};

/// Body sent with every PUT request.
pub const PUT_BODY: &str = "LoremIpsum";

/// Issues `request_count` sequential requests at the configured destination.
///
/// Every loop stops at the first transport error; requests after the failing
/// one are never attempted.
pub struct RequestProducer<C> {
    config: RunConfig,
    target: Url,
    client: C,
}

impl<C> RequestProducer<C>
where
    C: HttpClient,
{
    /// Targets `http://{destination}` through `client`.
    ///
    /// # Errors
    ///
    /// Returns an error when the target URL cannot be parsed.
    pub fn new(config: RunConfig, client: C) -> AppResult<Self> {
        let raw = config.target_url();
        let target = Url::parse(&raw).map_err(|err| {
            AppError::http(HttpError::InvalidDestination {
                dest: config.destination.clone(),
                source: err,
            })
        })?;
        Ok(Self {
            config,
            target,
            client,
        })
    }

    #[cfg(test)]
    pub(crate) const fn client(&self) -> &C {
        &self.client
    }

    /// Runs the request path selected by the configuration and returns the
    /// number of requests sent.
    ///
    /// # Errors
    ///
    /// Returns the first transport error.
    pub async fn run(&self) -> AppResult<u64> {
        tracing::info!(
            "Sending {} {} request(s) to {}",
            self.config.request_count,
            self.config.kind.as_str(),
            self.target
        );
        match self.config.kind {
            RequestKind::Variant => {
                self.issue_get_requests_variant(self.config.use_valid_header)
                    .await?;
            }
            RequestKind::Get => self.issue_get_requests().await?,
            RequestKind::Put => self.issue_put_requests().await?,
        }
        Ok(self.config.request_count)
    }

    /// Sends PUT requests with a random forwarding address and [`PUT_BODY`].
    ///
    /// # Errors
    ///
    /// Returns the first transport error.
    pub async fn issue_put_requests(&self) -> AppResult<()> {
        for attempt in 1..=self.config.request_count {
            let address = random_ipv4(&mut thread_rng()).to_string();
            let headers = build_header(HeaderMode::Random, &address);
            let status = self
                .client
                .put(&self.target, &headers, PUT_BODY)
                .await
                .map_err(|err| self.log_failure(attempt, err))?;
            tracing::debug!(
                "PUT {} #{} x-forwarded-for={} -> {}",
                self.target,
                attempt,
                address,
                status
            );
        }
        Ok(())
    }

    /// Sends GET requests with a random forwarding address.
    ///
    /// # Errors
    ///
    /// Returns the first transport error.
    pub async fn issue_get_requests(&self) -> AppResult<()> {
        for attempt in 1..=self.config.request_count {
            let address = random_ipv4(&mut thread_rng()).to_string();
            let headers = build_header(HeaderMode::Random, &address);
            let status = self
                .client
                .get(&self.target, &headers)
                .await
                .map_err(|err| self.log_failure(attempt, err))?;
            tracing::debug!(
                "GET {} #{} x-forwarded-for={} -> {}",
                self.target,
                attempt,
                address,
                status
            );
        }
        Ok(())
    }

    /// Sends GET requests with the fixed valid or invalid forwarding address
    /// and the static custom header.
    ///
    /// # Errors
    ///
    /// Returns the first transport error.
    pub async fn issue_get_requests_variant(&self, use_valid: bool) -> AppResult<()> {
        let address = variant_address(AddressKind::from_valid(use_valid));
        for attempt in 1..=self.config.request_count {
            let headers = build_header(HeaderMode::Variant, address);
            let status = self
                .client
                .get(&self.target, &headers)
                .await
                .map_err(|err| self.log_failure(attempt, err))?;
            tracing::debug!(
                "GET {} #{} x-forwarded-for={} -> {}",
                self.target,
                attempt,
                address,
                status
            );
        }
        Ok(())
    }

    fn log_failure(&self, attempt: u64, err: AppError) -> AppError {
        tracing::error!(
            "Request {} of {} failed: {}",
            attempt,
            self.config.request_count,
            err
        );
        err
    }
}
