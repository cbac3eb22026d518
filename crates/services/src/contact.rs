use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use folio_core::Clock;
use folio_core::model::{ContactDraft, ContactMessage};

use crate::error::{ContactGatewayError, ContactServiceError};

/// Artificial latency of the simulated gateway.
pub const SIMULATED_DELAY: Duration = Duration::from_secs(2);

/// Returned once a message has been accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactReceipt {
    accepted_at: DateTime<Utc>,
}

impl ContactReceipt {
    #[must_use]
    pub fn accepted_at(&self) -> DateTime<Utc> {
        self.accepted_at
    }
}

/// A form-submission endpoint accepting `{name, email, message}`.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Deliver a validated message.
    ///
    /// # Errors
    ///
    /// Returns `ContactGatewayError` when delivery fails.
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactGatewayError>;
}

/// Stand-in gateway: waits a fixed delay, then reports success.
///
/// The default when no endpoint is configured, so the app runs standalone.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactGateway for SimulatedGateway {
    async fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactGatewayError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Delivers messages to a real endpoint as a JSON POST.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpGateway {
    /// # Errors
    ///
    /// Returns `ContactGatewayError::InvalidEndpoint` unless `endpoint` is
    /// an absolute http(s) URL.
    pub fn new(endpoint: &str) -> Result<Self, ContactGatewayError> {
        let parsed =
            reqwest::Url::parse(endpoint).map_err(|_| ContactGatewayError::InvalidEndpoint {
                raw: endpoint.to_string(),
            })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ContactGatewayError::InvalidEndpoint {
                raw: endpoint.to_string(),
            });
        }
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: parsed,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactGateway for HttpGateway {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactGatewayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(message)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ContactGatewayError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

/// Validates drafts and hands them to the configured gateway.
#[derive(Clone)]
pub struct ContactService {
    clock: Clock,
    gateway: Arc<dyn ContactGateway>,
}

impl ContactService {
    #[must_use]
    pub fn new(clock: Clock, gateway: Arc<dyn ContactGateway>) -> Self {
        Self { clock, gateway }
    }

    /// Validate and deliver one draft.
    ///
    /// # Errors
    ///
    /// Returns `ContactServiceError::Invalid` before any delivery is
    /// attempted, or `ContactServiceError::Gateway` when delivery fails.
    pub async fn submit(&self, draft: &ContactDraft) -> Result<ContactReceipt, ContactServiceError> {
        let message = draft.validate()?;
        self.gateway.deliver(&message).await?;
        Ok(ContactReceipt {
            accepted_at: self.clock.now(),
        })
    }
}
