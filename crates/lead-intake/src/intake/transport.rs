use std::future::Future;

use thiserror::Error;
use tracing::{debug, warn};

use super::domain::{IntakePayload, IntakeResponse};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("intake request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("intake endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("intake response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outbound seam so the controller can be driven without a network.
pub trait IntakeTransport: Send + Sync {
    fn send(
        &self,
        payload: &IntakePayload,
    ) -> impl Future<Output = Result<IntakeResponse, TransportError>> + Send;
}

/// Posts leads as JSON to the intake endpoint. No auth header and no explicit timeout.
#[derive(Debug, Clone)]
pub struct HttpIntakeTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIntakeTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IntakeTransport for HttpIntakeTransport {
    async fn send(&self, payload: &IntakePayload) -> Result<IntakeResponse, TransportError> {
        debug!(endpoint = %self.endpoint, source = %payload.source, "posting lead");

        // `.json()` sets `Content-Type: application/json`.
        let resp = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        match serde_json::from_str::<IntakeResponse>(&body) {
            Ok(response) if !response.success => {
                warn!(status = status.as_u16(), "intake endpoint rejected lead");
                Ok(response)
            }
            _ => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
