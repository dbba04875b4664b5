//! HTTP gateway between the client flows and the backend
//!
//! Flows call through the [`FarmApi`] trait so tests can substitute a stub
//! without a running server.

use async_trait::async_trait;
use thiserror::Error;

use shared::models::{
    BookingConfirmation, BookingRequest, FarmSetupConfirmation, FarmSetupRequest, FeedbackAck,
    FeedbackSubmission, ForecastRecord,
};

/// Client-side request failures
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level fetch failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered, but with `success = false` or a failure status.
    /// The mock backend cannot distinguish upstream unavailability; a real
    /// system would split that out of this variant.
    #[error("{message}")]
    Rejected { message: String },

    /// Response body did not match the expected shape
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Everything the dashboard and form flows need from the server
#[async_trait]
pub trait FarmApi: Send + Sync {
    async fn fetch_forecast(&self) -> Result<ForecastRecord, ClientError>;

    async fn book_agent(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ClientError>;

    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackAck, ClientError>;

    async fn complete_farm_setup(
        &self,
        request: &FarmSetupRequest,
    ) -> Result<FarmSetupConfirmation, ClientError>;
}

/// `FarmApi` over HTTP via reqwest
pub struct HttpFarmApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpFarmApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, ClientError>
    where
        Req: serde::Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(request).send().await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FarmApi for HttpFarmApi {
    async fn fetch_forecast(&self) -> Result<ForecastRecord, ClientError> {
        let response = self.http.get(self.url("/forecast")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected {
                message: format!("forecast request failed with status {}", status),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn book_agent(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ClientError> {
        let confirmation: BookingConfirmation = self.post_json("/book-agent", request).await?;
        if !confirmation.success {
            return Err(ClientError::Rejected {
                message: confirmation.message,
            });
        }
        Ok(confirmation)
    }

    async fn submit_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<FeedbackAck, ClientError> {
        let ack: FeedbackAck = self.post_json("/feedback", submission).await?;
        if !ack.success {
            return Err(ClientError::Rejected {
                message: ack.message,
            });
        }
        Ok(ack)
    }

    async fn complete_farm_setup(
        &self,
        request: &FarmSetupRequest,
    ) -> Result<FarmSetupConfirmation, ClientError> {
        let confirmation: FarmSetupConfirmation = self.post_json("/farm-setup", request).await?;
        if !confirmation.success {
            return Err(ClientError::Rejected {
                message: confirmation.message,
            });
        }
        Ok(confirmation)
    }
}
