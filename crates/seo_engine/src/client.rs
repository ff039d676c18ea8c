use engine_logging::{engine_debug, engine_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::endpoint::analysis_endpoint;
use crate::{AnalysisReply, AnalysisRequest, EngineSettings, FailureKind, RequestError};

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisReply, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: EngineSettings,
    client: reqwest::Client,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: EngineSettings) -> Result<Self, RequestError> {
        let client = settings
            .build_client()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisReply, RequestError> {
        let endpoint = analysis_endpoint(&self.settings.base_address)?;
        let body = serde_json::to_vec(request)
            .map_err(|err| RequestError::new(FailureKind::InvalidRequest, err.to_string()))?;

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let error = reported_error(&bytes);
            engine_warn!(
                "Analysis rejected status={} reported_error={:?}",
                status.as_u16(),
                error
            );
            return Err(RequestError::new(
                FailureKind::Rejected {
                    status: status.as_u16(),
                    error,
                },
                status.to_string(),
            ));
        }

        let reply: AnalysisReply = serde_json::from_slice(&bytes)
            .map_err(|err| RequestError::new(FailureKind::MalformedResponse, err.to_string()))?;
        engine_debug!("Analysis accepted csv={}", reply.csv);
        Ok(reply)
    }
}

/// Pulls a string `error` field out of an error body; anything else counts as absent.
fn reported_error(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
