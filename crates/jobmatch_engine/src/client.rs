use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::types::{AnalysisReport, AnalyzeError};

/// Connection settings for the analysis backend.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Prefix for endpoint paths. Empty means same-origin relative URLs,
    /// which is what the browser build uses.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One outbound analysis submission: the first resume plus the pasted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub resume_name: String,
    pub resume_bytes: Vec<u8>,
    pub job_description: String,
}

/// Seam for the two backend endpoints, so tests and the app shell can
/// swap implementations without touching the controller.
#[async_trait(?Send)]
pub trait AnalyzeBackend {
    /// `POST /analyze` with a multipart resume + job-description body.
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisReport, AnalyzeError>;

    /// `GET /health` liveness probe; success requires a parseable JSON body.
    async fn health(&self) -> Result<(), AnalyzeError>;
}

/// reqwest-backed client for the analysis service.
#[derive(Debug, Clone)]
pub struct HttpAnalyzeBackend {
    settings: BackendSettings,
    client: reqwest::Client,
}

impl HttpAnalyzeBackend {
    pub fn new(settings: BackendSettings) -> Self {
        let client = build_client(&settings);
        Self { settings, client }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(settings: &BackendSettings) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .unwrap_or_else(|err| {
            log::warn!("falling back to default client: {err}");
            reqwest::Client::new()
        })
}

// Browser fetch owns connection handling; the builder knobs do not exist
// on the wasm backend.
#[cfg(target_arch = "wasm32")]
fn build_client(_settings: &BackendSettings) -> reqwest::Client {
    reqwest::Client::new()
}

#[async_trait(?Send)]
impl AnalyzeBackend for HttpAnalyzeBackend {
    async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalysisReport, AnalyzeError> {
        let form = reqwest::multipart::Form::new()
            .part(
                "resume",
                reqwest::multipart::Part::bytes(request.resume_bytes)
                    .file_name(request.resume_name),
            )
            .text("job_description", request.job_description);

        let response = self
            .client
            .post(self.endpoint("/analyze"))
            .multipart(form)
            .send()
            .await
            .map_err(connectivity_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(service_error(status, response.text().await.ok()));
        }

        let body = response.text().await.map_err(connectivity_error)?;
        serde_json::from_str(&body).map_err(|err| {
            log::warn!("analyze response did not parse: {err}");
            AnalyzeError::MalformedResponse
        })
    }

    async fn health(&self) -> Result<(), AnalyzeError> {
        let response = self
            .client
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(connectivity_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzeError::Service(format!(
                "health probe failed (HTTP {})",
                status.as_u16()
            )));
        }

        // The contract only promises a parseable JSON body; the shape is
        // not inspected further.
        response
            .json::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(|_| AnalyzeError::MalformedResponse)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn connectivity_error(err: reqwest::Error) -> AnalyzeError {
    AnalyzeError::Connectivity(err.to_string())
}

/// Non-2xx handling: prefer the structured `{ "error": ... }` payload,
/// fall back to a status-derived message when the body is absent or
/// unparseable.
fn service_error(status: reqwest::StatusCode, body: Option<String>) -> AnalyzeError {
    let structured = body
        .as_deref()
        .and_then(|text| serde_json::from_str::<ErrorBody>(text).ok());
    match structured {
        Some(parsed) => AnalyzeError::Service(parsed.error),
        None => AnalyzeError::Service(format!("analysis failed (HTTP {})", status.as_u16())),
    }
}
