// src/core/uploader.rs

use crate::core::errors::SubmitError;
use crate::core::models::{AnalysisResult, SelectedFile, UploadResponse};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error, info, warn};
use url::Url;

/// Name of the multipart field the server reads the image from.
pub const FILE_FIELD: &str = "file";

/// Posts images to the analysis endpoint.
#[derive(Debug, Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl UploadClient {
    pub fn new(endpoint: Url) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("PulseScope/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Reads one file from disk, sends it and waits for the analysis.
    ///
    /// No timeout is applied and the request is not retried.
    pub async fn submit(&self, file: &SelectedFile) -> Result<AnalysisResult, SubmitError> {
        info!(endpoint = %self.endpoint, name = %file.name, size = file.size, "Submitting image.");

        let bytes = tokio::fs::read(&file.path)
            .await
            .inspect_err(|e| error!(path = %file.path.display(), error = %e, "Could not read selected file."))?;
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Upload request failed."))?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Received analysis response.");

        parse_response(status, &body)
    }
}

/// Interprets a response body, whatever its status.
///
/// The server reports failures as `{"error": ...}` alongside 4xx/5xx
/// statuses, so the body is decoded before the status is considered.
pub fn parse_response(status: StatusCode, body: &[u8]) -> Result<AnalysisResult, SubmitError> {
    let parsed: UploadResponse = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) if status.is_success() => {
            warn!(error = %e, "Response body is not valid JSON.");
            return Err(SubmitError::Malformed(e.to_string()));
        }
        Err(_) => {
            warn!(%status, "Non-success status without a JSON body.");
            return Err(SubmitError::Status(status.as_u16()));
        }
    };

    if parsed.error.is_none() && !status.is_success() {
        warn!(%status, "Non-success status without an error field.");
        return Err(SubmitError::Status(status.as_u16()));
    }

    parsed.into_result()
}
