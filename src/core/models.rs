// src/core/models.rs

use crate::core::errors::SubmitError;
use serde::Deserialize;
use std::path::PathBuf;

// --- Selection Models ---

/// The abnormality label the server uses for a signal with no findings.
pub const NORMAL_LABEL: &str = "Normal";

/// An image picked by the user, held until it is submitted.
///
/// Only the header is read at selection time; the body is read from `path`
/// when the file is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

// --- Server Response Models ---

/// The raw JSON body returned by `POST /upload`.
///
/// Every field is optional on the wire: a failed analysis only carries
/// `error`, a successful one carries everything else. Use
/// [`UploadResponse::into_result`] to get a validated [`AnalysisResult`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub abnormality: Option<String>,
    #[serde(default)]
    pub stress_level: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub medical_advice: Option<String>,
    #[serde(default)]
    pub waveform: Option<Vec<f64>>,
}

/// A complete analysis as rendered by the results panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub heart_rate: f64,
    pub abnormality: String,
    pub stress_level: String,
    pub confidence_score: f64,
    pub medical_advice: String,
    pub waveform: Vec<f64>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, SubmitError> {
    value.ok_or_else(|| SubmitError::Malformed(format!("missing field `{field}`")))
}

impl UploadResponse {
    /// Converts the wire body into an [`AnalysisResult`].
    ///
    /// An `error` field always wins, even if analysis fields are present too.
    /// Missing fields are never defaulted.
    pub fn into_result(self) -> Result<AnalysisResult, SubmitError> {
        if let Some(message) = self.error {
            return Err(SubmitError::Server(message));
        }

        let result = AnalysisResult {
            heart_rate: required(self.heart_rate, "heart_rate")?,
            abnormality: required(self.abnormality, "abnormality")?,
            stress_level: required(self.stress_level, "stress_level")?,
            confidence_score: required(self.confidence_score, "confidence_score")?,
            medical_advice: required(self.medical_advice, "medical_advice")?,
            waveform: required(self.waveform, "waveform")?,
        };

        if result.waveform.is_empty() {
            return Err(SubmitError::Malformed("waveform is empty".to_string()));
        }
        if !(0.0..=100.0).contains(&result.confidence_score) {
            return Err(SubmitError::Malformed(format!(
                "confidence_score {} is outside 0-100",
                result.confidence_score
            )));
        }
        Ok(result)
    }
}

// --- Presentation Models ---

/// Visual treatment of the heart-rate field. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartRateTone {
    Highlight,
    Warning,
}

impl HeartRateTone {
    pub fn for_abnormality(label: &str) -> Self {
        if label == NORMAL_LABEL {
            HeartRateTone::Highlight
        } else {
            HeartRateTone::Warning
        }
    }
}

impl AnalysisResult {
    pub fn heart_rate_text(&self) -> String {
        format!("{} BPM", self.heart_rate)
    }

    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence_score)
    }

    pub fn heart_rate_tone(&self) -> HeartRateTone {
        HeartRateTone::for_abnormality(&self.abnormality)
    }
}
