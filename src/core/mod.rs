// src/core/mod.rs

// The `core` module holds everything that does not touch the terminal:
// data models, file selection, the upload client and waveform math.

/// Data structures shared across the application, such as `SelectedFile`,
/// the raw `UploadResponse` and the validated `AnalysisResult`.
pub mod models;

/// Typed failures for file selection and submission.
pub mod errors;

/// Loading files from disk, MIME sniffing and parsing dropped paths.
pub mod selection;

/// The HTTP client that posts images to the analysis endpoint.
pub mod uploader;

/// Decimation, smoothing and animation helpers for the waveform chart.
pub mod waveform;
