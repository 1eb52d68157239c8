// src/config.rs

use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Path of the analysis endpoint relative to the server base URL.
pub const UPLOAD_PATH: &str = "upload";

/// Terminal client for the ECG image analysis service.
#[derive(Debug, Clone, Parser)]
#[command(name = "pulse-scope", version, about)]
pub struct Config {
    /// Base URL of the analysis server.
    #[arg(long, env = "PULSE_SCOPE_SERVER", default_value = "http://127.0.0.1:5000")]
    pub server: Url,

    /// Image to select at startup, as if it had been dropped.
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Log filter, overriding RUST_LOG and PULSE_SCOPE_LOGLEVEL.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    /// The `POST` target: `<server>/upload`, keeping any path prefix.
    pub fn upload_url(&self) -> Result<Url, url::ParseError> {
        let mut base = self.server.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(UPLOAD_PATH)
    }
}
