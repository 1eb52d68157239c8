// src/logging.rs

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "pulse-scope", env!("CARGO_PKG_NAME"))
}

pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Picks the filter: explicit override, then `RUST_LOG`, then `PULSE_SCOPE_LOGLEVEL`.
fn resolve_filter(override_level: Option<&str>) -> String {
    override_level
        .map(str::to_string)
        .or_else(|| std::env::var("RUST_LOG").ok())
        .or_else(|| std::env::var(LOG_ENV.as_str()).ok())
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Initializes file-based logging. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
pub fn initialize_logging(override_level: Option<&str>) -> Result<PathBuf> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(resolve_filter(override_level)));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_derive_from_crate() {
        assert_eq!(LOG_ENV.as_str(), "PULSE_SCOPE_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "pulse-scope.log");
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(resolve_filter(Some("debug")), "debug");
    }
}
