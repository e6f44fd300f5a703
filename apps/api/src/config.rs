use anyhow::{Context, Result};

use crate::ocr::{MAX_OCR_PAGES, OCR_TIMEOUT};

/// Application configuration loaded from environment variables.
/// Every knob has a default; the service runs with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub ocr_timeout_secs: u64,
    pub ocr_max_pages: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (5 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            ocr_timeout_secs: std::env::var("OCR_TIMEOUT_SECS")
                .unwrap_or_else(|_| OCR_TIMEOUT.as_secs().to_string())
                .parse::<u64>()
                .context("OCR_TIMEOUT_SECS must be a number of seconds")?,
            ocr_max_pages: std::env::var("OCR_MAX_PAGES")
                .unwrap_or_else(|_| MAX_OCR_PAGES.to_string())
                .parse::<usize>()
                .context("OCR_MAX_PAGES must be a page count")?,
        })
    }
}
