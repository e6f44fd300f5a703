use std::sync::Arc;

use crate::config::Config;
use crate::ocr::engine::OcrEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable recognition backend. Default: TesseractEngine, probed once
    /// at startup.
    pub ocr: Arc<dyn OcrEngine>,
}
