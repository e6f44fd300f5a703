//! HTTP boundary for the analysis pipeline: multipart upload in, full
//! analysis JSON out. All validation failures are 400s; a well-formed upload
//! that yields no text is a 422.

use std::time::Duration;

use anyhow::Context;
use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::analysis::models::{
    AnalyzeResult, FormattingSignals, OcrConfidence, Provenance, RawDocument,
};
use crate::document::{self, DocumentKind};
use crate::errors::AppError;
use crate::ocr;
use crate::state::AppState;

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResult>, AppError> {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => break field,
            Ok(Some(_)) => continue,
            Ok(None) => {
                return Err(AppError::Validation(
                    "Missing \"file\" field in multipart form".to_string(),
                ))
            }
            Err(err) => {
                return Err(AppError::Validation(format!(
                    "Malformed multipart request: {err}"
                )))
            }
        }
    };

    let filename = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;
    let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
        AppError::Validation(
            "Invalid file type. Only PDF and DOCX files are supported".to_string(),
        )
    })?;

    let bytes = field
        .bytes()
        .await
        .map_err(|err| AppError::Validation(format!("Failed to read upload: {err}")))?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if bytes.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(format!(
            "File too large. Maximum size is {}MB",
            state.config.max_upload_bytes / (1024 * 1024)
        )));
    }

    info!(%filename, size = bytes.len(), "analyzing resume upload");

    // The temp file must outlive extraction and any OCR pass.
    let suffix = match kind {
        DocumentKind::Pdf => ".pdf",
        DocumentKind::Docx => ".docx",
    };
    let tmp = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .context("failed to create scratch file")?;
    std::fs::write(tmp.path(), &bytes).context("failed to write scratch file")?;

    let path = tmp.path().to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || document::extract(&path, kind))
        .await
        .context("extraction worker panicked")??;

    let mut text = extracted.text;
    let mut signals = extracted.signals;
    let mut provenance = Provenance::Standard;
    let mut ocr_confidence = None;

    if kind == DocumentKind::Pdf && ocr::needs_ocr(&text, None, None) {
        info!("extracted text looks unreliable, attempting OCR");
        let outcome = ocr::run(
            state.ocr.as_ref(),
            tmp.path(),
            extracted.page_count,
            state.config.ocr_max_pages,
            Duration::from_secs(state.config.ocr_timeout_secs),
        )
        .await;
        match outcome.text {
            Some(ocr_text) if !ocr_text.trim().is_empty() => {
                signals = FormattingSignals {
                    word_count: ocr_text.split_whitespace().count(),
                    line_count: ocr_text.split('\n').count(),
                    ..signals
                };
                text = ocr_text;
                provenance = Provenance::Ocr;
                ocr_confidence = Some(outcome.confidence);
            }
            _ => {
                // Proceed with whatever direct extraction produced, tagged so
                // callers can see the degradation.
                provenance = Provenance::OcrUnavailable;
                ocr_confidence = Some(OcrConfidence::Low);
            }
        }
    }

    let doc = RawDocument {
        text,
        signals,
        provenance,
        ocr_confidence,
    };
    let result = crate::analysis::analyze(&doc)?;
    info!(score = result.ats_score, domain = %result.domain.primary, "analysis complete");

    Ok(Json(result))
}
