//! OCR triage: decide whether extracted text is trustworthy, run bounded
//! recognition when it is not, and grade what comes back. Every failure path
//! degrades to `ocr_unavailable`; nothing here is pipeline-fatal.

pub mod engine;

use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::analysis::models::{OcrConfidence, Provenance};
use crate::ocr::engine::OcrEngine;
use crate::patterns::{
    BLANK_RUN_RE, BOILERPLATE_RES, EMAIL_RE, HSPACE_RUN_RE, PAGE_NUMBER_RE, PHONE_RE, RESUME_VOCAB,
};

pub const MIN_TEXT_LENGTH: usize = 800;
pub const MIN_WORD_COUNT: usize = 150;
pub const MAX_OCR_PAGES: usize = 5;
pub const OCR_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of one triage run: the recognized text (if any) plus the
/// provenance tag and confidence tier the scorer consumes.
#[derive(Debug)]
pub struct OcrOutcome {
    pub text: Option<String>,
    pub method: Provenance,
    pub confidence: OcrConfidence,
}

impl OcrOutcome {
    fn unavailable() -> Self {
        Self {
            text: None,
            method: Provenance::OcrUnavailable,
            confidence: OcrConfidence::Low,
        }
    }
}

/// Short-circuiting OR: any single trigger forces OCR. Over-triggering is
/// fine; skipping recognition on a genuinely scanned resume is not.
pub fn needs_ocr(text: &str, email: Option<&str>, phone: Option<&str>) -> bool {
    if text.trim().len() < MIN_TEXT_LENGTH {
        return true;
    }
    if text.split_whitespace().count() < MIN_WORD_COUNT {
        return true;
    }
    if email.is_none() && !EMAIL_RE.is_match(text) {
        return true;
    }
    if phone.is_none() && !PHONE_RE.is_match(text) {
        return true;
    }
    false
}

/// Runs recognition under the page cap and wall-clock deadline. A worker
/// still grinding when the deadline passes is abandoned; its result is
/// discarded rather than surfaced late.
pub async fn run(
    engine: &dyn OcrEngine,
    pdf_path: &Path,
    page_count: usize,
    max_pages: usize,
    timeout: Duration,
) -> OcrOutcome {
    if page_count > max_pages {
        warn!(page_count, max_pages, "skipping OCR, document exceeds page cap");
        return OcrOutcome::unavailable();
    }
    if !engine.is_available() {
        return OcrOutcome::unavailable();
    }

    match tokio::time::timeout(timeout, engine.recognize(pdf_path, max_pages)).await {
        Ok(Ok(raw)) => {
            let cleaned = clean_ocr_text(&raw);
            let confidence = confidence_for(&cleaned);
            OcrOutcome {
                text: Some(cleaned),
                method: Provenance::Ocr,
                confidence,
            }
        }
        Ok(Err(err)) => {
            warn!("OCR recognition failed: {err:#}");
            OcrOutcome::unavailable()
        }
        Err(_) => {
            warn!("OCR recognition exceeded {}s deadline", timeout.as_secs());
            OcrOutcome::unavailable()
        }
    }
}

/// Strips page numbers, boilerplate header/footer lines, short duplicate
/// lines, and excess whitespace while keeping blank-line structure.
pub fn clean_ocr_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned_lines: Vec<&str> = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for line in text.split('\n') {
        let stripped = line.trim();

        if stripped.is_empty() {
            // Keep a single blank line for structure.
            if cleaned_lines.last().map(|l| !l.is_empty()).unwrap_or(false) {
                cleaned_lines.push("");
            }
            continue;
        }
        if PAGE_NUMBER_RE.is_match(stripped) {
            continue;
        }
        if BOILERPLATE_RES.iter().any(|p| p.is_match(stripped)) {
            continue;
        }
        // Short repeated lines are recognition artifacts; long duplicates are
        // assumed legitimate.
        let key = stripped.to_lowercase();
        if stripped.len() < 50 && seen.contains(&key) {
            continue;
        }
        seen.insert(key);

        cleaned_lines.push(line);
    }

    let joined = cleaned_lines.join("\n");
    let collapsed = BLANK_RUN_RE.replace_all(&joined, "\n\n");
    HSPACE_RUN_RE.replace_all(&collapsed, " ").trim().to_string()
}

/// Additive 0-8 grade over word count, contact patterns, and resume
/// vocabulary density.
pub fn confidence_for(text: &str) -> OcrConfidence {
    if text.is_empty() {
        return OcrConfidence::Low;
    }

    let mut score = 0;

    let word_count = text.split_whitespace().count();
    if word_count >= 300 {
        score += 3;
    } else if word_count >= 150 {
        score += 2;
    } else if word_count >= 50 {
        score += 1;
    }

    if EMAIL_RE.is_match(text) {
        score += 2;
    }
    if PHONE_RE.is_match(text) {
        score += 1;
    }

    let text_lower = text.to_lowercase();
    let vocab_hits = RESUME_VOCAB.iter().filter(|kw| text_lower.contains(*kw)).count();
    if vocab_hits >= 8 {
        score += 3;
    } else if vocab_hits >= 5 {
        score += 2;
    } else if vocab_hits >= 2 {
        score += 1;
    }

    if score >= 7 {
        OcrConfidence::High
    } else if score >= 4 {
        OcrConfidence::Medium
    } else {
        OcrConfidence::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;

    struct StubEngine {
        available: bool,
        delay: Duration,
        result: Result<String, ()>,
    }

    #[async_trait]
    impl OcrEngine for StubEngine {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn recognize(&self, _pdf_path: &Path, _max_pages: usize) -> anyhow::Result<String> {
            tokio::time::sleep(self.delay).await;
            match &self.result {
                Ok(text) => Ok(text.clone()),
                Err(()) => bail!("stub recognition failure"),
            }
        }
    }

    #[test]
    fn test_needs_ocr_length_floor_dominates() {
        // 799 characters with contact info still triggers on length.
        let text = "word ".repeat(159) + "abcd"; // 799 chars
        assert_eq!(text.len(), 799);
        assert!(needs_ocr(&text, Some("a@b.io"), Some("555-123-4567")));
    }

    #[test]
    fn test_needs_ocr_satisfied_text() {
        // 900 chars, 160 words, both contact fields present.
        let mut text = "cover ".repeat(149); // 894 chars, 149 words
        text.push_str("extra1"); // 900 chars, 150 words
        assert_eq!(text.len(), 900);
        let text = format!("{text} w1 w2 w3 w4 w5 w6 w7 w8 w9 w10");
        assert!(text.split_whitespace().count() >= 160);
        assert!(!needs_ocr(&text, Some("a@b.io"), Some("555-123-4567")));
    }

    #[test]
    fn test_needs_ocr_missing_contact_triggers() {
        let text = "word ".repeat(200); // plenty of length and words
        assert!(needs_ocr(&text, None, Some("555-123-4567")));
        assert!(needs_ocr(&text, Some("a@b.io"), None));
    }

    #[test]
    fn test_clean_removes_artifacts() {
        let raw = "Jane Doe\nPage 1 of 2\nresume\nJane Doe\nConfidential\n\n\n\n\nSkills";
        let cleaned = clean_ocr_text(raw);
        // Duplicate short line, page number, and boilerplate all dropped;
        // the blank run collapses.
        assert_eq!(cleaned, "Jane Doe\n\nSkills");
    }

    #[test]
    fn test_clean_keeps_long_duplicates() {
        let long = "Built and operated a distributed ingestion pipeline at scale";
        let raw = format!("{long}\n{long}");
        let cleaned = clean_ocr_text(&raw);
        assert_eq!(cleaned.matches("ingestion").count(), 2);
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(confidence_for(""), OcrConfidence::Low);

        // Rich text: 300+ words (+3), email (+2), phone (+1), vocab (+3).
        let rich = format!(
            "{} jane@x.io 555-123-4567 experience education skills python java \
             javascript developer engineer manager",
            "filler ".repeat(300)
        );
        assert_eq!(confidence_for(&rich), OcrConfidence::High);

        // Some words and a little vocabulary only.
        let middling = format!("{} experience education skills", "word ".repeat(60));
        assert_eq!(confidence_for(&middling), OcrConfidence::Low);
    }

    #[tokio::test]
    async fn test_run_unavailable_engine() {
        let engine = StubEngine {
            available: false,
            delay: Duration::ZERO,
            result: Ok("text".into()),
        };
        let outcome = run(&engine, Path::new("/tmp/x.pdf"), 1, 5, OCR_TIMEOUT).await;
        assert!(outcome.text.is_none());
        assert_eq!(outcome.method, Provenance::OcrUnavailable);
        assert_eq!(outcome.confidence, OcrConfidence::Low);
    }

    #[tokio::test]
    async fn test_run_page_cap_is_admission_control() {
        let engine = StubEngine {
            available: true,
            delay: Duration::ZERO,
            result: Ok("text".into()),
        };
        let outcome = run(&engine, Path::new("/tmp/x.pdf"), 6, 5, OCR_TIMEOUT).await;
        assert_eq!(outcome.method, Provenance::OcrUnavailable);
    }

    #[tokio::test]
    async fn test_run_timeout_discards_result() {
        let engine = StubEngine {
            available: true,
            delay: Duration::from_secs(30),
            result: Ok("late text".into()),
        };
        let outcome = run(
            &engine,
            Path::new("/tmp/x.pdf"),
            1,
            5,
            Duration::from_millis(20),
        )
        .await;
        assert!(outcome.text.is_none());
        assert_eq!(outcome.method, Provenance::OcrUnavailable);
    }

    #[tokio::test]
    async fn test_run_success_cleans_and_grades() {
        let engine = StubEngine {
            available: true,
            delay: Duration::ZERO,
            result: Ok("Jane Doe\nPage 1\nSkills: python".into()),
        };
        let outcome = run(&engine, Path::new("/tmp/x.pdf"), 1, 5, OCR_TIMEOUT).await;
        assert_eq!(outcome.method, Provenance::Ocr);
        let text = outcome.text.unwrap();
        assert!(!text.contains("Page 1"));
        assert!(text.contains("Skills: python"));
    }

    #[tokio::test]
    async fn test_run_recognition_error_degrades() {
        let engine = StubEngine {
            available: true,
            delay: Duration::ZERO,
            result: Err(()),
        };
        let outcome = run(&engine, Path::new("/tmp/x.pdf"), 1, 5, OCR_TIMEOUT).await;
        assert_eq!(outcome.method, Provenance::OcrUnavailable);
    }
}
