//! Analysis pipeline: segment → extract → classify → score. A pure function
//! of the raw document; concurrent requests share nothing.

pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod models;
pub mod projects;
pub mod sections;

use crate::classify;
use crate::errors::AppError;
use crate::scoring::{self, ScoreInputs};
use models::{AnalyzeResult, RawDocument};

/// Runs the full pipeline. The only fatal input is one with no text at all;
/// a zero score must never stand in for "could not be read".
pub fn analyze(doc: &RawDocument) -> Result<AnalyzeResult, AppError> {
    if doc.text.trim().is_empty() {
        return Err(AppError::UnreadableDocument(
            "No text could be extracted from the document".to_string(),
        ));
    }

    let sections = sections::segment(&doc.text);
    let candidate = contact::extract(&doc.text);
    let experience =
        experience::extract(&doc.text, sections.get("experience").map(String::as_str));
    let projects = projects::extract(&doc.text, sections.get("projects").map(String::as_str));
    let education = education::extract(&doc.text, sections.get("education").map(String::as_str));

    let skills = classify::skills::extract(&doc.text);
    let domain = classify::domains::classify(&doc.text, &skills);

    let outcome = scoring::calculate(&ScoreInputs {
        raw_text: &doc.text,
        sections: &sections,
        signals: doc.signals,
        candidate: &candidate,
        skills: &skills,
        domain: &domain,
        experience: &experience,
        projects: &projects,
        provenance: doc.provenance,
        ocr_confidence: doc.ocr_confidence,
    });

    Ok(AnalyzeResult {
        success: true,
        candidate,
        ats_score: outcome.score,
        score_breakdown: outcome.breakdown,
        score_category: outcome.category,
        domain,
        skills,
        projects,
        experience,
        education,
        issues: outcome.issues,
        suggestions: outcome.suggestions,
        keywords_analysis: outcome.keywords_analysis,
        parsing_method: doc.provenance,
        ocr_confidence: doc.ocr_confidence,
    })
}
