//! Scoring engine. A pure aggregation over the extractor and classifier
//! outputs plus the formatting signals; running it twice on the same inputs
//! yields the same result.

pub mod feedback;

use crate::analysis::models::{
    AtsIssue, CandidateInfo, DomainInfo, ExperienceSummary, FormattingSignals, KeywordsAnalysis,
    OcrConfidence, ProjectEntry, Provenance, ScoreBreakdown, ScoreCategory, Severity, SkillsData,
    Suggestion,
};
use crate::analysis::sections::Sections;
use crate::patterns::{scorer_keywords, EXOTIC_GLYPHS, SCORER_ACTION_VERBS};

// Weighted-combination shares.
const W_KEYWORD: f64 = 0.20;
const W_SECTION: f64 = 0.20;
const W_FORMATTING: f64 = 0.15;
const W_SKILL: f64 = 0.20;
const W_EXPERIENCE: f64 = 0.15;
const W_PROJECT: f64 = 0.10;

// OCR text is graded leniently: penalties scale down and the final score
// never drops below the floor.
const OCR_PENALTY_FACTOR: f64 = 0.7;
const OCR_SCORE_FLOOR: u32 = 25;

pub struct ScoreInputs<'a> {
    pub raw_text: &'a str,
    pub sections: &'a Sections,
    pub signals: FormattingSignals,
    pub candidate: &'a CandidateInfo,
    pub skills: &'a SkillsData,
    pub domain: &'a DomainInfo,
    pub experience: &'a ExperienceSummary,
    pub projects: &'a [ProjectEntry],
    pub provenance: Provenance,
    pub ocr_confidence: Option<OcrConfidence>,
}

pub struct ScoreOutcome {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub category: ScoreCategory,
    pub issues: Vec<AtsIssue>,
    pub suggestions: Vec<Suggestion>,
    pub keywords_analysis: KeywordsAnalysis,
}

pub fn calculate(inputs: &ScoreInputs<'_>) -> ScoreOutcome {
    let is_ocr = inputs.provenance == Provenance::Ocr;
    let penalty_factor = if is_ocr { OCR_PENALTY_FACTOR } else { 1.0 };

    let breakdown = ScoreBreakdown {
        keyword_relevance: keyword_score(inputs.raw_text, &inputs.domain.primary),
        section_completeness: section_score(inputs.sections, inputs.candidate),
        formatting_score: formatting_score(inputs.signals, inputs.raw_text, is_ocr, penalty_factor),
        skill_relevance: skill_score(inputs.skills),
        experience_clarity: experience_score(inputs.experience),
        project_impact: project_score(inputs.projects),
    };

    let mut score = combine(&breakdown);
    if is_ocr && score < OCR_SCORE_FLOOR {
        score = OCR_SCORE_FLOOR;
    }

    let mut issues = feedback::identify_issues(
        inputs.raw_text,
        inputs.sections,
        inputs.signals,
        inputs.skills,
        inputs.candidate,
    );
    if is_ocr {
        issues.insert(0, ocr_notice(inputs.ocr_confidence));
    }

    let suggestions = feedback::generate_suggestions(
        inputs.raw_text,
        &inputs.domain.primary,
        inputs.skills,
        inputs.sections,
        inputs.projects,
    );

    ScoreOutcome {
        score,
        category: ScoreCategory::for_score(score),
        breakdown,
        issues,
        suggestions,
        keywords_analysis: feedback::analyze_keywords(inputs.raw_text, &inputs.domain.primary),
    }
}

pub fn combine(breakdown: &ScoreBreakdown) -> u32 {
    (breakdown.keyword_relevance as f64 * W_KEYWORD
        + breakdown.section_completeness as f64 * W_SECTION
        + breakdown.formatting_score as f64 * W_FORMATTING
        + breakdown.skill_relevance as f64 * W_SKILL
        + breakdown.experience_clarity as f64 * W_EXPERIENCE
        + breakdown.project_impact as f64 * W_PROJECT) as u32
}

fn ocr_notice(confidence: Option<OcrConfidence>) -> AtsIssue {
    let tier = confidence.map(|c| c.as_str()).unwrap_or("unknown");
    AtsIssue {
        kind: "parsing".into(),
        severity: Severity::Low,
        description: format!(
            "Resume was processed using OCR (scanned document detected). Confidence: {tier}."
        ),
        suggestion: "For best results, upload a text-based PDF or DOCX file rather than a \
                     scanned document."
            .into(),
    }
}

/// 60 points for domain-keyword coverage, 40 for generic action verbs.
fn keyword_score(text: &str, domain: &str) -> u32 {
    let text_lower = text.to_lowercase();
    let keywords = scorer_keywords(domain);

    let found = keywords.iter().filter(|kw| text_lower.contains(*kw)).count();
    let verb_count = SCORER_ACTION_VERBS
        .iter()
        .filter(|v| text_lower.contains(*v))
        .count();

    let keyword_ratio = found as f64 / keywords.len() as f64;
    let verb_ratio = (verb_count as f64 / 5.0).min(1.0);

    ((keyword_ratio * 60.0 + verb_ratio * 40.0) as u32).min(100)
}

fn section_score(sections: &Sections, candidate: &CandidateInfo) -> u32 {
    let mut score = 0;

    for section in crate::patterns::REQUIRED_SECTIONS {
        if sections.get(section).map(|s| s.trim().len() > 50).unwrap_or(false) {
            score += 20;
        }
    }
    if candidate.email.is_some() {
        score += 10;
    }
    if candidate.phone.is_some() {
        score += 10;
    }
    for section in crate::patterns::RECOMMENDED_SECTIONS {
        if sections.get(section).map(|s| s.trim().len() > 20).unwrap_or(false) {
            score += 7;
        }
    }

    score.min(100)
}

fn formatting_score(
    signals: FormattingSignals,
    text: &str,
    is_ocr: bool,
    penalty_factor: f64,
) -> u32 {
    let mut score: i64 = 100;

    if signals.has_tables {
        score -= (15.0 * penalty_factor) as i64;
    }
    if signals.has_images {
        score -= (10.0 * penalty_factor) as i64;
    }

    let min_words = if is_ocr { 150 } else { 200 };
    if signals.word_count < min_words {
        score -= (20.0 * penalty_factor) as i64;
    } else if signals.word_count > 1500 {
        score -= (10.0 * penalty_factor) as i64;
    }

    let bullet_count = text.chars().filter(|c| matches!(c, '•' | '●' | '-')).count();
    let min_bullets = if is_ocr { 3 } else { 5 };
    if bullet_count < min_bullets {
        score -= (10.0 * penalty_factor) as i64;
    } else if bullet_count > 50 {
        score -= (5.0 * penalty_factor) as i64;
    }

    // OCR introduces glyph artifacts, so the exotic-character check only
    // applies to directly extracted text.
    if !is_ocr {
        for glyph in EXOTIC_GLYPHS {
            if text.contains(*glyph) {
                score -= 3;
            }
        }
    }

    score.clamp(0, 100) as u32
}

fn skill_score(skills: &SkillsData) -> u32 {
    let mut score = match skills.total_count {
        n if n >= 15 => 40,
        n if n >= 10 => 30,
        n if n >= 5 => 20,
        _ => 10,
    };

    if !skills.programming_languages.is_empty() {
        score += 15;
    }
    if !skills.frameworks.is_empty() {
        score += 15;
    }
    if !skills.tools.is_empty() {
        score += 10;
    }
    if !skills.databases.is_empty() {
        score += 10;
    }
    if !skills.soft_skills.is_empty() {
        score += 10;
    }

    score.min(100)
}

fn experience_score(experience: &ExperienceSummary) -> u32 {
    if experience.positions.is_empty() {
        return 30;
    }

    let mut score = 30;
    score += match experience.positions.len() {
        n if n >= 3 => 20,
        2 => 15,
        _ => 10,
    };
    score += (experience.overall_quality as f64 * 0.5) as u32;

    score.min(100)
}

fn project_score(projects: &[ProjectEntry]) -> u32 {
    if projects.is_empty() {
        return 40;
    }

    let mut score = 50.0;
    for project in projects.iter().take(5) {
        score += project.score as f64 * 0.1;
    }

    (score as u32).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_with(total: usize) -> SkillsData {
        SkillsData {
            programming_languages: vec!["python".into()],
            total_count: total,
            ..Default::default()
        }
    }

    #[test]
    fn test_keyword_score_bounds() {
        assert_eq!(keyword_score("", "Software / IT"), 0);
        let all = "developed built implemented designed architected optimized deployed \
                   integrated automated tested scalable performance api database cloud agile \
                   achieved created delivered enhanced generated";
        assert_eq!(keyword_score(all, "Software / IT"), 100);
    }

    #[test]
    fn test_section_score_components() {
        let mut sections = Sections::new();
        sections.insert("experience", "x".repeat(60));
        sections.insert("summary", "y".repeat(30));
        let candidate = CandidateInfo {
            email: Some("a@b.io".into()),
            ..Default::default()
        };
        // 20 (experience) + 10 (email) + 7 (summary)
        assert_eq!(section_score(&sections, &candidate), 37);
    }

    #[test]
    fn test_formatting_penalties_scale_under_ocr() {
        let signals = FormattingSignals {
            has_tables: true,
            has_images: true,
            word_count: 100,
            line_count: 10,
        };
        // Standard: 100 - 15 - 10 - 20 - 10 (no bullets) = 45.
        assert_eq!(formatting_score(signals, "", false, 1.0), 45);
        // OCR: 100 - 10 - 7 - 14 - 7 = 62.
        assert_eq!(formatting_score(signals, "", true, 0.7), 62);
    }

    #[test]
    fn test_exotic_glyphs_only_penalized_off_ocr() {
        let signals = FormattingSignals {
            word_count: 500,
            line_count: 40,
            ..Default::default()
        };
        let text = "→ ★ ✓ plus • • • • • bullets";
        let standard = formatting_score(signals, text, false, 1.0);
        let ocr = formatting_score(signals, text, true, 0.7);
        assert_eq!(standard, 100 - 3 * 3);
        assert_eq!(ocr, 100);
    }

    #[test]
    fn test_skill_score_tiers() {
        assert_eq!(skill_score(&SkillsData::default()), 10);
        assert_eq!(skill_score(&skills_with(15)), 55);
        assert_eq!(skill_score(&skills_with(5)), 35);
    }

    #[test]
    fn test_experience_score() {
        assert_eq!(experience_score(&ExperienceSummary::default()), 30);
        let summary = ExperienceSummary {
            positions: vec![Default::default(), Default::default(), Default::default()],
            overall_quality: 80,
            ..Default::default()
        };
        // 30 + 20 + 40
        assert_eq!(experience_score(&summary), 90);
    }

    #[test]
    fn test_project_score() {
        assert_eq!(project_score(&[]), 40);
        let p = ProjectEntry {
            title: "x".into(),
            technologies: vec![],
            description: None,
            impact: None,
            score: 100,
        };
        // 50 + 2 × 10
        assert_eq!(project_score(&[p.clone(), p]), 70);
    }

    #[test]
    fn test_combine_truncates() {
        let breakdown = ScoreBreakdown {
            keyword_relevance: 73,
            section_completeness: 51,
            formatting_score: 77,
            skill_relevance: 55,
            experience_clarity: 61,
            project_impact: 63,
        };
        // 14.6 + 10.2 + 11.55 + 11 + 9.15 + 6.3 = 62.8, truncated.
        assert_eq!(combine(&breakdown), 62);
    }

    #[test]
    fn test_ocr_floor_applies() {
        let sections = Sections::new();
        let candidate = CandidateInfo::default();
        let skills = SkillsData::default();
        let domain = DomainInfo {
            primary: "General".into(),
            confidence: 0.5,
            secondary: None,
            keywords_matched: vec![],
        };
        let experience = ExperienceSummary::default();
        let inputs = ScoreInputs {
            raw_text: "",
            sections: &sections,
            signals: FormattingSignals::default(),
            candidate: &candidate,
            skills: &skills,
            domain: &domain,
            experience: &experience,
            projects: &[],
            provenance: Provenance::Ocr,
            ocr_confidence: Some(OcrConfidence::Low),
        };
        let outcome = calculate(&inputs);
        assert!(outcome.score >= OCR_SCORE_FLOOR);
        assert_eq!(outcome.issues[0].kind, "parsing");
        assert_eq!(outcome.issues[0].severity, Severity::Low);
    }

    #[test]
    fn test_all_scores_in_range() {
        let sections = Sections::new();
        let candidate = CandidateInfo::default();
        let skills = SkillsData::default();
        let domain = DomainInfo {
            primary: "Software / IT".into(),
            confidence: 0.9,
            secondary: None,
            keywords_matched: vec![],
        };
        let experience = ExperienceSummary::default();
        let inputs = ScoreInputs {
            raw_text: "a short resume",
            sections: &sections,
            signals: FormattingSignals::default(),
            candidate: &candidate,
            skills: &skills,
            domain: &domain,
            experience: &experience,
            projects: &[],
            provenance: Provenance::Standard,
            ocr_confidence: None,
        };
        let outcome = calculate(&inputs);
        assert!(outcome.score <= 100);
        for sub in [
            outcome.breakdown.keyword_relevance,
            outcome.breakdown.section_completeness,
            outcome.breakdown.formatting_score,
            outcome.breakdown.skill_relevance,
            outcome.breakdown.experience_clarity,
            outcome.breakdown.project_impact,
        ] {
            assert!(sub <= 100);
        }
    }
}
