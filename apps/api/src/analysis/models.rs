//! Analysis data model. Everything here serializes into the response body of
//! the analyze endpoint; the pipeline itself only ever constructs these types,
//! it never mutates a finished result.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Input side
// ────────────────────────────────────────────────────────────────────────────

/// How the raw text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Standard,
    Ocr,
    OcrUnavailable,
}

/// Recognition confidence tier, only meaningful when provenance is `ocr`
/// (or `ocr_unavailable`, where it is always `low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrConfidence {
    Low,
    Medium,
    High,
}

impl OcrConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            OcrConfidence::Low => "low",
            OcrConfidence::Medium => "medium",
            OcrConfidence::High => "high",
        }
    }
}

/// Structure signals computed by the document extraction layer. The pipeline
/// consumes the booleans as given and never re-inspects file bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingSignals {
    pub has_tables: bool,
    pub has_images: bool,
    pub word_count: usize,
    pub line_count: usize,
}

/// Immutable pipeline input: one of these is built per request and everything
/// downstream is a pure function of it.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub text: String,
    pub signals: FormattingSignals,
    pub provenance: Provenance,
    pub ocr_confidence: Option<OcrConfidence>,
}

// ────────────────────────────────────────────────────────────────────────────
// Extracted entities
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
    pub strength: Strength,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsData {
    pub programming_languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
    pub databases: Vec<String>,
    pub soft_skills: Vec<String>,
    /// Kept for schema compatibility; nothing populates it.
    pub other: Vec<String>,
    pub total_count: usize,
    pub skill_categories: Vec<SkillCategory>,
}

impl SkillsData {
    /// Lowercased union of the technical categories plus soft skills, used by
    /// skill-gap suggestions.
    pub fn all_lowercase(&self) -> std::collections::HashSet<String> {
        self.technical_lowercase()
            .into_iter()
            .chain(self.soft_skills.iter().map(|s| s.to_lowercase()))
            .collect()
    }

    /// Lowercased union of the four technical categories only, used by the
    /// domain classifier's skill-weight gate.
    pub fn technical_lowercase(&self) -> std::collections::HashSet<String> {
        self.programming_languages
            .iter()
            .chain(&self.frameworks)
            .chain(&self.tools)
            .chain(&self.databases)
            .map(|s| s.to_lowercase())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub technologies: Vec<String>,
    pub description: Option<String>,
    pub impact: Option<String>,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub bullet_quality: u32,
    pub has_metrics: bool,
    pub action_verbs_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    pub total_years: f64,
    pub total_months: u32,
    pub positions: Vec<ExperienceEntry>,
    pub overall_quality: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub primary: String,
    pub confidence: f64,
    pub secondary: Option<String>,
    pub keywords_matched: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_relevance: u32,
    pub section_completeness: u32,
    pub formatting_score: u32,
    pub skill_relevance: u32,
    pub experience_clarity: u32,
    pub project_impact: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Poor,
}

impl ScoreCategory {
    /// Pure step function over the final score.
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            ScoreCategory::Excellent
        } else if score >= 60 {
            ScoreCategory::Good
        } else if score >= 40 {
            ScoreCategory::NeedsImprovement
        } else {
            ScoreCategory::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsIssue {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub title: String,
    pub description: String,
    pub priority: Severity,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordsAnalysis {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub recommended: Vec<String>,
}

/// The full analysis result, serialized verbatim as the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub success: bool,
    pub candidate: CandidateInfo,
    pub ats_score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub score_category: ScoreCategory,
    pub domain: DomainInfo,
    pub skills: SkillsData,
    pub projects: Vec<ProjectEntry>,
    pub experience: ExperienceSummary,
    pub education: Vec<EducationEntry>,
    pub issues: Vec<AtsIssue>,
    pub suggestions: Vec<Suggestion>,
    pub keywords_analysis: KeywordsAnalysis,
    pub parsing_method: Provenance,
    pub ocr_confidence: Option<OcrConfidence>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_breakpoints() {
        assert_eq!(ScoreCategory::for_score(80), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::for_score(79), ScoreCategory::Good);
        assert_eq!(ScoreCategory::for_score(60), ScoreCategory::Good);
        assert_eq!(ScoreCategory::for_score(59), ScoreCategory::NeedsImprovement);
        assert_eq!(ScoreCategory::for_score(40), ScoreCategory::NeedsImprovement);
        assert_eq!(ScoreCategory::for_score(39), ScoreCategory::Poor);
        assert_eq!(ScoreCategory::for_score(0), ScoreCategory::Poor);
        assert_eq!(ScoreCategory::for_score(100), ScoreCategory::Excellent);
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(
            serde_json::to_string(&Provenance::OcrUnavailable).unwrap(),
            "\"ocr_unavailable\""
        );
        assert_eq!(serde_json::to_string(&OcrConfidence::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&ScoreCategory::NeedsImprovement).unwrap(),
            "\"Needs Improvement\""
        );
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Strength::Moderate).unwrap(), "\"Moderate\"");
    }

    #[test]
    fn test_issue_type_field_name() {
        let issue = AtsIssue {
            kind: "formatting".into(),
            severity: Severity::High,
            description: "Tables detected in resume".into(),
            suggestion: "Replace tables with simple bullet points.".into(),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "formatting");
    }
}
