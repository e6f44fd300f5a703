//! Issue checklist, improvement suggestions, and keyword gap analysis.
//! Issues follow a fixed evaluation order; any subset may fire.

use crate::analysis::models::{
    AtsIssue, CandidateInfo, FormattingSignals, KeywordsAnalysis, ProjectEntry, Severity,
    SkillsData, Suggestion,
};
use crate::analysis::sections::Sections;
use crate::patterns::{
    in_demand_skills, scorer_keywords, GENERIC_PHRASES, PERCENT_RE, QUANTIFIED_RE, WEAK_VERBS,
};

fn issue(kind: &str, severity: Severity, description: &str, suggestion: &str) -> AtsIssue {
    AtsIssue {
        kind: kind.into(),
        severity,
        description: description.into(),
        suggestion: suggestion.into(),
    }
}

pub fn identify_issues(
    text: &str,
    sections: &Sections,
    signals: FormattingSignals,
    skills: &SkillsData,
    candidate: &CandidateInfo,
) -> Vec<AtsIssue> {
    let mut issues = Vec::new();

    if signals.has_tables {
        issues.push(issue(
            "formatting",
            Severity::High,
            "Tables detected in resume",
            "Replace tables with simple bullet points. ATS systems often cannot parse table \
             content correctly.",
        ));
    }
    if signals.has_images {
        issues.push(issue(
            "formatting",
            Severity::Medium,
            "Images or graphics detected",
            "Remove images, logos, and icons. Use text-only formatting for better ATS \
             compatibility.",
        ));
    }

    if candidate.email.is_none() {
        issues.push(issue(
            "contact",
            Severity::High,
            "Email address not detected",
            "Add a clearly formatted email address at the top of your resume.",
        ));
    }
    if candidate.phone.is_none() {
        issues.push(issue(
            "contact",
            Severity::Medium,
            "Phone number not detected",
            "Add a phone number in standard format (e.g., (555) 123-4567).",
        ));
    }

    if !sections.contains_key("experience") {
        issues.push(issue(
            "section",
            Severity::High,
            "Work Experience section not detected",
            "Add a clearly labeled \"Experience\" or \"Work Experience\" section header.",
        ));
    }
    if !sections.contains_key("education") {
        issues.push(issue(
            "section",
            Severity::Medium,
            "Education section not detected",
            "Add a clearly labeled \"Education\" section header.",
        ));
    }
    if !sections.contains_key("skills") {
        issues.push(issue(
            "section",
            Severity::Medium,
            "Skills section not detected",
            "Add a dedicated \"Skills\" section to highlight your technical and soft skills.",
        ));
    }

    if skills.total_count < 5 {
        issues.push(issue(
            "skills",
            Severity::Medium,
            "Limited skills detected",
            "Add more relevant skills. Include programming languages, tools, and soft skills.",
        ));
    }

    let text_lower = text.to_lowercase();
    if text.split_whitespace().count() < 200 {
        issues.push(issue(
            "content",
            Severity::High,
            "Resume appears too short",
            "Add more detail about your experience, projects, and achievements.",
        ));
    }

    let generic_count = GENERIC_PHRASES.iter().filter(|p| text_lower.contains(*p)).count();
    if generic_count >= 3 {
        issues.push(issue(
            "content",
            Severity::Medium,
            "Generic job descriptions detected",
            "Replace generic phrases like \"responsible for\" with action verbs like \
             \"developed\", \"led\", or \"implemented\".",
        ));
    }

    if !QUANTIFIED_RE.is_match(text) {
        issues.push(issue(
            "content",
            Severity::Medium,
            "No quantifiable achievements detected",
            "Add metrics and numbers to demonstrate impact (e.g., \"Increased sales by 25%\", \
             \"Managed team of 5\").",
        ));
    }

    issues
}

pub fn generate_suggestions(
    text: &str,
    domain: &str,
    skills: &SkillsData,
    sections: &Sections,
    projects: &[ProjectEntry],
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let text_lower = text.to_lowercase();

    let current = skills.all_lowercase();
    let missing_skills: Vec<String> = in_demand_skills(domain)
        .iter()
        .filter(|s| !current.contains(&s.to_lowercase()))
        .map(|s| (*s).to_string())
        .collect();
    if !missing_skills.is_empty() {
        suggestions.push(Suggestion {
            category: "Skills".into(),
            title: "Add in-demand skills".into(),
            description: format!(
                "Consider adding these high-demand skills for {domain} roles:"
            ),
            priority: Severity::High,
            examples: missing_skills.into_iter().take(5).collect(),
        });
    }

    if WEAK_VERBS.iter().any(|v| text_lower.contains(v)) {
        suggestions.push(Suggestion {
            category: "Content".into(),
            title: "Use stronger action verbs".into(),
            description: "Replace weak verbs with powerful action verbs to make your \
                          achievements stand out."
                .into(),
            priority: Severity::High,
            examples: vec![
                "Instead of \"helped develop\", use \"developed\"".into(),
                "Instead of \"worked on\", use \"led\" or \"implemented\"".into(),
                "Instead of \"was responsible for\", use \"managed\" or \"oversaw\"".into(),
            ],
        });
    }

    if !PERCENT_RE.is_match(text) {
        suggestions.push(Suggestion {
            category: "Impact".into(),
            title: "Add quantifiable achievements".into(),
            description: "Include specific metrics and numbers to demonstrate your impact."
                .into(),
            priority: Severity::High,
            examples: vec![
                "Increased efficiency by 40%".into(),
                "Reduced costs by $50,000 annually".into(),
                "Managed team of 8 engineers".into(),
                "Delivered 15 projects on time".into(),
            ],
        });
    }

    if !sections.contains_key("summary") {
        suggestions.push(Suggestion {
            category: "Structure".into(),
            title: "Add a professional summary".into(),
            description: "A 2-3 sentence summary at the top helps recruiters quickly \
                          understand your value proposition."
                .into(),
            priority: Severity::Medium,
            examples: vec![format!(
                "Results-driven {domain} professional with X years of experience..."
            )],
        });
    }

    if projects.len() < 2 {
        suggestions.push(Suggestion {
            category: "Projects".into(),
            title: "Highlight more projects".into(),
            description: "Adding 2-3 relevant projects can significantly strengthen your \
                          resume."
                .into(),
            priority: Severity::Medium,
            examples: vec!["Include project name, technologies used, and measurable impact".into()],
        });
    }

    let missing_keywords: Vec<String> = scorer_keywords(domain)
        .iter()
        .filter(|kw| !text_lower.contains(*kw))
        .take(5)
        .map(|kw| (*kw).to_string())
        .collect();
    if !missing_keywords.is_empty() {
        suggestions.push(Suggestion {
            category: "Keywords".into(),
            title: "Add industry keywords".into(),
            description: format!(
                "These keywords are commonly used in {domain} job descriptions:"
            ),
            priority: Severity::Medium,
            examples: missing_keywords,
        });
    }

    suggestions
}

pub fn analyze_keywords(text: &str, domain: &str) -> KeywordsAnalysis {
    let text_lower = text.to_lowercase();
    let domain_keywords = scorer_keywords(domain);

    let found: Vec<String> = domain_keywords
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .map(|kw| (*kw).to_string())
        .collect();
    let missing: Vec<String> = domain_keywords
        .iter()
        .filter(|kw| !text_lower.contains(*kw))
        .map(|kw| (*kw).to_string())
        .collect();

    // Generic keywords worth weaving in, deduplicated against the missing
    // list (not the found list).
    let recommended: Vec<String> = scorer_keywords("General")
        .iter()
        .filter(|kw| !text_lower.contains(*kw) && !missing.iter().any(|m| m == *kw))
        .take(5)
        .map(|kw| (*kw).to_string())
        .collect();

    KeywordsAnalysis {
        found,
        missing: missing.into_iter().take(10).collect(),
        recommended,
    }
}
