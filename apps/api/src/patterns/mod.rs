//! Pattern library — compiled regexes and fixed keyword tables shared by the
//! whole analysis pipeline. Loaded once, never mutated at runtime.

pub mod domains;
pub mod skills;

use once_cell::sync::Lazy;
use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Contact patterns
// ────────────────────────────────────────────────────────────────────────────

pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}|\+\d{1,3}[-.\s]?\d{6,14}")
        .unwrap()
});

pub static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:linkedin\.com/in/|linkedin:?\s*)([a-zA-Z0-9-]+)").unwrap());

pub static GITHUB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:github\.com/|github:?\s*)([a-zA-Z0-9-]+)").unwrap());

/// Ordered label / city-state / city-state-country probes. First hit wins.
pub static LOCATION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:Location|Address|Based in|City)[:\s]+([A-Za-z\s,]+)").unwrap(),
        Regex::new(r"(?i)([A-Za-z]+,\s*[A-Z]{2})\s*\d{5}").unwrap(),
        Regex::new(r"(?i)([A-Za-z]+,\s*[A-Za-z\s]+,\s*[A-Za-z]+)").unwrap(),
    ]
});

// ────────────────────────────────────────────────────────────────────────────
// Section headers
// ────────────────────────────────────────────────────────────────────────────

/// Header synonyms per canonical section name. A line opens a section when its
/// trimmed lowercase form equals a synonym or starts with `synonym:` /
/// `synonym `.
pub const SECTION_HEADERS: &[(&str, &[&str])] = &[
    (
        "experience",
        &[
            "experience",
            "work experience",
            "employment",
            "work history",
            "professional experience",
            "career history",
        ],
    ),
    (
        "education",
        &[
            "education",
            "academic",
            "qualification",
            "academics",
            "educational background",
        ],
    ),
    (
        "skills",
        &[
            "skills",
            "technical skills",
            "competencies",
            "technologies",
            "tech stack",
            "expertise",
        ],
    ),
    (
        "projects",
        &[
            "projects",
            "personal projects",
            "academic projects",
            "key projects",
            "portfolio",
        ],
    ),
    (
        "certifications",
        &["certifications", "certificates", "credentials", "licenses"],
    ),
    (
        "summary",
        &[
            "summary",
            "profile",
            "objective",
            "about",
            "professional summary",
            "career objective",
        ],
    ),
];

pub const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills"];
pub const RECOMMENDED_SECTIONS: &[&str] = &["summary", "projects", "certifications"];

// ────────────────────────────────────────────────────────────────────────────
// Experience patterns
// ────────────────────────────────────────────────────────────────────────────

/// Verbs that signal an achievement-style bullet.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "administered",
    "analyzed",
    "architected",
    "automated",
    "built",
    "collaborated",
    "configured",
    "created",
    "delivered",
    "designed",
    "developed",
    "drove",
    "enhanced",
    "established",
    "executed",
    "implemented",
    "improved",
    "increased",
    "integrated",
    "launched",
    "led",
    "managed",
    "mentored",
    "migrated",
    "optimized",
    "orchestrated",
    "oversaw",
    "pioneered",
    "planned",
    "reduced",
    "refactored",
    "resolved",
    "scaled",
    "secured",
    "spearheaded",
    "streamlined",
    "supervised",
    "transformed",
    "upgraded",
];

pub const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "designer",
    "lead",
    "director",
    "intern",
    "associate",
    "specialist",
    "consultant",
];

/// A month-year token anywhere in a line marks a new experience entry.
pub static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s*\d{4}")
        .unwrap()
});

/// A full start–end range (or start–Present) makes the line a `duration`.
pub static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s*\d{4})\s*[-–—to]+\s*(?:(Present|Current)|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s*\d{4})",
    )
    .unwrap()
});

/// Captures the 4-digit year of each month-year token in a duration string.
pub static DATE_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s*(\d{4})")
        .unwrap()
});

/// Quantified-result signal inside a bullet (matched against lowercase text).
pub static METRIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\$\d+|increased|decreased|reduced|improved by").unwrap());

pub const BULLET_GLYPHS: &[char] = &['•', '-', '*', '●', '○'];

// ────────────────────────────────────────────────────────────────────────────
// Project patterns
// ────────────────────────────────────────────────────────────────────────────

pub static TECH_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:Tech|Technologies|Built with|Stack)[:\s]+(.+)").unwrap());

pub const IMPACT_WORDS: &[&str] = &["improved", "increased", "reduced", "users", "revenue"];

// ────────────────────────────────────────────────────────────────────────────
// Education patterns
// ────────────────────────────────────────────────────────────────────────────

pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "b.s.",
    "b.a.",
    "m.s.",
    "m.a.",
    "mba",
    "b.tech",
    "m.tech",
    "b.e.",
    "m.e.",
    "diploma",
    "associate",
];

pub static EDU_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

pub static GPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:GPA|CGPA)[:\s]*(\d+\.?\d*)").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// OCR cleanup patterns
// ────────────────────────────────────────────────────────────────────────────

pub static PAGE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:Page\s*)?\d+\s*(?:of\s*\d+)?\s*$").unwrap());

pub static BOILERPLATE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)^\s*confidential\s*$").unwrap(),
        Regex::new(r"(?i)^\s*resume\s*$").unwrap(),
        Regex::new(r"(?i)^\s*curriculum\s*vitae\s*$").unwrap(),
        Regex::new(r"(?i)^\s*cv\s*$").unwrap(),
    ]
});

pub static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
pub static HSPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Vocabulary whose presence raises OCR confidence.
pub const RESUME_VOCAB: &[&str] = &[
    "experience",
    "education",
    "skills",
    "python",
    "java",
    "javascript",
    "developer",
    "engineer",
    "manager",
    "analyst",
    "project",
    "team",
    "company",
    "university",
    "bachelor",
    "master",
    "degree",
    "certified",
    "professional",
];

// ────────────────────────────────────────────────────────────────────────────
// Scoring tables
// ────────────────────────────────────────────────────────────────────────────

/// Keyword lists used by the keyword-relevance sub-score. Domains without a
/// dedicated list fall back to `General` — including `Data Science / AI` and
/// `Finance / Banking`, whose classifier labels do not match these keys.
pub const SCORER_DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Software / IT",
        &[
            "developed",
            "built",
            "implemented",
            "designed",
            "architected",
            "optimized",
            "deployed",
            "integrated",
            "automated",
            "tested",
            "scalable",
            "performance",
            "api",
            "database",
            "cloud",
            "agile",
        ],
    ),
    (
        "Data / AI",
        &[
            "analyzed",
            "modeled",
            "predicted",
            "visualized",
            "processed",
            "accuracy",
            "precision",
            "recall",
            "f1",
            "auc",
            "training",
            "dataset",
            "feature",
            "pipeline",
            "insight",
            "recommendation",
        ],
    ),
    (
        "Marketing",
        &[
            "campaign",
            "engagement",
            "conversion",
            "roi",
            "reach",
            "impression",
            "click-through",
            "brand",
            "content",
            "strategy",
            "audience",
            "growth",
            "optimization",
            "analytics",
            "social",
        ],
    ),
    (
        "Finance",
        &[
            "analyzed",
            "forecasted",
            "modeled",
            "valued",
            "audited",
            "budgeted",
            "reported",
            "compliance",
            "risk",
            "revenue",
            "cost reduction",
            "profit",
            "investment",
            "portfolio",
            "reconciled",
        ],
    ),
    (
        "General",
        &[
            "managed",
            "led",
            "achieved",
            "improved",
            "increased",
            "reduced",
            "delivered",
            "collaborated",
            "created",
            "developed",
            "implemented",
            "designed",
            "analyzed",
            "optimized",
            "trained",
        ],
    ),
];

/// Looks up a scorer keyword list, falling back to `General`.
pub fn scorer_keywords(domain: &str) -> &'static [&'static str] {
    SCORER_DOMAIN_KEYWORDS
        .iter()
        .find(|(name, _)| *name == domain)
        .or_else(|| SCORER_DOMAIN_KEYWORDS.iter().find(|(name, _)| *name == "General"))
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

/// Ten generic verbs checked by the keyword-relevance sub-score.
pub const SCORER_ACTION_VERBS: &[&str] = &[
    "achieved",
    "built",
    "created",
    "delivered",
    "enhanced",
    "generated",
    "improved",
    "launched",
    "managed",
    "optimized",
];

pub const GENERIC_PHRASES: &[&str] = &[
    "responsible for",
    "duties included",
    "helped with",
    "worked on",
    "assisted in",
];

pub const WEAK_VERBS: &[&str] = &["helped", "worked", "assisted", "was responsible"];

pub const EXOTIC_GLYPHS: &[char] = &['→', '★', '☆', '✓', '✔', '✗', '❖', '◆'];

pub static QUANTIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+%|\$[\d,]+|\d+\s*(users|customers|clients|employees|projects)").unwrap()
});

pub static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+%").unwrap());

/// In-demand skills suggested when absent. Keyed by a subset of domains;
/// `Software / IT` is the fallback.
pub const IN_DEMAND_SKILLS: &[(&str, &[&str])] = &[
    (
        "Software / IT",
        &["Python", "JavaScript", "React", "AWS", "Docker", "Git", "SQL", "REST API"],
    ),
    (
        "Data / AI",
        &["Python", "SQL", "TensorFlow", "Pandas", "Machine Learning", "Statistics", "Tableau"],
    ),
    (
        "Marketing",
        &["Google Analytics", "SEO", "Content Strategy", "HubSpot", "Social Media Marketing"],
    ),
    (
        "Finance",
        &["Excel", "Financial Modeling", "SQL", "Power BI", "Risk Analysis"],
    ),
    (
        "Design",
        &["Figma", "Adobe XD", "User Research", "Prototyping", "Design Systems"],
    ),
    (
        "HR",
        &["Workday", "ATS", "Recruiting", "Employee Relations", "HRIS"],
    ),
    (
        "Sales",
        &["Salesforce", "CRM", "Pipeline Management", "Negotiation", "Cold Calling"],
    ),
];

pub fn in_demand_skills(domain: &str) -> &'static [&'static str] {
    IN_DEMAND_SKILLS
        .iter()
        .find(|(name, _)| *name == domain)
        .or_else(|| IN_DEMAND_SKILLS.iter().find(|(name, _)| *name == "Software / IT"))
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_matches_plain_address() {
        assert!(EMAIL_RE.is_match("reach me at jane.doe+work@example.co.uk today"));
        assert!(!EMAIL_RE.is_match("no address here"));
    }

    #[test]
    fn test_phone_pattern_matches_common_formats() {
        for sample in ["(555) 123-4567", "555-123-4567", "+1 555.123.4567", "+44 2079460000"] {
            assert!(PHONE_RE.is_match(sample), "should match {sample}");
        }
    }

    #[test]
    fn test_date_range_matches_present() {
        assert!(DATE_RANGE_RE.is_match("Jan 2020 - Present"));
        assert!(DATE_RANGE_RE.is_match("March 2018 – Dec 2019"));
        assert!(!DATE_RANGE_RE.is_match("Jan 2020"));
    }

    #[test]
    fn test_page_number_lines() {
        assert!(PAGE_NUMBER_RE.is_match("  Page 2 of 3 "));
        assert!(PAGE_NUMBER_RE.is_match("2"));
        assert!(!PAGE_NUMBER_RE.is_match("Chapter 2 overview"));
    }

    #[test]
    fn test_scorer_keywords_falls_back_to_general() {
        // The classifier label differs from the scorer table key on purpose.
        assert_eq!(scorer_keywords("Data Science / AI"), scorer_keywords("General"));
        assert_ne!(scorer_keywords("Software / IT"), scorer_keywords("General"));
    }

    #[test]
    fn test_quantified_pattern() {
        assert!(QUANTIFIED_RE.is_match("grew revenue by 25%"));
        assert!(QUANTIFIED_RE.is_match("saved $50,000"));
        assert!(QUANTIFIED_RE.is_match("supported 300 users"));
        assert!(!QUANTIFIED_RE.is_match("grew revenue substantially"));
    }
}
