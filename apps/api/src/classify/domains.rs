//! Domain classification. Every profile is scored against the same text
//! (keywords weigh 1, titles 3, skills 2); the skill weight only counts
//! skills the skill matcher already surfaced, so domain accuracy rides on
//! dictionary completeness.

use crate::analysis::models::{DomainInfo, SkillsData};
use crate::patterns::domains::{DomainProfile, DOMAIN_PROFILES};

pub fn classify(text: &str, skills: &SkillsData) -> DomainInfo {
    let text_lower = text.to_lowercase();
    let user_skills = skills.technical_lowercase();

    let mut scored: Vec<(usize, u32, Vec<String>)> = DOMAIN_PROFILES
        .iter()
        .enumerate()
        .map(|(i, profile)| {
            let (score, matched) = score_profile(&text_lower, profile, &user_skills);
            (i, score, matched)
        })
        .collect();

    // Stable sort keeps profile order on ties.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let total: u32 = scored.iter().map(|(_, s, _)| s).sum();
    let (primary_idx, primary_score, primary_matched) = {
        let first = &scored[0];
        (first.0, first.1, first.2.clone())
    };
    let (secondary_idx, secondary_score) = (scored[1].0, scored[1].1);

    let mut confidence = if total > 0 {
        primary_score as f64 / total as f64
    } else {
        0.5
    };
    // Discount ambiguous calls where the runner-up is within 20%.
    if secondary_score > 0
        && (primary_score as f64 - secondary_score as f64) < primary_score as f64 * 0.2
    {
        confidence *= 0.8;
    }

    let secondary = if secondary_score as f64 > primary_score as f64 * 0.5 {
        Some(DOMAIN_PROFILES[secondary_idx].name.to_string())
    } else {
        None
    };

    DomainInfo {
        primary: DOMAIN_PROFILES[primary_idx].name.to_string(),
        confidence: (confidence * 100.0).round() / 100.0,
        secondary,
        keywords_matched: primary_matched.into_iter().take(10).collect(),
    }
}

fn score_profile(
    text: &str,
    profile: &DomainProfile,
    user_skills: &std::collections::HashSet<String>,
) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut matched = Vec::new();

    for keyword in profile.keywords {
        if text.contains(keyword) {
            score += 1;
            matched.push((*keyword).to_string());
        }
    }
    for title in profile.titles {
        if text.contains(title) {
            score += 3;
            matched.push((*title).to_string());
        }
    }
    for skill in profile.skills {
        if user_skills.contains(&skill.to_lowercase()) {
            score += 2;
            matched.push((*skill).to_string());
        }
    }

    (score, matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::skills;

    #[test]
    fn test_software_resume_classifies_software() {
        let text = "Software engineer who developed scalable backend APIs and cloud \
                    deployments using Python, Docker and Kubernetes in an agile team.";
        let extracted = skills::extract(text);
        let domain = classify(text, &extracted);
        assert_eq!(domain.primary, "Software / IT");
        assert!(domain.confidence > 0.0 && domain.confidence <= 1.0);
        assert!(!domain.keywords_matched.is_empty());
        assert!(domain.keywords_matched.len() <= 10);
    }

    #[test]
    fn test_empty_text_neutral_confidence() {
        let domain = classify("", &SkillsData::default());
        assert_eq!(domain.confidence, 0.5);
        assert!(domain.secondary.is_none());
        assert!(domain.keywords_matched.is_empty());
    }

    #[test]
    fn test_secondary_needs_more_than_half_primary() {
        // A heavily marketing-flavored text with a faint finance echo.
        let text = "marketing campaign engagement conversion brand content strategy \
                    audience growth seo advertising social media manager";
        let domain = classify(text, &skills::extract(text));
        assert_eq!(domain.primary, "Marketing");
        if let Some(secondary) = &domain.secondary {
            assert_ne!(secondary, &domain.primary);
        }
    }

    #[test]
    fn test_skill_weight_gated_on_extracted_skills() {
        // "docker" appears as an extracted skill, so Software / IT gets the
        // +2 skill weight and lists it among matched terms.
        let text = "I deploy with docker every day as a developer";
        let extracted = skills::extract(text);
        assert!(extracted.tools.contains(&"docker".to_string()));
        let domain = classify(text, &extracted);
        assert!(domain.keywords_matched.iter().any(|k| k == "docker"));
    }
}
