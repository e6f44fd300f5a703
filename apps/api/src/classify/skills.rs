//! Skill matching against the five category dictionaries. Matching is
//! word-boundary anchored so single-letter languages never fire inside
//! ordinary words.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{SkillCategory, SkillsData, Strength};
use crate::patterns::skills::LEXICONS;

/// One compiled matcher per dictionary entry, aligned with `LEXICONS`.
static MATCHERS: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
    LEXICONS
        .iter()
        .map(|lexicon| {
            lexicon
                .entries
                .iter()
                .map(|entry| {
                    Regex::new(&format!(r"\b{}\b", regex::escape(entry))).unwrap()
                })
                .collect()
        })
        .collect()
});

pub fn extract(text: &str) -> SkillsData {
    let text_lower = text.to_lowercase();

    let mut per_category: Vec<Vec<String>> = Vec::with_capacity(LEXICONS.len());
    for (lexicon, matchers) in LEXICONS.iter().zip(MATCHERS.iter()) {
        let mut found: Vec<String> = Vec::new();
        for (entry, matcher) in lexicon.entries.iter().zip(matchers) {
            if matcher.is_match(&text_lower) && !found.iter().any(|f| f == entry) {
                found.push((*entry).to_string());
            }
        }
        found.sort();
        per_category.push(found);
    }

    let total_count = per_category.iter().map(Vec::len).sum();

    let skill_categories = LEXICONS
        .iter()
        .zip(per_category.iter())
        .filter(|(_, found)| !found.is_empty())
        .map(|(lexicon, found)| SkillCategory {
            name: lexicon.display.to_string(),
            skills: found.clone(),
            strength: strength_for(found.len(), lexicon.strong, lexicon.moderate),
        })
        .collect();

    let mut data = SkillsData {
        total_count,
        skill_categories,
        ..Default::default()
    };
    for (lexicon, found) in LEXICONS.iter().zip(per_category) {
        match lexicon.key {
            "programming_languages" => data.programming_languages = found,
            "frameworks" => data.frameworks = found,
            "tools" => data.tools = found,
            "databases" => data.databases = found,
            "soft_skills" => data.soft_skills = found,
            _ => data.other = found,
        }
    }
    data
}

fn strength_for(count: usize, strong: usize, moderate: usize) -> Strength {
    if count >= strong {
        Strength::Strong
    } else if count >= moderate {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}
