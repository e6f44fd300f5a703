//! Project extraction. A title-like line (non-bullet, non-empty, and not a
//! technology label or metric continuation) closes the previous entry once
//! that entry spans more than one line.

use crate::analysis::models::ProjectEntry;
use crate::patterns::{IMPACT_WORDS, METRIC_RE, TECH_LABEL_RE};

const MAX_PROJECTS: usize = 5;
const SPLIT_GLYPHS: &[char] = &['•', '-', '*', '●'];

pub fn extract(full_text: &str, projects_section: Option<&str>) -> Vec<ProjectEntry> {
    let text = match projects_section {
        Some(s) if !s.is_empty() => s,
        _ => full_text,
    };

    split_entries(text)
        .into_iter()
        .take(MAX_PROJECTS)
        .filter_map(|entry| parse_entry(&entry))
        .collect()
}

/// Technology labels and quantified-result lines describe the current
/// project; they never open a new one.
fn is_continuation(line: &str) -> bool {
    TECH_LABEL_RE.is_match(line) || METRIC_RE.is_match(&line.to_lowercase())
}

fn split_entries(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let stripped = line.trim();
        if !stripped.is_empty() && !stripped.starts_with(SPLIT_GLYPHS) && !is_continuation(stripped)
        {
            if current.len() > 1 {
                entries.push(current.join("\n"));
                current.clear();
            }
        }
        current.push(line);
    }
    if !current.is_empty() {
        entries.push(current.join("\n"));
    }

    entries
}

fn parse_entry(entry: &str) -> Option<ProjectEntry> {
    let mut title: Option<String> = None;
    let mut technologies: Vec<String> = Vec::new();
    let mut description: Vec<&str> = Vec::new();

    for line in entry.trim().split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if title.is_none() {
            let cleaned = line.trim_start_matches(|c: char| SPLIT_GLYPHS.contains(&c)).trim();
            if !cleaned.is_empty() {
                title = Some(cleaned.to_string());
            }
            continue;
        }
        if let Some(caps) = TECH_LABEL_RE.captures(line) {
            technologies.extend(caps[1].split(',').map(|t| t.trim().to_string()));
        } else {
            description.push(line);
        }
    }

    let title = title?;

    let mut score: u32 = 50;
    if !technologies.is_empty() {
        score += 20;
    }
    if !description.is_empty() {
        score += 15;
        let desc_lower = description.join(" ").to_lowercase();
        if IMPACT_WORDS.iter().any(|w| desc_lower.contains(w)) {
            score += 15;
        }
    }

    Some(ProjectEntry {
        title,
        technologies,
        description: if description.is_empty() {
            None
        } else {
            Some(description.join("\n"))
        },
        impact: None,
        score: score.min(100),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry_with_tech_and_impact() {
        let section = "E-commerce Platform\nTech: React, Node.js\nIncreased conversion by 20%";
        let projects = extract("", Some(section));
        assert_eq!(projects.len(), 1);
        let p = &projects[0];
        assert_eq!(p.title, "E-commerce Platform");
        assert_eq!(p.technologies, vec!["React", "Node.js"]);
        assert_eq!(p.description.as_deref(), Some("Increased conversion by 20%"));
        assert_eq!(p.score, 100);
    }

    #[test]
    fn test_multiple_entries() {
        let section = "\
Chat Server
• Wrote a websocket fanout layer
Technologies: Go, Redis
Weather Dashboard
• Plots hourly forecasts";
        let projects = extract("", Some(section));
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Chat Server");
        assert_eq!(projects[0].technologies, vec!["Go", "Redis"]);
        assert_eq!(projects[1].title, "Weather Dashboard");
        // 50 base + 15 description, no tech line, no impact word.
        assert_eq!(projects[1].score, 65);
    }

    #[test]
    fn test_score_components() {
        let bare = extract("", Some("Lone Title"));
        assert_eq!(bare[0].score, 50);

        let with_desc = extract("", Some("Tool\n• parses logs quickly"));
        assert_eq!(with_desc[0].score, 65);
    }

    #[test]
    fn test_untitled_entries_dropped() {
        assert!(extract("", Some("")).is_empty());
        assert!(extract("\n\n", None).is_empty());
    }
}
