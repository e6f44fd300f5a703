//! Section segmenter. Walks the text line by line keeping a current-section
//! cursor; a header line commits the accumulated buffer to the previous
//! section and opens a new one. Text before the first header belongs to no
//! section. A repeated header for the same name overwrites the earlier span.

use std::collections::HashMap;

use crate::patterns::SECTION_HEADERS;

pub type Sections = HashMap<&'static str, String>;

/// Matches a trimmed lowercase line against the header synonym tables.
fn header_for_line(line: &str) -> Option<&'static str> {
    let line_lower = line.to_lowercase();
    let line_lower = line_lower.trim();
    for (section, headers) in SECTION_HEADERS {
        for header in *headers {
            if line_lower == *header
                || line_lower.starts_with(&format!("{header}:"))
                || line_lower.starts_with(&format!("{header} "))
            {
                return Some(section);
            }
        }
    }
    None
}

pub fn segment(text: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<&'static str> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if let Some(section) = header_for_line(line) {
            if let Some(open) = current {
                sections.insert(open, buffer.join("\n"));
            }
            current = Some(section);
            buffer.clear();
        } else if current.is_some() {
            buffer.push(line);
        }
    }
    if let Some(open) = current {
        sections.insert(open, buffer.join("\n"));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_segmentation() {
        let text = "Jane Doe\n\nExperience\nAcme Corp\n• Built things\n\nEducation\nState University";
        let sections = segment(text);
        assert_eq!(
            sections.get("experience").map(String::as_str),
            Some("Acme Corp\n• Built things\n")
        );
        assert_eq!(sections.get("education").map(String::as_str), Some("State University"));
        // The name line precedes any header and lands nowhere.
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_header_variants() {
        assert_eq!(header_for_line("WORK EXPERIENCE"), Some("experience"));
        assert_eq!(header_for_line("Skills: Python, SQL"), Some("skills"));
        assert_eq!(header_for_line("Professional Summary"), Some("summary"));
        assert_eq!(header_for_line("  Tech Stack  "), Some("skills"));
        assert_eq!(header_for_line("Acme Corporation"), None);
        // "experienced" does not equal or prefix-with-separator any synonym.
        assert_eq!(header_for_line("experienced"), None);
    }

    #[test]
    fn test_repeated_header_last_wins() {
        let text = "Experience\nOld Corp\nExperience\nNew Corp";
        let sections = segment(text);
        assert_eq!(sections.get("experience").map(String::as_str), Some("New Corp"));
    }

    #[test]
    fn test_empty_text_yields_no_sections() {
        assert!(segment("").is_empty());
    }
}
