//! Education extraction. A degree-keyword line opens a record (flushing any
//! open one) and is kept verbatim as the degree; the year and GPA are read
//! off the degree line itself and any following lines, and the first later
//! non-degree line becomes the institution.

use crate::analysis::models::EducationEntry;
use crate::patterns::{DEGREE_KEYWORDS, EDU_YEAR_RE, GPA_RE};

const MAX_ENTRIES: usize = 3;

pub fn extract(full_text: &str, education_section: Option<&str>) -> Vec<EducationEntry> {
    let text = match education_section {
        Some(s) if !s.is_empty() => s,
        _ => full_text,
    };

    let mut entries: Vec<EducationEntry> = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line_lower = trimmed.to_lowercase();
        let is_degree_line = DEGREE_KEYWORDS.iter().any(|kw| line_lower.contains(kw));

        if is_degree_line {
            if let Some(finished) = current.take() {
                entries.push(finished);
            }
            let mut record = EducationEntry {
                degree: Some(trimmed.to_string()),
                ..Default::default()
            };
            scan_year_and_gpa(trimmed, &mut record);
            current = Some(record);
            continue;
        }

        if let Some(record) = current.as_mut() {
            scan_year_and_gpa(trimmed, record);
            if record.institution.is_none() && trimmed.len() > 3 {
                record.institution = Some(trimmed.to_string());
            }
        }
    }

    if let Some(finished) = current {
        entries.push(finished);
    }

    entries.truncate(MAX_ENTRIES);
    entries
}

fn scan_year_and_gpa(line: &str, record: &mut EducationEntry) {
    if record.year.is_none() {
        if let Some(m) = EDU_YEAR_RE.find(line) {
            record.year = Some(m.as_str().to_string());
        }
    }
    if let Some(caps) = GPA_RE.captures(line) {
        record.gpa = Some(caps[1].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_line_carries_year_and_gpa() {
        let entries = extract("", Some("Bachelor of Science 2019 GPA: 3.8\nState University"));
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.degree.as_deref(), Some("Bachelor of Science 2019 GPA: 3.8"));
        assert_eq!(e.institution.as_deref(), Some("State University"));
        assert_eq!(e.year.as_deref(), Some("2019"));
        assert_eq!(e.gpa.as_deref(), Some("3.8"));
    }

    #[test]
    fn test_multiple_records_first_seen_order() {
        let section = "\
Master of Science in CS
Tech Institute, 2021
Bachelor of Engineering
City College
2017";
        let entries = extract("", Some(section));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree.as_deref(), Some("Master of Science in CS"));
        assert_eq!(entries[0].institution.as_deref(), Some("Tech Institute, 2021"));
        assert_eq!(entries[0].year.as_deref(), Some("2021"));
        assert_eq!(entries[1].degree.as_deref(), Some("Bachelor of Engineering"));
        assert_eq!(entries[1].institution.as_deref(), Some("City College"));
        assert_eq!(entries[1].year.as_deref(), Some("2017"));
    }

    #[test]
    fn test_year_first_wins() {
        let entries = extract("", Some("B.Tech\nSomewhere University 2015\nrevalidated 2020"));
        assert_eq!(entries[0].year.as_deref(), Some("2015"));
    }

    #[test]
    fn test_capped_at_three() {
        let section = "Bachelor A\nBachelor B\nBachelor C\nBachelor D";
        assert_eq!(extract("", Some(section)).len(), 3);
    }

    #[test]
    fn test_no_degree_keyword_yields_nothing() {
        assert!(extract("plain text with no credentials", None).is_empty());
    }
}
