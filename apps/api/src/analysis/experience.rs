//! Experience extraction. Splits the experience section (or the whole text
//! when no section was found) into entries at month-year boundaries, then
//! reads role / company / duration off the first lines of each entry and
//! grades its bullets.

use crate::analysis::models::{ExperienceEntry, ExperienceSummary};
use crate::patterns::{
    ACTION_VERBS, BULLET_GLYPHS, DATE_RANGE_RE, DATE_YEAR_RE, METRIC_RE, MONTH_YEAR_RE,
    ROLE_KEYWORDS,
};

const MAX_POSITIONS: usize = 5;

pub fn extract(full_text: &str, experience_section: Option<&str>) -> ExperienceSummary {
    let text = match experience_section {
        Some(s) if !s.is_empty() => s,
        _ => full_text,
    };

    let mut positions = Vec::new();
    let mut total_months: u32 = 0;

    for entry in split_entries(text).into_iter().take(MAX_POSITIONS) {
        let parsed = parse_entry(&entry);
        if parsed.company.is_some() || parsed.role.is_some() {
            if let Some(duration) = &parsed.duration {
                total_months += estimate_duration_months(duration);
            }
            positions.push(parsed);
        }
    }

    let overall_quality = if positions.is_empty() {
        0
    } else {
        positions.iter().map(|p| p.bullet_quality).sum::<u32>() / positions.len() as u32
    };

    ExperienceSummary {
        total_years: (total_months as f64 / 12.0 * 10.0).round() / 10.0,
        total_months,
        positions,
        overall_quality,
    }
}

/// A line carrying a month-year token opens a new entry.
fn split_entries(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if MONTH_YEAR_RE.is_match(line) && !current.is_empty() {
            entries.push(current.join("\n"));
            current.clear();
        }
        current.push(line);
    }
    if !current.is_empty() {
        entries.push(current.join("\n"));
    }

    if entries.is_empty() {
        vec![text.to_string()]
    } else {
        entries
    }
}

fn parse_entry(entry: &str) -> ExperienceEntry {
    let lines: Vec<&str> = entry.trim().split('\n').collect();

    let mut company = None;
    let mut role = None;
    let mut duration = None;

    for line in lines.iter().take(3) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if DATE_RANGE_RE.is_match(line) {
            duration = Some(line.to_string());
            continue;
        }
        let line_lower = line.to_lowercase();
        if role.is_none() && ROLE_KEYWORDS.iter().any(|kw| line_lower.contains(kw)) {
            role = Some(line.to_string());
        } else if company.is_none() && line.len() > 2 {
            company = Some(line.to_string());
        }
    }

    let bullets: Vec<&str> = lines.iter().copied().filter(|l| is_bullet_line(l)).collect();

    let mut action_count: u32 = 0;
    let mut has_metrics = false;
    for bullet in &bullets {
        let bullet_lower = bullet.to_lowercase();
        if ACTION_VERBS.iter().any(|v| bullet_lower.contains(v)) {
            action_count += 1;
        }
        if METRIC_RE.is_match(&bullet_lower) {
            has_metrics = true;
        }
    }

    let bullet_quality = if bullets.is_empty() {
        0
    } else {
        let mut quality = (action_count as f64 / bullets.len() as f64 * 70.0) as u32;
        if has_metrics {
            quality += 30;
        }
        quality.min(100)
    };

    ExperienceEntry {
        company,
        role,
        duration,
        description: if bullets.is_empty() {
            None
        } else {
            Some(bullets.iter().take(5).copied().collect::<Vec<_>>().join("\n"))
        },
        bullet_quality,
        has_metrics,
        action_verbs_count: action_count,
    }
}

fn is_bullet_line(line: &str) -> bool {
    let stripped = line.trim_start();
    if stripped.starts_with(BULLET_GLYPHS) {
        return true;
    }
    // Numbered-list marker: "1. Did a thing"
    stripped.starts_with(|c: char| c.is_ascii_digit())
        && line.chars().take(3).any(|c| c == '.')
}

/// Present/current positions count a flat year; otherwise the first two
/// 4-digit years bound the span.
fn estimate_duration_months(duration: &str) -> u32 {
    let lower = duration.to_lowercase();
    if lower.contains("present") || lower.contains("current") {
        return 12;
    }

    let years: Vec<i32> = DATE_YEAR_RE
        .captures_iter(duration)
        .filter_map(|c| c[1].parse().ok())
        .collect();
    if years.len() >= 2 {
        return ((years[1] - years[0]) * 12).max(1) as u32;
    }

    12
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: &str = "\
Jan 2020 - Present
Senior Software Engineer
Acme Corp
• Developed a billing platform serving 2M users
• Led a team of 5 engineers
• Reduced deploy time by 40%
Mar 2017 - Dec 2019
Data Analyst
Globex
• Analyzed churn cohorts
• Maintained dashboards";

    #[test]
    fn test_splits_on_month_year_lines() {
        let entries = split_entries(SECTION);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].contains("Acme Corp"));
        assert!(entries[1].contains("Globex"));
    }

    #[test]
    fn test_parses_role_company_duration() {
        let summary = extract(SECTION, Some(SECTION));
        assert_eq!(summary.positions.len(), 2);
        let first = &summary.positions[0];
        assert_eq!(first.role.as_deref(), Some("Senior Software Engineer"));
        assert_eq!(first.company.as_deref(), Some("Acme Corp"));
        assert_eq!(first.duration.as_deref(), Some("Jan 2020 - Present"));
        assert!(first.has_metrics);
        assert_eq!(first.action_verbs_count, 3);
    }

    #[test]
    fn test_duration_months() {
        assert_eq!(estimate_duration_months("Jan 2020 - Present"), 12);
        assert_eq!(estimate_duration_months("Mar 2017 - Dec 2019"), 24);
        assert_eq!(estimate_duration_months("Jun 2019 - Aug 2019"), 1);
        assert_eq!(estimate_duration_months("since a while"), 12);
    }

    #[test]
    fn test_bullet_quality_rounding() {
        // 4 bullets, 3 with action verbs, one metric: int(70 * 3/4) + 30 = 82.
        let entry = "\
Platform Engineer
• Developed the ingestion service
• Implemented retry logic
• Optimized cold starts, saving $50,000 annually
• On-call rotation duties";
        let parsed = parse_entry(entry);
        assert_eq!(parsed.action_verbs_count, 3);
        assert!(parsed.has_metrics);
        assert_eq!(parsed.bullet_quality, 82);
    }

    #[test]
    fn test_empty_text_yields_no_positions() {
        let summary = extract("", None);
        assert!(summary.positions.is_empty());
        assert_eq!(summary.overall_quality, 0);
        assert_eq!(summary.total_months, 0);
    }

    #[test]
    fn test_totals() {
        let summary = extract(SECTION, Some(SECTION));
        // 12 (present) + 24 (2017-2019) months.
        assert_eq!(summary.total_months, 36);
        assert_eq!(summary.total_years, 3.0);
    }
}
