//! Line normalization and header-driven section segmentation.

use std::collections::HashMap;

use tracing::trace;

/// Headers recognised by exact, case-insensitive whole-line match.
pub const CORE_HEADERS: &[&str] = &[
    "work experience",
    "experience",
    "volunteering experience",
    "education",
    "courses and certificates",
    "certifications",
    "technical skills",
    "skills",
];

/// Headers feeding the summary, language, project, publication and award
/// builders. Matched exactly like [`CORE_HEADERS`].
pub const SUPPLEMENTARY_HEADERS: &[&str] = &[
    "summary",
    "profile",
    "objective",
    "languages",
    "projects",
    "personal projects",
    "certificates",
    "publications",
    "awards",
    "honors",
];

/// Splits raw text into trimmed, non-empty lines in their original order.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Skill-category names that are also section headers. Inside an open skills
/// section they are content, not a new section.
const SKILL_CATEGORY_HEADERS: &[&str] = &["languages"];

/// Skills sections, most specific first.
pub const SKILL_SECTIONS: &[&str] = &["technical skills", "skills"];

fn match_header(line: &str, current: Option<&'static str>) -> Option<&'static str> {
    let lower = line.to_lowercase();
    let header = CORE_HEADERS
        .iter()
        .chain(SUPPLEMENTARY_HEADERS)
        .find(|header| **header == lower)
        .copied()?;

    let in_skills = current.is_some_and(|open| SKILL_SECTIONS.contains(&open));
    if in_skills && SKILL_CATEGORY_HEADERS.contains(&header) {
        return None;
    }
    Some(header)
}

/// Lines grouped under the header that precedes them.
#[derive(Debug, Default)]
pub struct Sections<'a> {
    by_name: HashMap<&'static str, Vec<&'a str>>,
}

impl<'a> Sections<'a> {
    /// Lines of a section, looked up case-insensitively. `Some` even for a
    /// header with no content beneath it.
    pub fn get(&self, name: &str) -> Option<&[&'a str]> {
        self.by_name
            .get(name.to_lowercase().as_str())
            .map(Vec::as_slice)
    }

    /// The first of `names` that is present.
    pub fn first_of(&self, names: &[&str]) -> Option<&[&'a str]> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Partitions normalized lines into sections. Line 0 is the name/contact
/// header and never belongs to a section; lines before the first recognised
/// header are dropped.
pub fn segment_sections<'a>(lines: &[&'a str]) -> Sections<'a> {
    let mut sections = Sections::default();
    let mut current: Option<&'static str> = None;

    for &line in lines.iter().skip(1) {
        if let Some(header) = match_header(line, current) {
            sections.by_name.entry(header).or_default();
            current = Some(header);
        } else if let Some(header) = current {
            sections.by_name.entry(header).or_default().push(line);
        } else {
            trace!("Dropping '{line}': precedes any section header");
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_blank_lines() {
        let text = "  Jane Doe \r\n\n   \n\tSkills\r\nRust\n";
        assert_eq!(normalize_lines(text), vec!["Jane Doe", "Skills", "Rust"]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_headers_are_case_insensitive_and_not_content() {
        let lines = vec!["Jane Doe", "SKILLS", "Rust, Go", "Education", "MIT"];
        let sections = segment_sections(&lines);
        assert_eq!(sections.get("skills"), Some(&["Rust, Go"][..]));
        assert_eq!(sections.get("EDUCATION"), Some(&["MIT"][..]));
    }

    #[test]
    fn test_header_must_match_whole_line() {
        let lines = vec![
            "Jane Doe",
            "Skills",
            "Ten years of experience in Rust",
            "Experience with distributed systems",
        ];
        let sections = segment_sections(&lines);
        assert_eq!(sections.get("skills").map(<[_]>::len), Some(2));
        assert!(sections.get("experience").is_none());
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let lines = vec!["Jane Doe", "jane@example.com", "Skills", "Rust"];
        let sections = segment_sections(&lines);
        assert_eq!(sections.names(), vec!["skills"]);
        assert_eq!(sections.get("skills"), Some(&["Rust"][..]));
    }

    #[test]
    fn test_first_line_is_never_a_header() {
        let lines = vec!["Skills", "Rust"];
        let sections = segment_sections(&lines);
        assert!(sections.get("skills").is_none());
    }

    #[test]
    fn test_repeated_header_appends() {
        let lines = vec!["Jane Doe", "Skills", "Rust", "Education", "MIT", "skills", "Go"];
        let sections = segment_sections(&lines);
        assert_eq!(sections.get("skills"), Some(&["Rust", "Go"][..]));
    }

    #[test]
    fn test_empty_section_is_present() {
        let lines = vec!["Jane Doe", "Publications"];
        let sections = segment_sections(&lines);
        assert_eq!(sections.get("publications").map(<[_]>::is_empty), Some(true));
    }

    #[test]
    fn test_first_of_respects_priority() {
        let lines = vec!["Jane Doe", "Skills", "Go", "Technical Skills", "Rust"];
        let sections = segment_sections(&lines);
        assert_eq!(
            sections.first_of(&["technical skills", "skills"]),
            Some(&["Rust"][..])
        );
    }

    #[test]
    fn test_languages_inside_skills_stays_skill_content() {
        let lines = vec!["Jane Doe", "Technical Skills", "Languages", "Rust, Go", "Tools", "Docker"];
        let sections = segment_sections(&lines);
        assert_eq!(sections.names(), vec!["technical skills"]);
        assert_eq!(
            sections.get("technical skills"),
            Some(&["Languages", "Rust, Go", "Tools", "Docker"][..])
        );
        assert!(sections.get("languages").is_none());
    }

    #[test]
    fn test_languages_opens_section_outside_skills() {
        let lines = vec!["Jane Doe", "Education", "MIT", "Languages", "English"];
        let sections = segment_sections(&lines);
        assert_eq!(sections.get("education"), Some(&["MIT"][..]));
        assert_eq!(sections.get("languages"), Some(&["English"][..]));
    }
}
