//! Flat list and free-text sections: skills, languages, summary.

use std::collections::HashSet;

use crate::extraction::sections::{Sections, SKILL_SECTIONS};

const SUMMARY_SECTIONS: &[&str] = &["summary", "profile", "objective"];
const LANGUAGE_SECTION: &str = "languages";

const SKILL_SEPARATORS: &[char] = &[',', '|', '•', '·'];
const LANGUAGE_SEPARATORS: &[char] = &[',', '|', '•', '·', '-'];

/// The list part of a line: what follows the first colon, else the whole line.
fn list_portion(line: &str) -> &str {
    line.split_once(':').map_or(line, |(_, rest)| rest)
}

fn split_items<'a>(text: &'a str, separators: &'a [char]) -> impl Iterator<Item = &'a str> {
    text.split(separators)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

/// Skills from the first skills section, de-duplicated in first-seen order.
pub fn extract_skills(sections: &Sections<'_>) -> Vec<String> {
    let Some(lines) = sections.first_of(SKILL_SECTIONS) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    lines
        .iter()
        .flat_map(|line| split_items(list_portion(line), SKILL_SEPARATORS))
        .filter(|skill| seen.insert(*skill))
        .map(str::to_string)
        .collect()
}

/// Language names with any `(proficiency)` annotation removed.
pub fn extract_languages(sections: &Sections<'_>) -> Vec<String> {
    let Some(lines) = sections.get(LANGUAGE_SECTION) else {
        return Vec::new();
    };

    lines
        .iter()
        .flat_map(|line| split_items(list_portion(line), LANGUAGE_SEPARATORS))
        .map(|item| item.split('(').next().unwrap_or(item).trim())
        .filter(|language| !language.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn extract_summary(sections: &Sections<'_>) -> Option<String> {
    let summary = sections.first_of(SUMMARY_SECTIONS)?.join(" ");
    (!summary.is_empty()).then_some(summary)
}
