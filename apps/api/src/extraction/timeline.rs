//! Date-delimited sections: work experience, education, certifications.
//!
//! A line carrying a date range opens a new entry. The text before the date
//! is the entry's label; the lines that follow, up to the next delimiter,
//! are its body. Builders then read the body positionally: the first plain
//! line is the secondary label and `•` lines are list items.

use tracing::debug;

use crate::extraction::contact::mentions_known_location;
use crate::extraction::dates::{
    contains_date_range, contains_month, find_date_start, resolve_date_range, DateRange,
};
use crate::extraction::degree::infer_degree;
use crate::extraction::sections::Sections;
use crate::models::profile::{Address, Certification, Education, Experience};

const EXPERIENCE_SECTIONS: &[&str] = &["work experience", "experience", "volunteering experience"];
const EDUCATION_SECTION: &str = "education";
const CERTIFICATION_SECTIONS: &[&str] = &["courses and certificates", "certifications", "certificates"];

const BULLET: char = '•';

/// One delimited entry of a timeline section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub label: Option<&'a str>,
    pub dates: DateRange,
    pub body: Vec<&'a str>,
}

impl<'a> TimelineEntry<'a> {
    fn open(line: &'a str) -> Self {
        let (label, date_text) = match find_date_start(line) {
            Some(at) => (clean_label(&line[..at]), &line[at..]),
            None => (clean_label(line), line),
        };
        Self {
            label,
            dates: resolve_date_range(date_text),
            body: Vec::new(),
        }
    }

    /// The delimiter label followed by the body lines accepted by `is_label`.
    /// A delimiter line that starts with its date contributes no label, so
    /// the body supplies both.
    fn labels<'e>(
        &'e self,
        is_label: impl Fn(&str) -> bool + 'e,
    ) -> impl Iterator<Item = &'a str> + 'e {
        self.label
            .into_iter()
            .chain(self.body.iter().copied().filter(move |line| is_label(*line)))
    }
}

fn clean_label(raw: &str) -> Option<&str> {
    let label = raw.trim_end_matches(|c: char| {
        c.is_whitespace() || matches!(c, '-' | '–' | '—' | '|' | ',' | '·')
    });
    let label = label.trim();
    (!label.is_empty()).then_some(label)
}

/// Folds section lines into entries. Lines before the first delimiter belong
/// to no entry and are dropped; the trailing entry is flushed at the end.
pub fn split_entries<'a>(lines: &[&'a str], is_delimiter: impl Fn(&str) -> bool) -> Vec<TimelineEntry<'a>> {
    let (mut entries, pending) = lines.iter().fold(
        (Vec::new(), None::<TimelineEntry<'a>>),
        |(mut entries, pending), &line| {
            if is_delimiter(line) {
                entries.extend(pending);
                (entries, Some(TimelineEntry::open(line)))
            } else if let Some(mut entry) = pending {
                entry.body.push(line);
                (entries, Some(entry))
            } else {
                debug!("Dropping '{line}': precedes the first dated entry");
                (entries, None)
            }
        },
    );
    entries.extend(pending);
    entries
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET)
}

fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(BULLET).trim().to_string()
}

/// Company part of a `Company  City, Country` line.
fn company_name(line: &str) -> &str {
    line.split("  ").next().unwrap_or(line).trim()
}

fn build_experience(entry: &TimelineEntry<'_>) -> Option<Experience> {
    let mut labels = entry.labels(|line| !is_bullet(line));
    let (Some(position), Some(company)) = (labels.next(), labels.next()) else {
        debug!("Dropping experience entry {:?}: no position and company", entry.label);
        return None;
    };

    let responsibilities: Vec<String> = entry
        .body
        .iter()
        .filter(|line| is_bullet(line))
        .map(|line| strip_bullet(line))
        .collect();

    Some(Experience {
        company: company_name(company).to_string(),
        position: position.to_string(),
        description: responsibilities.join(" "),
        start_date: entry.dates.start_or_today(),
        end_date: entry.dates.end,
        technologies: Vec::new(),
        responsibilities,
        achievements: Vec::new(),
    })
}

fn is_education_achievement(line: &str) -> bool {
    is_bullet(line) || line.starts_with("GPA") || line.starts_with("Honors")
}

fn build_education(entry: &TimelineEntry<'_>, known_locations: &[Address]) -> Option<Education> {
    let mut labels = entry.labels(|line| !is_education_achievement(line));
    let (Some(school), Some(major)) = (labels.next(), labels.next()) else {
        debug!("Dropping education entry {:?}: no school and major", entry.label);
        return None;
    };

    let achievements = entry
        .body
        .iter()
        .filter(|line| is_education_achievement(line))
        .filter(|line| !mentions_known_location(line, known_locations))
        .map(|line| strip_bullet(line))
        .collect();

    Some(Education {
        school: school.to_string(),
        degree: infer_degree(major),
        major: major.to_string(),
        start_date: entry.dates.start_or_today(),
        end_date: entry.dates.end,
        courses: Vec::new(),
        achievements,
    })
}

fn build_certification(entry: &TimelineEntry<'_>) -> Option<Certification> {
    let mut labels = entry.labels(|line| !is_bullet(line));
    let (Some(issuer), Some(name)) = (labels.next(), labels.next()) else {
        debug!("Dropping certification entry {:?}: no issuer and name", entry.label);
        return None;
    };

    Some(Certification {
        name: name.to_string(),
        issuer: issuer.to_string(),
        issue_date: entry.dates.start_or_today(),
        expiration_date: None,
        credential_id: None,
        credential_url: None,
    })
}

/// Experiences from every experience-like section, in section order.
pub fn extract_experiences(sections: &Sections<'_>) -> Vec<Experience> {
    EXPERIENCE_SECTIONS
        .iter()
        .filter_map(|name| sections.get(name))
        .flat_map(|lines| split_entries(lines, contains_date_range))
        .filter_map(|entry| build_experience(&entry))
        .collect()
}

pub fn extract_educations(sections: &Sections<'_>, known_locations: &[Address]) -> Vec<Education> {
    sections
        .get(EDUCATION_SECTION)
        .map(|lines| {
            split_entries(lines, contains_date_range)
                .iter()
                .filter_map(|entry| build_education(entry, known_locations))
                .collect()
        })
        .unwrap_or_default()
}

/// Certificates may carry a single issue month rather than a range, so any
/// standalone month name also opens an entry.
pub fn extract_certifications(sections: &Sections<'_>) -> Vec<Certification> {
    sections
        .first_of(CERTIFICATION_SECTIONS)
        .map(|lines| {
            split_entries(lines, |line| contains_date_range(line) || contains_month(line))
                .iter()
                .filter_map(build_certification)
                .collect()
        })
        .unwrap_or_default()
}
