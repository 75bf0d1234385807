//! Loosely structured sections: personal projects, publications, awards.

use tracing::trace;

use crate::extraction::dates::today;
use crate::extraction::sections::Sections;
use crate::models::profile::{Award, PersonalProject, Publication};

const PROJECT_SECTIONS: &[&str] = &["projects", "personal projects"];
const PUBLICATION_SECTION: &str = "publications";
const AWARD_SECTIONS: &[&str] = &["awards", "honors"];

const MAX_PROJECT_NAME_CHARS: usize = 100;

fn is_likely_project_name(line: &str) -> bool {
    !line.starts_with('•') && !line.starts_with('-') && line.chars().count() < MAX_PROJECT_NAME_CHARS
}

struct PendingProject<'a> {
    name: &'a str,
    description: Vec<&'a str>,
}

impl PendingProject<'_> {
    fn finish(self) -> PersonalProject {
        PersonalProject {
            name: self.name.to_string(),
            description: self.description.join(" "),
            technologies: Vec::new(),
        }
    }
}

/// A short, unbulleted line names a project; everything until the next such
/// line describes it.
pub fn extract_projects(sections: &Sections<'_>) -> Vec<PersonalProject> {
    let Some(lines) = sections.first_of(PROJECT_SECTIONS) else {
        return Vec::new();
    };

    let (mut projects, pending) = lines.iter().fold(
        (Vec::new(), None::<PendingProject<'_>>),
        |(mut projects, pending), &line| {
            if is_likely_project_name(line) {
                projects.extend(pending.map(PendingProject::finish));
                let next = PendingProject {
                    name: line,
                    description: Vec::new(),
                };
                (projects, Some(next))
            } else if let Some(mut project) = pending {
                project.description.push(line);
                (projects, Some(project))
            } else {
                trace!("Dropping '{line}': precedes any project name");
                (projects, None)
            }
        },
    );
    projects.extend(pending.map(PendingProject::finish));
    projects
}

/// One publication per line, titled with the line.
pub fn extract_publications(sections: &Sections<'_>) -> Vec<Publication> {
    sections
        .get(PUBLICATION_SECTION)
        .unwrap_or_default()
        .iter()
        .map(|line| Publication {
            title: line.to_string(),
            description: String::new(),
            authors: Vec::new(),
            link: None,
        })
        .collect()
}

/// `Name - Issuer` (or `,` / `|` separated); dated today.
pub fn extract_awards(sections: &Sections<'_>) -> Vec<Award> {
    sections
        .first_of(AWARD_SECTIONS)
        .unwrap_or_default()
        .iter()
        .map(|line| {
            let mut parts = line.split(['-', ',', '|']);
            let name = parts.next().unwrap_or_default().trim();
            let issuer = parts.next().map(str::trim).unwrap_or_default();
            Award {
                name: name.to_string(),
                issuer: issuer.to_string(),
                date: today(),
                description: None,
            }
        })
        .collect()
}
