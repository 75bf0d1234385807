//! Résumé-to-profile extraction.
//!
//! Pipeline: normalize lines → segment into sections → header fields
//! (name, email, phone, address) → per-section record builders → assemble.
//! Pure and synchronous; never fails on malformed input, it only omits what
//! it cannot recognise.

pub mod catalog;
pub mod contact;
pub mod dates;
pub mod degree;
pub mod handlers;
pub mod lists;
pub mod sections;
pub mod timeline;

use tracing::debug;
use uuid::Uuid;

use crate::models::profile::{Address, Profile, ProfileFields};

/// Turns plain résumé text into a [`Profile`] owned by `user_id`.
///
/// Carried in `AppState` as `Arc<dyn ResumeParser>`.
pub trait ResumeParser: Send + Sync {
    fn parse(&self, user_id: Uuid, text: &str) -> Profile;
}

/// Layout-heuristic parser. Holds only the known-location table used by the
/// address heuristic; nothing is retained between calls.
#[derive(Debug, Clone)]
pub struct HeuristicResumeParser {
    known_locations: Vec<Address>,
}

impl Default for HeuristicResumeParser {
    fn default() -> Self {
        Self::new(contact::default_known_locations())
    }
}

impl HeuristicResumeParser {
    pub fn new(known_locations: Vec<Address>) -> Self {
        Self { known_locations }
    }

    pub fn extract_fields(&self, text: &str) -> ProfileFields {
        let lines = sections::normalize_lines(text);
        let sections = sections::segment_sections(&lines);

        let fields = ProfileFields {
            name: contact::extract_name(&lines),
            email: contact::extract_email(text),
            phone: contact::extract_phone(text),
            address: contact::extract_address(&lines, &self.known_locations),
            summary: lists::extract_summary(&sections),
            skills: lists::extract_skills(&sections),
            languages: lists::extract_languages(&sections),
            experiences: timeline::extract_experiences(&sections),
            educations: timeline::extract_educations(&sections, &self.known_locations),
            personal_projects: catalog::extract_projects(&sections),
            certifications: timeline::extract_certifications(&sections),
            publications: catalog::extract_publications(&sections),
            awards: catalog::extract_awards(&sections),
        };

        debug!(
            "Extracted résumé text: {} lines, sections {:?}, {} experiences, {} educations, {} certifications, {} projects, {} skills",
            lines.len(),
            sections.names(),
            fields.experiences.len(),
            fields.educations.len(),
            fields.certifications.len(),
            fields.personal_projects.len(),
            fields.skills.len()
        );

        fields
    }
}

impl ResumeParser for HeuristicResumeParser {
    fn parse(&self, user_id: Uuid, text: &str) -> Profile {
        Profile::new(user_id, self.extract_fields(text))
    }
}
