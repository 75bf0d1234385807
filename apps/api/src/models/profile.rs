use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

/// Degree level. Inferred from the major line; `Bachelor` when nothing matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Associate,
    #[default]
    Bachelor,
    Master,
    Doctorate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    /// `None` for a current position.
    pub end_date: Option<NaiveDate>,
    pub technologies: Vec<String>,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: Degree,
    pub major: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub courses: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalProject {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub issuer: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Everything the extraction pipeline recovers from one résumé, before it is
/// bound to an owner and timestamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub name: Option<Name>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub personal_projects: Vec<PersonalProject>,
    pub certifications: Vec<Certification>,
    pub publications: Vec<Publication>,
    pub awards: Vec<Award>,
}

/// Aggregate root: a user's professional record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

impl Profile {
    /// Binds extracted fields to their owner and stamps the creation time.
    pub fn new(user_id: Uuid, fields: ProfileFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            fields,
        }
    }
}
