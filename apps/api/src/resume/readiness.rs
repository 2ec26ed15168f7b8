//! Generation preconditions on a normalized record.

use serde::Serialize;

use crate::models::resume::ResumeRecord;

/// A precondition the record does not meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Missing {
    FullName,
    Email,
    EducationOrExperience,
}

impl Missing {
    pub fn message(self) -> &'static str {
        match self {
            Missing::FullName => "Full name is required",
            Missing::Email => "Email is required",
            Missing::EducationOrExperience => {
                "At least one education or experience entry is required"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub missing: Vec<Missing>,
}

/// Lists every unmet precondition, in a stable order.
pub fn check(record: &ResumeRecord) -> Readiness {
    let mut missing = Vec::new();
    if record.personal.full_name.is_empty() {
        missing.push(Missing::FullName);
    }
    if record.personal.email.is_empty() {
        missing.push(Missing::Email);
    }
    if record.education.is_empty() && record.experience.is_empty() {
        missing.push(Missing::EducationOrExperience);
    }

    Readiness {
        ready: missing.is_empty(),
        missing,
    }
}
