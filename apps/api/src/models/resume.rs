//! Canonical resume record: the cleaned, filtered form of user input consumed by the
//! LaTeX assembler.
//!
//! Every text field is a plain `String`; an empty string means "not provided". Records are
//! built fresh for each generation request and never persisted.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeRecord {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub publications: Vec<PublicationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
    pub skills: SkillsMap,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    /// Takes precedence over the start/end range when set.
    pub graduation_date: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub relevant_coursework: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Multi-line; split into bullets at render time.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub technologies: String,
    pub date: String,
    pub start_date: String,
    pub end_date: String,
    pub link: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AchievementEntry {
    pub title: String,
    pub date: String,
    pub organization: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicationEntry {
    pub title: String,
    pub venue: String,
    pub date: String,
    pub authors: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageEntry {
    pub language: String,
    pub proficiency: Proficiency,
}

/// Spoken-language proficiency. Free text that matches none of the known levels is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Proficiency {
    Native,
    Fluent,
    Proficient,
    #[default]
    Conversational,
    Intermediate,
    Basic,
    Other(String),
}

impl Proficiency {
    /// Parses user text case-insensitively. Blank input yields the default level.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.to_ascii_lowercase().as_str() {
            "" => Self::default(),
            "native" => Self::Native,
            "fluent" => Self::Fluent,
            "proficient" => Self::Proficient,
            "conversational" => Self::Conversational,
            "intermediate" => Self::Intermediate,
            "basic" => Self::Basic,
            _ => Self::Other(text.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Native => "Native",
            Self::Fluent => "Fluent",
            Self::Proficient => "Proficient",
            Self::Conversational => "Conversational",
            Self::Intermediate => "Intermediate",
            Self::Basic => "Basic",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Proficiency> for String {
    fn from(p: Proficiency) -> Self {
        p.as_str().to_string()
    }
}

/// Fixed skill buckets. Declaration order is the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Tools,
    Databases,
    TechnicalSkills,
    SoftSkills,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
        SkillCategory::Databases,
        SkillCategory::TechnicalSkills,
        SkillCategory::SoftSkills,
    ];

    /// Input field names that feed this category, in precedence order.
    pub fn input_fields(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Languages => &["languages", "programming_languages"],
            SkillCategory::Frameworks => &["frameworks"],
            SkillCategory::Tools => &["tools", "tools_technologies"],
            SkillCategory::Databases => &["databases", "platforms"],
            SkillCategory::TechnicalSkills => &["technical_skills"],
            SkillCategory::SoftSkills => &["soft_skills"],
        }
    }
}

/// Skill lists keyed by category. Only non-empty categories are present.
pub type SkillsMap = BTreeMap<SkillCategory, Vec<String>>;
