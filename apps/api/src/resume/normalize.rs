//! Raw JSON → canonical [`ResumeRecord`].
//!
//! Input is whatever the client sends: keys may be missing, null, numeric or aliased, and
//! list entries may be half-filled. Normalization never fails; it cleans every scalar, drops
//! list entries that lack their required fields and maps skill inputs onto fixed categories.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::models::resume::{
    AchievementEntry, CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry,
    PersonalInfo, Proficiency, ProjectEntry, PublicationEntry, ResumeRecord, SkillCategory,
    SkillsMap,
};

type Object = Map<String, Value>;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SKILL_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;]").unwrap());

pub fn normalize(raw: &Value) -> ResumeRecord {
    let empty = Object::new();
    let root = raw.as_object().unwrap_or(&empty);
    let personal_obj = object_at(root, &["personal_info", "personal"]).unwrap_or(&empty);

    let record = ResumeRecord {
        personal: personal(personal_obj, root),
        education: entries(root, "education", education_entry),
        experience: entries(root, "experience", experience_entry),
        projects: entries(root, "projects", project_entry),
        achievements: entries(root, "achievements", achievement_entry),
        publications: entries(root, "publications", publication_entry),
        certifications: entries(root, "certifications", certification_entry),
        languages: languages(root.get("languages")),
        skills: skills(root.get("skills").and_then(Value::as_object), personal_obj),
        interests: string_list(root.get("interests")),
    };

    tracing::debug!(
        education = record.education.len(),
        experience = record.experience.len(),
        projects = record.projects.len(),
        skill_categories = record.skills.len(),
        "normalized resume input"
    );

    record
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar cleaning
// ────────────────────────────────────────────────────────────────────────────

/// Single-line cleaning: absent, null, `false` and empty become `""`; numbers and `true`
/// are stringified; whitespace is trimmed and every run collapses to one space.
pub fn clean_text(value: Option<&Value>) -> String {
    scalar(value).map(|s| collapse(&s)).unwrap_or_default()
}

fn collapse(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Multi-line cleaning: like [`clean_text`] per line, but line breaks survive. CRLF is
/// normalized and consecutive blank lines collapse to one.
pub fn clean_multiline(value: Option<&Value>) -> String {
    let Some(s) = scalar(value) else {
        return String::new();
    };

    let mut lines: Vec<String> = Vec::new();
    for line in s.replace("\r\n", "\n").replace('\r', "\n").split('\n') {
        let line = collapse(line);
        if line.is_empty() && lines.last().is_some_and(|l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }

    lines.join("\n").trim_matches('\n').to_string()
}

fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// First non-empty cleaned value among `keys`.
fn text(obj: &Object, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| clean_text(obj.get(*k)))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

fn multiline(obj: &Object, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| clean_multiline(obj.get(*k)))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

fn object_at<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a Object> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_object))
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn personal(obj: &Object, root: &Object) -> PersonalInfo {
    let summary_keys = ["summary", "professional_summary"];
    let mut summary = multiline(obj, &summary_keys);
    if summary.is_empty() {
        summary = multiline(root, &summary_keys);
    }

    PersonalInfo {
        full_name: text(obj, &["full_name", "name"]),
        email: text(obj, &["email"]),
        phone: text(obj, &["phone"]),
        linkedin: text(obj, &["linkedin"]),
        github: text(obj, &["github"]),
        website: text(obj, &["website", "portfolio"]),
        location: text(obj, &["location"]),
        summary,
    }
}

/// Builds entries from the array at `key`, keeping only those the builder accepts. Order is
/// preserved.
fn entries<T>(root: &Object, key: &str, build: fn(&Object) -> Option<T>) -> Vec<T> {
    let Some(items) = root.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    let kept: Vec<T> = items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(build)
        .collect();

    if kept.len() < items.len() {
        tracing::debug!(
            section = key,
            dropped = items.len() - kept.len(),
            "dropped incomplete entries"
        );
    }
    kept
}

/// True when every required field is non-empty.
fn filled(required: &[&str]) -> bool {
    required.iter().all(|f| !f.is_empty())
}

fn education_entry(obj: &Object) -> Option<EducationEntry> {
    let entry = EducationEntry {
        degree: text(obj, &["degree"]),
        institution: text(obj, &["institution", "school"]),
        location: text(obj, &["location"]),
        graduation_date: text(obj, &["graduation_date", "graduation_year"]),
        start_date: text(obj, &["start_date"]),
        end_date: text(obj, &["end_date"]),
        gpa: text(obj, &["gpa"]),
        relevant_coursework: text(obj, &["relevant_coursework", "relevant_courses"]),
    };
    let keep = filled(&[entry.degree.as_str(), entry.institution.as_str()]);
    keep.then_some(entry)
}

fn experience_entry(obj: &Object) -> Option<ExperienceEntry> {
    let entry = ExperienceEntry {
        job_title: text(obj, &["job_title", "title"]),
        company: text(obj, &["company"]),
        location: text(obj, &["location"]),
        start_date: text(obj, &["start_date"]),
        end_date: text(obj, &["end_date"]),
        description: multiline(obj, &["description"]),
    };
    let keep = filled(&[entry.job_title.as_str(), entry.company.as_str()]);
    keep.then_some(entry)
}

fn project_entry(obj: &Object) -> Option<ProjectEntry> {
    let entry = ProjectEntry {
        name: text(obj, &["name"]),
        technologies: text(obj, &["technologies"]),
        date: text(obj, &["date"]),
        start_date: text(obj, &["start_date"]),
        end_date: text(obj, &["end_date"]),
        link: text(obj, &["link", "github_link", "url"]),
        description: multiline(obj, &["description"]),
    };
    let keep = filled(&[entry.name.as_str()]);
    keep.then_some(entry)
}

fn achievement_entry(obj: &Object) -> Option<AchievementEntry> {
    let entry = AchievementEntry {
        title: text(obj, &["title"]),
        date: text(obj, &["date"]),
        organization: text(obj, &["organization"]),
        description: multiline(obj, &["description"]),
    };
    let keep = filled(&[entry.title.as_str()]);
    keep.then_some(entry)
}

fn publication_entry(obj: &Object) -> Option<PublicationEntry> {
    let entry = PublicationEntry {
        title: text(obj, &["title"]),
        venue: text(obj, &["venue", "journal"]),
        date: text(obj, &["date", "year"]),
        authors: text(obj, &["authors"]),
    };
    let keep = filled(&[entry.title.as_str()]);
    keep.then_some(entry)
}

fn certification_entry(obj: &Object) -> Option<CertificationEntry> {
    let entry = CertificationEntry {
        name: text(obj, &["name"]),
        issuer: text(obj, &["issuer"]),
        date: text(obj, &["date"]),
        credential_id: text(obj, &["credential_id"]),
    };
    let keep = filled(&[entry.name.as_str()]);
    keep.then_some(entry)
}

/// Spoken languages. Items may be objects or bare language names.
fn languages(value: Option<&Value>) -> Vec<LanguageEntry> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(obj) => Some(LanguageEntry {
                language: text(obj, &["language", "name"]),
                proficiency: Proficiency::parse(&text(obj, &["proficiency", "level"])),
            }),
            other => Some(LanguageEntry {
                language: clean_text(Some(other)),
                proficiency: Proficiency::default(),
            }),
        })
        .filter(|l| !l.language.is_empty())
        .collect()
}

/// A list from either an array (cleaned per item) or a `,`/`;` separated string.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| clean_text(Some(v)))
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => SKILL_SEPARATOR
            .split(s)
            .map(collapse)
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Maps skill inputs onto fixed categories. The dedicated `skills` object wins over flat
/// fields on the personal object for any category both supply.
fn skills(skills_obj: Option<&Object>, personal_obj: &Object) -> SkillsMap {
    let mut map = SkillsMap::new();
    for category in SkillCategory::ALL {
        let from = |obj: &Object| {
            category
                .input_fields()
                .iter()
                .map(|f| string_list(obj.get(*f)))
                .find(|list| !list.is_empty())
        };

        let list = skills_obj.and_then(|obj| from(obj)).or_else(|| from(personal_obj));
        if let Some(list) = list {
            map.insert(category, list);
        }
    }
    map
}
