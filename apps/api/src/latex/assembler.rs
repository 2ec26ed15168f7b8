//! Document assembly: header plus section fragments in fixed order, wrapped in the template
//! skeleton.

use crate::latex::sections::{self, Fragment};
use crate::latex::template::{wrap_document, TemplateId};
use crate::models::resume::ResumeRecord;

/// Renders the section fragments of `record` in template order. Empty sections are skipped.
pub fn fragments(record: &ResumeRecord, template: TemplateId) -> Vec<Fragment> {
    let extended = template == TemplateId::Extended;

    let candidates = [
        extended
            .then(|| sections::summary(&record.personal, template))
            .flatten(),
        sections::education(&record.education, template),
        sections::skills(&record.skills, &record.languages, template),
        sections::experience(&record.experience, template),
        sections::projects(&record.projects, template),
        sections::publications(&record.publications, template),
        sections::achievements(&record.achievements, template),
        extended
            .then(|| sections::certifications(&record.certifications, template))
            .flatten(),
        extended
            .then(|| sections::interests(&record.interests, template))
            .flatten(),
    ];

    candidates.into_iter().flatten().collect()
}

/// Builds the full markup document for `record`. Never fails; missing data only removes
/// sections.
pub fn assemble(record: &ResumeRecord, template: TemplateId) -> String {
    let header = sections::header(&record.personal, template);
    let body: String = fragments(record, template)
        .into_iter()
        .map(|f| f.markup)
        .collect();

    tracing::debug!(
        template = %template,
        header_bytes = header.markup.len(),
        body_bytes = body.len(),
        "assembled resume markup"
    );

    wrap_document(template, &header.markup, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::sections::Section;
    use crate::models::resume::{
        CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
        SkillCategory,
    };

    fn jane() -> ResumeRecord {
        ResumeRecord {
            personal: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                job_title: "Engineer".to_string(),
                company: "Acme".to_string(),
                description: "- Built X\n- Improved Y by 10%".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_jane_doe_document() {
        for template in [TemplateId::Classic, TemplateId::Extended] {
            let doc = assemble(&jane(), template);
            assert!(doc.contains(r"\LARGE Jane Doe"));
            assert!(doc.contains(r"\section{Experience}"));
            assert_eq!(doc.matches(r"\resumeItemWithoutTitle{").count(), 2);
            assert!(doc.contains(r"\resumeItemWithoutTitle{Built X}"));
            assert!(doc.contains(r"\resumeItemWithoutTitle{Improved Y by 10\%}"));

            assert!(!doc.contains("Education}"));
            assert!(!doc.contains(r"\section{Projects}"));
            assert!(!doc.contains(r"\section{Skills Summary}"));
            assert!(!doc.contains(r"\section{Publications}"));
            assert!(!doc.contains(r"\section{Honors and Awards}"));
            assert!(!doc.contains(r"\section{Certifications}"));
            assert!(!doc.contains(r"\section{Interests}"));
        }
    }

    #[test]
    fn test_fragments_follow_fixed_order() {
        let mut record = jane();
        record.personal.summary = "Builder of things".to_string();
        record.education.push(EducationEntry {
            degree: "BSc".to_string(),
            institution: "MIT".to_string(),
            ..Default::default()
        });
        record
            .skills
            .insert(SkillCategory::Tools, vec!["Docker".to_string()]);
        record.projects.push(ProjectEntry {
            name: "Crawler".to_string(),
            ..Default::default()
        });
        record.certifications.push(CertificationEntry {
            name: "CKA".to_string(),
            ..Default::default()
        });
        record.interests.push("Chess".to_string());

        let order: Vec<Section> = fragments(&record, TemplateId::Extended)
            .into_iter()
            .map(|f| f.section)
            .collect();
        assert_eq!(
            order,
            vec![
                Section::Summary,
                Section::Education,
                Section::Skills,
                Section::Experience,
                Section::Projects,
                Section::Certifications,
                Section::Interests,
            ]
        );
    }

    #[test]
    fn test_classic_skips_extended_only_sections() {
        let mut record = jane();
        record.personal.summary = "Builder of things".to_string();
        record.certifications.push(CertificationEntry {
            name: "CKA".to_string(),
            ..Default::default()
        });
        record.interests.push("Chess".to_string());

        let doc = assemble(&record, TemplateId::Classic);
        assert!(!doc.contains("Professional Summary"));
        assert!(!doc.contains(r"\section{Certifications}"));
        assert!(!doc.contains(r"\section{Interests}"));
    }

    #[test]
    fn test_no_raw_specials_leak_from_user_text() {
        let mut record = jane();
        record.personal.full_name = "R&D $upport_#1".to_string();
        let doc = assemble(&record, TemplateId::Extended);
        assert!(doc.contains(r"\LARGE R\&D \$upport\_\#1"));
        assert!(!doc.contains("R&D"));
    }

    #[test]
    fn test_header_then_sections_then_end() {
        let doc = assemble(&jane(), TemplateId::Extended);
        let header = doc.find(r"\LARGE Jane Doe").unwrap();
        let experience = doc.find(r"\section{Experience}").unwrap();
        let end = doc.find(r"\end{document}").unwrap();
        assert!(header < experience && experience < end);
    }
}
