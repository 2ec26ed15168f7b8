//! Section fragment renderers.
//!
//! Each function renders one resume section for a given template and returns `None` when the
//! section has nothing to show, so the assembler never emits a heading without a body. All
//! user text goes through `TemplateId::escape` before it is written.

use crate::latex::bullets::split_bullets;
use crate::latex::template::{skill_row_label, TemplateId, SPOKEN_LANGUAGES_ROW};
use crate::models::resume::{
    AchievementEntry, CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry,
    PersonalInfo, ProjectEntry, PublicationEntry, SkillCategory, SkillsMap,
};

/// Document sections in the order a template may emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Summary,
    Education,
    Skills,
    Experience,
    Projects,
    Publications,
    Achievements,
    Certifications,
    Interests,
}

/// A rendered piece of markup tagged with the section it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub section: Section,
    pub markup: String,
}

impl Fragment {
    fn new(section: Section, markup: String) -> Self {
        Self { section, markup }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared formatting helpers
// ────────────────────────────────────────────────────────────────────────────

/// `start - end`, `start - Present` when only a start is known, else empty.
pub fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => format!("{start} - Present"),
        _ => String::new(),
    }
}

/// Joins a multi-line field into one line.
fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders a description as an item list, or nothing if it has no bullets.
fn bullet_list(description: &str, t: TemplateId) -> String {
    let bullets = split_bullets(description);
    if bullets.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n    \\resumeItemListStart\n");
    for bullet in bullets {
        out.push_str(&format!(
            "        \\resumeItemWithoutTitle{{{}}}\n",
            t.escape(&bullet)
        ));
    }
    out.push_str("      \\resumeItemListEnd\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Name and contact block. Contact rows with no values are left out.
pub fn header(personal: &PersonalInfo, t: TemplateId) -> Fragment {
    let name = t.escape(&personal.full_name);
    let email = t.escape(&personal.email);
    let phone = t.escape(&personal.phone);
    let website = t.escape(&personal.website);
    let github = t.escape(&personal.github);

    let mut out = String::from("\\begin{tabular*}{\\textwidth}{l@{\\extracolsep{\\fill}}r}\n");
    out.push_str(&format!(
        "  \\textbf{{{{\\LARGE {name}}}}} & Email: {email}\\\\\n"
    ));
    if !website.is_empty() || !phone.is_empty() {
        out.push_str(&format!("  Portfolio: {website} & Mobile:~~~{phone} \\\\\n"));
    }
    if !github.is_empty() {
        out.push_str(&format!("  Github: ~~{github} \\\\\n"));
    }
    out.push_str("\\end{tabular*}");
    Fragment::new(Section::Header, out)
}

pub fn summary(personal: &PersonalInfo, t: TemplateId) -> Option<Fragment> {
    if personal.summary.is_empty() {
        return None;
    }
    Some(Fragment::new(
        Section::Summary,
        format!(
            "\n\\section{{Professional Summary}}\n{}\n\n",
            t.escape(&personal.summary)
        ),
    ))
}

pub fn education(entries: &[EducationEntry], t: TemplateId) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }
    let style = t.style();

    let mut out = String::new();
    if style.section_banners {
        out.push_str("%-----------EDUCATION-----------------\n");
    }
    out.push_str("\\section{~~Education}\n  \\resumeSubHeadingListStart\n");

    for edu in entries {
        let date = if edu.graduation_date.is_empty() {
            date_range(&edu.start_date, &edu.end_date)
        } else {
            edu.graduation_date.clone()
        };

        let mut degree_line = t.escape(&edu.degree);
        if !edu.gpa.is_empty() {
            degree_line.push_str(&format!(";  GPA: {}", t.escape(&edu.gpa)));
        }

        out.push_str(&format!(
            "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}",
            t.escape(&edu.institution),
            t.escape(&edu.location),
            degree_line,
            t.escape(&date),
        ));

        if !edu.relevant_coursework.is_empty() {
            out.push_str(&format!(
                "\n      {{\\scriptsize \\textit{{ \\footnotesize{{\\newline{{}}\\textbf{{Courses:}} {}}}}}}}",
                t.escape(&edu.relevant_coursework)
            ));
        }
        out.push('\n');
    }

    out.push_str("    \\resumeSubHeadingListEnd\n");
    out.push_str(match t {
        TemplateId::Classic => "    \n",
        TemplateId::Extended => "\n",
    });
    Some(Fragment::new(Section::Education, out))
}

/// Skill rows in fixed category order. The extended template appends spoken languages.
pub fn skills(skills: &SkillsMap, languages: &[LanguageEntry], t: TemplateId) -> Option<Fragment> {
    let style = t.style();
    let indent = style.skill_row_indent;

    let mut rows = Vec::new();
    for category in SkillCategory::ALL {
        let Some(items) = skills.get(&category) else {
            continue;
        };
        let joined = items
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| t.escape(s))
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            continue;
        }
        let (label, padding) = skill_row_label(category);
        rows.push(format!("{indent}\\resumeSubItem{{{label}}}{{{padding}{joined}}}\n"));
    }

    if t == TemplateId::Extended && !languages.is_empty() {
        let spoken = languages
            .iter()
            .map(|l| format!("{} ({})", t.escape(&l.language), t.escape(l.proficiency.as_str())))
            .collect::<Vec<_>>()
            .join(", ");
        let (label, padding) = SPOKEN_LANGUAGES_ROW;
        rows.push(format!("{indent}\\resumeSubItem{{{label}}}{{{padding}{spoken}}}\n"));
    }

    if rows.is_empty() {
        return None;
    }

    let mut out = format!("\\vspace{{-5pt}}\n\\section{{Skills Summary}}\n{indent}\\resumeSubHeadingListStart\n");
    for row in rows {
        out.push_str(&row);
    }
    out.push_str("\n\\resumeSubHeadingListEnd\n");
    Some(Fragment::new(Section::Skills, out))
}

pub fn experience(entries: &[ExperienceEntry], t: TemplateId) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }
    let style = t.style();

    let mut out = String::from("\\vspace{-5pt}\n\\section{Experience}\n  \\resumeSubHeadingListStart\n");
    for (i, exp) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(style.experience_gap);
        }

        out.push_str(&format!(
            "    \\resumeSubheading{{{}}}{{{}}}\n    {{{}}}{{{}}}",
            t.escape(&exp.company),
            t.escape(&exp.location),
            t.escape(&exp.job_title),
            t.escape(&date_range(&exp.start_date, &exp.end_date)),
        ));

        let bullets = bullet_list(&exp.description, t);
        if bullets.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&bullets);
        }
        out.push_str(style.experience_trailer);
    }

    out.push_str(match t {
        TemplateId::Classic => "\n\\resumeSubHeadingListEnd\n",
        TemplateId::Extended => "\\resumeSubHeadingListEnd\n\n",
    });
    Some(Fragment::new(Section::Experience, out))
}

pub fn projects(entries: &[ProjectEntry], t: TemplateId) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }
    let style = t.style();

    let mut out = String::new();
    if style.section_banners {
        out.push_str("%-----------PROJECTS-----------------\n");
    }
    out.push_str("\\vspace{-5pt}\n\\section{Projects}\n\\resumeSubHeadingListStart\n");

    for (i, project) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(style.project_gap);
        }

        let date = if project.date.is_empty() {
            date_range(&project.start_date, &project.end_date)
        } else {
            project.date.clone()
        };

        match t {
            TemplateId::Classic => {
                let name = t.escape(&project.name);
                let title = if project.technologies.is_empty() {
                    name
                } else {
                    format!("{name} ({})", t.escape(&project.technologies))
                };
                let mut desc = t.escape(&flatten(&project.description));
                if !date.is_empty() {
                    if desc.is_empty() {
                        desc = t.escape(&date);
                    } else {
                        desc.push_str(&format!(" ({})", t.escape(&date)));
                    }
                }
                out.push_str(&format!("\\resumeSubItem{{{title}}}{{{desc}}}\n"));
            }
            TemplateId::Extended => {
                let tech = if project.technologies.is_empty() {
                    String::new()
                } else {
                    format!("Technologies: {}", t.escape(&project.technologies))
                };
                out.push_str(&format!(
                    "    \\resumeSubheading{{{}}}{{{}}}\n    {{{}}}{{{}}}",
                    t.escape(&project.name),
                    t.escape(&date),
                    tech,
                    t.escape(&project.link),
                ));
                let bullets = bullet_list(&project.description, t);
                if bullets.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&bullets);
                }
                out.push('\n');
            }
        }
    }

    out.push_str(match t {
        TemplateId::Classic => "\\resumeSubHeadingListEnd\n",
        TemplateId::Extended => "\\resumeSubHeadingListEnd\n\n",
    });
    Some(Fragment::new(Section::Projects, out))
}

pub fn publications(entries: &[PublicationEntry], t: TemplateId) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }
    let style = t.style();

    let mut out = String::from("\\vspace{-5pt}\n\\section{Publications}\n\\resumeSubHeadingListStart\n");
    for (i, publication) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(style.publication_gap);
        }

        let (title, description) = match t {
            TemplateId::Classic => {
                let title = if publication.venue.is_empty() {
                    t.escape(&publication.title)
                } else {
                    format!(
                        "{} ({})",
                        t.escape(&publication.title),
                        t.escape(&publication.venue)
                    )
                };
                let description = if publication.date.is_empty() {
                    String::new()
                } else {
                    format!("Published in {}", t.escape(&publication.date))
                };
                (title, description)
            }
            TemplateId::Extended => {
                let mut description = String::new();
                if !publication.venue.is_empty() {
                    description.push_str(&format!("Published in {}", t.escape(&publication.venue)));
                }
                if !publication.date.is_empty() {
                    let date = t.escape(&publication.date);
                    if description.is_empty() {
                        description.push_str(&format!("Published in {date}"));
                    } else {
                        description.push_str(&format!(", {date}"));
                    }
                }
                if !publication.authors.is_empty() {
                    let authors = t.escape(&publication.authors);
                    if description.is_empty() {
                        description.push_str(&format!("Authors: {authors}"));
                    } else {
                        description.push_str(&format!(". Authors: {authors}"));
                    }
                }
                (t.escape(&publication.title), description)
            }
        };

        out.push_str(&format!("\\resumeSubItem{{{title}}}{{{description}}}\n"));
    }

    out.push_str("\\resumeSubHeadingListEnd\n");
    Some(Fragment::new(Section::Publications, out))
}

pub fn achievements(entries: &[AchievementEntry], t: TemplateId) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }

    let mut out = String::from("\\vspace{-5pt}\n");
    if t.style().section_banners {
        out.push_str("%-----------Awards-----------------\n");
    }
    out.push_str("\\section{Honors and Awards}\n\\begin{description}[font=$\\bullet$]\n");

    for achievement in entries {
        let mut line = t.escape(&achievement.title);
        if t == TemplateId::Extended && !achievement.organization.is_empty() {
            line.push_str(&format!(" at {}", t.escape(&achievement.organization)));
        }
        if !achievement.date.is_empty() {
            line.push_str(&format!(" - {}", t.escape(&achievement.date)));
        }
        out.push_str(&format!("\\item {{{line}}}\n\\vspace{{-5pt}}\n"));
    }

    out.push_str(match t {
        TemplateId::Classic => "\n\\end{description}\n",
        TemplateId::Extended => "\\end{description}\n\n",
    });
    Some(Fragment::new(Section::Achievements, out))
}

pub fn certifications(entries: &[CertificationEntry], t: TemplateId) -> Option<Fragment> {
    if entries.is_empty() {
        return None;
    }
    let style = t.style();

    let mut out = String::from("\\vspace{-5pt}\n\\section{Certifications}\n\\resumeSubHeadingListStart\n");
    for (i, cert) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(style.certification_gap);
        }

        let mut description = String::new();
        if !cert.issuer.is_empty() {
            description.push_str(&format!("Issued by {}", t.escape(&cert.issuer)));
        }
        if !cert.date.is_empty() {
            let date = t.escape(&cert.date);
            if description.is_empty() {
                description.push_str(&format!("Issued in {date}"));
            } else {
                description.push_str(&format!(", {date}"));
            }
        }
        if !cert.credential_id.is_empty() {
            let id = t.escape(&cert.credential_id);
            if description.is_empty() {
                description.push_str(&format!("Credential ID: {id}"));
            } else {
                description.push_str(&format!(" (Credential ID: {id})"));
            }
        }

        out.push_str(&format!(
            "\\resumeSubItem{{{}}}{{{description}}}\n",
            t.escape(&cert.name)
        ));
    }

    out.push_str("\\resumeSubHeadingListEnd\n");
    Some(Fragment::new(Section::Certifications, out))
}

pub fn interests(interests: &[String], t: TemplateId) -> Option<Fragment> {
    let joined = interests
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| t.escape(s))
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        return None;
    }
    Some(Fragment::new(
        Section::Interests,
        format!("\\vspace{{-5pt}}\n\\section{{Interests}}\n{joined}\n\n"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Proficiency;

    fn job(title: &str, company: &str, description: &str) -> ExperienceEntry {
        ExperienceEntry {
            job_title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_date_range_rules() {
        assert_eq!(date_range("2020", "2022"), "2020 - 2022");
        assert_eq!(date_range("2020", ""), "2020 - Present");
        assert_eq!(date_range("", "2022"), "");
        assert_eq!(date_range("", ""), "");
    }

    #[test]
    fn test_empty_sections_render_nothing() {
        for t in [TemplateId::Classic, TemplateId::Extended] {
            assert!(education(&[], t).is_none());
            assert!(experience(&[], t).is_none());
            assert!(projects(&[], t).is_none());
            assert!(publications(&[], t).is_none());
            assert!(achievements(&[], t).is_none());
            assert!(certifications(&[], t).is_none());
            assert!(skills(&SkillsMap::new(), &[], t).is_none());
            assert!(interests(&[], t).is_none());
            assert!(summary(&PersonalInfo::default(), t).is_none());
        }
    }

    #[test]
    fn test_header_escapes_and_skips_empty_rows() {
        let personal = PersonalInfo {
            full_name: "Jane_Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        };
        let frag = header(&personal, TemplateId::Classic);
        assert_eq!(frag.section, Section::Header);
        assert!(frag.markup.contains(r"\textbf{{\LARGE Jane\_Doe}} & Email: jane@x.com\\"));
        assert!(!frag.markup.contains("Portfolio:"));
        assert!(!frag.markup.contains("Github:"));
    }

    #[test]
    fn test_header_includes_contact_rows_when_present() {
        let personal = PersonalInfo {
            full_name: "Jane".to_string(),
            email: "j@x.com".to_string(),
            phone: "555".to_string(),
            github: "github.com/jane".to_string(),
            ..Default::default()
        };
        let frag = header(&personal, TemplateId::Extended);
        assert!(frag.markup.contains("  Portfolio:  & Mobile:~~~555 \\\\\n"));
        assert!(frag.markup.contains("  Github: ~~github.com/jane \\\\\n"));
    }

    #[test]
    fn test_experience_spacing_between_entries_only() {
        let entries = vec![
            job("Engineer", "Acme", "- one"),
            job("Lead", "Initech", "- two"),
            job("CTO", "Globex", ""),
        ];
        let classic = experience(&entries, TemplateId::Classic).unwrap().markup;
        assert_eq!(classic.matches(r"\vspace{30pt}").count(), 2);
        assert_eq!(classic.matches(r"\vspace{20pt}").count(), 3);
        assert!(classic.find("Acme").unwrap() < classic.find(r"\vspace{30pt}").unwrap());

        let extended = experience(&entries, TemplateId::Extended).unwrap().markup;
        assert_eq!(extended.matches(r"\vspace{10pt}").count(), 2);
        assert!(!extended.contains(r"\vspace{30pt}"));
    }

    #[test]
    fn test_experience_without_description_has_no_item_list() {
        let markup = experience(&[job("CTO", "Globex", "")], TemplateId::Classic)
            .unwrap()
            .markup;
        assert!(!markup.contains(r"\resumeItemListStart"));
        assert!(markup.contains("    \\resumeSubheading{Globex}{}\n    {CTO}{}\n"));
    }

    #[test]
    fn test_experience_dates_and_bullets() {
        let mut entry = job("Engineer", "Acme & Co", "- Built X\n- Cut cost 10%");
        entry.start_date = "Jan 2020".to_string();
        let markup = experience(&[entry], TemplateId::Extended).unwrap().markup;
        assert!(markup.contains(r"\resumeSubheading{Acme \& Co}{}"));
        assert!(markup.contains("{Engineer}{Jan 2020 - Present}"));
        assert!(markup.contains(r"\resumeItemWithoutTitle{Built X}"));
        assert!(markup.contains(r"\resumeItemWithoutTitle{Cut cost 10\%}"));
    }

    #[test]
    fn test_education_date_and_gpa() {
        let edu = EducationEntry {
            degree: "B.Sc. CS".to_string(),
            institution: "MIT".to_string(),
            graduation_date: "2021".to_string(),
            start_date: "2017".to_string(),
            gpa: "3.9/4".to_string(),
            relevant_coursework: "Algorithms, OS".to_string(),
            ..Default::default()
        };
        let markup = education(&[edu], TemplateId::Classic).unwrap().markup;
        assert!(markup.starts_with("%-----------EDUCATION-----------------\n"));
        assert!(markup.contains("{B.Sc. CS;  GPA: 3.9/4}{2021}"));
        assert!(markup.contains(r"\textbf{Courses:} Algorithms, OS}}}"));
    }

    #[test]
    fn test_skills_follow_fixed_category_order() {
        let mut map = SkillsMap::new();
        map.insert(SkillCategory::SoftSkills, vec!["Mentoring".to_string()]);
        map.insert(SkillCategory::Languages, vec!["Rust".to_string(), "C#".to_string()]);
        let markup = skills(&map, &[], TemplateId::Classic).unwrap().markup;
        let langs = markup.find(r"\resumeSubItem{Languages}{~~~~~~Rust, C\#}").unwrap();
        let soft = markup.find(r"\resumeSubItem{Soft Skills}{~~~~~~~Mentoring}").unwrap();
        assert!(langs < soft);
    }

    #[test]
    fn test_spoken_languages_only_in_extended() {
        let languages = vec![LanguageEntry {
            language: "Spanish".to_string(),
            proficiency: Proficiency::Fluent,
        }];
        assert!(skills(&SkillsMap::new(), &languages, TemplateId::Classic).is_none());
        let markup = skills(&SkillsMap::new(), &languages, TemplateId::Extended)
            .unwrap()
            .markup;
        assert!(markup.contains(r"\resumeSubItem{Spoken}{~~~~~~~~~Spanish (Fluent)}"));
    }

    #[test]
    fn test_classic_project_is_single_line() {
        let project = ProjectEntry {
            name: "Crawler".to_string(),
            technologies: "Rust, Tokio".to_string(),
            date: "2023".to_string(),
            description: "Fast\nweb crawler".to_string(),
            ..Default::default()
        };
        let markup = projects(&[project], TemplateId::Classic).unwrap().markup;
        assert!(markup.contains(r"\resumeSubItem{Crawler (Rust, Tokio)}{Fast web crawler (2023)}"));
    }

    #[test]
    fn test_extended_project_has_subheading_and_bullets() {
        let project = ProjectEntry {
            name: "Crawler".to_string(),
            technologies: "Rust".to_string(),
            start_date: "2023".to_string(),
            link: "github.com/x/crawler".to_string(),
            description: "- Parallel fetch\n- Dedup".to_string(),
            ..Default::default()
        };
        let markup = projects(&[project], TemplateId::Extended).unwrap().markup;
        assert!(markup.contains("\\resumeSubheading{Crawler}{2023 - Present}\n    {Technologies: Rust}{github.com/x/crawler}"));
        assert_eq!(markup.matches(r"\resumeItemWithoutTitle{").count(), 2);
    }

    #[test]
    fn test_project_spacing_between_entries_only() {
        let entries: Vec<ProjectEntry> = ["Crawler", "Indexer", "Ranker"]
            .iter()
            .map(|name| ProjectEntry {
                name: name.to_string(),
                ..Default::default()
            })
            .collect();
        let classic = projects(&entries, TemplateId::Classic).unwrap().markup;
        assert_eq!(classic.matches(r"\vspace{20pt}").count(), 2);
        assert!(classic.find("Crawler").unwrap() < classic.find(r"\vspace{20pt}").unwrap());

        let extended = projects(&entries, TemplateId::Extended).unwrap().markup;
        assert_eq!(extended.matches(r"\vspace{10pt}").count(), 2);
        assert!(extended.find("Crawler").unwrap() < extended.find(r"\vspace{10pt}").unwrap());
    }

    #[test]
    fn test_publication_spacing_between_entries_only() {
        let entries: Vec<PublicationEntry> = ["Fast Joins", "Slow Scans"]
            .iter()
            .map(|title| PublicationEntry {
                title: title.to_string(),
                ..Default::default()
            })
            .collect();
        let classic = publications(&entries, TemplateId::Classic).unwrap().markup;
        assert_eq!(classic.matches(r"\vspace{2pt}").count(), 1);
        assert!(classic.find("Fast Joins").unwrap() < classic.find(r"\vspace{2pt}").unwrap());

        let extended = publications(&entries, TemplateId::Extended).unwrap().markup;
        assert_eq!(extended.matches(r"\vspace{8pt}").count(), 1);

        let single = publications(&entries[..1], TemplateId::Extended).unwrap().markup;
        assert!(!single.contains(r"\vspace{8pt}"));
    }

    #[test]
    fn test_certification_spacing_between_entries_only() {
        let entries: Vec<CertificationEntry> = ["CKA", "CKAD", "AWS SA"]
            .iter()
            .map(|name| CertificationEntry {
                name: name.to_string(),
                ..Default::default()
            })
            .collect();
        let classic = certifications(&entries, TemplateId::Classic).unwrap().markup;
        assert_eq!(classic.matches(r"\vspace{2pt}").count(), 2);

        let extended = certifications(&entries, TemplateId::Extended).unwrap().markup;
        assert_eq!(extended.matches(r"\vspace{8pt}").count(), 2);
        assert!(extended.find("{CKA}").unwrap() < extended.find(r"\vspace{8pt}").unwrap());
    }

    #[test]
    fn test_publication_descriptions() {
        let publication = PublicationEntry {
            title: "Fast Joins".to_string(),
            venue: "VLDB".to_string(),
            date: "2022".to_string(),
            authors: "J. Doe, A. Smith".to_string(),
        };
        let classic = publications(&[publication.clone()], TemplateId::Classic)
            .unwrap()
            .markup;
        assert!(classic.contains(r"\resumeSubItem{Fast Joins (VLDB)}{Published in 2022}"));

        let extended = publications(&[publication], TemplateId::Extended)
            .unwrap()
            .markup;
        assert!(extended.contains(
            r"\resumeSubItem{Fast Joins}{Published in VLDB, 2022. Authors: J. Doe, A. Smith}"
        ));
    }

    #[test]
    fn test_achievement_lines() {
        let award = AchievementEntry {
            title: "Best Paper".to_string(),
            date: "2022".to_string(),
            organization: "ACM".to_string(),
            ..Default::default()
        };
        let classic = achievements(&[award.clone()], TemplateId::Classic).unwrap().markup;
        assert!(classic.contains(r"\item {Best Paper - 2022}"));
        let extended = achievements(&[award], TemplateId::Extended).unwrap().markup;
        assert!(extended.contains(r"\item {Best Paper at ACM - 2022}"));
    }

    #[test]
    fn test_certification_description() {
        let cert = CertificationEntry {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2023".to_string(),
            credential_id: "ABC_123".to_string(),
        };
        let markup = certifications(&[cert], TemplateId::Extended).unwrap().markup;
        assert!(markup.contains(
            r"\resumeSubItem{CKA}{Issued by CNCF, 2023 (Credential ID: ABC\_123)}"
        ));
    }
}
