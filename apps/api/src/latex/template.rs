//! Fixed LaTeX template skeletons.
//!
//! Both templates share one preamble (custom `\resume*` commands, margins, section style);
//! they differ in hyperref options, which sections they render, the vertical spacing tokens
//! placed between entries, and how strictly text is escaped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::latex::escape::{escape, escape_strict};
use crate::models::resume::SkillCategory;

/// Which fixed skeleton and spacing constants to render with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// Compact single-page layout: no summary, certifications or interests.
    Classic,
    /// Full layout with every section.
    #[default]
    Extended,
}

impl TemplateId {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Extended => "extended",
        }
    }

    pub fn style(self) -> &'static TemplateStyle {
        match self {
            TemplateId::Classic => &CLASSIC,
            TemplateId::Extended => &EXTENDED,
        }
    }

    /// Escapes `text` with the rules this template uses.
    pub fn escape(self, text: &str) -> String {
        if self.style().strict_escaping {
            escape_strict(text)
        } else {
            escape(text)
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(TemplateId::Classic),
            "extended" => Ok(TemplateId::Extended),
            other => Err(format!("unknown template '{other}' (expected classic or extended)")),
        }
    }
}

/// Literal spacing tokens and switches for one template.
#[derive(Debug)]
pub struct TemplateStyle {
    pub hyperref_options: &'static str,
    pub strict_escaping: bool,
    /// Emitted before every experience entry but the first.
    pub experience_gap: &'static str,
    /// Emitted after every experience entry.
    pub experience_trailer: &'static str,
    pub project_gap: &'static str,
    pub publication_gap: &'static str,
    pub certification_gap: &'static str,
    /// Prefix for each row inside the skills list.
    pub skill_row_indent: &'static str,
    /// Comment banner emitted before the education and projects headings.
    pub section_banners: bool,
}

pub static CLASSIC: TemplateStyle = TemplateStyle {
    hyperref_options: "pdftex",
    strict_escaping: false,
    experience_gap: "\\vspace{30pt}\n",
    experience_trailer: "\\vspace{20pt}\n",
    project_gap: "\\vspace{20pt}\n",
    publication_gap: "\\vspace{2pt}\n",
    certification_gap: "\\vspace{2pt}\n",
    skill_row_indent: "",
    section_banners: true,
};

pub static EXTENDED: TemplateStyle = TemplateStyle {
    hyperref_options: "hidelinks",
    strict_escaping: true,
    experience_gap: "\\vspace{10pt}\n",
    experience_trailer: "\n",
    project_gap: "\\vspace{10pt}\n",
    publication_gap: "\\vspace{8pt}\n",
    certification_gap: "\\vspace{8pt}\n",
    skill_row_indent: "\t",
    section_banners: false,
};

/// Row label and hand-tuned `~` padding for each skill category.
pub fn skill_row_label(category: SkillCategory) -> (&'static str, &'static str) {
    match category {
        SkillCategory::Languages => ("Languages", "~~~~~~"),
        SkillCategory::Frameworks => ("Frameworks", "~~~~"),
        SkillCategory::Tools => ("Tools", "~~~~~~~~~~~~~~"),
        SkillCategory::Databases => ("Platforms", "~~~~~~~"),
        SkillCategory::TechnicalSkills => ("Technical", "~~~~~~~"),
        SkillCategory::SoftSkills => ("Soft Skills", "~~~~~~~"),
    }
}

/// Label and padding for the spoken-languages row appended to the skills list.
pub const SPOKEN_LANGUAGES_ROW: (&str, &str) = ("Spoken", "~~~~~~~~~");

const PREAMBLE_HEAD: &str = r"%------------------------
% Resume Template
% Author : Anubhav Singh
% Github : https://github.com/xprilion
% License : MIT
%------------------------

\documentclass[a4paper,20pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
";

const PREAMBLE_TAIL: &str = r"\usepackage{fancyhdr}

\pagestyle{fancy}
\fancyhf{} % clear all header and footer fields
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

% Adjust margins
\addtolength{\oddsidemargin}{-0.530in}
\addtolength{\evensidemargin}{-0.375in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.45in}
\addtolength{\textheight}{1in}

\urlstyle{rm}

\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

% Sections formatting
\titleformat{\section}{
  \vspace{-10pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-6pt}]

%-------------------------
% Custom commands
\newcommand{\resumeItem}[2]{
  \item\small{
    \textbf{#1}{: #2 \vspace{-2pt}}
  }
}

\newcommand{\resumeItemWithoutTitle}[1]{
  \item\small{
    {#1 \vspace{-2pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-1pt}\item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{#3} & \textit{#4} \\
    \end{tabular*}\vspace{-5pt}
}

\newcommand{\resumeSubItem}[2]{\resumeItem{#1}{#2}\vspace{-3pt}}

\renewcommand{\labelitemii}{$\circ$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=*]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}

%-----------------------------
%%%%%%  CV STARTS HERE  %%%%%%

\begin{document}

%----------HEADING-----------------
";

/// Wraps a rendered header and section body in the template's document skeleton.
pub fn wrap_document(template: TemplateId, header: &str, sections: &str) -> String {
    let style = template.style();
    let mut doc = String::with_capacity(
        PREAMBLE_HEAD.len() + PREAMBLE_TAIL.len() + header.len() + sections.len() + 128,
    );
    doc.push_str(PREAMBLE_HEAD);
    doc.push_str(&format!(
        "\\usepackage[{}]{{hyperref}}\n",
        style.hyperref_options
    ));
    doc.push_str(PREAMBLE_TAIL);
    doc.push_str(header);
    doc.push_str("\n\n");
    match template {
        TemplateId::Classic => {
            doc.push_str(sections);
            doc.push_str("\n\n");
        }
        TemplateId::Extended => {
            doc.push_str("%-----------SECTIONS-----------------\n");
            doc.push_str(sections);
            doc.push('\n');
        }
    }
    doc.push_str("\\end{document}");
    doc
}
