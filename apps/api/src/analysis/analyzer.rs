//! Resume analysis against a target role.
//!
//! The model is asked for a JSON report. Whatever comes back is cleaned, parsed and
//! completed with defaults; if the call or the parse fails a canned report is returned
//! instead, overlaid with any scores that can be salvaged from the raw answer. Analysis never
//! fails from the caller's point of view.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::analysis::prompts::analysis_prompt;
use crate::analysis::report::{
    emergency_report, fallback_report, AnalysisReport, ContentInsights, ReportSource, Salvaged,
    DEFAULT_ATS_SCORE, DEFAULT_MATCH_PERCENTAGE, DEFAULT_OVERALL_SCORE,
};
use crate::llm_client::{strip_json_fences, Assistant};

pub async fn analyze_resume(
    assistant: &dyn Assistant,
    resume_text: &str,
    job_role: &str,
) -> AnalysisReport {
    let resume_text = resume_text.trim();
    let job_role = job_role.trim();

    let mut report = if resume_text.is_empty() || job_role.is_empty() {
        emergency_report()
    } else {
        match assistant.submit(&analysis_prompt(resume_text, job_role)).await {
            Ok(answer) => parse_report(&answer, job_role),
            Err(e) => {
                warn!(error = %e, "resume analysis call failed; using fallback report");
                fallback_report(job_role, Salvaged::default())
            }
        }
    };

    report.content_insights = content_insights(resume_text);
    info!(
        job_role,
        source = ?report.source,
        match_percentage = report.match_percentage,
        "resume analysis complete"
    );
    report
}

/// Parses a model answer into a completed report, or falls back.
fn parse_report(answer: &str, job_role: &str) -> AnalysisReport {
    let parsed = extract_json_object(answer)
        .and_then(|json| serde_json::from_str::<AnalysisReport>(json).ok());

    match parsed {
        Some(report) => fill_defaults(report, job_role),
        None => {
            warn!("resume analysis answer was not valid JSON; salvaging what we can");
            fallback_report(job_role, salvage(answer))
        }
    }
}

/// Strips code fences and slices from the first `{` to the last `}`.
pub fn extract_json_object(answer: &str) -> Option<&str> {
    let text = strip_json_fences(answer);
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn fill_defaults(mut report: AnalysisReport, job_role: &str) -> AnalysisReport {
    if report.match_percentage == 0 {
        report.match_percentage = DEFAULT_MATCH_PERCENTAGE;
    }
    if report.overall_score == 0 {
        report.overall_score = DEFAULT_OVERALL_SCORE;
    }
    if report.summary.is_empty() {
        report.summary = format!("Professional analysis for {job_role} position");
    }
    if report.ats_compatibility.score == 0 {
        report.ats_compatibility.score = DEFAULT_ATS_SCORE;
    }
    report.source = ReportSource::Llm;
    report
}

static MATCH_PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)match[_\s]*percentage["\s]*:?\s*(\d+)"#).unwrap());
static OVERALL_SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)overall[_\s]*score["\s]*:?\s*(\d+)"#).unwrap());
static SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)summary["\s]*:?\s*["']([^"']+)["']"#).unwrap());

/// Pulls scores and the summary out of free text.
pub fn salvage(answer: &str) -> Salvaged {
    let number = |re: &Regex| {
        re.captures(answer)
            .and_then(|c| c[1].parse::<u32>().ok())
    };

    Salvaged {
        match_percentage: number(&*MATCH_PERCENTAGE),
        overall_score: number(&*OVERALL_SCORE),
        summary: SUMMARY
            .captures(answer)
            .map(|c| c[1].trim().to_string())
            .filter(|s| !s.is_empty()),
    }
}

static YEARS_EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)").unwrap()
});
static PERCENTAGE_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.\n]*\d+%[^.\n]*").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Measures the resume text directly.
pub fn content_insights(resume_text: &str) -> ContentInsights {
    let lower = resume_text.to_lowercase();
    let years_experience = YEARS_EXPERIENCE
        .captures_iter(&lower)
        .filter_map(|c| c[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    let quantified_achievements = PERCENTAGE_CLAUSE
        .find_iter(resume_text)
        .map(|m| m.as_str().trim().to_string())
        .take(2)
        .collect();

    ContentInsights {
        years_experience,
        quantified_achievements,
        word_count: resume_text.split_whitespace().count(),
        has_contact_info: EMAIL.is_match(resume_text),
    }
}
