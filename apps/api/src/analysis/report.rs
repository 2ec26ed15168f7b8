//! Analysis report data model and its canned fallbacks.

use serde::{Deserialize, Deserializer, Serialize};

/// Full analysis returned to callers. Fields the model leaves out deserialize to zero or
/// empty and are filled in afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    #[serde(deserialize_with = "lenient_score")]
    pub match_percentage: u32,
    #[serde(deserialize_with = "lenient_score")]
    pub overall_score: u32,
    #[serde(deserialize_with = "lenient_text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_list")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub weaknesses: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub found_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub missing_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub suggested_keywords: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub weak_sections: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub suggestions: Vec<String>,
    pub ats_compatibility: AtsCompatibility,
    pub content_insights: ContentInsights,
    /// Which path produced the report.
    pub source: ReportSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsCompatibility {
    #[serde(deserialize_with = "lenient_score")]
    pub score: u32,
    #[serde(deserialize_with = "lenient_list")]
    pub issues: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub recommendations: Vec<String>,
}

/// Facts measured directly from the resume text, independent of the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentInsights {
    pub years_experience: u32,
    pub quantified_achievements: Vec<String>,
    pub word_count: usize,
    pub has_contact_info: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    #[default]
    Llm,
    /// The model failed or its answer could not be parsed.
    Fallback,
    /// Resume text or job role was missing; no model call was made.
    Emergency,
}

pub const DEFAULT_MATCH_PERCENTAGE: u32 = 75;
pub const DEFAULT_OVERALL_SCORE: u32 = 7;
pub const DEFAULT_ATS_SCORE: u32 = 7;

/// Accepts integers, floats (rounded) and numeric strings; anything else is zero and gets
/// replaced by the field default.
fn lenient_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n.round().min(u32::MAX as f64) as u32)
        .unwrap_or(0))
}

/// Null reads as empty; numbers are stringified.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(&serde_json::Value::deserialize(deserializer)?))
}

/// Null reads as an empty list, a lone string as a one-item list. Blank items are dropped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Null => Vec::new(),
        other => vec![other],
    };
    Ok(items
        .iter()
        .map(scalar_text)
        .filter(|s| !s.is_empty())
        .collect())
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returned when resume text or job role is empty.
pub fn emergency_report() -> AnalysisReport {
    AnalysisReport {
        match_percentage: 70,
        overall_score: DEFAULT_OVERALL_SCORE,
        summary: "Resume analysis requires both resume content and target job role. \
                  Please ensure both are provided for comprehensive evaluation."
            .to_string(),
        strengths: strings(&["Resume format is readable", "Ready for detailed analysis"]),
        weaknesses: strings(&["Complete analysis requires more information"]),
        found_skills: Vec::new(),
        missing_skills: Vec::new(),
        suggested_keywords: Vec::new(),
        weak_sections: Vec::new(),
        suggestions: strings(&["Upload complete resume for personalized analysis"]),
        ats_compatibility: AtsCompatibility {
            score: DEFAULT_ATS_SCORE,
            issues: Vec::new(),
            recommendations: Vec::new(),
        },
        content_insights: ContentInsights::default(),
        source: ReportSource::Emergency,
    }
}

/// Values salvaged from a model answer that was not valid JSON.
#[derive(Debug, Default, PartialEq)]
pub struct Salvaged {
    pub match_percentage: Option<u32>,
    pub overall_score: Option<u32>,
    pub summary: Option<String>,
}

/// Generic role-oriented report, overlaid with whatever could be salvaged.
pub fn fallback_report(job_role: &str, salvaged: Salvaged) -> AnalysisReport {
    AnalysisReport {
        match_percentage: salvaged.match_percentage.unwrap_or(DEFAULT_MATCH_PERCENTAGE),
        overall_score: salvaged.overall_score.unwrap_or(DEFAULT_OVERALL_SCORE),
        summary: salvaged.summary.unwrap_or_else(|| {
            format!(
                "Resume shows potential for {job_role} position with opportunities for \
                 optimization based on role requirements and industry standards."
            )
        }),
        strengths: strings(&[
            "Professional experience in relevant field",
            "Clear resume structure and presentation",
            "Educational background supports career goals",
        ]),
        weaknesses: strings(&[
            "Could benefit from more quantified achievements",
            "Consider adding more role-specific keywords",
            "Professional summary could be more targeted",
        ]),
        found_skills: Vec::new(),
        missing_skills: Vec::new(),
        suggested_keywords: strings(&[
            "results-driven",
            "collaborative",
            "innovative",
            "problem-solving",
        ]),
        weak_sections: strings(&[
            "Experience descriptions need more metrics",
            "Skills section could be more comprehensive",
        ]),
        suggestions: vec![
            format!("Add specific metrics to achievements relevant to {job_role}"),
            format!("Include more {job_role}-specific keywords throughout"),
            "Strengthen professional summary with role-targeted language".to_string(),
        ],
        ats_compatibility: AtsCompatibility {
            score: DEFAULT_ATS_SCORE,
            issues: strings(&["Standard formatting recommended"]),
            recommendations: strings(&[
                "Use clear section headers",
                "Include relevant keywords naturally",
            ]),
        },
        content_insights: ContentInsights::default(),
        source: ReportSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_scores() {
        let ats: AtsCompatibility =
            serde_json::from_value(serde_json::json!({ "score": "82%" })).unwrap();
        assert_eq!(ats.score, 82);
        let ats: AtsCompatibility =
            serde_json::from_value(serde_json::json!({ "score": 64.6 })).unwrap();
        assert_eq!(ats.score, 65);
        let ats: AtsCompatibility =
            serde_json::from_value(serde_json::json!({ "score": "n/a" })).unwrap();
        assert_eq!(ats.score, 0);
    }

    #[test]
    fn test_lenient_lists_and_text() {
        let report: AnalysisReport = serde_json::from_value(serde_json::json!({
            "summary": null,
            "strengths": "Clear writing",
            "weaknesses": null,
            "found_skills": ["Rust", "", 42]
        }))
        .unwrap();
        assert_eq!(report.summary, "");
        assert_eq!(report.strengths, vec!["Clear writing"]);
        assert!(report.weaknesses.is_empty());
        assert_eq!(report.found_skills, vec!["Rust", "42"]);
    }

    #[test]
    fn test_fallback_uses_salvaged_values() {
        let report = fallback_report(
            "Data Engineer",
            Salvaged {
                match_percentage: Some(88),
                summary: Some("Solid fit".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(report.match_percentage, 88);
        assert_eq!(report.overall_score, DEFAULT_OVERALL_SCORE);
        assert_eq!(report.summary, "Solid fit");
        assert!(report.suggestions[1].contains("Data Engineer-specific"));
        assert_eq!(report.source, ReportSource::Fallback);
    }

    #[test]
    fn test_report_source_serializes_snake_case() {
        let json = serde_json::to_value(emergency_report()).unwrap();
        assert_eq!(json["source"], "emergency");
        assert_eq!(json["match_percentage"], 70);
    }
}
