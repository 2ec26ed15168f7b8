//! Prompt builders for resume analysis and career chat.

use crate::analysis::chat::ChatTurn;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Resume characters embedded in an analysis prompt.
pub const ANALYSIS_RESUME_CHARS: usize = 6000;
/// Resume characters embedded in a chat prompt.
pub const CHAT_RESUME_CHARS: usize = 1000;
/// Most recent history turns replayed into a chat prompt.
pub const CHAT_HISTORY_TURNS: usize = 4;
/// Characters kept from each replayed turn.
pub const CHAT_TURN_CHARS: usize = 150;

/// The first `max` characters of `text`, cut on a char boundary.
pub fn head(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn analysis_prompt(resume_text: &str, job_role: &str) -> String {
    format!(
        r#"Perform a comprehensive analysis of this resume for the "{job_role}" position.

RESUME CONTENT:
{resume}

TARGET ROLE: {job_role}

Provide a detailed JSON analysis with the following structure:
{{
    "match_percentage": <0-100, based on role alignment, skills match and experience relevance>,
    "overall_score": <1-100, based on resume quality and role fit>,
    "summary": "<3-4 sentence personalized summary of key strengths and areas to improve>",
    "strengths": ["<specific strength from the resume>", "..."],
    "weaknesses": ["<specific gap in the resume>", "..."],
    "found_skills": ["<skills actually mentioned in the resume>"],
    "missing_skills": ["<skills needed for {job_role} but not found>"],
    "suggested_keywords": ["<industry keywords for {job_role}>"],
    "weak_sections": ["<resume sections that need improvement>"],
    "suggestions": ["<actionable improvement>", "..."],
    "ats_compatibility": {{
        "score": <1-100 ATS friendliness>,
        "issues": ["<specific ATS issue>"],
        "recommendations": ["<specific ATS improvement>"]
    }}
}}

IMPORTANT:
- Base ALL analysis on the actual resume content provided
- Make recommendations specific to the {job_role} position
- Provide actionable, specific feedback rather than generic advice

{JSON_ONLY_INSTRUCTION}"#,
        resume = head(resume_text, ANALYSIS_RESUME_CHARS),
    )
}

pub fn chat_prompt(message: &str, resume_text: &str, history: &[ChatTurn]) -> String {
    let resume = if resume_text.trim().is_empty() {
        "No resume uploaded"
    } else {
        head(resume_text, CHAT_RESUME_CHARS)
    };

    let recent = &history[history.len().saturating_sub(CHAT_HISTORY_TURNS)..];
    let conversation: String = recent
        .iter()
        .map(|turn| format!("{}: {}\n", turn.role, head(&turn.content, CHAT_TURN_CHARS)))
        .collect();

    format!(
        "The user has uploaded their resume and wants career advice.

RESUME SUMMARY (first {CHAT_RESUME_CHARS} chars):
{resume}

RECENT CONVERSATION:
{conversation}
USER QUESTION: {message}

Provide a helpful, specific response based on the actual resume content. Be encouraging \
but honest and strict. Keep the response under 250 words.

Focus on specific advice from their resume, actionable next steps and realistic feedback.
Do NOT mention specific job titles or roles unless the user explicitly asks about them.
Answer only what the user asks; do not summarize the resume unless asked."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_respects_char_boundaries() {
        assert_eq!(head("héllo", 2), "hé");
        assert_eq!(head("abc", 10), "abc");
        assert_eq!(head("", 3), "");
    }

    #[test]
    fn test_analysis_prompt_truncates_resume() {
        let resume = "x".repeat(ANALYSIS_RESUME_CHARS + 500);
        let prompt = analysis_prompt(&resume, "SRE");
        assert!(prompt.contains(&"x".repeat(ANALYSIS_RESUME_CHARS)));
        assert!(!prompt.contains(&"x".repeat(ANALYSIS_RESUME_CHARS + 1)));
        assert!(prompt.contains("TARGET ROLE: SRE"));
    }

    #[test]
    fn test_chat_prompt_keeps_last_four_turns() {
        let history: Vec<ChatTurn> = (0..6)
            .map(|i| ChatTurn {
                role: "user".to_string(),
                content: format!("turn-{i}"),
            })
            .collect();
        let prompt = chat_prompt("hi", "", &history);
        assert!(prompt.contains("No resume uploaded"));
        assert!(!prompt.contains("turn-1"));
        assert!(prompt.contains("turn-2"));
        assert!(prompt.contains("turn-5"));
    }

    #[test]
    fn test_chat_prompt_truncates_turns() {
        let history = vec![ChatTurn {
            role: "assistant".to_string(),
            content: "y".repeat(400),
        }];
        let prompt = chat_prompt("hi", "resume", &history);
        assert!(prompt.contains(&format!("assistant: {}\n", "y".repeat(CHAT_TURN_CHARS))));
    }
}
