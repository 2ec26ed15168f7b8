//! Career-advice chat over an uploaded resume.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::prompts::chat_prompt;
use crate::llm_client::Assistant;

/// One prior message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

fn default_role() -> String {
    "user".to_string()
}

pub const BLANK_MESSAGE_REPLY: &str =
    "Please ask a specific question about your resume or career.";

/// Answers `message`. Model failures are answered with a canned reply chosen by keyword.
pub async fn chat_reply(
    assistant: &dyn Assistant,
    message: &str,
    resume_text: &str,
    history: &[ChatTurn],
) -> String {
    let message = message.trim();
    if message.is_empty() {
        return BLANK_MESSAGE_REPLY.to_string();
    }

    match assistant
        .submit(&chat_prompt(message, resume_text, history))
        .await
    {
        Ok(reply) => reply.trim().to_string(),
        Err(e) => {
            warn!(error = %e, "chat call failed; using canned reply");
            fallback_reply(message).to_string()
        }
    }
}

/// Canned reply for when the model is unavailable.
pub fn fallback_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    if message.contains("improve") {
        IMPROVE_REPLY
    } else if message.contains("strong") || message.contains("strength") {
        STRENGTHS_REPLY
    } else if message.contains("keyword") {
        KEYWORDS_REPLY
    } else {
        GENERAL_REPLY
    }
}

const IMPROVE_REPLY: &str = "To improve your resume:

**Key Areas:**
- Add quantified achievements with specific numbers or percentages
- Include relevant keywords and technologies for your field
- Strengthen your professional summary
- Use strong action verbs in your experience descriptions

**Quick Tip:** Research job postings in your target field to identify the most common \
requirements and make sure your resume addresses them.

Would you like specific advice on any of these areas?";

const STRENGTHS_REPLY: &str = "Based on your resume:

**Likely Strengths:**
- Professional experience relevant to your field
- Educational background supporting your goals
- Clear resume structure and presentation

**To Identify Specific Strengths:** Upload a detailed resume so I can analyze your actual \
achievements, skills and experience.

**Pro Tip:** Your strongest points are usually quantified achievements that show \
measurable impact in previous roles.";

const KEYWORDS_REPLY: &str = "For professional positions, focus on these keyword categories:

**Technical Skills:** Role-specific technologies and tools
**Soft Skills:** Leadership, communication, problem-solving
**Industry Terms:** Current trends and methodologies in your field
**Action Words:** Developed, implemented, optimized, led

**Research Strategy:** Look at job postings in your target field and note the most \
frequently mentioned skills and requirements.

Would you like help identifying specific keywords for your industry?";

const GENERAL_REPLY: &str = "I'm here to help optimize your resume for your career goals!

**I can help with:**
- Specific improvement recommendations
- Keyword optimization strategies
- Strength identification and enhancement
- ATS compatibility improvements

**For the best advice:** Upload your complete resume so I can give personalized feedback \
based on your actual content and experience.

What aspect of your resume would you like to focus on?";
