//! System prompt and request construction.
//!
//! The system prompt is the contract with the model: it must answer with a
//! single raw JSON object holding a `test_cases` list, nothing else. The
//! response side of that contract is enforced in [`crate::report`].

use crate::chat::ChatMessage;

/// Fixed instruction block sent as the system message on every request.
pub const SYSTEM_PROMPT: &str = r#"You are an expert QA engineer. Generate comprehensive test cases in exact JSON format.

ALWAYS output this exact JSON structure:
{
  "test_cases": [
    {
      "title": "Descriptive title",
      "preconditions": "Prerequisites",
      "steps": ["step1", "step2"],
      "expected_result": "Clear outcome"
    }
  ]
}

Coverage requirements:
- 1-2 happy path scenarios
- 2-3 negative/edge cases
- 1-2 security/validation cases
- Total: 4-8 test cases based on complexity

Output ONLY raw JSON, no other text.

Focus on creating tasks that are:
- Clear and actionable
- Include all necessary context
- Properly structured for automation

Remember:
- Return ONLY the JSON object
- Use EXACTLY the field names shown above (title, preconditions, steps, expected_result)
- No additional text or explanation"#;

/// Preamble prepended to the caller's description in the user message.
pub const USER_PREAMBLE: &str = "Please convert this test case into a task:\n\n";

/// Build the two-message request for one description.
///
/// Pure construction, no failure modes: a fixed system message plus the
/// caller's text verbatim after the preamble.
pub fn build_messages(description: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("{}{}", USER_PREAMBLE, description)),
    ]
}
