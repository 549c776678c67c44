//! Prompt construction for commit message generation
//!
//! The system instruction fixes the message format; the user instruction
//! carries the change text behind a constant prefix.

use crate::chat::ChatMessage;

/// Format instructions sent as the system message
///
/// The 80 character limit is a request to the model and is not checked locally.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates meaningful commit messages based \
on a list of changes. The commit message should include a title summarizing \
the changes and bullets '-' for the detailed changes. Each change should be \
on a new line in an imperative style. Please ensure that no line \
exceeds 80 characters in length.";

/// Prefix placed directly before the change text in the user message
pub const USER_PREFIX: &str = "Write a git commit message for the following changes: ";

/// Build the user instruction for `changes`
///
/// # Example
///
/// ```
/// use smartcommit::prompt::build_user_prompt;
///
/// let prompt = build_user_prompt("+added line");
/// assert_eq!(
///     prompt,
///     "Write a git commit message for the following changes: +added line"
/// );
/// ```
pub fn build_user_prompt(changes: &str) -> String {
    format!("{USER_PREFIX}{changes}")
}

/// Build the ordered message list: system instruction, then user instruction
pub fn build_messages(changes: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_user_prompt(changes)),
    ]
}
