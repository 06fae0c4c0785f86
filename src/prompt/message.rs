//! Prompt assembly for canonical workflow instructions.
//!
//! Wraps a template body and the caller's free-form context into a single
//! user-role message with a fixed structural envelope. Pure string assembly;
//! no I/O.

use crate::prompt::templates::{TemplateId, template_body};
use serde::Serialize;

/// Tag pair wrapping caller-provided context.
const CHANGE_REQUEST_OPEN: &str = "<ChangeRequest>";
const CHANGE_REQUEST_CLOSE: &str = "</ChangeRequest>";

/// Substituted inside the tag pair when the caller provides no context.
const NO_CONTEXT_PLACEHOLDER: &str = "(no additional context provided)";

/// One content block inside a prompt message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

/// A single structured conversation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

impl PromptMessage {
    /// Build a user-role message with one text block.
    fn user(text: String) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![ContentBlock::Text { text }],
        }
    }
}

/// Assemble the prompt for a workflow template.
///
/// Produces exactly one user message whose text is the framing sentence,
/// the canonical body, and the change-request block, separated by blank
/// lines. Trimmed-empty argument text substitutes the fixed placeholder so
/// the envelope never contains an empty tag pair.
pub fn build_prompt_message(id: TemplateId, raw_args: &str) -> Vec<PromptMessage> {
    let trimmed = raw_args.trim();
    let change_request = if trimmed.is_empty() {
        format!("{CHANGE_REQUEST_OPEN}{NO_CONTEXT_PLACEHOLDER}{CHANGE_REQUEST_CLOSE}")
    } else {
        format!("{CHANGE_REQUEST_OPEN}\n{trimmed}\n{CHANGE_REQUEST_CLOSE}")
    };

    let text = [
        format!("You are running the OpenSpec {id} workflow from inside the ospec CLI."),
        template_body(id).to_string(),
        change_request,
    ]
    .join("\n\n");

    vec![PromptMessage::user(text)]
}
