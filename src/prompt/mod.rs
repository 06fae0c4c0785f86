//! Prompt assembly subsystem.
//!
//! This module turns a workflow template identifier and free-form user
//! arguments into a single structured conversation message:
//!
//! - **Templates**: the closed set of canonical workflow instruction bodies
//! - **Message**: assembly of body + caller context into one user message
//!
//! Assembly is pure string work; nothing here performs I/O.

mod message;
mod templates;

pub use message::{ContentBlock, PromptMessage, build_prompt_message};
pub use templates::{TemplateId, template_body};
