//! Implementation of the `ospec prompt` and `ospec templates` commands.

use crate::cli::PromptArgs;
use crate::error::{OspecError, Result};
use crate::prompt::{ContentBlock, PromptMessage, TemplateId, build_prompt_message};

/// Execute the `ospec prompt` command.
///
/// Parses the template identifier (unknown identifiers fail with exit code
/// 1), assembles the prompt, and prints it to stdout. The progress note goes
/// to stderr so piped output stays clean.
pub fn cmd_prompt(args: PromptArgs) -> Result<()> {
    let id: TemplateId = args.template.parse()?;
    eprintln!("{}...", id.progress_message());

    let messages = build_prompt_message(id, &args.args.join(" "));

    if args.json {
        let rendered = serde_json::to_string_pretty(&messages).map_err(|e| {
            OspecError::UserError(format!("failed to serialize prompt message: {}", e))
        })?;
        println!("{}", rendered);
    } else {
        println!("{}", render_text(&messages));
    }

    Ok(())
}

/// Execute the `ospec templates` command.
pub fn cmd_templates() -> Result<()> {
    println!(
        "Canonical OpenSpec workflow templates ({}):",
        TemplateId::ALL.len()
    );
    println!();

    for id in TemplateId::ALL {
        println!("  {}", id);
        println!("    {}", id.description());
    }

    Ok(())
}

/// Concatenate the text blocks of the assembled messages.
fn render_text(messages: &[PromptMessage]) -> String {
    messages
        .iter()
        .flat_map(|message| &message.content)
        .map(|block| {
            let ContentBlock::Text { text } = block;
            text.as_str()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::template_body;

    #[test]
    fn rendered_text_contains_body_and_context() {
        let messages = build_prompt_message(TemplateId::Proposal, "add multi-tenant settings");
        let text = render_text(&messages);

        assert!(text.contains(template_body(TemplateId::Proposal)));
        assert!(text.contains("add multi-tenant settings"));
    }

    #[test]
    fn unknown_template_fails_with_typed_error() {
        let args = PromptArgs {
            template: "draft".to_string(),
            json: false,
            args: Vec::new(),
        };
        let err = cmd_prompt(args).unwrap_err();
        assert!(matches!(err, OspecError::UnknownTemplate(_)));
    }

    #[test]
    fn prompt_command_succeeds_for_every_template() {
        for id in TemplateId::ALL {
            let args = PromptArgs {
                template: id.as_str().to_string(),
                json: false,
                args: vec!["demo-change".to_string()],
            };
            assert!(cmd_prompt(args).is_ok());
        }
    }

    #[test]
    fn json_rendering_succeeds() {
        let args = PromptArgs {
            template: "apply".to_string(),
            json: true,
            args: Vec::new(),
        };
        assert!(cmd_prompt(args).is_ok());
    }

    #[test]
    fn templates_listing_succeeds() {
        assert!(cmd_templates().is_ok());
    }
}
