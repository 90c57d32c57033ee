//! Dialect dispatch

use super::anthropic::AnthropicTemplate;
use super::generic::{CHATML, GEMMA, LLAMA3};
use super::llama2::Llama2Template;
use super::{ChatTemplate, Dialect};
use bridge_foundation::Message;
use tracing::debug;

/// Renders a conversation into the flat prompt of a dialect
///
/// Stateless; the borrowed turns are read through an index cursor and never
/// modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversationTemplateEngine;

impl ConversationTemplateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Template implementation for a dialect
    pub fn template(dialect: Dialect) -> &'static dyn ChatTemplate {
        match dialect {
            Dialect::Anthropic => &AnthropicTemplate,
            Dialect::Chatml => &CHATML,
            Dialect::Llama2 => &Llama2Template,
            Dialect::Llama3 => &LLAMA3,
            Dialect::Gemma => &GEMMA,
        }
    }

    pub fn render(&self, turns: &[Message], dialect: Dialect) -> String {
        let prompt = Self::template(dialect).render(turns);
        debug!(
            "Rendered {} turns as {} ({} chars)",
            turns.len(),
            dialect,
            prompt.chars().count()
        );
        prompt
    }

    /// Resolve the dialect from provider/model names, then render
    pub fn render_for(
        &self,
        turns: &[Message],
        provider: Option<&str>,
        model: Option<&str>,
    ) -> String {
        self.render(turns, Dialect::resolve(provider, model))
    }
}
