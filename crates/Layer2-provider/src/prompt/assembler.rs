//! Prompt assembly for a target surface

use super::builder::{build_messages, build_web_prompt};
use crate::template::{ConversationTemplateEngine, Dialect};
use bridge_foundation::{ContentTrimmer, ContextItem};
use tracing::debug;

/// Where the prompt is going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptTarget {
    /// Pasted into a chat web page; plain text, no dialect markers
    #[default]
    WebChat,
    /// Sent to a model that expects the given dialect
    Model(Dialect),
}

impl PromptTarget {
    /// Web chat when requested, otherwise the resolved model dialect
    pub fn resolve(web: bool, provider: Option<&str>, model: Option<&str>) -> Self {
        if web {
            Self::WebChat
        } else {
            Self::Model(Dialect::resolve(provider, model))
        }
    }
}

/// Builds, renders and trims a contextual prompt
#[derive(Debug, Default)]
pub struct PromptAssembler {
    engine: ConversationTemplateEngine,
    trimmer: ContentTrimmer,
}

impl PromptAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assemble(
        &self,
        target: PromptTarget,
        message: &str,
        items: &[ContextItem],
        system: Option<&str>,
        max_tokens: Option<usize>,
    ) -> String {
        let prompt = match target {
            PromptTarget::WebChat => build_web_prompt(message, items, system),
            PromptTarget::Model(dialect) => {
                let turns = build_messages(message, items, system);
                self.engine.render(&turns, dialect)
            }
        };

        match max_tokens {
            Some(max) => {
                debug!("Trimming prompt to {} tokens", max);
                self.trimmer.trim(&prompt, max)
            }
            None => prompt,
        }
    }
}
