//! Conversation templates
//!
//! Flattens a list of turns into the single prompt string a model expects.
//!
//! - Generic family (ChatML, Llama 3, Gemma): one renderer over [`TemplateSpec`] tables
//! - Anthropic: `Human:` / `Assistant:` transcript
//! - Llama 2: `[INST]` blocks with a merged `<<SYS>>` header

mod anthropic;
mod dialect;
mod engine;
mod generic;
mod llama2;

pub use anthropic::{AnthropicTemplate, ASSISTANT_TAG, HUMAN_TAG};
pub use dialect::Dialect;
pub use engine::ConversationTemplateEngine;
pub use generic::{TemplateSpec, CHATML, GEMMA, LLAMA3};
pub use llama2::Llama2Template;

use bridge_foundation::Message;

/// A dialect renderer
pub trait ChatTemplate: Send + Sync {
    /// Render turns into one prompt string
    fn render(&self, turns: &[Message]) -> String;
}
