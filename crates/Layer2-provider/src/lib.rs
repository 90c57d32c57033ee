//! # bridge-provider
//!
//! Prompt rendering layer for ContextBridge.
//! Turns conversations and context items into the exact text a chat surface expects.
//!
//! ## Features
//! - Dialect resolution from provider or model names (closed set, ChatML fallback)
//! - ChatML, Llama 2, Llama 3, Gemma and Anthropic transcript templates
//! - Structured and web-chat contextual prompt builders
//! - Optional front-trimming to a token limit

pub mod prompt;
pub mod template;

// Templates
pub use template::{ChatTemplate, ConversationTemplateEngine, Dialect, TemplateSpec};

// Prompt assembly
pub use prompt::{build_messages, build_web_prompt, PromptAssembler, PromptTarget};
