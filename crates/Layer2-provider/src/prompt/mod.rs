//! Contextual prompts built from context items

mod assembler;
mod builder;

pub use assembler::{PromptAssembler, PromptTarget};
pub use builder::{
    build_messages, build_web_prompt, CONTEXT_DIVIDER, CONTEXT_HEADER, WEB_PROMPT_BOILERPLATE,
};
