//! Dialect identifiers and resolution
//!
//! A dialect is the textual wire format a chat surface expects. It is resolved
//! from an explicit provider name first, then from a model name by substring.

use bridge_foundation::strings::{
    DIALECT_ANTHROPIC, DIALECT_CHATML, DIALECT_GEMMA, DIALECT_LLAMA2, DIALECT_LLAMA3,
    PROVIDER_CHATGPT, PROVIDER_CLAUDE, PROVIDER_CODELLAMA, PROVIDER_GPT, PROVIDER_OPENAI,
};
use bridge_foundation::{Error, Result};
use tracing::debug;

/// Chat template dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// `Human:` / `Assistant:` transcript
    Anthropic,
    /// `<|im_start|>` turns (OpenAI style)
    #[default]
    Chatml,
    /// `[INST]` blocks with a `<<SYS>>` header
    Llama2,
    /// `<|start_header_id|>` turns
    Llama3,
    /// `<start_of_turn>` turns
    Gemma,
}

/// Name table, scanned in declaration order for substring resolution.
const NAME_TABLE: &[(&str, Dialect)] = &[
    (DIALECT_ANTHROPIC, Dialect::Anthropic),
    (PROVIDER_CLAUDE, Dialect::Anthropic),
    (DIALECT_CHATML, Dialect::Chatml),
    (PROVIDER_OPENAI, Dialect::Chatml),
    (PROVIDER_CHATGPT, Dialect::Chatml),
    (PROVIDER_GPT, Dialect::Chatml),
    (PROVIDER_CODELLAMA, Dialect::Llama2),
    (DIALECT_LLAMA2, Dialect::Llama2),
    (DIALECT_LLAMA3, Dialect::Llama3),
    (DIALECT_GEMMA, Dialect::Gemma),
];

impl Dialect {
    /// All dialects
    pub const ALL: [Dialect; 5] = [
        Dialect::Anthropic,
        Dialect::Chatml,
        Dialect::Llama2,
        Dialect::Llama3,
        Dialect::Gemma,
    ];

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => DIALECT_ANTHROPIC,
            Self::Chatml => DIALECT_CHATML,
            Self::Llama2 => DIALECT_LLAMA2,
            Self::Llama3 => DIALECT_LLAMA3,
            Self::Gemma => DIALECT_GEMMA,
        }
    }

    /// Case-insensitive exact lookup of a provider identifier or alias
    pub fn from_provider(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        NAME_TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, dialect)| *dialect)
    }

    /// First table key contained in the model name, in table order
    pub fn from_model(model: &str) -> Option<Self> {
        let model = model.to_ascii_lowercase();
        NAME_TABLE
            .iter()
            .find(|(key, _)| model.contains(key))
            .map(|(_, dialect)| *dialect)
    }

    /// Provider first, then model name, then ChatML
    pub fn resolve(provider: Option<&str>, model: Option<&str>) -> Self {
        if let Some(dialect) = provider.and_then(Self::from_provider) {
            return dialect;
        }
        if let Some(dialect) = model.and_then(Self::from_model) {
            return dialect;
        }
        debug!(
            "No dialect matched provider {:?} / model {:?}, using chatml",
            provider, model
        );
        Self::default()
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_provider(s).ok_or_else(|| Error::invalid_input(format!("unknown dialect: {}", s)))
    }
}
