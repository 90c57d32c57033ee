//! Static String Constants
//!
//! Provides the string literals shared across ContextBridge layers:
//! - Message role names (serialized form of `MessageRole`)
//! - Dialect / provider identifiers used for template resolution
//!
//! # Usage
//!
//! ```ignore
//! use bridge_foundation::strings::{DIALECT_CHATML, ROLE_USER};
//!
//! assert_eq!(MessageRole::User.as_str(), ROLE_USER);
//! ```

// ============================================================================
// Dialect Constants
// ============================================================================

/// Anthropic (Human/Assistant transcript)
pub const DIALECT_ANTHROPIC: &str = "anthropic";
/// ChatML (`<|im_start|>` turns)
pub const DIALECT_CHATML: &str = "chatml";
/// Llama 2 (`[INST]` blocks)
pub const DIALECT_LLAMA2: &str = "llama2";
/// Llama 3 (header-id turns)
pub const DIALECT_LLAMA3: &str = "llama3";
/// Gemma (`<start_of_turn>` turns)
pub const DIALECT_GEMMA: &str = "gemma";

// ============================================================================
// Provider Alias Constants
// ============================================================================

/// Anthropic model family alias
pub const PROVIDER_CLAUDE: &str = "claude";
/// OpenAI provider ID (renders as ChatML)
pub const PROVIDER_OPENAI: &str = "openai";
/// ChatGPT web alias
pub const PROVIDER_CHATGPT: &str = "chatgpt";
/// GPT model family alias
pub const PROVIDER_GPT: &str = "gpt";
/// Code Llama (renders as Llama 2)
pub const PROVIDER_CODELLAMA: &str = "codellama";

// ============================================================================
// Message Role Constants
// ============================================================================

/// System role
pub const ROLE_SYSTEM: &str = "system";
/// User role
pub const ROLE_USER: &str = "user";
/// Assistant role
pub const ROLE_ASSISTANT: &str = "assistant";
