//! # bridge-foundation
//!
//! Foundation layer for ContextBridge:
//! - Core: 대화 턴 / 컨텍스트 항목 타입
//! - Tokenizer: 토큰 추정 (`ceil(chars / 4)`), 예산, 앞부분 트리밍
//! - Config: 통합 설정 (BridgeConfig, 글로벌 + 프로젝트 병합)
//! - Storage: JsonStore (설정 파일)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  bridge-core (Repo Map)     bridge-provider (Template)  │
//! │  scan → extract → assemble  normalize → render → trim   │
//! │            │                          │                 │
//! │            └──────────┬───────────────┘                 │
//! │                       ▼                                 │
//! │     bridge-foundation (estimate_tokens, types)          │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod strings;
pub mod tokenizer;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Core (핵심 타입)
// ============================================================================
pub use crate::core::{ContextItem, Message, MessageRole};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    BridgeConfig, PromptSettings, RepoMapSettings, BRIDGE_CONFIG_FILE, DEFAULT_MAX_TOKENS,
};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;

// ============================================================================
// Tokenizer (토큰 추정)
// ============================================================================
pub use tokenizer::{
    estimate_tokens, estimate_tokens_for_chars, trim_content, ContentTrimmer, EstimateTokenizer,
    TokenBudget, TokenCount, Tokenizer, TRUNCATION_MARKER,
};
