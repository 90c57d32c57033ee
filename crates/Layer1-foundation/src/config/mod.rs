//! Config - 통합 설정 관리
//!
//! - `bridge.rs` - BridgeConfig 통합 설정 (repo map, prompt)

mod bridge;

pub use bridge::{
    BridgeConfig, PromptSettings, RepoMapSettings, BRIDGE_CONFIG_FILE, DEFAULT_MAX_TOKENS,
};
