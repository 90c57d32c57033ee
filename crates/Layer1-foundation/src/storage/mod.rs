//! Storage module for ContextBridge
//!
//! - `json`: JSON - 설정 파일 저장/로드

mod json;

pub use json::{load_json_file, JsonStore, APP_DIR, PROJECT_DIR};
