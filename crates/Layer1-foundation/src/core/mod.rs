//! Core Module - 핵심 타입
//!
//! 두 파이프라인(Repository Map, Conversation Template)이 공유하는 데이터 타입.
//!
//! ## 타입
//!
//! - `Message` / `MessageRole`: 역할이 지정된 대화 턴
//! - `ContextItem`: 사용자 턴에 삽입되는 검색 결과 블록

pub mod types;

pub use types::{ContextItem, Message, MessageRole};
