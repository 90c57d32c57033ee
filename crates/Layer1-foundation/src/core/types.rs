//! Core Types - 공용 타입 정의
//!
//! 모든 레이어에서 공통으로 사용하는 타입들

use crate::strings::{ROLE_ASSISTANT, ROLE_SYSTEM, ROLE_USER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Message - 대화 턴
// ============================================================================

/// 메시지 역할
///
/// 역할 집합은 닫혀 있음 (`tool` 등은 역직렬화 단계에서 거부)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => ROLE_SYSTEM,
            Self::User => ROLE_USER,
            Self::Assistant => ROLE_ASSISTANT,
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            ROLE_SYSTEM => Ok(Self::System),
            ROLE_USER => Ok(Self::User),
            ROLE_ASSISTANT => Ok(Self::Assistant),
            other => Err(Error::invalid_input(format!("unknown role: {}", other))),
        }
    }
}

/// 대화 메시지 (한 턴)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// JSON 배열에서 대화 로드
    pub fn parse_conversation(json: &str) -> Result<Vec<Message>> {
        serde_json::from_str(json)
            .map_err(|e| Error::invalid_input(format!("invalid conversation: {}", e)))
    }
}

// ============================================================================
// Context Item - 프롬프트에 삽입할 검색 결과
// ============================================================================

/// 컨텍스트 항목
///
/// 순서가 의미를 가지며 중복 제거는 하지 않음
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
}

impl ContextItem {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            content: content.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 제목 (`name` 또는 `name - description`)
    pub fn title(&self) -> String {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => format!("{} - {}", self.name, desc),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip_names() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!("Assistant".parse::<MessageRole>().unwrap(), MessageRole::Assistant);
        assert!("tool".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_parse_conversation() {
        let json = r#"[{"role":"system","content":"Be terse"},{"role":"user","content":"hi"}]"#;
        let turns = Message::parse_conversation(json).unwrap();
        assert_eq!(turns, vec![Message::system("Be terse"), Message::user("hi")]);
    }

    #[test]
    fn test_parse_conversation_rejects_unknown_role() {
        let json = r#"[{"role":"tool","content":"{}"}]"#;
        let err = Message::parse_conversation(json).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_context_item_title() {
        let plain = ContextItem::new("main.rs", "fn main() {}");
        assert_eq!(plain.title(), "main.rs");

        let described = plain.clone().with_description("entry point");
        assert_eq!(described.title(), "main.rs - entry point");

        let empty_desc = plain.with_description("");
        assert_eq!(empty_desc.title(), "main.rs");
    }
}
