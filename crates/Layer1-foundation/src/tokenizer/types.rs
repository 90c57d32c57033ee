//! Tokenizer 타입 정의

use serde::{Deserialize, Serialize};

/// 기본 repo map 비율 (전체 예산의 절반)
pub const DEFAULT_REPO_MAP_FRACTION: f32 = 0.5;

/// 토큰 수 결과
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    /// 총 토큰 수 (추정치)
    pub total: usize,
    /// 텍스트 문자 수
    pub char_count: usize,
}

impl TokenCount {
    pub fn new(total: usize, char_count: usize) -> Self {
        Self { total, char_count }
    }
}

impl std::fmt::Display for TokenCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "~{} tokens ({} chars)", self.total, self.char_count)
    }
}

/// 호출자 전체 토큰 예산
///
/// repo map은 전체 예산 중 `repo_map_fraction` 만큼만 사용
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBudget {
    /// 전체 토큰 예산
    pub max_tokens: usize,
    /// repo map 비율 (0.0 ~ 1.0)
    pub repo_map_fraction: f32,
}

impl TokenBudget {
    pub fn new(max_tokens: usize) -> Self {
        Self {
            max_tokens,
            repo_map_fraction: DEFAULT_REPO_MAP_FRACTION,
        }
    }

    pub fn with_repo_map_fraction(mut self, fraction: f32) -> Self {
        self.repo_map_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// repo map에 할당된 토큰 수 (내림)
    pub fn repo_map_tokens(&self) -> usize {
        (self.max_tokens as f64 * self.repo_map_fraction as f64).floor() as usize
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self::new(8_000)
    }
}
