//! Tokenizer Trait 정의

use super::types::TokenCount;

/// 토크나이저 트레이트
///
/// 모든 토크나이저 구현체가 따라야 하는 인터페이스입니다.
pub trait Tokenizer: Send + Sync {
    /// 토큰 하나에 해당하는 문자 수
    fn chars_per_token(&self) -> usize;

    /// 텍스트를 토큰 수로 계산
    fn count(&self, text: &str) -> TokenCount;

    /// 토큰 제한 내인지 확인
    fn fits(&self, text: &str, max_tokens: usize) -> bool {
        self.count(text).total <= max_tokens
    }

    /// 토큰 수에 해당하는 문자 길이
    fn char_budget(&self, max_tokens: usize) -> usize {
        max_tokens.saturating_mul(self.chars_per_token())
    }
}
