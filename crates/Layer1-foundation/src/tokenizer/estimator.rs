//! 문자 기반 추정 토크나이저
//!
//! 두 파이프라인이 공유하는 유일한 토큰 계산 기준: `ceil(chars / 4)`

use super::traits::Tokenizer;
use super::types::TokenCount;

/// 토큰당 문자 수
pub const CHARS_PER_TOKEN: usize = 4;

/// 문자 기반 추정 토크나이저
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateTokenizer;

impl EstimateTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for EstimateTokenizer {
    fn chars_per_token(&self) -> usize {
        CHARS_PER_TOKEN
    }

    #[inline]
    fn count(&self, text: &str) -> TokenCount {
        let chars = text.chars().count();
        TokenCount::new(estimate_tokens_for_chars(chars), chars)
    }
}

/// 문자 수에 대한 추정 토큰 수 (이미 센 문자 수를 재사용할 때)
#[inline]
pub fn estimate_tokens_for_chars(chars: usize) -> usize {
    chars.div_ceil(CHARS_PER_TOKEN)
}

/// 텍스트의 추정 토큰 수
#[inline]
pub fn estimate_tokens(text: &str) -> usize {
    EstimateTokenizer.count(text).total
}
