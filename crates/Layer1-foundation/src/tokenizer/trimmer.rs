//! Content Trimmer - 앞부분 잘라내기
//!
//! 예산을 넘는 텍스트는 앞에서부터 잘라내고 꼬리(최근 내용)를 보존합니다.

use super::estimator::EstimateTokenizer;
use super::traits::Tokenizer;

/// 잘린 텍스트 앞에 붙는 표시
pub const TRUNCATION_MARKER: &str = "...[content truncated]...";

/// 앞부분 트리머
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTrimmer<T: Tokenizer = EstimateTokenizer> {
    tokenizer: T,
}

impl ContentTrimmer<EstimateTokenizer> {
    pub fn new() -> Self {
        Self {
            tokenizer: EstimateTokenizer,
        }
    }
}

impl<T: Tokenizer> ContentTrimmer<T> {
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// 예산 내면 그대로, 아니면 초과분만큼 앞에서 제거 후 marker 부착
    pub fn trim(&self, text: &str, max_tokens: usize) -> String {
        if self.tokenizer.fits(text, max_tokens) {
            return text.to_string();
        }

        let target = self.tokenizer.char_budget(max_tokens);
        let total = text.chars().count();
        let excess = total.saturating_sub(target);

        // char 경계에서 자름
        let start = text
            .char_indices()
            .nth(excess)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len());

        let mut out = String::with_capacity(TRUNCATION_MARKER.len() + text.len() - start);
        out.push_str(TRUNCATION_MARKER);
        out.push_str(&text[start..]);
        out
    }
}

/// 기본 추정 토크나이저로 트림
pub fn trim_content(text: &str, max_tokens: usize) -> String {
    ContentTrimmer::new().trim(text, max_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_unchanged() {
        assert_eq!(trim_content("short", 10), "short");
        assert_eq!(trim_content(&"a".repeat(40), 10), "a".repeat(40));
    }

    #[test]
    fn test_keeps_last_chars() {
        let input = "A".repeat(100);
        let out = trim_content(&input, 10);
        assert_eq!(out, format!("{}{}", TRUNCATION_MARKER, "A".repeat(40)));
    }

    #[test]
    fn test_tail_preserved() {
        let input: String = (0..200).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let out = trim_content(&input, 5);
        assert!(out.ends_with(&input[180..]));
        assert_eq!(out.len(), TRUNCATION_MARKER.len() + 20);
    }

    #[test]
    fn test_idempotent() {
        let input = "line one\nline two\nline three\n".repeat(20);
        for budget in [0, 1, 7, 30, 1000] {
            let once = trim_content(&input, budget);
            let twice = trim_content(&once, budget);
            assert_eq!(once, twice, "budget {}", budget);
        }
    }

    #[test]
    fn test_trimmed_length_is_marker_plus_char_budget() {
        let marker_chars = TRUNCATION_MARKER.chars().count();
        for len in [41, 45, 100, 500] {
            let input = "x".repeat(len);
            for budget in [0, 10, 100, 200] {
                let out = trim_content(&input, budget);
                let expected = if len <= budget * 4 {
                    len
                } else {
                    marker_chars + budget * 4
                };
                assert_eq!(out.chars().count(), expected, "len {} budget {}", len, budget);
            }
        }
    }

    #[test]
    fn test_small_excess_can_lengthen_output() {
        // 1자 초과여도 marker가 붙으므로 입력보다 길어짐
        let out = trim_content(&"A".repeat(41), 10);
        assert_eq!(out, format!("{}{}", TRUNCATION_MARKER, "A".repeat(40)));
        assert!(out.len() > 41);
    }

    #[test]
    fn test_zero_budget_only_marker() {
        assert_eq!(trim_content("abcdef", 0), TRUNCATION_MARKER);
    }

    #[test]
    fn test_multibyte_boundary() {
        let input = "가".repeat(50);
        let out = trim_content(&input, 2);
        assert_eq!(out, format!("{}{}", TRUNCATION_MARKER, "가".repeat(8)));
    }
}
