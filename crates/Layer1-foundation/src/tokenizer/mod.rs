//! Tokenizer Module - 토큰 추정 및 트리밍
//!
//! repo map 조립과 프롬프트 트리밍이 공유하는 토큰 계산 기준을 제공합니다.
//! 실제 BPE 토크나이저 대신 `ceil(chars / 4)` 추정치를 사용합니다.
//!
//! ## 사용법
//!
//! ```ignore
//! use bridge_foundation::tokenizer::{estimate_tokens, trim_content, TokenBudget};
//!
//! let tokens = estimate_tokens("Hello, world!"); // 4
//!
//! // 앞부분을 잘라 마지막 40자만 남김
//! let trimmed = trim_content(&long_text, 10);
//!
//! // 전체 예산 중 repo map 몫
//! let budget = TokenBudget::new(8_000).repo_map_tokens(); // 4_000
//! ```

mod estimator;
mod traits;
mod trimmer;
mod types;

pub use estimator::{
    estimate_tokens, estimate_tokens_for_chars, EstimateTokenizer, CHARS_PER_TOKEN,
};
pub use traits::Tokenizer;
pub use trimmer::{trim_content, ContentTrimmer, TRUNCATION_MARKER};
pub use types::{TokenBudget, TokenCount, DEFAULT_REPO_MAP_FRACTION};
