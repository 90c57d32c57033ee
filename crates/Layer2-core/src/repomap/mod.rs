//! Repository Map - 라인 패턴 기반 코드베이스 구조 요약
//!
//! 코드베이스의 파일 목록과 파일별 선언 시그니처를 토큰 예산 안에서
//! 하나의 텍스트 문서로 만들어 LLM에게 전달합니다.
//!
//! ## 흐름
//! - `DirectoryScanner`: 제외 목록/확장자 필터를 적용한 깊이 우선 파일 수집
//! - `SignatureExtractor`: 확장자별 정규식으로 선언 라인 추출 (지연 순회)
//! - `TokenBudgetAssembler`: 파일 단위로 블록을 붙이다 예산 도달 시 중단,
//!   남은 파일은 예산이 허락할 때만 평면 목록으로 추가
//! - `RepoMapGenerator`: 위 단계를 설정(`RepoMapOptions`)에 맞게 조합
//!
//! ## 지원 언어
//! - JavaScript/TypeScript, Python, Java/C#/C/C++, Go, Rust

mod assembler;
mod extractor;
mod generator;
mod scanner;

pub use assembler::{DisplayPaths, TokenBudgetAssembler, REPO_MAP_PREAMBLE};
pub use extractor::{Language, SignatureExtractor};
pub use generator::{RepoMapGenerator, RepoMapOptions};
pub use scanner::{DirectoryScanner, CODE_EXTENSIONS, IGNORED_NAMES};
