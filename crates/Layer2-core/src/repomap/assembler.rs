//! Token Budget Assembler - 토큰 예산 내 repo map 조립
//!
//! 파일 순서대로 시그니처 블록을 붙이다가 예산에 도달하면 멈추고,
//! 요약되지 않은 파일은 예산이 남을 때만 평면 목록으로 덧붙입니다.

use super::extractor::SignatureExtractor;
use bridge_foundation::estimate_tokens_for_chars;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// repo map 머리말
pub const REPO_MAP_PREAMBLE: &str =
    "Below is a map of the repository: each file is followed by its key signatures.\n\n";

/// 시그니처 들여쓰기
const SIGNATURE_INDENT: &str = "  ";

/// 표시 경로 규칙
#[derive(Debug, Clone, Default)]
pub struct DisplayPaths {
    /// 워크스페이스 상대 경로 사용 여부
    relative: bool,
    /// 워크스페이스 루트들
    roots: Vec<PathBuf>,
}

impl DisplayPaths {
    pub fn absolute() -> Self {
        Self::default()
    }

    pub fn relative_to(roots: Vec<PathBuf>) -> Self {
        Self {
            relative: true,
            roots,
        }
    }

    /// 접두사가 되는 첫 번째 루트 기준 상대 경로, 없으면 원래 경로
    pub fn display(&self, path: &Path) -> String {
        if self.relative {
            for root in &self.roots {
                if let Ok(rel) = path.strip_prefix(root) {
                    return rel.to_string_lossy().into_owned();
                }
            }
        }
        path.to_string_lossy().into_owned()
    }
}

/// 문자 수를 누적하며 버퍼를 키우는 출력기
struct BudgetBuffer {
    text: String,
    chars: usize,
}

impl BudgetBuffer {
    fn new(seed: &str) -> Self {
        Self {
            text: seed.to_string(),
            chars: seed.chars().count(),
        }
    }

    fn push(&mut self, s: &str) {
        self.text.push_str(s);
        self.chars += s.chars().count();
    }

    fn tokens_with(&self, extra_chars: usize) -> usize {
        estimate_tokens_for_chars(self.chars + extra_chars)
    }

    fn tokens(&self) -> usize {
        self.tokens_with(0)
    }
}

/// repo map 조립기
#[derive(Debug, Clone, Default)]
pub struct TokenBudgetAssembler {
    extractor: SignatureExtractor,
    paths: DisplayPaths,
}

impl TokenBudgetAssembler {
    pub fn new(paths: DisplayPaths) -> Self {
        Self {
            extractor: SignatureExtractor::new(),
            paths,
        }
    }

    pub fn display_paths(&self) -> &DisplayPaths {
        &self.paths
    }

    /// 예산 내에서 시그니처 블록 + 평면 목록 조립
    pub async fn assemble(&self, files: &[PathBuf], budget_tokens: usize) -> String {
        let mut buffer = BudgetBuffer::new(REPO_MAP_PREAMBLE);
        let mut covered = vec![false; files.len()];

        for (idx, path) in files.iter().enumerate() {
            match fs::read_to_string(path).await {
                Ok(content) => {
                    if let Some(block) = self.render_block(path, &content) {
                        buffer.push(&block);
                        covered[idx] = true;
                    }
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                }
            }

            // 블록 단위로만 검사 (방금 붙인 블록은 되돌리지 않음)
            if buffer.tokens() >= budget_tokens {
                debug!(
                    "Repo map budget reached after {}/{} files (~{} tokens)",
                    idx + 1,
                    files.len(),
                    buffer.tokens()
                );
                break;
            }
        }

        let remaining: Vec<String> = files
            .iter()
            .zip(&covered)
            .filter(|(_, covered)| !**covered)
            .map(|(path, _)| self.paths.display(path))
            .collect();

        if !remaining.is_empty() {
            let listing = remaining.join("\n");
            if buffer.tokens_with(listing.chars().count()) <= budget_tokens {
                buffer.push(&listing);
            } else {
                debug!(
                    "Dropped flat listing of {} files (over budget)",
                    remaining.len()
                );
            }
        }

        buffer.text
    }

    /// 시그니처 없이 모든 표시 경로를 줄 단위로 나열
    pub fn list(&self, files: &[PathBuf]) -> String {
        files
            .iter()
            .map(|path| self.paths.display(path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 파일 하나의 블록 (시그니처가 없으면 None)
    fn render_block(&self, path: &Path, content: &str) -> Option<String> {
        let mut signatures = self.extractor.extract(path, content).peekable();
        signatures.peek()?;

        let mut block = format!("{}:\n", self.paths.display(path));
        for signature in signatures {
            block.push_str(SIGNATURE_INDENT);
            block.push_str(signature);
            block.push('\n');
        }
        block.push('\n');
        Some(block)
    }
}
