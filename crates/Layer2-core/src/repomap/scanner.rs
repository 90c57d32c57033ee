//! Directory Scanner - 코드 파일 수집
//!
//! 루트 디렉토리들을 깊이 우선으로 순회하며 인식 가능한 확장자의 파일만 수집합니다.
//! 디렉토리를 읽지 못하면 경고만 남기고 해당 서브트리를 건너뜁니다.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;
use tracing::{debug, warn};

/// 스캔에서 제외할 엔트리 이름 (VCS, 의존성, 빌드 산출물, 에디터 메타데이터)
pub const IGNORED_NAMES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "bower_components",
    "vendor",
    "dist",
    "build",
    "out",
    "target",
    ".next",
    ".cache",
    "__pycache__",
    "tmp",
    "temp",
    "coverage",
    ".vscode",
    ".idea",
    ".vs",
];

/// 인식 가능한 코드 확장자
pub const CODE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "vue", "svelte", "py", "java", "kt", "scala", "cs",
    "go", "rs", "c", "h", "cc", "cpp", "cxx", "hpp", "rb", "php", "swift",
];

type WalkFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// 디렉토리 스캐너
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    pub fn new() -> Self {
        Self
    }

    /// 루트들을 순서대로 스캔 (정렬하지 않음)
    pub async fn scan(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for root in roots {
            self.walk(root, &mut files).await;
        }
        debug!("Found {} code files under {} root(s)", files.len(), roots.len());
        files
    }

    /// 재귀적으로 파일 수집
    fn walk<'a>(&'a self, dir: &'a Path, files: &'a mut Vec<PathBuf>) -> WalkFuture<'a> {
        Box::pin(async move {
            let mut entries = match fs::read_dir(dir).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Failed to read directory {}: {}", dir.display(), e);
                    return;
                }
            };

            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(e) => {
                        warn!("Failed to read entry in {}: {}", dir.display(), e);
                        break;
                    }
                };

                let name = entry.file_name();
                if Self::is_ignored(&name.to_string_lossy()) {
                    continue;
                }

                // symlink는 따라가지 않음
                let file_type = match entry.file_type().await {
                    Ok(file_type) => file_type,
                    Err(e) => {
                        warn!("Failed to stat {}: {}", entry.path().display(), e);
                        continue;
                    }
                };

                let path = entry.path();
                if file_type.is_dir() {
                    self.walk(&path, files).await;
                } else if file_type.is_file() && Self::is_code_file(&path) {
                    files.push(path);
                }
            }
        })
    }

    /// 제외 대상 이름인지 확인
    pub fn is_ignored(name: &str) -> bool {
        IGNORED_NAMES.contains(&name)
    }

    /// 인식 가능한 코드 파일인지 확인
    pub fn is_code_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                CODE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}
