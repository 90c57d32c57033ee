//! Repo Map Generator - 스캔 + 조립 조합

use super::assembler::{DisplayPaths, TokenBudgetAssembler};
use super::scanner::DirectoryScanner;
use bridge_foundation::{RepoMapSettings, TokenBudget};
use std::path::PathBuf;
use tracing::debug;

/// repo map 생성 옵션
#[derive(Debug, Clone)]
pub struct RepoMapOptions {
    /// 호출자 전체 예산 (repo map은 그 중 일부만 사용)
    pub budget: TokenBudget,
    /// 워크스페이스 상대 경로 출력
    pub relative_paths: bool,
    /// 시그니처 추출 (false면 단순 목록)
    pub include_signatures: bool,
}

impl Default for RepoMapOptions {
    fn default() -> Self {
        Self {
            budget: TokenBudget::default(),
            relative_paths: true,
            include_signatures: true,
        }
    }
}

impl RepoMapOptions {
    pub fn from_settings(settings: &RepoMapSettings) -> Self {
        Self {
            budget: settings.token_budget(),
            relative_paths: settings.relative_paths(),
            include_signatures: settings.include_signatures(),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.budget.max_tokens = max_tokens;
        self
    }

    pub fn with_fraction(mut self, fraction: f32) -> Self {
        self.budget = self.budget.with_repo_map_fraction(fraction);
        self
    }

    pub fn relative_paths(mut self, relative: bool) -> Self {
        self.relative_paths = relative;
        self
    }

    pub fn include_signatures(mut self, include: bool) -> Self {
        self.include_signatures = include;
        self
    }
}

/// Repository Map 생성기
pub struct RepoMapGenerator {
    /// 워크스페이스 루트 (스캔 대상이자 상대 경로 기준)
    roots: Vec<PathBuf>,
    options: RepoMapOptions,
    scanner: DirectoryScanner,
}

impl RepoMapGenerator {
    pub fn new(roots: Vec<PathBuf>, options: RepoMapOptions) -> Self {
        Self {
            roots,
            options,
            scanner: DirectoryScanner::new(),
        }
    }

    /// 기본 옵션으로 생성
    pub fn with_defaults(roots: Vec<PathBuf>) -> Self {
        Self::new(roots, RepoMapOptions::default())
    }

    pub fn options(&self) -> &RepoMapOptions {
        &self.options
    }

    /// repo map 문서 생성
    pub async fn generate(&self) -> String {
        let files = self.scanner.scan(&self.roots).await;
        let assembler = TokenBudgetAssembler::new(self.display_paths());

        if !self.options.include_signatures {
            return assembler.list(&files);
        }

        let budget = self.options.budget.repo_map_tokens();
        debug!("Assembling repo map for {} files within {} tokens", files.len(), budget);
        assembler.assemble(&files, budget).await
    }

    fn display_paths(&self) -> DisplayPaths {
        if self.options.relative_paths {
            DisplayPaths::relative_to(self.roots.clone())
        } else {
            DisplayPaths::absolute()
        }
    }
}
