//! Bridge Config - 통합 설정
//!
//! repo map 생성과 프롬프트 렌더링 설정을 통합 관리하는 BridgeConfig

use crate::storage::{load_json_file, JsonStore};
use crate::tokenizer::{TokenBudget, DEFAULT_REPO_MAP_FRACTION};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 설정 파일명
pub const BRIDGE_CONFIG_FILE: &str = "config.json";

/// 기본 전체 토큰 예산
pub const DEFAULT_MAX_TOKENS: usize = 8_000;

// ============================================================================
// Bridge Config (통합)
// ============================================================================

/// ContextBridge 통합 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// repo map 설정
    #[serde(default)]
    pub repo_map: RepoMapSettings,

    /// 프롬프트 설정
    #[serde(default)]
    pub prompt: PromptSettings,
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self {
            version: default_version(),
            ..Default::default()
        }
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드
    pub fn load() -> Result<Self> {
        let mut config = Self::new();

        // 1. 글로벌 설정
        if let Ok(global) = JsonStore::global() {
            if let Some(global_config) = global.load_optional::<BridgeConfig>(BRIDGE_CONFIG_FILE)?
            {
                debug!("Loaded global config from {}", global.base_dir().display());
                config.merge(global_config);
            }
        }

        // 2. 프로젝트 설정
        if let Ok(project) = JsonStore::current_project() {
            if let Some(project_config) =
                project.load_optional::<BridgeConfig>(BRIDGE_CONFIG_FILE)?
            {
                debug!("Loaded project config from {}", project.base_dir().display());
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// 지정 파일만 로드 (글로벌/프로젝트 무시)
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let mut config = Self::new();
        config.merge(load_json_file(path)?);
        Ok(config)
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: BridgeConfig) {
        self.repo_map.merge(other.repo_map);
        self.prompt.merge(other.prompt);
    }
}

// ============================================================================
// Repo Map Settings
// ============================================================================

/// repo map 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoMapSettings {
    /// 전체 토큰 예산
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// repo map 비율
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraction: Option<f32>,

    /// 워크스페이스 상대 경로 출력
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_paths: Option<bool>,

    /// 시그니처 추출 (false면 단순 파일 목록)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_signatures: Option<bool>,
}

impl RepoMapSettings {
    pub fn max_tokens(&self) -> usize {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn fraction(&self) -> f32 {
        self.fraction.unwrap_or(DEFAULT_REPO_MAP_FRACTION)
    }

    pub fn relative_paths(&self) -> bool {
        self.relative_paths.unwrap_or(true)
    }

    pub fn include_signatures(&self) -> bool {
        self.include_signatures.unwrap_or(true)
    }

    /// 전체 예산 + repo map 비율
    pub fn token_budget(&self) -> TokenBudget {
        TokenBudget::new(self.max_tokens()).with_repo_map_fraction(self.fraction())
    }

    fn merge(&mut self, other: RepoMapSettings) {
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
        if other.fraction.is_some() {
            self.fraction = other.fraction;
        }
        if other.relative_paths.is_some() {
            self.relative_paths = other.relative_paths;
        }
        if other.include_signatures.is_some() {
            self.include_signatures = other.include_signatures;
        }
    }
}

// ============================================================================
// Prompt Settings
// ============================================================================

/// 프롬프트 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptSettings {
    /// 기본 프로바이더 (dialect 이름 또는 별칭)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<String>,

    /// 기본 모델 이름 (dialect 부분 문자열 매칭용)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,

    /// 기본 시스템 프롬프트
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,

    /// 렌더링 결과 트리밍 예산
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,
}

impl PromptSettings {
    fn merge(&mut self, other: PromptSettings) {
        if other.default_provider.is_some() {
            self.default_provider = other.default_provider;
        }
        if other.default_model.is_some() {
            self.default_model = other.default_model;
        }
        if other.system_prompt.is_some() {
            self.system_prompt = other.system_prompt;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
    }
}

fn default_version() -> u32 {
    1
}
