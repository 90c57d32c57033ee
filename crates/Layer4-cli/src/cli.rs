//! Subcommand runners
//!
//! Each runner returns the text to print so it can be exercised without a terminal.

use bridge_core::{RepoMapGenerator, RepoMapOptions};
use bridge_foundation::{BridgeConfig, ContextItem, Message, DEFAULT_MAX_TOKENS};
use bridge_provider::{ConversationTemplateEngine, Dialect, PromptAssembler, PromptTarget};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// `map` options after flag parsing
#[derive(Debug, Default)]
pub struct MapRequest {
    pub roots: Vec<PathBuf>,
    pub max_tokens: Option<usize>,
    pub fraction: Option<f32>,
    pub relative: Option<bool>,
    pub simple: bool,
}

/// Build the repository map
pub async fn run_map(config: &BridgeConfig, request: MapRequest) -> String {
    let mut options = RepoMapOptions::from_settings(&config.repo_map);
    if let Some(max_tokens) = request.max_tokens {
        options = options.with_max_tokens(max_tokens);
    }
    if let Some(fraction) = request.fraction {
        options = options.with_fraction(fraction);
    }
    if let Some(relative) = request.relative {
        options = options.relative_paths(relative);
    }
    if request.simple {
        options = options.include_signatures(false);
    }

    let roots = if request.roots.is_empty() {
        vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
    } else {
        request.roots
    };

    RepoMapGenerator::new(roots, options).generate().await
}

/// Dialect selection shared by `render` and `prompt`
#[derive(Debug, Default)]
pub struct DialectRequest {
    pub provider: Option<String>,
    pub model: Option<String>,
}

impl DialectRequest {
    /// Provider and model names: flags first, then the configured defaults
    pub fn names<'a>(&'a self, config: &'a BridgeConfig) -> (Option<&'a str>, Option<&'a str>) {
        let provider = self
            .provider
            .as_deref()
            .or(config.prompt.default_provider.as_deref());
        let model = self
            .model
            .as_deref()
            .or(config.prompt.default_model.as_deref());
        (provider, model)
    }

    pub fn resolve(&self, config: &BridgeConfig) -> Dialect {
        let (provider, model) = self.names(config);
        Dialect::resolve(provider, model)
    }
}

/// Render a JSON conversation file
pub async fn run_render(
    config: &BridgeConfig,
    file: &Path,
    dialect: &DialectRequest,
    max_tokens: Option<usize>,
) -> anyhow::Result<String> {
    let json = tokio::fs::read_to_string(file).await?;
    let turns = Message::parse_conversation(&json)?;
    let dialect = dialect.resolve(config);
    tracing::info!("Rendering {} turns as {}", turns.len(), dialect);

    let prompt = ConversationTemplateEngine::new().render(&turns, dialect);
    Ok(match max_tokens.or(config.prompt.max_tokens) {
        Some(max) => bridge_foundation::trim_content(&prompt, max),
        None => prompt,
    })
}

/// `prompt` options after flag parsing
#[derive(Debug, Default)]
pub struct PromptRequest {
    pub message: String,
    pub context: Vec<PathBuf>,
    pub system: Option<String>,
    pub dialect: DialectRequest,
    pub web: bool,
    pub max_tokens: Option<usize>,
}

/// Build a contextual prompt from files
pub async fn run_prompt(config: &BridgeConfig, request: PromptRequest) -> anyhow::Result<String> {
    let items = load_context_items(&request.context).await?;
    let (provider, model) = request.dialect.names(config);
    let target = PromptTarget::resolve(request.web, provider, model);
    let system = request
        .system
        .as_deref()
        .or(config.prompt.system_prompt.as_deref());

    Ok(PromptAssembler::new().assemble(
        target,
        &request.message,
        &items,
        system,
        request.max_tokens.or(config.prompt.max_tokens),
    ))
}

/// Each file becomes one item named by its path
async fn load_context_items(paths: &[PathBuf]) -> anyhow::Result<Vec<ContextItem>> {
    let mut items = Vec::with_capacity(paths.len());
    for path in paths {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
        items.push(ContextItem::new(path.display().to_string(), content));
    }
    Ok(items)
}

/// Trim stdin
pub async fn run_trim(config: &BridgeConfig, max_tokens: Option<usize>) -> anyhow::Result<String> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    Ok(trim_text(config, &input, max_tokens))
}

pub fn trim_text(config: &BridgeConfig, text: &str, max_tokens: Option<usize>) -> String {
    let max = max_tokens
        .or(config.prompt.max_tokens)
        .unwrap_or(DEFAULT_MAX_TOKENS);
    bridge_foundation::trim_content(text, max)
}
