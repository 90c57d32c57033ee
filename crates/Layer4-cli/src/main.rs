//! ContextBridge CLI - Main entry point

mod cli;

use bridge_foundation::BridgeConfig;
use clap::{Parser, Subcommand};
use cli::{DialectRequest, MapRequest, PromptRequest};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ContextBridge - repository maps and chat prompts for LLMs
#[derive(Parser, Debug)]
#[command(name = "bridge")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Config file (replaces global and project config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the repository map
    Map {
        /// Workspace roots (defaults to the current directory)
        roots: Vec<PathBuf>,

        /// Total token budget
        #[arg(long)]
        max_tokens: Option<usize>,

        /// Share of the budget given to the map
        #[arg(long)]
        fraction: Option<f32>,

        /// Paths relative to the first matching root (default)
        #[arg(long, conflicts_with = "absolute")]
        relative: bool,

        /// Absolute paths
        #[arg(long)]
        absolute: bool,

        /// List files only, no signatures
        #[arg(long)]
        simple: bool,
    },
    /// Render a JSON conversation in a chat dialect
    Render {
        /// JSON array of {role, content} turns
        file: PathBuf,

        /// Provider or dialect (anthropic, openai, chatml, llama2, llama3, gemma, ...)
        #[arg(long)]
        provider: Option<String>,

        /// Model name, matched by substring when no provider is given
        #[arg(long)]
        model: Option<String>,

        /// Trim the output to this many tokens
        #[arg(long)]
        max_tokens: Option<usize>,
    },
    /// Build a contextual prompt from files
    Prompt {
        /// The user's question
        message: String,

        /// Files used as context items, in order
        #[arg(short, long)]
        context: Vec<PathBuf>,

        /// System prompt
        #[arg(short, long)]
        system: Option<String>,

        #[arg(long)]
        provider: Option<String>,

        #[arg(long)]
        model: Option<String>,

        /// Plain prompt for a chat web page
        #[arg(long)]
        web: bool,

        #[arg(long)]
        max_tokens: Option<usize>,
    },
    /// Trim stdin to a token budget, keeping the tail
    Trim {
        #[arg(long)]
        max_tokens: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Load configuration
    let config = match &args.config {
        Some(path) => BridgeConfig::load_from(path)?,
        None => BridgeConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}", e);
            BridgeConfig::new()
        }),
    };

    let output = match args.command {
        Command::Map {
            roots,
            max_tokens,
            fraction,
            relative,
            absolute,
            simple,
        } => {
            let request = MapRequest {
                roots,
                max_tokens,
                fraction,
                relative: path_mode(relative, absolute),
                simple,
            };
            cli::run_map(&config, request).await
        }
        Command::Render {
            file,
            provider,
            model,
            max_tokens,
        } => {
            let dialect = DialectRequest { provider, model };
            cli::run_render(&config, &file, &dialect, max_tokens).await?
        }
        Command::Prompt {
            message,
            context,
            system,
            provider,
            model,
            web,
            max_tokens,
        } => {
            let request = PromptRequest {
                message,
                context,
                system,
                dialect: DialectRequest { provider, model },
                web,
                max_tokens,
            };
            cli::run_prompt(&config, request).await?
        }
        Command::Trim { max_tokens } => cli::run_trim(&config, max_tokens).await?,
    };

    println!("{}", output);
    Ok(())
}

/// `None` leaves the configured path mode in place
fn path_mode(relative: bool, absolute: bool) -> Option<bool> {
    match (relative, absolute) {
        (_, true) => Some(false),
        (true, false) => Some(true),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map() {
        let args = Args::try_parse_from([
            "bridge", "map", "src", "lib", "--max-tokens", "2000", "--relative", "--simple",
        ])
        .unwrap();
        match args.command {
            Command::Map {
                roots,
                max_tokens,
                relative,
                absolute,
                simple,
                fraction,
            } => {
                assert_eq!(roots, vec![PathBuf::from("src"), PathBuf::from("lib")]);
                assert_eq!(max_tokens, Some(2000));
                assert_eq!(path_mode(relative, absolute), Some(true));
                assert!(simple);
                assert_eq!(fraction, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_relative_flag_does_not_take_a_root() {
        let args = Args::try_parse_from(["bridge", "map", "--relative", "src"]).unwrap();
        match args.command {
            Command::Map {
                roots,
                relative,
                absolute,
                ..
            } => {
                assert_eq!(roots, vec![PathBuf::from("src")]);
                assert_eq!(path_mode(relative, absolute), Some(true));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_absolute_flag() {
        let args = Args::try_parse_from(["bridge", "map", "--absolute", "src"]).unwrap();
        match args.command {
            Command::Map {
                roots,
                relative,
                absolute,
                ..
            } => {
                assert_eq!(roots, vec![PathBuf::from("src")]);
                assert_eq!(path_mode(relative, absolute), Some(false));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(Args::try_parse_from(["bridge", "map", "--relative", "--absolute"]).is_err());
    }

    #[test]
    fn test_path_mode_defaults_to_config() {
        assert_eq!(path_mode(false, false), None);
    }

    #[test]
    fn test_parse_prompt_with_context() {
        let args = Args::try_parse_from([
            "bridge", "prompt", "why?", "-c", "a.rs", "-c", "b.rs", "--web", "--debug",
        ])
        .unwrap();
        assert!(args.debug);
        match args.command {
            Command::Prompt {
                message,
                context,
                web,
                ..
            } => {
                assert_eq!(message, "why?");
                assert_eq!(context, vec![PathBuf::from("a.rs"), PathBuf::from("b.rs")]);
                assert!(web);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_render_and_config() {
        let args = Args::try_parse_from([
            "bridge",
            "--config",
            "cfg.json",
            "render",
            "conv.json",
            "--model",
            "llama3-8b",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert!(matches!(
            args.command,
            Command::Render { model: Some(ref m), provider: None, .. } if m == "llama3-8b"
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["bridge"]).is_err());
        assert!(Args::try_parse_from(["bridge", "trim", "--max-tokens", "x"]).is_err());
    }
}
