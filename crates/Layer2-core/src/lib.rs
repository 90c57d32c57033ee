//! # bridge-core
//!
//! Core runtime for ContextBridge: repository map generation.
//!
//! ```ignore
//! use bridge_core::{RepoMapGenerator, RepoMapOptions};
//!
//! let generator = RepoMapGenerator::new(
//!     vec!["/path/to/workspace".into()],
//!     RepoMapOptions::default().with_max_tokens(4_000),
//! );
//! let map = generator.generate().await;
//! ```

pub mod repomap;

// Repository Map
pub use repomap::{
    DirectoryScanner, DisplayPaths, Language, RepoMapGenerator, RepoMapOptions,
    SignatureExtractor, TokenBudgetAssembler, REPO_MAP_PREAMBLE,
};
