//! Configuration loading for the trawl code search service.
//!
//! This crate reads the JSON file naming the repositories to index, fills in
//! every unset field with its default, and produces a sanitized JSON view of
//! the repositories for untrusted consumers such as the web UI.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`repository`]: Per-repository configuration and defaulting
//! - [`url_pattern`]: Link templates for a repository's hosting UI
//! - [`secret`]: Write-masked carrier for `vcs-config`
//! - [`defaults`]: Every fixed default in one place
//! - [`persistence`]: Config file reading and path resolution
//! - [`error`]: Error types for configuration operations
//!
//! # File Format
//!
//! ```json
//! {
//!   "dbpath": "data",
//!   "title": "Code Search",
//!   "max-concurrent-indexers": 2,
//!   "health-check-uri": "/healthz",
//!   "repos": {
//!     "rust": {
//!       "url": "https://github.com/rust-lang/rust",
//!       "ms-between-poll": 60000,
//!       "vcs": "git",
//!       "vcs-config": { "ref": "main" },
//!       "url-pattern": { "base-url": "{url}/blob/main/{path}{anchor}", "anchor": "#L{line}" },
//!       "exclude-dot-files": true,
//!       "enable-poll-updates": true,
//!       "enable-push-updates": false
//!     }
//!   }
//! }
//! ```
//!
//! Only `dbpath`, `repos` and each repository's `url` are needed; everything
//! else has a default (see [`defaults`]). A relative `dbpath` is resolved
//! against the directory containing the config file.
//!
//! # Secrets
//!
//! `vcs-config` is captured verbatim but always serializes as `{}`. Read it
//! with [`Repository::vcs_config`].
//!
//! # Examples
//!
//! ```no_run
//! use trawl_config::Config;
//!
//! # fn example() -> trawl_config::Result<()> {
//! let config = Config::load_from("config.json")?;
//!
//! for (name, repo) in &config.repos {
//!     println!("{name}: {} every {}ms", repo.url, repo.ms_between_polls);
//! }
//!
//! // Safe to hand to the UI
//! let json = config.to_json_string()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod de;
pub mod defaults;
pub mod error;
pub mod persistence;
pub mod repository;
pub mod secret;
pub mod url_pattern;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use repository::Repository;
pub use secret::SecretMessage;
pub use url_pattern::UrlPattern;
