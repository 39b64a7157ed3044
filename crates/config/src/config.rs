//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct, loaded once at startup
//! from a JSON file and treated as read-only afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::de::null_as_default;
use crate::defaults::{DEFAULT_HEALTH_CHECK_URI, DEFAULT_MAX_CONCURRENT_INDEXERS, DEFAULT_TITLE};
use crate::error::Result;
use crate::persistence::{config_dir, read_config_file, resolve_relative_to};
use crate::repository::Repository;

/// The root configuration: where the index lives and which repositories it
/// covers.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use trawl_config::{Config, Repository};
///
/// let mut config = Config::default();
/// config.repos.insert("rust".to_string(), Repository::new("https://github.com/rust-lang/rust"));
/// config.normalize(Path::new("/srv/trawl")).unwrap();
///
/// assert_eq!(config.title, "Trawl");
/// assert_eq!(config.max_concurrent_indexers, 2);
/// assert_eq!(config.repo("rust").unwrap().vcs, "git");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Location of the index database. Absolute once loaded.
    #[serde(rename = "dbpath", default, deserialize_with = "null_as_default")]
    pub db_path: PathBuf,

    /// Display title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Repositories keyed by name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub repos: BTreeMap<String, Repository>,

    /// Upper bound on indexers running at once. Zero means unset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_concurrent_indexers: i64,

    /// Path of the health-check endpoint.
    #[serde(default, deserialize_with = "null_as_default")]
    pub health_check_uri: String,
}

impl Config {
    /// Creates a new empty configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and normalizes configuration from a JSON file.
    ///
    /// A relative `dbpath` is resolved against the directory containing
    /// `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid
    /// configuration JSON, or the database path cannot be resolved. On error
    /// no configuration is returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use trawl_config::Config;
    ///
    /// # fn example() -> trawl_config::Result<()> {
    /// let config = Config::load_from("config.json")?;
    /// println!("Indexing {} repositories into {}", config.repos.len(), config.db_path.display());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: Config = read_config_file(path)?;
        config.normalize(config_dir(path))?;
        debug!(
            repos = config.repos.len(),
            db_path = %config.db_path.display(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Applies every default and resolves the database path.
    ///
    /// Steps run in order: title, database path, each repository, then the
    /// config-level defaults. If resolution fails, fields defaulted before it
    /// stay modified and the value should be dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ResolvePath`](crate::ConfigError::ResolvePath)
    /// if a relative database path cannot be made absolute.
    pub fn normalize(&mut self, config_dir: &Path) -> Result<()> {
        if self.title.is_empty() {
            self.title = DEFAULT_TITLE.to_string();
        }

        if !self.db_path.is_absolute() {
            self.db_path = resolve_relative_to(config_dir, &self.db_path)?;
        }

        for (name, repo) in &mut self.repos {
            repo.normalize();
            trace!(%name, url = %repo.url, vcs = %repo.vcs, "normalized repository");
        }

        self.apply_defaults();
        Ok(())
    }

    /// Applies the config-level defaults that do not depend on repositories.
    pub fn apply_defaults(&mut self) {
        if self.max_concurrent_indexers == 0 {
            self.max_concurrent_indexers = DEFAULT_MAX_CONCURRENT_INDEXERS;
        }

        if self.health_check_uri.is_empty() {
            self.health_check_uri = DEFAULT_HEALTH_CHECK_URI.to_string();
        }
    }

    /// Returns the repository registered under `name`.
    #[must_use]
    pub fn repo(&self, name: &str) -> Option<&Repository> {
        self.repos.get(name)
    }

    /// Returns whether the configuration has any repositories.
    #[must_use]
    pub fn has_repos(&self) -> bool {
        !self.repos.is_empty()
    }

    /// Serializes the repository map for untrusted consumers.
    ///
    /// Only `repos` is included, keyed by name in sorted order. Every
    /// `vcs-config` renders as `{}`, so no separate redaction is needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`](crate::ConfigError::Serialize) if
    /// serialization fails, which the field types do not allow in practice.
    ///
    /// # Examples
    ///
    /// ```
    /// use trawl_config::{Config, Repository, SecretMessage};
    ///
    /// let mut repo = Repository::new("https://github.com/o/r");
    /// repo.vcs_config = Some(SecretMessage::new(r#"{"token":"ghp_xxx"}"#));
    ///
    /// let mut config = Config::default();
    /// config.repos.insert("r".to_string(), repo);
    ///
    /// let json = config.to_json_string().unwrap();
    /// assert!(json.contains(r#""vcs-config":{}"#));
    /// assert!(!json.contains("ghp_xxx"));
    /// ```
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.repos)?)
    }
}
