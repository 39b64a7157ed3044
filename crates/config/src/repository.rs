//! Per-repository configuration and its defaulting rules.
//!
//! A [`Repository`] is decoded straight from one entry of the `repos` object.
//! Fields left out of the file stay at their zero value until
//! [`Repository::normalize`] fills them in.
//!
//! # Examples
//!
//! ```
//! use trawl_config::Repository;
//!
//! let mut repo: Repository =
//!     serde_json::from_str(r#"{"url": "https://github.com/rust-lang/rust"}"#).unwrap();
//! repo.normalize();
//!
//! assert_eq!(repo.ms_between_polls, 30_000);
//! assert_eq!(repo.vcs, "git");
//! assert!(repo.poll_updates_enabled());
//! assert!(!repo.push_updates_enabled());
//! ```

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::defaults::{
    DEFAULT_MS_BETWEEN_POLL, DEFAULT_POLL_ENABLED, DEFAULT_PUSH_ENABLED, DEFAULT_VCS,
};
use crate::secret::SecretMessage;
use crate::url_pattern::UrlPattern;

/// One source repository under management.
///
/// Serializing a `Repository` never exposes its `vcs-config`; see
/// [`SecretMessage`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Repository {
    /// Where the repository is fetched from.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// Delay between two polls, in milliseconds. Zero means unset.
    #[serde(rename = "ms-between-poll", default, deserialize_with = "null_as_default")]
    pub ms_between_polls: i64,

    /// Version-control kind, e.g. `"git"`. Empty means unset.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vcs: String,

    /// Backend-specific configuration, kept opaque.
    #[serde(default)]
    pub vcs_config: Option<SecretMessage>,

    /// Link templates for the hosting UI.
    #[serde(default)]
    pub url_pattern: Option<UrlPattern>,

    /// Skip files and directories whose name starts with a dot.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exclude_dot_files: bool,

    /// Explicit poll-updates switch; `None` defers to the default.
    #[serde(default)]
    pub enable_poll_updates: Option<bool>,

    /// Explicit push-updates switch; `None` defers to the default.
    #[serde(default)]
    pub enable_push_updates: Option<bool>,
}

impl Repository {
    /// Creates a repository with only its URL set.
    ///
    /// # Examples
    ///
    /// ```
    /// use trawl_config::Repository;
    ///
    /// let repo = Repository::new("https://github.com/rust-lang/rust");
    /// assert_eq!(repo.url, "https://github.com/rust-lang/rust");
    /// assert!(repo.url_pattern.is_none());
    /// ```
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Whether polling-based update detection is enabled.
    ///
    /// Returns the explicit flag when set, otherwise [`DEFAULT_POLL_ENABLED`].
    #[must_use]
    pub fn poll_updates_enabled(&self) -> bool {
        self.enable_poll_updates.unwrap_or(DEFAULT_POLL_ENABLED)
    }

    /// Whether push-based update detection is enabled.
    ///
    /// Returns the explicit flag when set, otherwise [`DEFAULT_PUSH_ENABLED`].
    #[must_use]
    pub fn push_updates_enabled(&self) -> bool {
        self.enable_push_updates.unwrap_or(DEFAULT_PUSH_ENABLED)
    }

    /// Returns the raw `vcs-config` JSON, or `None` if the repository has none.
    ///
    /// This is the only way to read the payload back.
    #[must_use]
    pub fn vcs_config(&self) -> Option<&[u8]> {
        self.vcs_config.as_ref().map(SecretMessage::expose_bytes)
    }

    /// Fills every unset field with its default.
    ///
    /// A missing URL pattern is chosen from the repository URL with
    /// [`UrlPattern::default_for`]. A pattern that is present only has its
    /// empty templates filled, always with the generic defaults.
    ///
    /// The update flags are left untouched; read them through
    /// [`poll_updates_enabled`](Self::poll_updates_enabled) and
    /// [`push_updates_enabled`](Self::push_updates_enabled).
    pub fn normalize(&mut self) {
        if self.ms_between_polls == 0 {
            self.ms_between_polls = DEFAULT_MS_BETWEEN_POLL;
        }

        if self.vcs.is_empty() {
            self.vcs = DEFAULT_VCS.to_string();
        }

        let pattern = match self.url_pattern.take() {
            Some(mut pattern) => {
                pattern.fill_defaults();
                pattern
            }
            None => UrlPattern::default_for(&self.url),
        };
        self.url_pattern = Some(pattern);
    }
}
