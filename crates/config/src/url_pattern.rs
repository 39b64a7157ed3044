//! Link templates pointing at a line of a file in a repository's web UI.
//!
//! A [`UrlPattern`] is a pair of templates. The base URL may contain `{url}`,
//! `{path}` and `{anchor}`; the anchor may contain `{line}`.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::defaults::{
    AZURE_DEVOPS_MARKER, DEFAULT_ANCHOR, DEFAULT_ANCHOR_AZURE_DEVOPS, DEFAULT_BASE_URL,
    DEFAULT_BASE_URL_AZURE_DEVOPS,
};

/// Base-URL and anchor templates for one repository.
///
/// # Examples
///
/// ```
/// use trawl_config::UrlPattern;
///
/// let pattern = UrlPattern::default_for("https://github.com/rust-lang/rust");
/// assert_eq!(
///     pattern.link_to("https://github.com/rust-lang/rust", "README.md", Some(3)),
///     "https://github.com/rust-lang/rust/blob/master/README.md#L3",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UrlPattern {
    /// Template for the file URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_url: String,

    /// Template for the line anchor appended through `{anchor}`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub anchor: String,
}

impl UrlPattern {
    /// Creates a pattern from explicit templates.
    #[must_use]
    pub fn new(base_url: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anchor: anchor.into(),
        }
    }

    /// The templates used for GitHub-style hosting.
    #[must_use]
    pub fn generic() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_ANCHOR)
    }

    /// The templates used for Azure DevOps repositories.
    #[must_use]
    pub fn azure_devops() -> Self {
        Self::new(DEFAULT_BASE_URL_AZURE_DEVOPS, DEFAULT_ANCHOR_AZURE_DEVOPS)
    }

    /// Picks the default templates for a repository URL.
    ///
    /// URLs containing [`AZURE_DEVOPS_MARKER`] get the Azure DevOps pair,
    /// everything else the generic pair.
    #[must_use]
    pub fn default_for(repo_url: &str) -> Self {
        if repo_url.contains(AZURE_DEVOPS_MARKER) {
            Self::azure_devops()
        } else {
            Self::generic()
        }
    }

    /// Fills each empty template with the generic default.
    ///
    /// Templates that are already set are left alone.
    pub fn fill_defaults(&mut self) {
        if self.base_url.is_empty() {
            self.base_url = DEFAULT_BASE_URL.to_string();
        }

        if self.anchor.is_empty() {
            self.anchor = DEFAULT_ANCHOR.to_string();
        }
    }

    /// Expands the templates into a link.
    ///
    /// Without a line number the anchor expands to nothing.
    #[must_use]
    pub fn link_to(&self, repo_url: &str, path: &str, line: Option<u32>) -> String {
        let anchor = match line {
            Some(line) => self.anchor.replace("{line}", &line.to_string()),
            None => String::new(),
        };

        expand(
            &self.base_url,
            &[("{url}", repo_url), ("{path}", path), ("{anchor}", &anchor)],
        )
    }
}

/// Replaces placeholders in a single left-to-right pass.
///
/// Substituted values are copied verbatim and never scanned again.
fn expand(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
