//! Fixed defaults applied when a configuration leaves a field unset.
//!
//! Every literal the normalization pass can write into a [`Config`] or
//! [`Repository`] lives here.
//!
//! [`Config`]: crate::Config
//! [`Repository`]: crate::Repository

/// Default delay between two polls of a repository, in milliseconds.
pub const DEFAULT_MS_BETWEEN_POLL: i64 = 30_000;

/// Default number of indexers allowed to run at the same time.
pub const DEFAULT_MAX_CONCURRENT_INDEXERS: i64 = 2;

/// Whether polling-based updates are enabled when the flag is unset.
pub const DEFAULT_POLL_ENABLED: bool = true;

/// Whether push-based updates are enabled when the flag is unset.
pub const DEFAULT_PUSH_ENABLED: bool = false;

/// Display title used when the configuration does not name one.
pub const DEFAULT_TITLE: &str = "Trawl";

/// Version-control kind assumed when a repository does not name one.
pub const DEFAULT_VCS: &str = "git";

/// Path of the health-check endpoint.
pub const DEFAULT_HEALTH_CHECK_URI: &str = "/healthz";

/// Generic base-URL template, matching GitHub-style hosting.
pub const DEFAULT_BASE_URL: &str = "{url}/blob/master/{path}{anchor}";

/// Generic line anchor template.
pub const DEFAULT_ANCHOR: &str = "#L{line}";

/// Substring identifying an Azure DevOps repository URL.
pub const AZURE_DEVOPS_MARKER: &str = "visualstudio.com";

/// Azure DevOps base-URL template.
pub const DEFAULT_BASE_URL_AZURE_DEVOPS: &str =
    "{url}/?path=%2F{path}&version=GBmaster&line={anchor}";

/// Azure DevOps line anchor template.
pub const DEFAULT_ANCHOR_AZURE_DEVOPS: &str = "&line={line}";
