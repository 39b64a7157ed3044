//! Configuration file reading and path resolution.
//!
//! Configuration files are plain JSON. Paths written inside a configuration
//! file are relative to the directory holding that file.

use std::path::{Component, Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Reads and parses a JSON configuration file.
///
/// The file is read in full and closed before decoding starts.
///
/// # Type Parameters
///
/// * `T` - The type to deserialize into (must implement `serde::Deserialize`)
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::Parse`] if its content is not valid JSON for `T`.
///
/// # Examples
///
/// ```no_run
/// use trawl_config::persistence::read_config_file;
/// use trawl_config::Config;
///
/// # fn main() -> trawl_config::Result<()> {
/// let config: Config = read_config_file("config.json")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns the directory relative paths in `config_file` are resolved against.
///
/// A bare file name yields an empty path, meaning the working directory.
#[must_use]
pub fn config_dir(config_file: &Path) -> &Path {
    config_file.parent().unwrap_or(Path::new(""))
}

/// Resolves `path` against `base` into an absolute, lexically clean path.
///
/// Absolute paths are only cleaned. Relative results are anchored at the
/// working directory. The filesystem is not consulted, so the target does not
/// need to exist and symbolic links are kept as written.
///
/// # Errors
///
/// Returns [`ConfigError::ResolvePath`] if the working directory is needed
/// and cannot be determined.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use std::path::Path;
/// use trawl_config::persistence::resolve_relative_to;
///
/// let path = resolve_relative_to(Path::new("/srv/trawl"), Path::new("../data")).unwrap();
/// assert_eq!(path, Path::new("/srv/data"));
/// # }
/// ```
pub fn resolve_relative_to(base: &Path, path: &Path) -> Result<PathBuf> {
    let mut joined = base.join(path);
    if joined.as_os_str().is_empty() {
        joined = PathBuf::from(".");
    }

    let absolute = std::path::absolute(&joined).map_err(|e| ConfigError::ResolvePath {
        path: joined.clone(),
        source: e,
    })?;

    Ok(clean(&absolute))
}

/// Drops `.` components and folds `..` into the preceding component.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestConfig {
        name: String,
        value: i32,
    }

    #[test]
    fn read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json");
        std::fs::write(&path, r#"{"name": "test", "value": 42}"#).unwrap();

        let config: TestConfig = read_config_file(&path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[test]
    fn read_nonexistent_file() {
        let result: Result<TestConfig> = read_config_file("/nonexistent/path.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn read_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result: Result<TestConfig> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn read_rejects_json5_syntax() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.json");
        std::fs::write(&path, "{ name: \"test\", value: 42, }").unwrap();

        let result: Result<TestConfig> = read_config_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn config_dir_of_bare_file_name() {
        assert_eq!(config_dir(Path::new("config.json")), Path::new(""));
        assert_eq!(config_dir(Path::new("etc/config.json")), Path::new("etc"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_joins_and_cleans() {
        let base = Path::new("/a/b");
        assert_eq!(
            resolve_relative_to(base, Path::new("data")).unwrap(),
            Path::new("/a/b/data")
        );
        assert_eq!(
            resolve_relative_to(base, Path::new("./x/../data")).unwrap(),
            Path::new("/a/b/data")
        );
        assert_eq!(
            resolve_relative_to(base, Path::new("../../../data")).unwrap(),
            Path::new("/data")
        );
    }

    #[cfg(unix)]
    #[test]
    fn resolve_keeps_absolute_path() {
        assert_eq!(
            resolve_relative_to(Path::new("/a/b"), Path::new("/abs/data")).unwrap(),
            Path::new("/abs/data")
        );
    }

    #[test]
    fn resolve_empty_is_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            resolve_relative_to(Path::new(""), Path::new("")).unwrap(),
            clean(&cwd)
        );
    }

    #[test]
    fn resolve_relative_base_is_anchored_at_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        let resolved = resolve_relative_to(Path::new("conf"), Path::new("db")).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, clean(&cwd.join("conf").join("db")));
    }
}
