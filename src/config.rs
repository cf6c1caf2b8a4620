//! Configuration describing where an application keeps its static assets.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::asset_paths::{DEFAULT_MAX_DEPTH, WalkOptions, make_static_url, url_segment};
use crate::error::AssetError;
use crate::manifest::DEFAULT_MANIFEST_FILE;

/// File name searched for in the resource root by [`AssetConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "tdf_assets.json";

/// Filesystem layout and URL prefix of an application's static assets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding the application's stylesheets, relative to the resource root.
    pub stylesheets_dir: String,
    /// Directory holding the application's scripts, relative to the resource root.
    pub scripts_dir: String,
    /// Directory client libraries are installed into, one subdirectory per library.
    pub library_dir: String,
    /// Dependency manifest file name, relative to the resource root.
    pub manifest_file: String,
    /// URL prefix the static directories are served under.
    pub static_url_prefix: String,
    /// Maximum directory nesting followed while walking asset directories.
    pub max_depth: usize,
    /// Sort walked asset paths instead of keeping directory listing order.
    pub sort_assets: bool,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            stylesheets_dir: "public/css".into(),
            scripts_dir: "public/js".into(),
            library_dir: "public/lib".into(),
            manifest_file: DEFAULT_MANIFEST_FILE.into(),
            static_url_prefix: "/static".into(),
            max_depth: DEFAULT_MAX_DEPTH,
            sort_assets: false,
        }
    }
}

impl AssetConfig {
    /// Attempt to load configuration from the provided resource root.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to default
    /// values so views keep rendering with the conventional layout.
    pub fn discover(resource_root: &Path) -> Self {
        let candidate = resource_root.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Ok(config) => config,
            Err(err) if err.is_not_found() => Self::default(),
            Err(err) => {
                tracing::warn!("{err}, using default asset layout");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, AssetError> {
        let content = fs::read_to_string(path).map_err(|err| AssetError::io(path, err))?;
        serde_json::from_str(&content).map_err(|err| AssetError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Walk options derived from the configuration.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.max_depth,
            sorted: self.sort_assets,
        }
    }
}

impl AssetConfig {
    /// Absolute stylesheet directory below the resource root.
    pub fn stylesheets_path(&self, resource_root: &Path) -> PathBuf {
        resource_root.join(&self.stylesheets_dir)
    }

    /// Absolute script directory below the resource root.
    pub fn scripts_path(&self, resource_root: &Path) -> PathBuf {
        resource_root.join(&self.scripts_dir)
    }

    /// Absolute dependency manifest path below the resource root.
    pub fn manifest_path(&self, resource_root: &Path) -> PathBuf {
        resource_root.join(&self.manifest_file)
    }

    /// URL the stylesheet directory is served from, e.g. `/static/css`.
    pub fn stylesheets_url(&self) -> String {
        make_static_url(&self.static_url_prefix, url_segment(&self.stylesheets_dir))
    }

    /// URL the script directory is served from, e.g. `/static/js`.
    pub fn scripts_url(&self) -> String {
        make_static_url(&self.static_url_prefix, url_segment(&self.scripts_dir))
    }

    /// URL the library directory is served from, e.g. `/static/lib`.
    pub fn library_url(&self) -> String {
        make_static_url(&self.static_url_prefix, url_segment(&self.library_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_follow_conventional_layout() {
        let config = AssetConfig::default();
        let root = Path::new("/srv/app");

        assert_eq!(config.stylesheets_path(root), root.join("public/css"));
        assert_eq!(config.scripts_path(root), root.join("public/js"));
        assert_eq!(
            config.manifest_path(root),
            root.join("dependency_autoload.json")
        );
        assert_eq!(config.stylesheets_url(), "/static/css");
        assert_eq!(config.scripts_url(), "/static/js");
        assert_eq!(config.library_url(), "/static/lib");
        assert_eq!(config.walk_options(), WalkOptions::default());
    }

    #[test]
    fn discover_falls_back_to_defaults_when_missing() {
        let dir = tempdir().unwrap();
        assert_eq!(AssetConfig::discover(dir.path()), AssetConfig::default());
    }

    #[test]
    fn discover_falls_back_to_defaults_when_malformed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{not json").unwrap();
        assert_eq!(AssetConfig::discover(dir.path()), AssetConfig::default());
    }

    #[test]
    fn partial_files_keep_remaining_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"static_url_prefix": "/assets/", "sort_assets": true, "max_depth": 8}"#,
        )
        .unwrap();

        let config = AssetConfig::discover(dir.path());
        assert_eq!(config.stylesheets_dir, "public/css");
        assert_eq!(config.stylesheets_url(), "/assets/css");
        assert_eq!(config.walk_options(), WalkOptions {
            max_depth: 8,
            sorted: true,
        });
    }

    #[test]
    fn from_path_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"max_depth": "deep"}"#).unwrap();

        let err = AssetConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }
}
