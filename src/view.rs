//! Asset information shared by every page-rendering view.

use std::path::Path;

use crate::asset_paths::{make_static_url, walk_asset_paths_with};
use crate::config::AssetConfig;
use crate::error::AssetError;
use crate::manifest::{DependencyManifest, load_manifest};
use crate::models::PageAssets;

/// Per-request view over an application's static assets.
///
/// Nothing is cached: every accessor walks the filesystem or reads the manifest again, so
/// files added while the application runs show up on the next request.
#[derive(Debug, Clone, Copy)]
pub struct BaseView<'a> {
    resource_root: &'a Path,
    config: &'a AssetConfig,
}

impl<'a> BaseView<'a> {
    /// Create a view rooted at `resource_root`.
    pub fn new(resource_root: &'a Path, config: &'a AssetConfig) -> Self {
        Self {
            resource_root,
            config,
        }
    }

    /// Stylesheet paths relative to the stylesheet directory.
    pub fn stylesheets(&self) -> Result<Vec<String>, AssetError> {
        walk_asset_paths_with(
            &self.config.stylesheets_path(self.resource_root),
            self.config.walk_options(),
        )
    }

    /// Script paths relative to the script directory.
    pub fn scripts(&self) -> Result<Vec<String>, AssetError> {
        walk_asset_paths_with(
            &self.config.scripts_path(self.resource_root),
            self.config.walk_options(),
        )
    }

    /// Client dependencies declared in the manifest.
    pub fn dependencies(&self) -> Result<DependencyManifest, AssetError> {
        load_manifest(&self.config.manifest_path(self.resource_root))
    }

    /// Collect every asset URL the page template needs.
    pub fn page_assets(&self) -> Result<PageAssets, AssetError> {
        let dependencies = self.dependencies()?;
        let library_url = self.config.library_url();

        let stylesheets_url = self.config.stylesheets_url();
        let scripts_url = self.config.scripts_url();

        Ok(PageAssets {
            dependency_stylesheets: dependencies.stylesheet_urls(&library_url),
            dependency_scripts: dependencies.script_urls(&library_url),
            stylesheets: self
                .stylesheets()?
                .iter()
                .map(|path| make_static_url(&stylesheets_url, path))
                .collect(),
            scripts: self
                .scripts()?
                .iter()
                .map(|path| make_static_url(&scripts_url, path))
                .collect(),
        })
    }
}
