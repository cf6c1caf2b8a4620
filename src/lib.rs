#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod render;
pub mod view;

pub use asset_paths::{WalkOptions, walk_asset_paths, walk_asset_paths_with};
pub use config::AssetConfig;
pub use error::AssetError;
pub use manifest::{DependencyManifest, load_manifest};
pub use models::{DependencyRecord, PageAssets};
pub use view::BaseView;
