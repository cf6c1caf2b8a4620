//! Loading the client dependency manifest (`dependency_autoload.json`).
//!
//! The manifest is a JSON object mapping each client library to a [`DependencyRecord`]:
//!
//! ```json
//! {
//!   "jquery": { "version": "2.1.1", "js": ["dist/jquery.min.js"] },
//!   "bootstrap": {
//!     "version": "3.2.0",
//!     "css": ["dist/css/bootstrap.min.css"],
//!     "js": ["dist/js/bootstrap.min.js"]
//!   }
//! }
//! ```
//!
//! Entries keep their document order so libraries load in the order they were declared.
//! Duplicate names and entries that are not records are rejected while parsing.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::AssetError;
use crate::models::DependencyRecord;

/// Default manifest file name looked up in the resource root.
pub const DEFAULT_MANIFEST_FILE: &str = "dependency_autoload.json";

/// Parsed dependency manifest, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
  entries: Vec<(String, DependencyRecord)>,
}

impl DependencyManifest {
  /// Parse a manifest from a JSON string.
  pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(content)
  }

  /// Iterate over `(name, record)` pairs in document order.
  pub fn entries(&self) -> impl Iterator<Item = (&str, &DependencyRecord)> {
    self
      .entries
      .iter()
      .map(|(name, record)| (name.as_str(), record))
  }

  /// Look up a dependency by name.
  pub fn get(&self, name: &str) -> Option<&DependencyRecord> {
    self
      .entries
      .iter()
      .find(|(candidate, _)| candidate == name)
      .map(|(_, record)| record)
  }

  /// Number of declared dependencies.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no dependencies are declared.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Stylesheet URLs of every dependency, in manifest order.
  pub fn stylesheet_urls(&self, library_url: &str) -> Vec<String> {
    self
      .entries()
      .flat_map(|(name, record)| record.stylesheet_urls(library_url, name))
      .collect()
  }

  /// Script URLs of every dependency, in manifest order.
  pub fn script_urls(&self, library_url: &str) -> Vec<String> {
    self
      .entries()
      .flat_map(|(name, record)| record.script_urls(library_url, name))
      .collect()
  }
}

/// Load the dependency manifest from disk.
///
/// A missing file is reported as an [`AssetError::Io`] whose source has kind `NotFound`;
/// malformed JSON, duplicate names and malformed records as [`AssetError::Parse`].
pub fn load_manifest(path: &Path) -> Result<DependencyManifest, AssetError> {
  let content = fs::read_to_string(path).map_err(|err| AssetError::io(path, err))?;
  let manifest = DependencyManifest::from_json(&content).map_err(|err| AssetError::Parse {
    path: path.to_path_buf(),
    source: err,
  })?;
  tracing::debug!(
    path = %path.display(),
    dependencies = manifest.len(),
    "loaded dependency manifest"
  );
  Ok(manifest)
}

impl<'de> Deserialize<'de> for DependencyManifest {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(ManifestVisitor)
  }
}

struct ManifestVisitor;

impl<'de> Visitor<'de> for ManifestVisitor {
  type Value = DependencyManifest;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("an object mapping dependency names to records")
  }

  fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut entries: Vec<(String, DependencyRecord)> =
      Vec::with_capacity(access.size_hint().unwrap_or(0));

    while let Some(name) = access.next_key::<String>()? {
      if entries.iter().any(|(existing, _)| *existing == name) {
        return Err(de::Error::custom(format_args!(
          "duplicate dependency `{name}`"
        )));
      }
      let record: DependencyRecord = access.next_value()?;
      entries.push((name, record));
    }

    Ok(DependencyManifest { entries })
  }
}
