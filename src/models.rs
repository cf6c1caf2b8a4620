//! Data structures handed from the asset loaders to views and templates.

use serde::{Deserialize, Serialize};

use crate::asset_paths::make_static_url;

/// Client library declared in the dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DependencyRecord {
  /// Version of the library as known by the package manager that installed it.
  pub version: String,
  /// Stylesheets to load, relative to the library's install directory.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub css: Option<Vec<String>>,
  /// Scripts to load, relative to the library's install directory.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub js: Option<Vec<String>>,
}

impl DependencyRecord {
  /// Stylesheet paths declared for the library, empty when the key was omitted.
  pub fn stylesheets(&self) -> &[String] {
    self.css.as_deref().unwrap_or_default()
  }

  /// Script paths declared for the library, empty when the key was omitted.
  pub fn scripts(&self) -> &[String] {
    self.js.as_deref().unwrap_or_default()
  }

  /// URLs of the library's stylesheets below `library_url/<name>/`.
  pub fn stylesheet_urls(&self, library_url: &str, name: &str) -> Vec<String> {
    expand_urls(library_url, name, self.stylesheets())
  }

  /// URLs of the library's scripts below `library_url/<name>/`.
  pub fn script_urls(&self, library_url: &str, name: &str) -> Vec<String> {
    expand_urls(library_url, name, self.scripts())
  }
}

fn expand_urls(library_url: &str, name: &str, paths: &[String]) -> Vec<String> {
  let base = make_static_url(library_url, name);
  paths
    .iter()
    .map(|path| make_static_url(&base, path))
    .collect()
}

/// Everything a page template needs to emit its asset tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageAssets {
  /// Stylesheet URLs contributed by manifest dependencies, in manifest order.
  pub dependency_stylesheets: Vec<String>,
  /// Script URLs contributed by manifest dependencies, in manifest order.
  pub dependency_scripts: Vec<String>,
  /// URLs of the application's own stylesheets.
  pub stylesheets: Vec<String>,
  /// URLs of the application's own scripts.
  pub scripts: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn jquery() -> DependencyRecord {
    DependencyRecord {
      version: "2.1.1".into(),
      css: None,
      js: Some(vec!["dist/jquery.min.js".into()]),
    }
  }

  #[test]
  fn missing_lists_read_as_empty() {
    let record = jquery();
    assert!(record.stylesheets().is_empty());
    assert_eq!(record.scripts(), ["dist/jquery.min.js".to_string()]);
  }

  #[test]
  fn expands_urls_under_library_directory() {
    let record = DependencyRecord {
      version: "3.2.0".into(),
      css: Some(vec!["dist/css/bootstrap.css".into(), "dist/css/theme.css".into()]),
      js: None,
    };

    assert_eq!(record.stylesheet_urls("/static/lib", "bootstrap"), vec![
      "/static/lib/bootstrap/dist/css/bootstrap.css".to_string(),
      "/static/lib/bootstrap/dist/css/theme.css".to_string(),
    ]);
    assert!(record.script_urls("/static/lib", "bootstrap").is_empty());
  }

  #[test]
  fn omits_absent_lists_when_serialised() {
    let json = serde_json::to_value(jquery()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"version": "2.1.1", "js": ["dist/jquery.min.js"]})
    );
  }
}
