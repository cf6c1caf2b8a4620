//! Error type shared by the walker and the manifest loader.

use std::path::{Path, PathBuf};

/// Errors raised while discovering assets or loading the dependency manifest.
#[derive(Debug)]
pub enum AssetError {
  /// Failed to read a directory, entry or file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON document.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Directory nesting went past the configured limit.
  DepthExceeded {
    /// First directory found beyond the limit.
    path: PathBuf,
    /// Maximum depth that was allowed.
    limit: usize,
  },
}

impl AssetError {
  pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
    Self::Io {
      path: path.to_path_buf(),
      source,
    }
  }

  /// Returns `true` when the error was caused by a missing file.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
  }
}

impl std::fmt::Display for AssetError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::DepthExceeded { path, limit } => {
        write!(
          f,
          "directory {} is nested deeper than the limit of {}",
          path.display(),
          limit
        )
      }
    }
  }
}

impl std::error::Error for AssetError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
      Self::DepthExceeded { .. } => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reports_missing_files() {
    let err = AssetError::io(
      Path::new("dependency_autoload.json"),
      std::io::Error::from(std::io::ErrorKind::NotFound),
    );
    assert!(err.is_not_found());
    assert!(err.to_string().starts_with("failed to read dependency_autoload.json"));
  }

  #[test]
  fn depth_errors_have_no_source() {
    let err = AssetError::DepthExceeded {
      path: PathBuf::from("public/css/deep"),
      limit: 3,
    };
    assert!(std::error::Error::source(&err).is_none());
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("limit of 3"));
  }
}
