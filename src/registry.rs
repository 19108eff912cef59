//! App install locations used by the app-relative resolution fallback.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Source of install paths and public web paths for server apps.
pub trait AppRegistry {
  /// Filesystem directory the app is installed at, if the app is known.
  fn app_path(&self, app_id: &str) -> Option<PathBuf>;

  /// Public web path the app's assets are served under, if the app is known.
  fn app_web_path(&self, app_id: &str) -> Option<String>;
}

/// Install location record for a single app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLocation {
  /// Directory the app is installed at.
  pub path: PathBuf,
  /// Web path the app's assets are served under.
  pub web_path: String,
}

/// Registry backed by a fixed table of app locations.
#[derive(Debug, Clone, Default)]
pub struct StaticAppRegistry {
  apps: BTreeMap<String, AppLocation>,
}

/// Errors that can occur while loading a registry file.
#[derive(Debug)]
pub enum AppRegistryError {
  /// Failed to read the registry file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the JSON registry file.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl StaticAppRegistry {
  /// Registry with no known apps.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an app's install location, replacing any previous entry.
  pub fn insert(&mut self, app_id: impl Into<String>, location: AppLocation) {
    self.apps.insert(app_id.into(), location);
  }

  /// Load a registry from a JSON file mapping app ids to install locations.
  ///
  /// A missing file yields an empty registry, so deployments without
  /// installed apps keep resolving root-relative scripts unchanged.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, AppRegistryError> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
        return Ok(Self::default());
      }
      Err(err) => {
        return Err(AppRegistryError::Io {
          path: path.to_path_buf(),
          source: err,
        });
      }
    };

    let apps: BTreeMap<String, AppLocation> =
      serde_json::from_str(&contents).map_err(|err| AppRegistryError::Parse {
        path: path.to_path_buf(),
        source: err,
      })?;
    Ok(Self { apps })
  }

  /// Returns `true` when no apps are registered.
  pub fn is_empty(&self) -> bool {
    self.apps.is_empty()
  }
}

impl AppRegistry for StaticAppRegistry {
  fn app_path(&self, app_id: &str) -> Option<PathBuf> {
    self.apps.get(app_id).map(|location| location.path.clone())
  }

  fn app_web_path(&self, app_id: &str) -> Option<String> {
    self.apps.get(app_id).map(|location| location.web_path.clone())
  }
}

impl std::fmt::Display for AppRegistryError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for AppRegistryError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}
