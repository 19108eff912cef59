//! Data structures produced while locating script assets.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A script file selected for inclusion, paired with the URL it is served under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScript {
  /// Physical location of the file on disk.
  pub path: PathBuf,
  /// Public web path the file is reachable at.
  pub web_path: String,
}

impl ResolvedScript {
  /// File name component of the resolved path, when one exists.
  pub fn file_name(&self) -> Option<&str> {
    self.path.file_name().and_then(|name| name.to_str())
  }
}
