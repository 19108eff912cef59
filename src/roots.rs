//! Filesystem roots and theme context injected into every resolution.
//!
//! Both types are plain values handed to the locator per call site; nothing
//! here reads ambient or global state.

use std::path::PathBuf;

/// Filesystem roots the locator searches, each paired with the web prefix it
/// is served under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLayout {
    /// Directory containing the `core/`, `apps/` and theme trees.
    pub server_root: PathBuf,
    /// Web prefix the server tree is exposed at, e.g. `""` or `"/cloud"`.
    pub server_web_root: String,
    /// Directory containing the bundled `3rdparty/` tree.
    pub third_party_root: PathBuf,
    /// Web prefix bundled third-party assets are exposed at.
    pub third_party_web_root: String,
}

/// Optional directory of override assets relative to the server root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    directory: Option<String>,
}

impl Theme {
    /// Theme with no override directory.
    pub fn none() -> Self {
        Self::default()
    }

    /// Theme rooted at `directory`, relative to the server root.
    ///
    /// The value is normalised to forward slashes with no leading or
    /// trailing separator; an empty or all-separator value means no theme.
    pub fn new(directory: impl Into<String>) -> Self {
        let raw = directory.into().replace('\\', "/");
        let cleaned = raw.trim_matches('/');
        Self {
            directory: (!cleaned.is_empty()).then(|| cleaned.to_string()),
        }
    }

    /// Normalised override directory, if one is configured.
    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }
}

/// Produce the public web path for a root-relative candidate.
///
/// The generated path always carries a single leading separator regardless
/// of how the configured prefix was written, so the output is usable as a
/// URL path on every platform.
pub fn join_web_path(prefix: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
