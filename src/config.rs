//! Deployment configuration describing roots, theme and installed apps.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::registry::{AppLocation, StaticAppRegistry};
use crate::roots::{ServerLayout, Theme};

const DEFAULT_CONFIG_FILE: &str = "locator.config.json";

/// Discoverable deployment configuration for script resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorConfig {
    /// Directory containing the `core/`, `apps/` and theme trees.
    pub server_root: String,
    /// Web prefix the server tree is served under.
    pub server_web_root: String,
    /// Directory containing the bundled `3rdparty/` tree.
    pub third_party_root: String,
    /// Web prefix bundled third-party assets are served under.
    pub third_party_web_root: String,
    /// Active theme directory relative to the server root; empty for none.
    pub theme_directory: String,
    /// Install locations of server apps, keyed by app id.
    pub apps: BTreeMap<String, AppEntry>,
}

/// Install location of a single app as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    /// Directory the app is installed at.
    pub path: String,
    /// Web path the app's assets are served under.
    pub web_path: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            server_root: ".".into(),
            server_web_root: String::new(),
            third_party_root: ".".into(),
            third_party_web_root: String::new(),
            theme_directory: String::new(),
            apps: BTreeMap::new(),
        }
    }
}

impl LocatorConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with sensible assumptions.
    pub fn discover(base_dir: &Path) -> Self {
        let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Filesystem layout described by this configuration, with relative
    /// roots anchored at `base_dir`.
    pub fn layout(&self, base_dir: &Path) -> ServerLayout {
        ServerLayout {
            server_root: anchor(base_dir, &self.server_root),
            server_web_root: self.server_web_root.clone(),
            third_party_root: anchor(base_dir, &self.third_party_root),
            third_party_web_root: self.third_party_web_root.clone(),
        }
    }

    /// Theme override described by this configuration.
    pub fn theme(&self) -> Theme {
        Theme::new(self.theme_directory.as_str())
    }

    /// Registry over the configured app table, with relative install paths
    /// anchored at `base_dir`.
    pub fn registry(&self, base_dir: &Path) -> StaticAppRegistry {
        let mut registry = StaticAppRegistry::new();
        for (app_id, entry) in &self.apps {
            registry.insert(app_id.clone(), AppLocation {
                path: anchor(base_dir, &entry.path),
                web_path: entry.web_path.clone(),
            });
        }
        registry
    }
}

fn anchor(base_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::registry::AppRegistry;

    #[test]
    fn discover_falls_back_to_defaults() {
        let temp = tempdir().expect("failed to create temp dir");
        let config = LocatorConfig::discover(temp.path());

        assert_eq!(config.server_root, ".");
        assert_eq!(config.theme_directory, "");
        assert!(config.apps.is_empty());
    }

    #[test]
    fn discover_reads_the_config_file() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(
            temp.path().join("locator.config.json"),
            r#"{
                "serverRoot": "www",
                "serverWebRoot": "/cloud",
                "thirdPartyRoot": "www",
                "thirdPartyWebRoot": "/cloud",
                "themeDirectory": "themes/custom",
                "apps": {
                    "gallery": {"path": "extra/gallery", "webPath": "/apps-external/gallery"}
                }
            }"#,
        )
        .expect("failed to write config file");

        let config = LocatorConfig::discover(temp.path());
        let layout = config.layout(temp.path());
        let registry = config.registry(temp.path());

        assert_eq!(layout.server_root, temp.path().join("www"));
        assert_eq!(layout.server_web_root, "/cloud");
        assert_eq!(config.theme().directory(), Some("themes/custom"));
        assert_eq!(
            registry.app_path("gallery"),
            Some(temp.path().join("extra/gallery"))
        );
        assert_eq!(
            registry.app_web_path("gallery"),
            Some("/apps-external/gallery".into())
        );
    }

    #[test]
    fn absolute_roots_are_kept_as_written() {
        let config = LocatorConfig {
            server_root: "/srv/www".into(),
            ..LocatorConfig::default()
        };

        let layout = config.layout(Path::new("/elsewhere"));
        assert_eq!(layout.server_root, PathBuf::from("/srv/www"));
    }

    #[test]
    fn unparseable_config_files_fall_back_to_defaults() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(temp.path().join("locator.config.json"), "not json")
            .expect("failed to write config file");

        let config = LocatorConfig::discover(temp.path());
        assert_eq!(config.server_root, ".");
    }
}
