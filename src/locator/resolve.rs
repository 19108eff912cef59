//! Existence-checked resolution of script references against configured roots.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::models::ResolvedScript;
use crate::registry::AppRegistry;
use crate::roots::{ServerLayout, Theme, join_web_path};
use crate::script_ref::{self, ScriptClass};

use super::candidates::{localization_candidates, standard_candidates, third_party_candidate};

/// Maps logical script references to the physical `.js` files to serve.
///
/// The locator holds only borrowed, immutable inputs. Every
/// [`find`](Self::find) call owns its output accumulator and performs
/// nothing but read-only existence probes, so concurrent resolutions are
/// safe without coordination.
pub struct ScriptLocator<'a, R: AppRegistry> {
    layout: &'a ServerLayout,
    theme: &'a Theme,
    registry: &'a R,
}

impl<'a, R: AppRegistry> ScriptLocator<'a, R> {
    /// Create a locator over the given roots, theme and app registry.
    pub fn new(layout: &'a ServerLayout, theme: &'a Theme, registry: &'a R) -> Self {
        Self {
            layout,
            theme,
            registry,
        }
    }

    /// Resolve one script reference to the files to include, in serve order.
    ///
    /// A reference that matches nothing resolves to an empty list; absence
    /// is an expected outcome at this layer, never an error.
    pub fn find(&self, script: &str) -> Vec<ResolvedScript> {
        let mut assets = AssetList::new();
        self.find_into(script, &mut assets);
        assets.finish()
    }

    /// Resolve several references into one deduplicated include sequence.
    ///
    /// Per-reference resolution order is preserved, references in caller
    /// order. A file reached through two references is included once, at
    /// its first position.
    pub fn find_all<I, S>(&self, scripts: I) -> Vec<ResolvedScript>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assets = AssetList::new();
        for script in scripts {
            self.find_into(script.as_ref(), &mut assets);
        }
        assets.finish()
    }

    fn find_into(&self, script: &str, assets: &mut AssetList) {
        if script_ref::should_reject_script_reference(script) {
            debug!("rejecting malformed script reference {script:?}");
            return;
        }

        match script_ref::classify(script) {
            ScriptClass::ThirdParty => {
                // Third-party references are served from the third-party
                // root or not at all; a miss must not leak into the themed
                // server tree.
                let found = assets.append_once_if_exists(
                    &self.layout.third_party_root,
                    &self.layout.third_party_web_root,
                    &third_party_candidate(script),
                );
                if !found {
                    debug!("third-party script {script:?} not present, skipping");
                }
            }
            ScriptClass::Localization => {
                let mut found = 0;
                for candidate in localization_candidates(script, self.theme) {
                    if assets.append_once_if_exists(
                        &self.layout.server_root,
                        &self.layout.server_web_root,
                        &candidate,
                    ) {
                        found += 1;
                    }
                }
                if found == 0 {
                    self.find_in_app(script, assets);
                }
            }
            ScriptClass::Standard => {
                let matched = standard_candidates(script, self.theme).iter().any(|candidate| {
                    assets.append_once_if_exists(
                        &self.layout.server_root,
                        &self.layout.server_web_root,
                        candidate,
                    )
                });
                if !matched {
                    self.find_in_app(script, assets);
                }
            }
        }
    }

    /// Interpret the reference as `<app id>/<path inside the app>` and probe
    /// the app's install directory.
    fn find_in_app(&self, script: &str, assets: &mut AssetList) {
        let Some((app_id, relative)) = script_ref::split_app_reference(script) else {
            debug!("script reference {script:?} names no app, nothing to serve");
            return;
        };

        let (Some(app_path), Some(app_web_path)) = (
            self.registry.app_path(app_id),
            self.registry.app_web_path(app_id),
        ) else {
            debug!("no registered app {app_id:?} for script reference {script:?}");
            return;
        };

        let candidate = format!("{relative}.js");
        let found = assets.append_once_if_exists(&app_path, &app_web_path, &candidate);
        // Missing translations are expected and stay quiet; any other
        // missing app script is worth a trace when debugging a page with
        // broken includes.
        if !found && !relative.starts_with(script_ref::L10N_APP_PREFIX) {
            debug!("app script {candidate} not found under {}", app_path.display());
        }
    }
}

/// Output accumulator enforcing the append-once contract.
struct AssetList {
    seen: BTreeSet<PathBuf>,
    out: Vec<ResolvedScript>,
}

impl AssetList {
    fn new() -> Self {
        Self {
            seen: BTreeSet::new(),
            out: Vec::new(),
        }
    }

    /// Append the candidate when the file exists and was not appended
    /// before. Returns whether the file exists, so callers can evaluate
    /// their stop conditions independently of deduplication.
    fn append_once_if_exists(&mut self, root: &Path, web_root: &str, relative: &str) -> bool {
        let path = root.join(relative);
        if !path.is_file() {
            return false;
        }
        if self.seen.insert(path.clone()) {
            let web_path = join_web_path(web_root, relative);
            self.out.push(ResolvedScript { path, web_path });
        }
        true
    }

    fn finish(self) -> Vec<ResolvedScript> {
        self.out
    }
}
