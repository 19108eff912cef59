//! Candidate path generation for script resolution.
//!
//! Every function returns root-relative paths in probe order, already
//! deduplicated. With no theme configured the themed entries collapse onto
//! their unthemed counterparts, keeping the first occurrence position.

use std::collections::BTreeSet;

use crate::roots::Theme;

/// Relative path of the only candidate a third-party reference can match.
pub fn third_party_candidate(script: &str) -> String {
    format!("{script}.js")
}

/// Server-root-relative candidates for a language resource, in probe order.
///
/// All of these are probed on every resolution; theme translations
/// supplement the base files instead of replacing them, so a partial theme
/// translation cannot hide base-language strings.
pub fn localization_candidates(script: &str, theme: &Theme) -> Vec<String> {
    let mut list = CandidateList::new();
    list.push(format!("core/{script}.js"));
    list.push_themed(theme, format!("core/{script}.js"));
    list.push(format!("{script}.js"));
    list.push_themed(theme, format!("{script}.js"));
    list.push_themed(theme, format!("apps/{script}.js"));
    list.finish()
}

/// Server-root-relative candidates for a standard reference, in probe order.
///
/// Only the first existing candidate is served; theme files take precedence
/// over their default counterparts.
pub fn standard_candidates(script: &str, theme: &Theme) -> Vec<String> {
    let mut list = CandidateList::new();
    list.push_themed(theme, format!("apps/{script}.js"));
    list.push_themed(theme, format!("{script}.js"));
    list.push(format!("{script}.js"));
    list.push_themed(theme, format!("core/{script}.js"));
    list.push(format!("core/{script}.js"));
    list.finish()
}

struct CandidateList {
    seen: BTreeSet<String>,
    out: Vec<String>,
}

impl CandidateList {
    fn new() -> Self {
        Self {
            seen: BTreeSet::new(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, candidate: String) {
        if self.seen.insert(candidate.clone()) {
            self.out.push(candidate);
        }
    }

    fn push_themed(&mut self, theme: &Theme, candidate: String) {
        match theme.directory() {
            Some(directory) => self.push(format!("{directory}/{candidate}")),
            None => self.push(candidate),
        }
    }

    fn finish(self) -> Vec<String> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_party_reference_has_exactly_one_candidate() {
        assert_eq!(
            third_party_candidate("3rdparty/select2/select2"),
            "3rdparty/select2/select2.js"
        );
    }

    #[test]
    fn localization_candidates_keep_the_documented_order() {
        let theme = Theme::new("themes/custom");
        assert_eq!(localization_candidates("core/l10n/de", &theme), vec![
            "core/core/l10n/de.js".to_string(),
            "themes/custom/core/core/l10n/de.js".to_string(),
            "core/l10n/de.js".to_string(),
            "themes/custom/core/l10n/de.js".to_string(),
            "themes/custom/apps/core/l10n/de.js".to_string(),
        ]);
    }

    #[test]
    fn localization_candidates_collapse_without_a_theme() {
        assert_eq!(localization_candidates("files/l10n/de", &Theme::none()), vec![
            "core/files/l10n/de.js".to_string(),
            "files/l10n/de.js".to_string(),
            "apps/files/l10n/de.js".to_string(),
        ]);
    }

    #[test]
    fn standard_candidates_keep_the_documented_order() {
        let theme = Theme::new("themes/custom");
        assert_eq!(standard_candidates("files/main", &theme), vec![
            "themes/custom/apps/files/main.js".to_string(),
            "themes/custom/files/main.js".to_string(),
            "files/main.js".to_string(),
            "themes/custom/core/files/main.js".to_string(),
            "core/files/main.js".to_string(),
        ]);
    }

    #[test]
    fn standard_candidates_collapse_without_a_theme() {
        assert_eq!(standard_candidates("files/main", &Theme::none()), vec![
            "apps/files/main.js".to_string(),
            "files/main.js".to_string(),
            "core/files/main.js".to_string(),
        ]);
    }
}
