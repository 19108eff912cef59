//! Classification and hygiene checks for logical script references.
//!
//! A reference is classified exactly once before any path is constructed;
//! the resolver branches on the resulting tag instead of re-scanning the
//! string per branch.

use regex::Regex;

/// Prefix marking a bundled third-party library reference.
pub const THIRD_PARTY_PREFIX: &str = "3rdparty";

/// Marker identifying a language resource reference.
pub const L10N_MARKER: &str = "/l10n/";

/// Prefix of app-relative paths that hold translations.
pub const L10N_APP_PREFIX: &str = "l10n/";

/// Category a script reference falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// Bundled third-party library, only ever served from the third-party root.
    ThirdParty,
    /// Language resource; theme files supplement base translations instead of
    /// replacing them.
    Localization,
    /// Everything else.
    Standard,
}

/// Classify a script reference.
///
/// The third-party prefix wins over the localization marker, matching the
/// order the resolution branches are evaluated in.
pub fn classify(script: &str) -> ScriptClass {
    if script.starts_with(THIRD_PARTY_PREFIX) {
        ScriptClass::ThirdParty
    } else if script.contains(L10N_MARKER) {
        ScriptClass::Localization
    } else {
        ScriptClass::Standard
    }
}

fn script_reference_rejects() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^[a-z][a-z0-9+.-]*:").expect("invalid scheme regex"),
                Regex::new(r"(^|/)\.\.(/|$)").expect("invalid traversal regex"),
                Regex::new(r"^[/\\]").expect("invalid absolute path regex"),
                Regex::new(r"\\").expect("invalid backslash regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a script reference should be rejected before resolution.
///
/// URL schemes, parent-directory segments and absolute paths can never name
/// a servable script; every candidate built from an accepted reference stays
/// inside the configured roots.
pub fn should_reject_script_reference(value: &str) -> bool {
    value.is_empty()
        || script_reference_rejects()
            .iter()
            .any(|pattern| pattern.is_match(value))
}

/// Split an unresolved reference into an app id and the path inside the app.
///
/// Returns `None` when the reference carries no separator and therefore
/// cannot name an app.
pub fn split_app_reference(script: &str) -> Option<(&str, &str)> {
    script
        .split_once('/')
        .filter(|(app_id, relative)| !app_id.is_empty() && !relative.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_third_party_references() {
        assert_eq!(classify("3rdparty/select2/select2"), ScriptClass::ThirdParty);
    }

    #[test]
    fn third_party_prefix_wins_over_localization_marker() {
        assert_eq!(classify("3rdparty/widget/l10n/de"), ScriptClass::ThirdParty);
    }

    #[test]
    fn classifies_language_resources() {
        assert_eq!(classify("core/l10n/de"), ScriptClass::Localization);
        assert_eq!(classify("files/l10n/en_GB"), ScriptClass::Localization);
    }

    #[test]
    fn marker_requires_surrounding_separators() {
        // A leading `l10n/` path segment is app-relative, not a marker hit.
        assert_eq!(classify("l10n/de"), ScriptClass::Standard);
        assert_eq!(classify("files/main"), ScriptClass::Standard);
    }

    #[test]
    fn rejects_malformed_references() {
        assert!(should_reject_script_reference(""));
        assert!(should_reject_script_reference("../etc/passwd"));
        assert!(should_reject_script_reference("apps/../../secret"));
        assert!(should_reject_script_reference("/abs/path"));
        assert!(should_reject_script_reference("files\\main"));
        assert!(should_reject_script_reference("https://cdn.example.com/x"));
        assert!(should_reject_script_reference("data:text/javascript;base64,x"));
    }

    #[test]
    fn keeps_ordinary_references() {
        assert!(!should_reject_script_reference("files/main"));
        assert!(!should_reject_script_reference("core/l10n/de"));
        assert!(!should_reject_script_reference("3rdparty/select2/select2"));
        // A lone `..` inside a segment name is not a traversal.
        assert!(!should_reject_script_reference("files/some..name"));
    }

    #[test]
    fn splits_on_the_first_separator_only() {
        assert_eq!(
            split_app_reference("gallery/js/slideshow"),
            Some(("gallery", "js/slideshow"))
        );
        assert_eq!(split_app_reference("gallery/l10n/de"), Some(("gallery", "l10n/de")));
    }

    #[test]
    fn references_without_separator_name_no_app() {
        assert_eq!(split_app_reference("main"), None);
        assert_eq!(split_app_reference("gallery/"), None);
        assert_eq!(split_app_reference("/main"), None);
    }
}
