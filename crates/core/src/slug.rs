//! URL slug generation for policies and strategic plan documents.

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9]+").unwrap_or_else(|e| panic!("invalid slug regex: {e}"))
});

/// Lowercase `title`, collapse every run of non-alphanumerics into a single
/// `-`, and trim leading/trailing dashes.
///
/// ```
/// use cms_core::slug::slugify;
///
/// assert_eq!(slugify("Code of Conduct"), "code-of-conduct");
/// assert_eq!(slugify("  Strategic Plan 2024–2028! "), "strategic-plan-2024-2028");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Use the caller's slug when it is non-blank, otherwise derive one from the
/// title. Returns `None` when neither yields anything usable.
pub fn resolve_slug(slug: Option<&str>, title: &str) -> Option<String> {
    let candidate = match slug.map(str::trim) {
        Some(s) if !s.is_empty() => slugify(s),
        _ => slugify(title),
    };
    (!candidate.is_empty()).then_some(candidate)
}
