//! Source file path -> (slug, language) derivation.
//!
//! Maps an absolute source-file path to the page slug and language key
//! the generator should publish it under. A file carrying an embedded
//! language suffix (`name.pt.md`) lands under `/{lang}/...`; anything
//! else uses the default language with no prefix.

use serde::{Deserialize, Serialize};

use crate::core::UrlPath;

/// Conventional pages root used when the caller configures none.
pub const DEFAULT_PAGES_ROOT: &str = "/src/pages/";

/// Slug and language key derived from one source file path.
///
/// `slug` always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugResult {
    /// Normalized URL path of the generated page (e.g., `/pt/blog/test/`).
    pub slug: UrlPath,
    /// Language key, either embedded in the filename or the default.
    pub lang_key: String,
}

/// Derive `(slug, lang_key)` from an absolute source file path.
///
/// Each root in `pages_roots` is tried in order; the first one that
/// occurs inside `absolute_path` wins, and everything after its first
/// occurrence forms the page path. Splitting that remainder on `.` into
/// exactly three parts treats the middle part as an explicit language
/// key (`blog/test.pt.md` -> `pt`); any other number of parts falls
/// back to `default_lang`. Multi-part extensions are deliberately not
/// parsed further.
///
/// Returns `None` when no configured root occurs in the path - the
/// caller must treat this as "not a page", never as an error.
///
/// # Examples
/// ```
/// use lang_routes::resolve::{slug_and_lang, DEFAULT_PAGES_ROOT};
///
/// let roots = [DEFAULT_PAGES_ROOT];
/// let result = slug_and_lang(&roots, "en", "/site/src/pages/blog/test.pt.md").unwrap();
/// assert_eq!(result.slug, "/pt/blog/test/");
/// assert_eq!(result.lang_key, "pt");
///
/// assert!(slug_and_lang(&roots, "en", "/site/templates/footer.html").is_none());
/// ```
pub fn slug_and_lang<S: AsRef<str>>(
    pages_roots: &[S],
    default_lang: &str,
    absolute_path: &str,
) -> Option<SlugResult> {
    pages_roots
        .iter()
        .find_map(|root| slug_under_root(root.as_ref(), default_lang, absolute_path))
}

/// Derive the slug for a single pages root, or `None` when the root
/// does not occur in the path.
fn slug_under_root(root: &str, default_lang: &str, absolute_path: &str) -> Option<SlugResult> {
    // An empty root would match every path at offset 0 and publish
    // pages at wrong URLs; config validation rejects it, this guards
    // direct callers.
    if root.is_empty() {
        return None;
    }

    let start = absolute_path.find(root)? + root.len();
    let remainder = &absolute_path[start..];

    let parts: Vec<&str> = remainder.split('.').collect();
    let explicit_lang = (parts.len() == 3).then(|| parts[1]);

    let path = UrlPath::from_page(strip_index_segment(parts[0]));
    let (slug, lang_key) = match explicit_lang {
        Some(lang) => (UrlPath::from_page(&format!("{lang}{path}")), lang),
        None => (path, default_lang),
    };

    Some(SlugResult {
        slug,
        lang_key: lang_key.to_owned(),
    })
}

/// Strip a trailing `index` segment: `blog/index` -> `blog/`, bare
/// `index` -> the empty path. Stems merely ending in the letters
/// (`reindex`) are left alone.
fn strip_index_segment(stem: &str) -> &str {
    match stem.strip_suffix("index") {
        Some(rest) if rest.is_empty() || rest.ends_with('/') => rest,
        _ => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOTS: [&str; 1] = [DEFAULT_PAGES_ROOT];

    #[test]
    fn test_lang_suffix_file() {
        let result = slug_and_lang(&ROOTS, "en", "/what/ever/src/pages/blog/test.pt.md").unwrap();
        assert_eq!(result.slug, "/pt/blog/test/");
        assert_eq!(result.lang_key, "pt");
    }

    #[test]
    fn test_no_lang_suffix_file() {
        let result = slug_and_lang(&ROOTS, "any", "/what/ever/src/pages/test.md").unwrap();
        assert_eq!(result.slug, "/test/");
        assert_eq!(result.lang_key, "any");
    }

    #[test]
    fn test_index_with_lang_suffix() {
        let result = slug_and_lang(&ROOTS, "en", "/what/ever/src/pages/blog/index.pt.md").unwrap();
        assert_eq!(result.slug, "/pt/blog/");
        assert_eq!(result.lang_key, "pt");
    }

    #[test]
    fn test_bare_index() {
        let result = slug_and_lang(&ROOTS, "any", "/what/ever/src/pages/index.md").unwrap();
        assert_eq!(result.slug, "/");
        assert_eq!(result.lang_key, "any");
    }

    #[test]
    fn test_bare_index_with_lang_suffix() {
        let result = slug_and_lang(&ROOTS, "en", "/what/ever/src/pages/index.pt.md").unwrap();
        assert_eq!(result.slug, "/pt/");
        assert_eq!(result.lang_key, "pt");
    }

    #[test]
    fn test_custom_root_with_trailing_slash() {
        let roots = ["/custom/folder/"];
        let result = slug_and_lang(&roots, "en", "/custom/folder/blog/test.pt.md").unwrap();
        assert_eq!(result.slug, "/pt/blog/test/");
        assert_eq!(result.lang_key, "pt");
    }

    #[test]
    fn test_custom_root_without_trailing_slash() {
        let roots = ["/custom/folder"];
        let result = slug_and_lang(&roots, "en", "/custom/folder/blog/test.md").unwrap();
        assert_eq!(result.slug, "/blog/test/");
        assert_eq!(result.lang_key, "en");
    }

    #[test]
    fn test_index_under_custom_root() {
        let roots = ["/custom/folder"];
        let result = slug_and_lang(&roots, "en", "/custom/folder/blog/index.md").unwrap();
        assert_eq!(result.slug, "/blog/");
        assert_eq!(result.lang_key, "en");
    }

    #[test]
    fn test_no_root_matches() {
        assert!(slug_and_lang(&ROOTS, "en", "/site/templates/footer.html").is_none());
    }

    #[test]
    fn test_first_matching_root_wins() {
        // Both roots occur; list order decides
        let roots = ["/pages/", "/src/pages/"];
        let result = slug_and_lang(&roots, "en", "/x/src/pages/blog/test.md").unwrap();
        assert_eq!(result.slug, "/blog/test/");

        let roots = ["/src/pages/", "/pages/"];
        let result = slug_and_lang(&roots, "en", "/x/src/pages/blog/test.md").unwrap();
        assert_eq!(result.slug, "/blog/test/");
    }

    #[test]
    fn test_non_matching_root_is_skipped() {
        let roots = ["/content/", "/src/pages/"];
        let result = slug_and_lang(&roots, "en", "/x/src/pages/about.md").unwrap();
        assert_eq!(result.slug, "/about/");
        assert_eq!(result.lang_key, "en");
    }

    #[test]
    fn test_multi_dot_filename_falls_back_to_default() {
        // Four dot-separated parts: not an embedded language key
        let result = slug_and_lang(&ROOTS, "en", "/x/src/pages/notes.tar.gz.md").unwrap();
        assert_eq!(result.lang_key, "en");
        assert_eq!(result.slug, "/notes/");
    }

    #[test]
    fn test_stem_ending_in_index_letters_is_kept() {
        let result = slug_and_lang(&ROOTS, "en", "/x/src/pages/reindex.md").unwrap();
        assert_eq!(result.slug, "/reindex/");
    }

    #[test]
    fn test_empty_root_never_matches() {
        let roots = [""];
        assert!(slug_and_lang(&roots, "en", "/x/src/pages/test.md").is_none());
    }

    #[test]
    fn test_strip_index_segment() {
        assert_eq!(strip_index_segment("blog/index"), "blog/");
        assert_eq!(strip_index_segment("index"), "");
        assert_eq!(strip_index_segment("reindex"), "reindex");
        assert_eq!(strip_index_segment("blog/indexing"), "blog/indexing");
        assert_eq!(strip_index_segment("blog/test"), "blog/test");
    }
}
