//! Language key resolution.
//!
//! Both resolvers match by **prefix** rather than exact equality: an
//! allowed key matches when the extracted segment (or candidate) starts
//! with it. This lets extended locale tags (`en-US`) collapse to a base
//! key (`en`) without a separate normalization table, at the cost of
//! false positives for allowed keys that prefix each other (`e` would
//! match `en`). Keep allowed-key sets short and mutually non-prefixing.
//!
//! Order of `langs` establishes tie-break priority; the first match
//! wins. Neither resolver fails: an unrecognized or missing language
//! key silently resolves to `default_lang`.

/// Extract the current language key from a URL.
///
/// Takes the first path segment of `url` (an empty `url` is treated as
/// `/{default_lang}/`) and returns the first entry of `langs` that the
/// segment starts with, else `default_lang`.
///
/// # Examples
/// ```
/// use lang_routes::resolve::current_lang_key;
///
/// let langs = ["en", "fr", "pt"];
/// assert_eq!(current_lang_key(&langs, "en", "/pt/blog/"), "pt");
/// assert_eq!(current_lang_key(&langs, "en", "/de/blog/"), "en");
/// assert_eq!(current_lang_key(&langs, "en", "/pt-BR/blog/"), "pt");
/// ```
pub fn current_lang_key<'a, S: AsRef<str>>(
    langs: &'a [S],
    default_lang: &'a str,
    url: &str,
) -> &'a str {
    let segment = if url.is_empty() {
        default_lang
    } else {
        url.split('/').nth(1).unwrap_or("")
    };
    match langs.iter().find(|l| segment.starts_with(l.as_ref())) {
        Some(lang) => lang.as_ref(),
        None => {
            tracing::trace!(url, default_lang, "no allowed language matches url");
            default_lang
        }
    }
}

/// Resolve a candidate language key against the allowed set.
///
/// An absent candidate resolves to `default_lang`; otherwise the first
/// entry of `langs` that the candidate starts with, else `default_lang`.
///
/// # Examples
/// ```
/// use lang_routes::resolve::valid_lang_key;
///
/// let langs = ["en", "fr", "pt"];
/// assert_eq!(valid_lang_key(&langs, "en", Some("fr-CA")), "fr");
/// assert_eq!(valid_lang_key(&langs, "en", Some("ja")), "en");
/// assert_eq!(valid_lang_key(&langs, "en", None), "en");
/// ```
pub fn valid_lang_key<'a, S: AsRef<str>>(
    langs: &'a [S],
    default_lang: &'a str,
    candidate: Option<&str>,
) -> &'a str {
    let Some(candidate) = candidate else {
        return default_lang;
    };
    match langs.iter().find(|l| candidate.starts_with(l.as_ref())) {
        Some(lang) => lang.as_ref(),
        None => {
            tracing::trace!(candidate, default_lang, "candidate is not an allowed language");
            default_lang
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGS: [&str; 3] = ["en", "fr", "pt"];

    #[test]
    fn test_current_lang_from_url() {
        assert_eq!(current_lang_key(&LANGS, "en", "/en/about/"), "en");
        assert_eq!(current_lang_key(&LANGS, "en", "/fr/"), "fr");
        assert_eq!(current_lang_key(&LANGS, "en", "/pt/blog/post/"), "pt");
    }

    #[test]
    fn test_current_lang_falls_back_to_default() {
        assert_eq!(current_lang_key(&LANGS, "en", "/de/about/"), "en");
        assert_eq!(current_lang_key(&LANGS, "fr", "/about/"), "fr");
        assert_eq!(current_lang_key(&LANGS, "en", "/"), "en");
    }

    #[test]
    fn test_current_lang_empty_url_uses_default() {
        assert_eq!(current_lang_key(&LANGS, "pt", ""), "pt");
    }

    #[test]
    fn test_current_lang_prefix_match_extended_locale() {
        assert_eq!(current_lang_key(&LANGS, "en", "/pt-BR/blog/"), "pt");
        assert_eq!(current_lang_key(&LANGS, "fr", "/en-US/"), "en");
    }

    #[test]
    fn test_current_lang_order_breaks_prefix_ties() {
        // "e" comes first and prefix-matches the "en" segment
        let ambiguous = ["e", "en"];
        assert_eq!(current_lang_key(&ambiguous, "en", "/en/about/"), "e");
    }

    #[test]
    fn test_current_lang_accepts_owned_keys() {
        let langs: Vec<String> = vec!["en".into(), "pt".into()];
        assert_eq!(current_lang_key(&langs, "en", "/pt/"), "pt");
    }

    #[test]
    fn test_valid_lang_key() {
        assert_eq!(valid_lang_key(&LANGS, "en", Some("pt")), "pt");
        assert_eq!(valid_lang_key(&LANGS, "en", Some("fr-CA")), "fr");
        assert_eq!(valid_lang_key(&LANGS, "en", Some("ja")), "en");
    }

    #[test]
    fn test_valid_lang_key_absent_candidate() {
        assert_eq!(valid_lang_key(&LANGS, "en", None), "en");
        assert_eq!(valid_lang_key(&LANGS, "pt", None), "pt");
    }
}
