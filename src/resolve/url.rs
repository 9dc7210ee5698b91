//! URL classification and per-language URL mapping.
//!
//! Pure functions over raw URL strings. No validation of URL
//! well-formedness happens here; segment boundaries are `/` characters.

/// Count the path segments in a URL string.
///
/// This is the number of `/` characters minus one, computed on the raw
/// string. A string without slashes yields `-1`; callers must not rely
/// on a floor of zero.
///
/// # Examples
/// ```
/// use lang_routes::resolve::count_segments;
/// assert_eq!(count_segments("/"), 0);
/// assert_eq!(count_segments("/en/"), 1);
/// assert_eq!(count_segments("/en/about/"), 2);
/// assert_eq!(count_segments(""), -1);
/// ```
#[inline]
pub fn count_segments(url: &str) -> isize {
    url.matches('/').count() as isize - 1
}

/// Check if a URL is the site root (`/`) or a bare language root (`/en/`).
///
/// Exactly the predicate `count_segments(url) <= 1`. False for any URL
/// with at least one further segment (`/en/about/`).
///
/// # Examples
/// ```
/// use lang_routes::resolve::is_home_page;
/// assert!(is_home_page("/"));
/// assert!(is_home_page("/en/"));
/// assert!(!is_home_page("/en/about/"));
/// ```
#[inline]
pub fn is_home_page(url: &str) -> bool {
    count_segments(url) <= 1
}

/// Rewrite a URL to the equivalent URL under a target language.
///
/// The root URL, and any URL that does not start with `home_link`,
/// collapses to the bare language root `/{lang_key}/` rather than
/// attempting a partial rewrite. Otherwise the leading `home_link`
/// prefix is replaced by `/{lang_key}/` and everything after it is
/// preserved verbatim.
///
/// # Examples
/// ```
/// use lang_routes::resolve::url_for_lang;
/// assert_eq!(url_for_lang("/en/", "/en/about/", "fr"), "/fr/about/");
/// assert_eq!(url_for_lang("/en/", "/", "pt"), "/pt/");
/// assert_eq!(url_for_lang("/en/", "/de/about/", "pt"), "/pt/");
/// ```
pub fn url_for_lang(home_link: &str, url: &str, lang_key: &str) -> String {
    if url == "/" || !url.starts_with(home_link) {
        format!("/{lang_key}/")
    } else {
        format!("/{lang_key}/{}", &url[home_link.len()..])
    }
}

/// [`url_for_lang`] with `home_link` and `url` fixed.
///
/// Callers fix both once and evaluate [`link_for`](Self::link_for) once
/// per target language, typically to build a language menu:
///
/// ```
/// use lang_routes::resolve::UrlMapper;
///
/// let mapper = UrlMapper::new("/en/", "/en/about/");
/// assert_eq!(mapper.link_for("fr"), "/fr/about/");
/// assert_eq!(mapper.link_for("pt"), "/pt/about/");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UrlMapper<'a> {
    home_link: &'a str,
    url: &'a str,
}

impl<'a> UrlMapper<'a> {
    pub fn new(home_link: &'a str, url: &'a str) -> Self {
        Self { home_link, url }
    }

    /// The canonical URL of the fixed `url` under `lang_key`.
    pub fn link_for(&self, lang_key: &str) -> String {
        url_for_lang(self.home_link, self.url, lang_key)
    }
}
