//! Language menu construction for navigation UI.

use serde::Serialize;

/// One language menu entry, generated fresh per render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangMenuEntry {
    /// Allowed language key this entry stands for.
    pub lang_key: String,
    /// Whether this is the language of the page being rendered.
    pub selected: bool,
    /// Canonical URL of the current page under this language.
    pub link: String,
}

/// Build the language menu for the current page.
///
/// Emits one entry per key in `langs`, in `langs` order exactly - the
/// output order determines menu rendering order and must be stable.
/// `link_for` is typically [`UrlMapper::link_for`] with `home_link` and
/// the current URL fixed by the caller; it is expected to be pure.
///
/// [`UrlMapper::link_for`]: crate::resolve::UrlMapper::link_for
///
/// # Examples
/// ```
/// use lang_routes::menu::lang_menu;
/// use lang_routes::resolve::UrlMapper;
///
/// let mapper = UrlMapper::new("/en/", "/en/about/");
/// let menu = lang_menu(&["en", "fr", "pt"], "en", |lang| mapper.link_for(lang));
///
/// assert_eq!(menu[0].link, "/en/about/");
/// assert!(menu[0].selected);
/// assert_eq!(menu[2].link, "/pt/about/");
/// assert!(!menu[2].selected);
/// ```
pub fn lang_menu<S, F>(langs: &[S], current_lang_key: &str, link_for: F) -> Vec<LangMenuEntry>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    langs
        .iter()
        .map(|lang| {
            let lang = lang.as_ref();
            LangMenuEntry {
                lang_key: lang.to_owned(),
                selected: lang == current_lang_key,
                link: link_for(lang),
            }
        })
        .collect()
}
