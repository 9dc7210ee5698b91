//! Translation payload lookup.
//!
//! The translation store is an opaque key-value mapping from language
//! key to arbitrary content. Lookup never fails outright: a missing
//! language key falls back to the first entry of the mapping (insertion
//! order, via serde_json's `preserve_order`).

use serde_json::{Map, Value};

/// Get the translation payload for `lang_key`, or the first entry of
/// the mapping when the key is absent.
///
/// Returns `None` only for an empty mapping.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// let i18n = json!({
///     "en": { "title": "Home" },
///     "pt": { "title": "Início" },
/// });
/// let i18n = i18n.as_object().unwrap();
///
/// let pt = lang_routes::i18n::translations_for(i18n, "pt").unwrap();
/// assert_eq!(pt["title"], "Início");
///
/// // Unknown key falls back to the first entry
/// let fallback = lang_routes::i18n::translations_for(i18n, "de").unwrap();
/// assert_eq!(fallback["title"], "Home");
/// ```
pub fn translations_for<'a>(i18n: &'a Map<String, Value>, lang_key: &str) -> Option<&'a Value> {
    match i18n.get(lang_key) {
        Some(value) => Some(value),
        None => {
            tracing::trace!(lang_key, "no translations for language; using first entry");
            i18n.values().next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> Map<String, Value> {
        json!({
            "en": { "title": "Home" },
            "fr": { "title": "Accueil" },
            "pt": { "title": "Início" },
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_known_lang() {
        let i18n = store();
        assert_eq!(translations_for(&i18n, "fr").unwrap()["title"], "Accueil");
        assert_eq!(translations_for(&i18n, "pt").unwrap()["title"], "Início");
    }

    #[test]
    fn test_unknown_lang_falls_back_to_first_entry() {
        let i18n = store();
        assert_eq!(translations_for(&i18n, "de").unwrap()["title"], "Home");
    }

    #[test]
    fn test_empty_store() {
        let i18n = Map::new();
        assert!(translations_for(&i18n, "en").is_none());
    }
}
