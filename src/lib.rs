//! Language resolution and canonical per-language URL derivation for
//! multilingual statically-generated sites.
//!
//! The crate answers three questions for a site generator's build
//! pipeline, all with pure functions and no shared state:
//!
//! - which language does a URL belong to, and what is the canonical URL
//!   of the same page under another language
//!   ([`resolve::current_lang_key`], [`resolve::url_for_lang`])
//! - which `(slug, lang_key)` should a source file be published under
//!   ([`resolve::slug_and_lang`])
//! - which translation payload applies, with fallback-to-default as the
//!   single policy replacing error paths ([`i18n::translations_for`])
//!
//! # Example
//!
//! ```
//! use lang_routes::{I18nConfig, UrlMapper, lang_menu};
//!
//! let config = I18nConfig::new("en").with_langs(["en", "fr", "pt"]);
//!
//! // Register a page for a source file
//! let page = config.slug_and_lang("/site/src/pages/blog/test.pt.md").unwrap();
//! assert_eq!(page.slug, "/pt/blog/test/");
//! assert_eq!(page.lang_key, "pt");
//!
//! // Resolve the language of a browser URL and build the menu
//! let current = config.current_lang_key("/pt/blog/test/");
//! let mapper = UrlMapper::new("/pt/", "/pt/blog/test/");
//! let menu = config.lang_menu(current, |lang| mapper.link_for(lang));
//!
//! assert_eq!(menu[2].lang_key, "pt");
//! assert!(menu[2].selected);
//! assert_eq!(menu[1].link, "/fr/blog/test/");
//! ```

pub mod config;
pub mod core;
pub mod i18n;
pub mod menu;
pub mod resolve;

pub use crate::config::{ConfigError, I18nConfig};
pub use crate::core::UrlPath;
pub use crate::i18n::translations_for;
pub use crate::menu::{LangMenuEntry, lang_menu};
pub use crate::resolve::{
    DEFAULT_PAGES_ROOT, SlugResult, UrlMapper, count_segments, current_lang_key, is_home_page,
    slug_and_lang, url_for_lang, valid_lang_key,
};
