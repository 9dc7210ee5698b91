//! Language and URL resolution.
//!
//! Pure functions for the build pipeline. No side effects.
//!
//! - [`lang`]: language key extraction (`current_lang_key`, `valid_lang_key`)
//! - [`slug`]: source file -> `(slug, lang_key)` derivation (`slug_and_lang`)
//! - [`url`]: URL classification and per-language mapping
//!   (`count_segments`, `is_home_page`, `url_for_lang`)

pub mod lang;
pub mod slug;
pub mod url;

pub use lang::{current_lang_key, valid_lang_key};
pub use slug::{DEFAULT_PAGES_ROOT, SlugResult, slug_and_lang};
pub use url::{UrlMapper, count_segments, is_home_page, url_for_lang};
