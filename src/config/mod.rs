//! Language configuration supplied by the site generator.
//!
//! Recognized keys:
//!
//! | Key            | Purpose                                             |
//! |----------------|-----------------------------------------------------|
//! | `default_lang` | Language used when no other key resolves (required) |
//! | `langs`        | Ordered allowed language keys (optional)            |
//! | `pages_roots`  | Ordered pages-root prefixes (optional)              |
//!
//! `default_lang` is threaded explicitly through every call rather than
//! held as a module-level constant; this struct is the single place it
//! lives. Order matters for both lists: `langs` order is the prefix
//! tie-break and menu order, `pages_roots` is first-match-wins.

mod error;

pub use error::ConfigError;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::menu::{LangMenuEntry, lang_menu};
use crate::resolve::{
    DEFAULT_PAGES_ROOT, SlugResult, current_lang_key, slug_and_lang, valid_lang_key,
};

/// Language resolution options for one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Language used when no allowed key matches.
    pub default_lang: String,

    /// Allowed language keys, in tie-break/menu order.
    #[serde(default)]
    pub langs: Vec<String>,

    /// Path prefixes under which page source files live, tried in order.
    #[serde(default = "default_pages_roots")]
    pub pages_roots: Vec<String>,
}

fn default_pages_roots() -> Vec<String> {
    vec![DEFAULT_PAGES_ROOT.to_string()]
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self::new("en")
    }
}

impl I18nConfig {
    /// Config with the given default language and the conventional
    /// pages root.
    pub fn new(default_lang: impl Into<String>) -> Self {
        Self {
            default_lang: default_lang.into(),
            langs: Vec::new(),
            pages_roots: default_pages_roots(),
        }
    }

    /// Replace the allowed language keys.
    pub fn with_langs<S: Into<String>>(mut self, langs: impl IntoIterator<Item = S>) -> Self {
        self.langs = langs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the pages-root prefixes.
    pub fn with_pages_roots<S: Into<String>>(mut self, roots: impl IntoIterator<Item = S>) -> Self {
        self.pages_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Unknown fields are not fatal; they are logged as warnings so a
    /// typo in the generator's config surfaces during the build.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            tracing::warn!(fields = ?ignored, "ignoring unknown config fields");
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Reject configurations that would publish pages at wrong URLs.
    ///
    /// An empty `default_lang` or an empty pages-root prefix would make
    /// the resolvers miscompute slugs silently, so both fail fast here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_lang.trim().is_empty() {
            return Err(ConfigError::Validation(
                "`default_lang` must not be empty".to_string(),
            ));
        }
        if self.pages_roots.is_empty() {
            return Err(ConfigError::Validation(
                "`pages_roots` must contain at least one prefix".to_string(),
            ));
        }
        if let Some(idx) = self.pages_roots.iter().position(|r| r.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "`pages_roots[{idx}]` must not be empty"
            )));
        }
        if let Some(idx) = self.langs.iter().position(|l| l.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "`langs[{idx}]` must not be empty"
            )));
        }
        Ok(())
    }

    /// Home link of a language: `/{lang_key}/`.
    pub fn home_link(&self, lang_key: &str) -> String {
        format!("/{lang_key}/")
    }

    /// [`resolve::current_lang_key`](crate::resolve::current_lang_key)
    /// with this config's allowed and default languages.
    pub fn current_lang_key(&self, url: &str) -> &str {
        current_lang_key(&self.langs, &self.default_lang, url)
    }

    /// [`resolve::valid_lang_key`](crate::resolve::valid_lang_key) with
    /// this config's allowed and default languages.
    pub fn valid_lang_key(&self, candidate: Option<&str>) -> &str {
        valid_lang_key(&self.langs, &self.default_lang, candidate)
    }

    /// [`resolve::slug_and_lang`](crate::resolve::slug_and_lang) with
    /// this config's pages roots and default language.
    pub fn slug_and_lang(&self, absolute_path: &str) -> Option<SlugResult> {
        slug_and_lang(&self.pages_roots, &self.default_lang, absolute_path)
    }

    /// [`menu::lang_menu`](crate::menu::lang_menu) over this config's
    /// allowed languages.
    pub fn lang_menu(
        &self,
        current_lang_key: &str,
        link_for: impl Fn(&str) -> String,
    ) -> Vec<LangMenuEntry> {
        lang_menu(&self.langs, current_lang_key, link_for)
    }
}
