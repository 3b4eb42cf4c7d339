//! Translation tables for server-rendered pages.
//!
//! Messages live in one JSON file per locale (`{dir}/{locale}.json`), grouped
//! by namespace:
//!
//! ```json
//! { "NotFound": { "title": "404", "heading": "Page Not Found" } }
//! ```
//!
//! Pages never fail because a table is missing: callers substitute
//! [`Translator::fallback`], which answers the not-found keys with built-in
//! English strings and echoes any other key back.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::{I18nError, Locale};

pub const NOT_FOUND_NAMESPACE: &str = "NotFound";

const FALLBACK_MESSAGES: [(&str, &str); 5] = [
    ("title", "404"),
    ("heading", "Page Not Found"),
    (
        "description",
        "Oops! The page you're looking for doesn't exist. It might have been moved, deleted, or the URL might be incorrect.",
    ),
    ("button", "Go Back Home"),
    ("productsTitle", "Explore Our Products"),
];

fn fallback_message(key: &str) -> Option<&'static str> {
    FALLBACK_MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Resolves message keys for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translator {
    Loaded {
        locale: Locale,
        messages: HashMap<String, String>,
    },
    Fallback,
}

impl Translator {
    #[must_use]
    pub fn fallback() -> Self {
        Translator::Fallback
    }

    /// Builds a translator from the `namespace` object of a parsed message file.
    ///
    /// Only string values are kept; nested groups are ignored.
    ///
    /// # Errors
    ///
    /// - [`I18nError::MissingNamespace`] if the namespace key is absent.
    /// - [`I18nError::InvalidNamespace`] if it is not a JSON object.
    pub fn from_messages(
        locale: Locale,
        messages: &Value,
        namespace: &str,
    ) -> Result<Self, I18nError> {
        let section = messages
            .get(namespace)
            .ok_or_else(|| I18nError::MissingNamespace {
                locale,
                namespace: namespace.to_string(),
            })?;

        let object = section
            .as_object()
            .ok_or_else(|| I18nError::InvalidNamespace {
                locale,
                namespace: namespace.to_string(),
            })?;

        let messages = object
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect();

        Ok(Translator::Loaded { locale, messages })
    }

    /// Looks up `key`.
    ///
    /// A key missing from a loaded table falls through to the built-in table,
    /// then to the key itself.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Translator::Loaded { messages, .. } = self {
            if let Some(message) = messages.get(key) {
                return message;
            }
        }
        fallback_message(key).unwrap_or(key)
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Translator::Fallback)
    }

    /// A loaded table with no string entries cannot translate anything.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        match self {
            Translator::Loaded { messages, .. } => !messages.is_empty(),
            Translator::Fallback => true,
        }
    }

    /// Swaps an unusable translator for the built-in one.
    #[must_use]
    pub fn ensure_usable(self) -> Self {
        if self.is_usable() {
            self
        } else {
            tracing::warn!("translator has no messages; using built-in strings");
            Translator::Fallback
        }
    }
}

#[derive(Debug, Clone)]
enum CatalogSource {
    Directory(PathBuf),
    InMemory(Arc<HashMap<Locale, Value>>),
}

/// Where message files come from.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    source: CatalogSource,
}

impl MessageCatalog {
    /// Reads `{dir}/{locale}.json` on each lookup.
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::Directory(dir.into()),
        }
    }

    /// Serves pre-parsed message documents, keyed by locale.
    #[must_use]
    pub fn in_memory(messages: HashMap<Locale, Value>) -> Self {
        Self {
            source: CatalogSource::InMemory(Arc::new(messages)),
        }
    }

    /// Loads the full message document for `locale`.
    ///
    /// # Errors
    ///
    /// - [`I18nError::Read`] / [`I18nError::Parse`] for directory catalogs.
    /// - [`I18nError::MissingLocale`] for in-memory catalogs without the locale.
    pub async fn load(&self, locale: Locale) -> Result<Value, I18nError> {
        match &self.source {
            CatalogSource::Directory(dir) => {
                let path = dir.join(format!("{}.json", locale.code()));
                let raw = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| I18nError::Read {
                        path: path.clone(),
                        source,
                    })?;
                serde_json::from_str(&raw).map_err(|source| I18nError::Parse { path, source })
            }
            CatalogSource::InMemory(messages) => messages
                .get(&locale)
                .cloned()
                .ok_or(I18nError::MissingLocale(locale)),
        }
    }

    /// Loads one namespace of `locale` as a [`Translator`].
    ///
    /// # Errors
    ///
    /// Propagates any [`I18nError`] from loading or namespace extraction.
    pub async fn translator(&self, locale: Locale, namespace: &str) -> Result<Translator, I18nError> {
        let messages = self.load(locale).await?;
        Translator::from_messages(locale, &messages, namespace)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn fallback_translates_every_not_found_key() {
        let t = Translator::fallback();
        assert_eq!(t.t("title"), "404");
        assert_eq!(t.t("heading"), "Page Not Found");
        assert_eq!(
            t.t("description"),
            "Oops! The page you're looking for doesn't exist. It might have been moved, deleted, or the URL might be incorrect."
        );
        assert_eq!(t.t("button"), "Go Back Home");
        assert_eq!(t.t("productsTitle"), "Explore Our Products");
    }

    #[test]
    fn fallback_echoes_unknown_key() {
        assert_eq!(Translator::fallback().t("checkout"), "checkout");
    }

    #[test]
    fn loaded_translator_prefers_table_then_builtin_then_key() {
        let doc = json!({ "NotFound": { "heading": "পৃষ্ঠা পাওয়া যায়নি" } });
        let t = Translator::from_messages(Locale::Bn, &doc, NOT_FOUND_NAMESPACE).unwrap();
        assert_eq!(t.t("heading"), "পৃষ্ঠা পাওয়া যায়নি");
        assert_eq!(t.t("button"), "Go Back Home");
        assert_eq!(t.t("unknown"), "unknown");
        assert!(!t.is_fallback());
    }

    #[test]
    fn from_messages_rejects_missing_namespace() {
        let doc = json!({ "Home": { "title": "Welcome" } });
        let err = Translator::from_messages(Locale::En, &doc, NOT_FOUND_NAMESPACE).unwrap_err();
        assert!(matches!(err, I18nError::MissingNamespace { .. }));
    }

    #[test]
    fn from_messages_rejects_non_object_namespace() {
        let doc = json!({ "NotFound": "oops" });
        let err = Translator::from_messages(Locale::En, &doc, NOT_FOUND_NAMESPACE).unwrap_err();
        assert!(matches!(err, I18nError::InvalidNamespace { .. }));
    }

    #[test]
    fn ensure_usable_replaces_empty_table() {
        let doc = json!({ "NotFound": { "nested": { "title": "x" } } });
        let t = Translator::from_messages(Locale::En, &doc, NOT_FOUND_NAMESPACE).unwrap();
        assert!(!t.is_usable());
        assert!(t.ensure_usable().is_fallback());
    }

    #[tokio::test]
    async fn in_memory_catalog_reports_missing_locale() {
        let catalog = MessageCatalog::in_memory(HashMap::new());
        let err = catalog
            .translator(Locale::Bn, NOT_FOUND_NAMESPACE)
            .await
            .unwrap_err();
        assert!(matches!(err, I18nError::MissingLocale(Locale::Bn)));
    }

    #[tokio::test]
    async fn directory_catalog_reports_missing_file() {
        let catalog = MessageCatalog::from_dir("/nonexistent/storefront/messages");
        let err = catalog.load(Locale::En).await.unwrap_err();
        assert!(matches!(err, I18nError::Read { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn directory_catalog_reports_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("en.json"), "{ not json").expect("write en.json");
        let catalog = MessageCatalog::from_dir(dir.path());

        let err = catalog.load(Locale::En).await.unwrap_err();
        assert!(matches!(err, I18nError::Parse { .. }), "got: {err:?}");
        assert!(catalog
            .translator(Locale::En, NOT_FOUND_NAMESPACE)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn directory_catalog_reads_shipped_messages() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../messages");
        let catalog = MessageCatalog::from_dir(dir);
        for locale in Locale::ALL {
            let t = catalog
                .translator(locale, NOT_FOUND_NAMESPACE)
                .await
                .unwrap_or_else(|e| panic!("{locale} messages should load: {e}"));
            for key in ["title", "heading", "description", "button", "productsTitle"] {
                let Translator::Loaded { messages, .. } = &t else {
                    panic!("expected loaded translator");
                };
                assert!(messages.contains_key(key), "{locale} is missing {key}");
            }
        }
    }
}
