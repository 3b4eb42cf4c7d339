//! Supported storefront locales and request-scoped locale resolution.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a supported locale code as a whole path segment inside a URL,
/// e.g. the `bn` in `https://shop.example.com/bn/product/x`.
static REFERER_LOCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(en|bn)(?:/|$)").expect("valid referer locale regex"));

/// A storefront locale. [`Locale::En`] is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Bn,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Bn];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bn => "bn",
        }
    }

    /// Exact match against the supported codes; URL segments are case-sensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Reads the leading `/{locale}` segment of a request path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Self::from_code)
    }

    /// Extracts the first supported locale segment from a `Referer` URL.
    #[must_use]
    pub fn from_referer(referer: &str) -> Option<Self> {
        REFERER_LOCALE
            .captures(referer)
            .and_then(|caps| caps.get(1))
            .and_then(|m| Self::from_code(m.as_str()))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolves the locale for a request.
///
/// The leading path segment wins. When it is absent or unsupported, the
/// `Referer` header is consulted, and anything else lands on the default.
#[must_use]
pub fn resolve_locale(path: &str, referer: Option<&str>) -> Locale {
    if let Some(locale) = Locale::from_path(path) {
        return locale;
    }

    match referer.and_then(Locale::from_referer) {
        Some(locale) => {
            tracing::debug!(path, %locale, "locale resolved from referer");
            locale
        }
        None => {
            tracing::debug!(path, "locale unresolved; using default");
            Locale::default()
        }
    }
}
