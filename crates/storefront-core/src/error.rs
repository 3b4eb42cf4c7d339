use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read messages file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse messages file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no messages loaded for locale {0}")]
    MissingLocale(Locale),

    #[error("namespace {namespace} missing from {locale} messages")]
    MissingNamespace { locale: Locale, namespace: String },

    #[error("namespace {namespace} in {locale} messages is not an object")]
    InvalidNamespace { locale: Locale, namespace: String },
}
