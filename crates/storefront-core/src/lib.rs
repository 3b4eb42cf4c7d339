pub mod app_config;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod pricing;
pub mod products;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, I18nError};
pub use i18n::{MessageCatalog, Translator, NOT_FOUND_NAMESPACE};
pub use locale::{resolve_locale, Locale};
pub use pricing::join_price;
pub use products::{ProductId, ProductSummary, StockRecord, Subcategory};
