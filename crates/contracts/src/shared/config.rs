use super::catalog::Catalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Базовый адрес хранилища заказов по умолчанию
pub const DEFAULT_STORE_URL: &str = "https://vasavi-backend-2.onrender.com";
/// Клиентский таймаут каждого запроса
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;
/// Сколько висит подтверждение после отправки формы
pub const DEFAULT_NOTICE_MS: u32 = 3_000;
/// Пауза перед вызовом печати в окне чека
pub const DEFAULT_PRINT_DELAY_MS: u32 = 250;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.toml is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration.
///
/// Every section falls back to its defaults, so an override file only needs
/// the keys it changes, e.g.
///
/// ```toml
/// [store]
/// base_url = "http://localhost:5000"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub business: BusinessProfile,
    pub form: FormConfig,
    pub receipt: ReceiptConfig,
    pub catalog: Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Реквизиты предприятия для шапки формы и чека
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Vasavi Tent House & Decorations".to_string(),
            address: "Cherupalle, Mangapet, Mulugu - 506172".to_string(),
            phone: "+91 9121154704".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub notice_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            notice_ms: DEFAULT_NOTICE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    pub print_delay_ms: u32,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            print_delay_ms: DEFAULT_PRINT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Parse an override file and validate the merged result
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.store.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid("store.base_url is empty".into()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "store.base_url must start with http:// or https://".into(),
            ));
        }
        if self.store.timeout_ms == 0 {
            return Err(ConfigError::Invalid("store.timeout_ms must be positive".into()));
        }
        self.catalog.validate().map_err(ConfigError::Invalid)
    }

    /// `base_url` without a trailing slash, ready for path concatenation
    pub fn store_base(&self) -> &str {
        self.store.base_url.trim().trim_end_matches('/')
    }
}
