use hype_meter_models::AvatarStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ACCESS_KEY_HEADER: &str = "X-Master-Key";
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

const PLACEHOLDER_ENDPOINT: &str = "https://api.jsonbin.io/v3/b/YOUR_BIN_ID";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub reviews: ReviewsConfig,
    #[serde(default)]
    pub avatar: AvatarStyle,
}

/// Where the shared review document lives
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    /// Document URL; reads go to `<endpoint>/latest`, writes to `<endpoint>`
    pub endpoint: String,
    #[serde(default = "default_access_key_header")]
    pub access_key_header: String,
    /// Request timeout. Unset means the HTTP client default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReviewsConfig {
    /// chrono format string for the display date of new reviews
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

fn default_access_key_header() -> String {
    DEFAULT_ACCESS_KEY_HEADER.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Config {
    /// Config with a placeholder endpoint, written by `config init` when no URL is given
    pub fn template() -> Self {
        Self::with_endpoint(PLACEHOLDER_ENDPOINT.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            store: StoreConfig {
                endpoint,
                access_key_header: default_access_key_header(),
                timeout_seconds: None,
            },
            reviews: ReviewsConfig::default(),
            avatar: AvatarStyle::default(),
        }
    }

    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let endpoint = self.store.endpoint.trim();
        if endpoint.is_empty() || endpoint == PLACEHOLDER_ENDPOINT {
            return Err(anyhow::anyhow!("store.endpoint is not configured"));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(anyhow::anyhow!("store.endpoint must be an http(s) URL: {}", endpoint));
        }
        if self.store.access_key_header.trim().is_empty() {
            return Err(anyhow::anyhow!("store.access_key_header cannot be empty"));
        }
        if self.store.timeout_seconds == Some(0) {
            return Err(anyhow::anyhow!("store.timeout_seconds must be greater than zero"));
        }
        if self.reviews.date_format.trim().is_empty() {
            return Err(anyhow::anyhow!("reviews.date_format cannot be empty"));
        }
        Ok(())
    }

    pub fn is_store_configured(&self) -> bool {
        self.validate().is_ok()
    }
}
