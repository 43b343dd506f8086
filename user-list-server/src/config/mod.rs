use config::{Config, ConfigError};
use serde::Deserialize;

/// Main configuration structure for the user list server
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// The port the server will listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file holding the user collection; none serves an empty list
    #[serde(default)]
    pub users_file: Option<String>,

    /// Page size used when a request carries none or an invalid one
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Largest page size a request may ask for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

fn default_port() -> u16 {
    8080
}

fn default_page_size() -> u64 {
    user_list::DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u64 {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: default_port(),
            users_file: None,
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Settings {
    /// Creates a new Settings instance from `USER_LIST_*` environment variables
    pub fn new() -> Result<Self, String> {
        let settings: Settings = Config::builder()
            .add_source(
                config::Environment::with_prefix("USER_LIST")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(config::Case::Snake),
            )
            .build()
            .map_err(|e: ConfigError| e.to_string())?
            .try_deserialize()
            .map_err(|e| e.to_string())?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), String> {
        if self.default_page_size == 0 {
            return Err("default_page_size must be greater than zero".to_string());
        }
        if self.max_page_size < self.default_page_size {
            return Err(format!(
                "max_page_size ({}) must not be smaller than default_page_size ({})",
                self.max_page_size, self.default_page_size
            ));
        }
        Ok(())
    }
}
