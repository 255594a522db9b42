use std::env;

use dotenvy::dotenv;
use log::LevelFilter;
use snafu::ensure;

use crate::errors::{ConfigSnafu, CustomResult};
use crate::modules::models::session::Credentials;

pub const DEFAULT_CATALOG_API_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_LOG_FILE: &str = "program.log";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_api_url: String,
    pub logging_level: LevelFilter,
    pub log_file: String,
    pub cors_allowed_origin: String,
    /// used by the command line tools to log in before fetching the catalog
    pub catalog_credentials: Option<Credentials>,
}

impl Config {
    /// # load config
    /// reads the `.env` file (when present) and the process environment
    pub fn from_env() -> CustomResult<Config> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// # load config from a lookup function
    ///
    /// ## Arguments
    /// * `lookup` - returns the value of a variable, `None` when unset
    ///
    /// ## Returns
    /// * `Config` - with defaults filled in for unset variables
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> CustomResult<Config> {
        let catalog_api_url = lookup("CATALOG_API_URL")
            .unwrap_or_else(|| DEFAULT_CATALOG_API_URL.to_string());
        ensure!(
            catalog_api_url.starts_with("http://") || catalog_api_url.starts_with("https://"),
            ConfigSnafu { key: "CATALOG_API_URL", value: catalog_api_url.clone() }
        );

        let logging_level = Config::parse_level(&lookup("LOGGING_LEVEL").unwrap_or_default());

        let catalog_credentials = match (lookup("CATALOG_EMAIL"), lookup("CATALOG_PASSWORD")) {
            (Some(email), Some(password)) => Some(Credentials { email, password, name: None }),
            _ => None,
        };

        Ok(Config {
            catalog_api_url: catalog_api_url.trim_end_matches('/').to_string(),
            logging_level,
            log_file: lookup("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").unwrap_or_else(|| "*".to_string()),
            catalog_credentials,
        })
    }

    pub fn parse_level(verbosity: &str) -> LevelFilter {
        match verbosity.to_uppercase().as_str() {
            "OFF" => LevelFilter::Off,
            "ERROR" => LevelFilter::Error,
            "WARN" => LevelFilter::Warn,
            "DEBUG" => LevelFilter::Debug,
            "TRACE" => LevelFilter::Trace,
            // default to info
            _ => LevelFilter::Info,
        }
    }
}
