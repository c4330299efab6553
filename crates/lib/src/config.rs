use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    constant::{DEFAULT_AUDIT_FILE, DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_SECS},
    error::PrunerError,
};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub review: ReviewConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { url: default_backend_url(), request_timeout_seconds: default_request_timeout() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    #[serde(default = "default_audit_file")]
    pub audit_file: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self { audit_file: default_audit_file() }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_audit_file() -> String {
    DEFAULT_AUDIT_FILE.to_string()
}

impl Config {
    /// Load the TOML config. A missing file is not an error: every setting
    /// has a default and the backend URL can come from a flag or the
    /// environment. A present but unparseable file is still fatal.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, PrunerError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("Config file {} not found, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            PrunerError::InternalError(format!("Failed to read config file: {e}"))
        })?;

        toml::from_str(&contents).map_err(|e| {
            PrunerError::InternalError(format!("Failed to parse config file: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [backend]
            url = "http://reviewer.internal:9000"
            request_timeout_seconds = 10

            [review]
            audit_file = "decisions.csv"
            "#,
        );

        let config = Config::load_config(file.path()).unwrap();
        assert_eq!(config.backend.url, "http://reviewer.internal:9000");
        assert_eq!(config.backend.request_timeout_seconds, 10);
        assert_eq!(config.review.audit_file, "decisions.csv");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file = write_config(
            r#"
            [backend]
            url = "http://reviewer.internal:9000"
            "#,
        );

        let config = Config::load_config(file.path()).unwrap();
        assert_eq!(config.backend.url, "http://reviewer.internal:9000");
        assert_eq!(config.backend.request_timeout_seconds, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.review.audit_file, DEFAULT_AUDIT_FILE);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let file = write_config("backend = not toml at all [");
        let result = Config::load_config(file.path());
        assert!(matches!(result, Err(PrunerError::InternalError(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_config("definitely_not_here.toml").unwrap();
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
        assert_eq!(config.backend.request_timeout_seconds, DEFAULT_REQUEST_TIMEOUT_SECS);
    }
}
