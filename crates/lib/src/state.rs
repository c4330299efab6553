use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::{config::Config, error::PrunerError};

// Global config, set once at startup and read from anywhere afterwards.
static GLOBAL_CONFIG: Lazy<RwLock<Option<Arc<Config>>>> = Lazy::new(|| RwLock::new(None));

/// Initialize the global config with a Config instance
pub fn init_config(config: Config) -> Result<(), PrunerError> {
    let mut config_guard = GLOBAL_CONFIG.write();
    if config_guard.is_some() {
        return Err(PrunerError::InternalError("Config already initialized".to_string()));
    }

    *config_guard = Some(Arc::new(config));
    Ok(())
}

/// Get a reference to the global config
pub fn get_config() -> Result<Arc<Config>, PrunerError> {
    let config_guard = GLOBAL_CONFIG.read();
    match &*config_guard {
        Some(config) => Ok(Arc::clone(config)),
        None => Err(PrunerError::InternalError("Config not initialized".to_string())),
    }
}

/// Replace the global config (test only)
#[cfg(test)]
pub fn update_config(new_config: Config) -> Result<(), PrunerError> {
    let mut config_guard = GLOBAL_CONFIG.write();

    *config_guard = Some(Arc::new(new_config));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_once_then_get() {
        update_config(Config::default()).unwrap();

        let config = get_config().unwrap();
        assert_eq!(config.backend.url, crate::constant::DEFAULT_BACKEND_URL);

        // A second initialization attempt is rejected.
        assert!(init_config(Config::default()).is_err());
    }
}
