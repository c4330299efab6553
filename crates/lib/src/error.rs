use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PrunerError {
    #[error("Backend request failed: {0}")]
    BackendError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for PrunerError {
    fn from(e: reqwest::Error) -> Self {
        PrunerError::BackendError(e.to_string())
    }
}

impl From<serde_json::Error> for PrunerError {
    fn from(e: serde_json::Error) -> Self {
        PrunerError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for PrunerError {
    fn from(e: toml::de::Error) -> Self {
        PrunerError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for PrunerError {
    fn from(e: std::io::Error) -> Self {
        PrunerError::InternalError(e.to_string())
    }
}

impl From<anyhow::Error> for PrunerError {
    fn from(e: anyhow::Error) -> Self {
        PrunerError::InternalError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::other("file not found");
        let pruner_error: PrunerError = io_error.into();
        assert!(matches!(pruner_error, PrunerError::InternalError(_)));
        if let PrunerError::InternalError(msg) = pruner_error {
            assert!(msg.contains("file not found"));
        }
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<u64>("not a number").unwrap_err();
        let pruner_error: PrunerError = json_error.into();
        assert!(matches!(pruner_error, PrunerError::SerializationError(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let pruner_error: PrunerError = toml_error.into();
        assert!(matches!(pruner_error, PrunerError::SerializationError(_)));
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("something went wrong");
        let pruner_error: PrunerError = anyhow_error.into();
        assert!(matches!(pruner_error, PrunerError::InternalError(_)));
        if let PrunerError::InternalError(msg) = pruner_error {
            assert!(msg.contains("something went wrong"));
        }
    }

    #[test]
    fn test_pruner_error_display() {
        let error = PrunerError::BackendError("connection refused".to_string());
        assert_eq!(format!("{error}"), "Backend request failed: connection refused");

        let error = PrunerError::ValidationError("empty URL".to_string());
        assert_eq!(format!("{error}"), "Validation error: empty URL");
    }

    #[test]
    fn test_pruner_error_debug() {
        let error = PrunerError::SerializationError("test".to_string());
        let debug_string = format!("{error:?}");
        assert!(debug_string.contains("SerializationError"));
    }

    #[test]
    fn test_pruner_error_clone() {
        let error = PrunerError::BackendError("original".to_string());
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
