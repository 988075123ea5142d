//! Error types shared across the classed crates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassedError {
    /// A CSS-module manifest was structurally invalid
    #[error("Manifest error: {0}")]
    ManifestError(String),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClassedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_message() {
        let err = ClassedError::ManifestError("expected an object".to_string());
        assert_eq!(err.to_string(), "Manifest error: expected an object");
    }

    #[test]
    fn test_serialization_error_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: ClassedError = parse_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
