//! CocoScan - Error Types

use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Scan error types
#[derive(Error, Debug)]
pub enum ScanError {
    // ═══════════════════════════════════════════════════════════════
    // CAPTURE / IMPORT ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Invalid frame payload: {0}")]
    InvalidFrame(String),

    #[error("Failed to save image: {0}")]
    SaveImage(String),

    #[error("Failed to open selected image: {0}")]
    ImportFailed(String),

    // ═══════════════════════════════════════════════════════════════
    // FILE ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // ═══════════════════════════════════════════════════════════════
    // CLASSIFIER ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Model not initialized. Call init() first.")]
    ModelNotInitialized,

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),

    // ═══════════════════════════════════════════════════════════════
    // LOOKUP ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Photo not found in collection: {0}")]
    PhotoNotFound(String),

    // ═══════════════════════════════════════════════════════════════
    // SURVEY ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Unknown condition value: {0}")]
    UnknownCondition(String),

    #[error("Incomplete information: both weather and soil conditions are required")]
    IncompleteConditions,

    // ═══════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ScanError {
    /// Check if this error should surface as a user-facing alert
    /// (the store itself never fails; these come from its collaborators)
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidFrame(_)
                | ScanError::SaveImage(_)
                | ScanError::ImportFailed(_)
                | ScanError::PredictionFailed(_)
                | ScanError::IncompleteConditions
        )
    }

    /// Check if this error means a lookup simply missed
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            ScanError::PhotoNotFound(_) | ScanError::FileNotFound(_)
        )
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(e: serde_json::Error) -> Self {
        ScanError::SerializationError(e.to_string())
    }
}

impl From<base64::DecodeError> for ScanError {
    fn from(e: base64::DecodeError) -> Self {
        ScanError::InvalidFrame(format!("base64 decode failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_actionable_classes() {
        assert!(ScanError::InvalidFrame("bad payload".into()).is_user_actionable());
        assert!(ScanError::SaveImage("disk full".into()).is_user_actionable());
        assert!(ScanError::ImportFailed("no such file".into()).is_user_actionable());
        assert!(ScanError::PredictionFailed("backend gone".into()).is_user_actionable());
        assert!(ScanError::IncompleteConditions.is_user_actionable());

        assert!(!ScanError::ModelNotInitialized.is_user_actionable());
        assert!(!ScanError::PhotoNotFound("file://a.jpg".into()).is_user_actionable());
    }

    #[test]
    fn test_lookup_miss_classes() {
        assert!(ScanError::PhotoNotFound("file://a.jpg".into()).is_lookup_miss());
        assert!(ScanError::FileNotFound("photo_1.jpg".into()).is_lookup_miss());

        assert!(!ScanError::InvalidFrame("bad payload".into()).is_lookup_miss());
        assert!(!ScanError::IncompleteConditions.is_lookup_miss());
    }
}
