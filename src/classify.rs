//! CocoScan - Leaf Identification (Mock)
//!
//! Deterministic stand-in for the on-device leaf model. No ML runtime,
//! no network: predictions are derived from a stable hash of the image
//! URI so the rest of the pipeline behaves identically across runs.
//! Real backends plug in through [`LeafClassifier`].

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{ScanError, ScanResult};

/// Class labels, in model output order
pub const LABELS: [&str; 5] = [
    "coconut",
    "palm_tree",
    "coconut_leaf",
    "coconut_flower",
    "other",
];

/// Tensor shape the real model expects (kept for UI consistency)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputShape {
    pub height: u32,
    pub width: u32,
    pub channels: u32,
}

/// One classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Label text from [`LABELS`]
    pub label: String,
    /// Index into [`LABELS`]
    pub index: usize,
    /// Confidence (0.80 - 0.99 for the mock)
    pub confidence: f32,
}

/// Pluggable classifier backend
///
/// Implementations own their lifecycle: `predict` must fail until
/// `init` has run, and `dispose` returns the backend to that state.
pub trait LeafClassifier: Send + Sync {
    /// Load the model (idempotent)
    fn init(&self) -> ScanResult<()>;
    /// True once `init` has completed
    fn is_ready(&self) -> bool;
    /// Classify the image behind `uri`
    fn predict(&self, uri: &str) -> ScanResult<Prediction>;
    /// Release the model
    fn dispose(&self);
}

/// Stable 32-bit hash over a string's UTF-16 code units
/// (`h = h * 31 + unit`, wrapping). Shared by the mock backends so the
/// same URI always maps to the same faux result.
pub fn uri_hash(uri: &str) -> u32 {
    uri.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as u32))
}

/// Mock classifier backend
///
/// Maps a URI hash onto a label and a confidence in [0.80, 0.99].
pub struct MockLeafClassifier {
    ready: RwLock<bool>,
}

impl MockLeafClassifier {
    pub fn new() -> Self {
        Self {
            ready: RwLock::new(false),
        }
    }

    /// Input shape the mock reports
    pub fn expected_input(&self) -> InputShape {
        InputShape {
            height: 224,
            width: 224,
            channels: 3,
        }
    }

    /// Labels the mock can emit
    pub fn labels(&self) -> &'static [&'static str] {
        &LABELS
    }
}

impl Default for MockLeafClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LeafClassifier for MockLeafClassifier {
    fn init(&self) -> ScanResult<()> {
        let mut ready = self.ready.write();
        if !*ready {
            *ready = true;
            log::debug!("Mock leaf model initialized (no ML)");
        }
        Ok(())
    }

    fn is_ready(&self) -> bool {
        *self.ready.read()
    }

    fn predict(&self, uri: &str) -> ScanResult<Prediction> {
        if !self.is_ready() {
            return Err(ScanError::ModelNotInitialized);
        }

        let hash = uri_hash(uri);
        let index = (hash % LABELS.len() as u32) as usize;
        let confidence = (0.8 + (hash % 20) as f32 / 100.0).min(0.99);

        Ok(Prediction {
            label: LABELS[index].to_string(),
            index,
            confidence,
        })
    }

    fn dispose(&self) {
        *self.ready.write() = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_classifier() -> MockLeafClassifier {
        let classifier = MockLeafClassifier::new();
        classifier.init().unwrap();
        classifier
    }

    #[test]
    fn test_uri_hash_known_values() {
        assert_eq!(uri_hash(""), 0);
        assert_eq!(uri_hash("a"), 97);
        assert_eq!(uri_hash("file://a.jpg"), 1_165_686_518);
        assert_eq!(uri_hash("mock-image-uri"), 2_282_222_967);
    }

    #[test]
    fn test_predict_requires_init() {
        let classifier = MockLeafClassifier::new();
        assert!(!classifier.is_ready());

        let err = classifier.predict("file://a.jpg").unwrap_err();
        assert!(matches!(err, ScanError::ModelNotInitialized));
    }

    #[test]
    fn test_init_is_idempotent() {
        let classifier = MockLeafClassifier::new();
        classifier.init().unwrap();
        classifier.init().unwrap();
        assert!(classifier.is_ready());
    }

    #[test]
    fn test_predict_known_vectors() {
        let classifier = ready_classifier();

        let p = classifier.predict("file://a.jpg").unwrap();
        assert_eq!(p.label, "coconut_flower");
        assert_eq!(p.index, 3);
        assert!((p.confidence - 0.98).abs() < 1e-6);

        let p = classifier.predict("mock-image-uri").unwrap();
        assert_eq!(p.label, "coconut_leaf");
        assert_eq!(p.index, 2);
        assert!((p.confidence - 0.87).abs() < 1e-6);

        let p = classifier.predict("").unwrap();
        assert_eq!(p.label, "coconut");
        assert_eq!(p.index, 0);
        assert!((p.confidence - 0.80).abs() < 1e-6);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let classifier = ready_classifier();
        let first = classifier.predict("leaf.jpg").unwrap();
        let second = classifier.predict("leaf.jpg").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_confidence_stays_in_mock_band() {
        let classifier = ready_classifier();
        for uri in ["", "a", "leaf.jpg", "file:///tmp/palm.png", "x/y/z.png"] {
            let p = classifier.predict(uri).unwrap();
            assert!(p.confidence >= 0.80 && p.confidence <= 0.99, "{uri}");
            assert!(p.index < LABELS.len());
        }
    }

    #[test]
    fn test_dispose_resets_lifecycle() {
        let classifier = ready_classifier();
        classifier.dispose();
        assert!(!classifier.is_ready());
        assert!(classifier.predict("leaf.jpg").is_err());
    }

    #[test]
    fn test_expected_input_shape() {
        let classifier = MockLeafClassifier::new();
        let shape = classifier.expected_input();
        assert_eq!((shape.height, shape.width, shape.channels), (224, 224, 3));
        assert_eq!(classifier.labels().len(), 5);
    }
}
