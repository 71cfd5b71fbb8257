//! CocoScan - Health Classification (Mock)
//!
//! Deterministic leaf-health verdicts keyed on the image URI. Unlike the
//! identification backend, classification is self-initializing: the first
//! call brings the service up. Real backends plug in through
//! [`HealthClassifier`].

use chrono::{SecondsFormat, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::classify::uri_hash;
use crate::error::ScanResult;
use crate::record::{HealthAnalysis, HealthStatus};

/// One health verdict from a classifier backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPrediction {
    pub prediction: HealthStatus,
    /// Confidence (75.0 - 94.0 for the mock)
    pub confidence: f32,
    /// RFC 3339 timestamp of the verdict
    pub timestamp: String,
}

impl From<HealthPrediction> for HealthAnalysis {
    fn from(p: HealthPrediction) -> Self {
        HealthAnalysis {
            prediction: p.prediction.as_str().to_string(),
            confidence: p.confidence,
            timestamp: p.timestamp,
        }
    }
}

/// Pluggable health classifier backend
pub trait HealthClassifier: Send + Sync {
    /// Bring the service up (idempotent)
    fn initialize(&self) -> ScanResult<()>;
    /// True once `initialize` has completed
    fn is_ready(&self) -> bool;
    /// Classify the leaf behind `uri`, initializing first if needed
    fn classify(&self, uri: &str) -> ScanResult<HealthPrediction>;
    /// Human-readable backend state
    fn model_status(&self) -> String;
}

/// Mock health classifier backend
///
/// Even URI hashes read as healthy, odd as unhealthy; confidence sits
/// in [75.0, 94.0].
pub struct MockHealthClassifier {
    initialized: RwLock<bool>,
}

impl MockHealthClassifier {
    pub fn new() -> Self {
        Self {
            initialized: RwLock::new(false),
        }
    }

    /// Classify the fixed sample URI (handy for smoke checks)
    pub fn classify_sample(&self) -> ScanResult<HealthPrediction> {
        self.classify("mock-image-uri")
    }
}

impl Default for MockHealthClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthClassifier for MockHealthClassifier {
    fn initialize(&self) -> ScanResult<()> {
        let mut initialized = self.initialized.write();
        if !*initialized {
            *initialized = true;
            log::debug!("Health classification service initialized");
        }
        Ok(())
    }

    fn is_ready(&self) -> bool {
        *self.initialized.read()
    }

    fn classify(&self, uri: &str) -> ScanResult<HealthPrediction> {
        self.initialize()?;

        let hash = uri_hash(uri);
        let prediction = if hash % 2 == 0 {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        let confidence = (75 + hash % 20) as f32;

        Ok(HealthPrediction {
            prediction,
            confidence,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    fn model_status(&self) -> String {
        if self.is_ready() {
            "Ready (mock)".to_string()
        } else {
            "Not initialized".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_classify_self_initializes() {
        let classifier = MockHealthClassifier::new();
        assert!(!classifier.is_ready());
        assert_eq!(classifier.model_status(), "Not initialized");

        classifier.classify("leaf.jpg").unwrap();
        assert!(classifier.is_ready());
        assert_eq!(classifier.model_status(), "Ready (mock)");
    }

    #[test]
    fn test_classify_known_vectors() {
        let classifier = MockHealthClassifier::new();

        // Even hash reads healthy
        let p = classifier.classify("file://a.jpg").unwrap();
        assert_eq!(p.prediction, HealthStatus::Healthy);
        assert!((p.confidence - 93.0).abs() < 1e-6);

        // Odd hash reads unhealthy
        let p = classifier.classify("a").unwrap();
        assert_eq!(p.prediction, HealthStatus::Unhealthy);
        assert!((p.confidence - 92.0).abs() < 1e-6);

        // Empty URI hashes to zero
        let p = classifier.classify("").unwrap();
        assert_eq!(p.prediction, HealthStatus::Healthy);
        assert!((p.confidence - 75.0).abs() < 1e-6);
    }

    #[test]
    fn test_classify_sample_uses_fixed_uri() {
        let classifier = MockHealthClassifier::new();
        let sample = classifier.classify_sample().unwrap();
        let direct = classifier.classify("mock-image-uri").unwrap();
        assert_eq!(sample.prediction, direct.prediction);
        assert_eq!(sample.prediction, HealthStatus::Unhealthy);
        assert!((sample.confidence - 82.0).abs() < 1e-6);
    }

    #[test]
    fn test_confidence_stays_in_mock_band() {
        let classifier = MockHealthClassifier::new();
        for uri in ["", "a", "leaf.jpg", "photo_1.jpg", "x/y/z.png"] {
            let p = classifier.classify(uri).unwrap();
            assert!(p.confidence >= 75.0 && p.confidence <= 94.0, "{uri}");
        }
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let classifier = MockHealthClassifier::new();
        let p = classifier.classify("leaf.jpg").unwrap();
        assert!(DateTime::parse_from_rfc3339(&p.timestamp).is_ok());
        assert!(p.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_prediction_converts_to_analysis() {
        let p = HealthPrediction {
            prediction: HealthStatus::Unhealthy,
            confidence: 82.0,
            timestamp: "2024-01-30T12:15:00.000Z".into(),
        };
        let analysis: HealthAnalysis = p.into();
        assert_eq!(analysis.prediction, "Unhealthy");
        assert!((analysis.confidence - 82.0).abs() < 1e-6);
        assert_eq!(analysis.timestamp, "2024-01-30T12:15:00.000Z");
    }
}
