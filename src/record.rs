//! CocoScan - Photo Record Model
//!
//! One captured or imported image plus its (mocked) identification and
//! health-classification metadata. Records are fully populated at
//! construction time and never mutated afterwards; all lifecycle changes
//! go through the store's insert/delete operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health verdict for a scanned leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Unhealthy => "Unhealthy",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested (mock) health analysis attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    /// Verdict as display text
    pub prediction: String,
    /// Confidence (0-100)
    pub confidence: f32,
    /// RFC 3339 timestamp of the analysis
    pub timestamp: String,
}

/// Photo record - one captured or imported image and its analysis results
///
/// Field names serialize in camelCase to match the seed dataset shape;
/// optional fields are absent rather than null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// Unique ID, assigned at creation ("camera-<millis>", "gallery-<millis>",
    /// or a fixed seed id). The store does not enforce uniqueness.
    pub id: String,
    /// Local file reference (or a seed URL). Unique in practice, not enforced.
    pub uri: String,
    /// Capture date (YYYY-MM-DD)
    pub date: String,
    /// Capture time (HH:MM, 24-hour)
    pub time: String,
    /// Source label ("Camera Capture", "Gallery", or a seeded dataset value)
    pub location: String,
    /// Inline payload used as a fallback render source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,

    // Plant identification (filled by the identification stub)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_uses: Option<String>,

    // Health classification (filled by the health stub)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_status: Option<HealthStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_analysis: Option<HealthAnalysis>,
}

impl PhotoRecord {
    /// True if this record came from the camera capture flow
    pub fn from_camera(&self) -> bool {
        self.id.starts_with("camera-")
    }

    /// True if this record came from the gallery import flow
    pub fn from_gallery(&self) -> bool {
        self.id.starts_with("gallery-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_record() -> PhotoRecord {
        PhotoRecord {
            id: "camera-1".into(),
            uri: "file://a.jpg".into(),
            date: "2024-01-30".into(),
            time: "14:30".into(),
            location: "Camera Capture".into(),
            base64: None,
            plant_name: None,
            scientific_name: None,
            description: None,
            leaf_shape: None,
            common_uses: None,
            health_status: None,
            health_confidence: None,
            health_analysis: None,
        }
    }

    #[test]
    fn test_optional_fields_absent_not_null() {
        let json = serde_json::to_string(&bare_record()).unwrap();

        // Required fields present, camelCase
        assert!(json.contains("\"id\":\"camera-1\""));
        assert!(json.contains("\"uri\":\"file://a.jpg\""));

        // Absent optionals serialize as missing keys, never null
        assert!(!json.contains("null"));
        assert!(!json.contains("plantName"));
        assert!(!json.contains("healthStatus"));
        assert!(!json.contains("base64"));
    }

    #[test]
    fn test_camelcase_keys_roundtrip() {
        let mut record = bare_record();
        record.plant_name = Some("Coconut Palm".into());
        record.health_status = Some(HealthStatus::Unhealthy);
        record.health_confidence = Some(72.8);
        record.health_analysis = Some(HealthAnalysis {
            prediction: "Unhealthy".into(),
            confidence: 72.8,
            timestamp: "2024-01-30T12:15:00Z".into(),
        });

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"plantName\":\"Coconut Palm\""));
        assert!(json.contains("\"healthStatus\":\"Unhealthy\""));
        assert!(json.contains("\"healthConfidence\":72.8"));
        assert!(json.contains("\"healthAnalysis\""));

        let back: PhotoRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_with_absent_optionals() {
        let json = r#"{
            "id": "dataset-9",
            "uri": "https://picsum.photos/300/300?random=9",
            "date": "2024-01-01",
            "time": "08:00",
            "location": "Field Survey"
        }"#;
        let record: PhotoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "dataset-9");
        assert!(record.base64.is_none());
        assert!(record.plant_name.is_none());
        assert!(record.health_analysis.is_none());
    }

    #[test]
    fn test_source_predicates() {
        let mut record = bare_record();
        assert!(record.from_camera());
        assert!(!record.from_gallery());

        record.id = "gallery-1706616600000".into();
        assert!(record.from_gallery());

        record.id = "dataset-1".into();
        assert!(!record.from_camera());
        assert!(!record.from_gallery());
    }

    #[test]
    fn test_health_status_display() {
        assert_eq!(HealthStatus::Healthy.to_string(), "Healthy");
        assert_eq!(HealthStatus::Unhealthy.as_str(), "Unhealthy");
    }
}
