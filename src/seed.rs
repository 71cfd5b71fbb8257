//! CocoScan - Seed Dataset
//!
//! The records every fresh store starts with: a small bundled dataset
//! (embedded at compile time from `data/dataset.json`) followed by two
//! fixed demo records. Seeding is unconditional and has no failure mode;
//! the embedded asset is validated by the tests below.

use crate::record::{HealthAnalysis, HealthStatus, PhotoRecord};

/// Bundled dataset, embedded at compile time
const DATASET_JSON: &str = include_str!("../data/dataset.json");

/// Parse the bundled dataset records
///
/// The asset ships inside the binary, so a parse failure is a build
/// defect rather than a runtime condition.
pub fn dataset_records() -> Vec<PhotoRecord> {
    serde_json::from_str(DATASET_JSON).expect("embedded dataset is valid JSON")
}

/// The two fixed demo records appended after the dataset
pub fn demo_records() -> Vec<PhotoRecord> {
    vec![
        PhotoRecord {
            id: "mock-1".into(),
            uri: "https://picsum.photos/300/300?random=1".into(),
            date: "2024-01-30".into(),
            time: "14:30".into(),
            location: "Garden".into(),
            base64: None,
            plant_name: Some("Sample Plant".into()),
            scientific_name: Some("Sample spp.".into()),
            description: Some("Sample plant for demonstration".into()),
            leaf_shape: Some("Sample shape".into()),
            common_uses: Some("Ornamental".into()),
            health_status: Some(HealthStatus::Healthy),
            health_confidence: Some(85.2),
            health_analysis: Some(HealthAnalysis {
                prediction: "Healthy".into(),
                confidence: 85.2,
                timestamp: "2024-01-30T14:30:00Z".into(),
            }),
        },
        PhotoRecord {
            id: "mock-2".into(),
            uri: "https://picsum.photos/300/300?random=2".into(),
            date: "2024-01-30".into(),
            time: "12:15".into(),
            location: "Kitchen".into(),
            base64: None,
            plant_name: Some("Sample Plant 2".into()),
            scientific_name: Some("Sample spp. 2".into()),
            description: Some("Another sample plant".into()),
            leaf_shape: Some("Sample shape 2".into()),
            common_uses: Some("Culinary".into()),
            health_status: Some(HealthStatus::Unhealthy),
            health_confidence: Some(72.8),
            health_analysis: Some(HealthAnalysis {
                prediction: "Unhealthy".into(),
                confidence: 72.8,
                timestamp: "2024-01-30T12:15:00Z".into(),
            }),
        },
    ]
}

/// Full seed collection: dataset records first, demo records after
pub fn seed_records() -> Vec<PhotoRecord> {
    let mut records = dataset_records();
    records.extend(demo_records());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let records = dataset_records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.id.starts_with("dataset-")));
        assert!(records.iter().all(|r| r.plant_name.is_some()));
        // Dataset entries carry no health verdict until scanned
        assert!(records.iter().all(|r| r.health_status.is_none()));
    }

    #[test]
    fn test_demo_records_fixed_content() {
        let demos = demo_records();
        assert_eq!(demos.len(), 2);

        assert_eq!(demos[0].id, "mock-1");
        assert_eq!(demos[0].uri, "https://picsum.photos/300/300?random=1");
        assert_eq!(demos[0].location, "Garden");
        assert_eq!(demos[0].health_status, Some(HealthStatus::Healthy));
        assert_eq!(demos[0].health_confidence, Some(85.2));

        assert_eq!(demos[1].id, "mock-2");
        assert_eq!(demos[1].location, "Kitchen");
        assert_eq!(demos[1].health_status, Some(HealthStatus::Unhealthy));
        let analysis = demos[1].health_analysis.as_ref().unwrap();
        assert_eq!(analysis.prediction, "Unhealthy");
        assert_eq!(analysis.timestamp, "2024-01-30T12:15:00Z");
    }

    #[test]
    fn test_seed_order_dataset_then_demos() {
        let seed = seed_records();
        assert_eq!(seed.len(), 4);
        assert_eq!(seed[0].id, "dataset-1");
        assert_eq!(seed[1].id, "dataset-2");
        assert_eq!(seed[2].id, "mock-1");
        assert_eq!(seed[3].id, "mock-2");
    }

    #[test]
    fn test_seed_ids_unique() {
        let seed = seed_records();
        let mut ids: Vec<&str> = seed.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed.len());
    }
}
