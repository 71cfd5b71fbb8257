//! CocoScan - Scan Session
//!
//! Application root tying the pieces together: owns the photo store, the
//! classifier backends, the plant reference data, and the media
//! directory. Commands and tests receive the session by reference; no
//! component reaches for shared global state.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Local, Utc};
use serde::Serialize;

use crate::advice::{self, TreatmentPlan};
use crate::classify::{LeafClassifier, MockLeafClassifier, Prediction};
use crate::error::{ScanError, ScanResult};
use crate::health::{HealthClassifier, HealthPrediction, MockHealthClassifier};
use crate::media::{self, MediaDir};
use crate::plants;
use crate::record::{HealthStatus, PhotoRecord};
use crate::store::PhotoStore;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where captured and imported images are written
    pub media_dir: PathBuf,
    /// Seed the store on construction
    pub seed_on_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("cocoscan_media"),
            seed_on_start: true,
        }
    }
}

/// Combined model output for one stored photo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanAnalysis {
    pub leaf: Prediction,
    pub health: HealthPrediction,
}

/// Collection totals by source and verdict
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub total_photos: usize,
    pub camera_captures: usize,
    pub gallery_imports: usize,
    pub healthy_count: usize,
    pub unhealthy_count: usize,
}

/// Scan Session - main entry point
pub struct ScanSession {
    /// Photo collection
    store: PhotoStore,
    /// Identification backend
    classifier: Box<dyn LeafClassifier>,
    /// Health backend
    health: Box<dyn HealthClassifier>,
    /// Image file storage
    media: MediaDir,
}

impl ScanSession {
    // ═══════════════════════════════════════════════════════════════════════
    // INITIALIZATION
    // ═══════════════════════════════════════════════════════════════════════

    /// Build a session with the mock backends
    pub fn new(config: SessionConfig) -> ScanResult<Self> {
        Self::with_classifiers(
            config,
            Box::new(MockLeafClassifier::new()),
            Box::new(MockHealthClassifier::new()),
        )
    }

    /// Build a session with injected classifier backends
    pub fn with_classifiers(
        config: SessionConfig,
        classifier: Box<dyn LeafClassifier>,
        health: Box<dyn HealthClassifier>,
    ) -> ScanResult<Self> {
        let media = MediaDir::new(&config.media_dir)?;
        let store = PhotoStore::new();

        if config.seed_on_start {
            store.initialize();
        }

        // The identification model loads up front; health classification
        // brings itself up on first use.
        classifier.init()?;

        Ok(Self {
            store,
            classifier,
            health,
            media,
        })
    }

    /// The photo collection (subscribe here for change events)
    pub fn store(&self) -> &PhotoStore {
        &self.store
    }

    /// Identification backend
    pub fn classifier(&self) -> &dyn LeafClassifier {
        self.classifier.as_ref()
    }

    /// Health backend
    pub fn health_classifier(&self) -> &dyn HealthClassifier {
        self.health.as_ref()
    }

    /// Where captured and imported images are written
    pub fn media_dir(&self) -> &Path {
        self.media.root()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // CAPTURE / IMPORT FLOWS
    // ═══════════════════════════════════════════════════════════════════════

    /// Capture a photo from a base64 camera frame
    ///
    /// Validates and writes the frame, identifies the plant from the
    /// payload, and inserts a complete record at the front of the
    /// collection. Health fields stay empty until an analysis runs.
    pub fn capture_photo(&self, frame_b64: &str) -> ScanResult<PhotoRecord> {
        let now = Utc::now();
        let millis = now.timestamp_millis();

        let file_name = format!("photo_{}.jpg", millis);
        let path = self.media.save_base64(&file_name, frame_b64)?;

        let plant = plants::identify(frame_b64);

        let record = PhotoRecord {
            id: format!("camera-{}", millis),
            uri: path.display().to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            time: Local::now().format("%H:%M").to_string(),
            location: "Camera Capture".to_string(),
            base64: Some(frame_b64.to_string()),
            plant_name: Some(plant.name.to_string()),
            scientific_name: Some(plant.scientific_name.to_string()),
            description: Some(plant.description.to_string()),
            leaf_shape: Some(plant.leaf_shape.to_string()),
            common_uses: Some(plant.common_uses.to_string()),
            health_status: None,
            health_confidence: None,
            health_analysis: None,
        };

        log::info!("Captured {} as {}", record.id, file_name);
        self.store.insert(record.clone());

        Ok(record)
    }

    /// Import a picked image file
    ///
    /// Copies the file into the media directory under an inferred name
    /// and inserts a record without identification fields.
    pub fn import_photo(&self, src: &Path) -> ScanResult<PhotoRecord> {
        let now = Utc::now();
        let millis = now.timestamp_millis();

        let file_name = media::infer_import_name(src, millis);
        let dest = self.media.import_file(src, &file_name)?;

        let bytes = fs::read(&dest).map_err(|e| ScanError::ImportFailed(e.to_string()))?;

        let record = PhotoRecord {
            id: format!("gallery-{}", millis),
            uri: dest.display().to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            time: Local::now().format("%H:%M").to_string(),
            location: "Gallery".to_string(),
            base64: Some(STANDARD.encode(&bytes)),
            plant_name: None,
            scientific_name: None,
            description: None,
            leaf_shape: None,
            common_uses: None,
            health_status: None,
            health_confidence: None,
            health_analysis: None,
        };

        log::info!("Imported {} as {}", record.id, file_name);
        self.store.insert(record.clone());

        Ok(record)
    }

    /// Delete a photo and its backing file
    ///
    /// Files outside the media directory (seed URLs, foreign paths) are
    /// left alone. Returns false when no record matched.
    pub fn delete_photo(&self, id: &str) -> bool {
        if let Some(record) = self.store.get(id) {
            let path = Path::new(&record.uri);
            if self.media.owns(path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    if let Err(e) = self.media.delete(name) {
                        log::warn!("Could not remove media file for {}: {}", id, e);
                    }
                }
            }
        }

        self.store.delete(id)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ANALYSIS
    // ═══════════════════════════════════════════════════════════════════════

    /// Run both backends against a stored photo's uri
    ///
    /// Records are immutable once inserted; the analysis is returned to
    /// the caller rather than written back.
    pub fn analyze(&self, uri: &str) -> ScanResult<ScanAnalysis> {
        let record = self
            .store
            .find_by_uri(uri)
            .ok_or_else(|| ScanError::PhotoNotFound(uri.to_string()))?;

        let leaf = self.classifier.predict(&record.uri)?;
        let health = self.health.classify(&record.uri)?;

        Ok(ScanAnalysis { leaf, health })
    }

    /// Description of the photo with the given uri, if any
    pub fn describe(&self, uri: &str) -> Option<String> {
        self.store.find_by_uri(uri).and_then(|r| r.description)
    }

    /// Treatment plan for the photo with the given uri
    ///
    /// Falls back to the generic plan when the photo is unknown or
    /// carries no description.
    pub fn advice_for(&self, uri: &str) -> TreatmentPlan {
        let about = self.describe(uri);
        advice::plan_for(about.as_deref())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════

    pub fn photo_count(&self) -> usize {
        self.store.count()
    }

    pub fn records(&self) -> Vec<PhotoRecord> {
        self.store.records()
    }

    /// Collection totals
    pub fn stats(&self) -> SessionStats {
        let records = self.store.records();

        SessionStats {
            total_photos: records.len(),
            camera_captures: records.iter().filter(|r| r.from_camera()).count(),
            gallery_imports: records.iter().filter(|r| r.from_gallery()).count(),
            healthy_count: records
                .iter()
                .filter(|r| r.health_status == Some(HealthStatus::Healthy))
                .count(),
            unhealthy_count: records
                .iter()
                .filter(|r| r.health_status == Some(HealthStatus::Unhealthy))
                .count(),
        }
    }
}
