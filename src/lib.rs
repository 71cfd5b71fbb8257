//! # CocoScan
//!
//! Coconut leaf scanning core: an ordered in-memory photo registry with
//! deterministic mock classification, capture/import flows, and static
//! agronomy guidance. No ML runtime, no network.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       COCOSCAN CORE                      │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────┐   │
//! │  │  CAPTURE /  │  │  PHOTO STORE │  │  MOCK LEAF +   │   │
//! │  │  IMPORT     │  │  (ordered,   │  │  HEALTH MODELS │   │
//! │  │  FLOWS      │  │   observable)│  │  (hash-keyed)  │   │
//! │  └──────┬──────┘  └──────┬───────┘  └────────┬───────┘   │
//! │         │                │                   │           │
//! │  ┌──────┴────────────────┴───────────────────┴────────┐  │
//! │  │                     SCAN SESSION                   │  │
//! │  │        store + classifiers + media directory       │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────┐   │
//! │  │  PLANT      │  │  TREATMENT & │  │  CONDITIONS    │   │
//! │  │  REFERENCE  │  │  CONTROL     │  │  SURVEY        │   │
//! │  └─────────────┘  └──────────────┘  └────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! - Every classification derives from a stable hash of the image URI
//! - Identification keys off the captured payload, not a random draw
//! - The seed collection is fixed: bundled dataset + two demo records
//! - Repeated runs over the same inputs agree byte for byte

pub mod advice;
pub mod classify;
pub mod conditions;
pub mod error;
pub mod health;
pub mod media;
pub mod plants;
pub mod record;
pub mod seed;
pub mod session;
pub mod store;

pub use classify::{LeafClassifier, MockLeafClassifier, Prediction};
pub use conditions::{ExternalConditions, Soil, Weather};
pub use error::{ScanError, ScanResult};
pub use health::{HealthClassifier, HealthPrediction, MockHealthClassifier};
pub use record::{HealthAnalysis, HealthStatus, PhotoRecord};
pub use session::{ScanSession, SessionConfig};
pub use store::{PhotoStore, StoreEvent, SubscriberId};

/// CocoScan version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
