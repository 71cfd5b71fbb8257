//! CocoScan - Photo Collection Store
//!
//! In-memory ordered registry of photo records, newest first. The store
//! is an explicit object owned by the application root and handed to
//! whoever needs it; interested parties subscribe for change events
//! rather than reaching into shared state.
//!
//! Operations are synchronous; a snapshot taken between mutations is
//! stable. Interior mutability keeps the store usable behind `Arc`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::record::PhotoRecord;
use crate::seed;

/// Store change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Collection reset to the seeded state
    Seeded { count: usize },
    /// Record inserted at the front
    Inserted { id: String },
    /// Record removed
    Removed { id: String },
}

/// Subscription handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

/// Photo Collection Store
pub struct PhotoStore {
    /// Ordered collection, newest first
    records: RwLock<Vec<PhotoRecord>>,
    /// Registered observers
    subscribers: RwLock<Vec<(SubscriberId, Subscriber)>>,
    /// Next subscription handle
    next_subscriber: AtomicU64,
}

impl PhotoStore {
    /// Create an empty, unseeded store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            subscribers: RwLock::new(Vec::new()),
            next_subscriber: AtomicU64::new(1),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════

    /// Reset the collection to the seeded state
    ///
    /// Fills the store with the bundled dataset followed by the demo
    /// records. Infallible: the seed data is static. Calling this on a
    /// populated store discards its contents.
    pub fn initialize(&self) -> usize {
        let seeded = seed::seed_records();
        let count = seeded.len();

        {
            let mut records = self.records.write();
            *records = seeded;
        }

        log::info!("Photo collection seeded with {} records", count);
        self.notify(&StoreEvent::Seeded { count });

        count
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MUTATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Insert a record at the front of the collection
    ///
    /// No deduplication: a repeated id is accepted (and logged), since
    /// id assignment is the caller's concern.
    pub fn insert(&self, record: PhotoRecord) {
        let id = record.id.clone();

        {
            let mut records = self.records.write();
            if records.iter().any(|r| r.id == id) {
                log::warn!("Inserting duplicate photo id: {}", id);
            }
            records.insert(0, record);
        }

        log::debug!("Inserted photo {}", id);
        self.notify(&StoreEvent::Inserted { id });
    }

    /// Remove the first record with the given id
    ///
    /// Absence is a no-op. Survivor order is preserved, and the
    /// collection shrinks by at most one element.
    pub fn delete(&self, id: &str) -> bool {
        let removed = {
            let mut records = self.records.write();
            match records.iter().position(|r| r.id == id) {
                Some(index) => {
                    records.remove(index);
                    true
                }
                None => false,
            }
        };

        if removed {
            log::debug!("Removed photo {}", id);
            self.notify(&StoreEvent::Removed { id: id.to_string() });
        }

        removed
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LOOKUPS
    // ═══════════════════════════════════════════════════════════════════════

    /// First record with the given uri, in current order
    pub fn find_by_uri(&self, uri: &str) -> Option<PhotoRecord> {
        self.records.read().iter().find(|r| r.uri == uri).cloned()
    }

    /// Record with the given id
    pub fn get(&self, id: &str) -> Option<PhotoRecord> {
        self.records.read().iter().find(|r| r.id == id).cloned()
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Ordered snapshot of the collection
    pub fn records(&self) -> Vec<PhotoRecord> {
        self.records.read().clone()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SUBSCRIPTIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Register an observer for store events
    ///
    /// Callbacks run synchronously after the mutation is visible, so
    /// they may read the store and may change subscriptions; a change
    /// made during delivery applies from the next event.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().push((id, Arc::new(callback)));
        id
    }

    /// Drop a subscription; returns false for an unknown handle
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn notify(&self, event: &StoreEvent) {
        // Callbacks may re-enter subscribe/unsubscribe, which takes the
        // write lock; deliver from a snapshot with the lock released.
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(event);
        }
    }
}

impl Default for PhotoStore {
    fn default() -> Self {
        Self::new()
    }
}
