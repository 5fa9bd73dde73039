//! Complaint store

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Complaint, ComplaintId, ComplaintStatus, NewComplaint};
use shared::util::today;

use super::seed::seed_complaints;

/// Complaint storage
///
/// Append-only: records are never updated or removed once added.
pub trait ComplaintRepository: Send + Sync + std::fmt::Debug {
    /// All records in insertion order
    fn list(&self) -> Vec<Complaint>;

    /// Append a record and return its id
    ///
    /// Input is trusted; callers validate before reaching the store.
    fn add(&self, complaint: NewComplaint) -> ComplaintId;

    fn find(&self, id: ComplaintId) -> Option<Complaint>;
}

/// In-process complaint store
///
/// Ids are `count + 1` at insert time, which only stays unique because
/// nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryComplaintStore {
    records: Arc<RwLock<Vec<Complaint>>>,
}

impl InMemoryComplaintStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the startup complaints (ids 1..=4)
    pub fn seeded() -> Self {
        Self::with_records(seed_complaints())
    }

    pub fn with_records(records: Vec<Complaint>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl ComplaintRepository for InMemoryComplaintStore {
    fn list(&self) -> Vec<Complaint> {
        self.records.read().clone()
    }

    fn add(&self, complaint: NewComplaint) -> ComplaintId {
        let mut records = self.records.write();
        let id = records.len() as ComplaintId + 1;
        records.push(Complaint {
            id,
            title: complaint.title,
            status: ComplaintStatus::Submitted,
            date: today(),
            description: complaint.description,
        });
        tracing::debug!(complaint_id = id, "Complaint stored");
        id
    }

    fn find(&self, id: ComplaintId) -> Option<Complaint> {
        self.records.read().iter().find(|c| c.id == id).cloned()
    }
}
