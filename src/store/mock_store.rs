//! Mock implementation of DocumentStorage trait for testing

use crate::models::Document;
use crate::store::{DocumentStorage, StoreError};
use std::sync::{Arc, Mutex};

/// In-memory document storage for tests
pub struct MockDocumentStore {
    document: Arc<Mutex<Document>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            document: Arc::new(Mutex::new(Document::default())),
        }
    }

    /// Number of leave requests currently stored
    pub fn request_count(&self) -> usize {
        self.document.lock().unwrap().requests.len()
    }

    /// Number of complaints currently stored
    pub fn complaint_count(&self) -> usize {
        self.document.lock().unwrap().complaints.len()
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStorage for MockDocumentStore {
    fn read_document(&self) -> Document {
        self.document.lock().unwrap().clone()
    }

    fn persist_document(&self, document: &Document) -> Result<(), StoreError> {
        *self.document.lock().unwrap() = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveRequest, LeaveStatus, LeaveType};

    #[test]
    fn test_mock_store_round_trip() {
        let store = MockDocumentStore::new();
        assert_eq!(store.read_document(), Document::default());

        let mut doc = Document::default();
        doc.requests.push(LeaveRequest {
            id: "r-1".to_string(),
            requester_name: "Alice".to_string(),
            requester_id: "2210101".to_string(),
            class_name: "CS-3A".to_string(),
            course: "Databases".to_string(),
            instructor: "Dr. Jones".to_string(),
            date: "2026-09-02".to_string(),
            leave_type: LeaveType::Other,
            reason: "Family matter".to_string(),
            evidence: None,
            has_evidence: None,
            letter: None,
            status: LeaveStatus::Pending,
            rejection_reason: None,
            created_at: 1,
        });

        store.persist_document(&doc).unwrap();
        assert_eq!(store.request_count(), 1);
        assert_eq!(store.read_document(), doc);
    }
}
