//! Document service over the persisted store
//!
//! Every operation is async even though the underlying medium is local and
//! synchronous; callers await completed results, keeping the interface
//! substitutable with a networked store later. Mutations run a full
//! read-modify-write cycle against the serialized document.

use crate::models::{ComplaintRequest, Document, LeaveRequest, LeaveStatus};
use crate::store::{DocumentStorage, StoreError};
use log::info;
use std::sync::Arc;

/// Document service with an injected storage backend
pub struct DocumentService {
    storage: Arc<dyn DocumentStorage>,
}

impl DocumentService {
    /// Create a new document service with injected storage backend
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    /// Return the current document, or a fresh empty one. Never fails.
    pub async fn load(&self) -> Document {
        self.storage.read_document()
    }

    /// Append a leave request and persist. The store performs no uniqueness
    /// check; duplicate ids are accepted silently.
    pub async fn create_leave_request(&self, request: LeaveRequest) -> Result<bool, StoreError> {
        let mut document = self.storage.read_document();
        info!("Creating leave request {}", request.id);
        document.requests.push(request);
        self.storage.persist_document(&document)?;
        Ok(true)
    }

    /// Append a complaint and persist
    pub async fn create_complaint(&self, complaint: ComplaintRequest) -> Result<bool, StoreError> {
        let mut document = self.storage.read_document();
        info!("Creating complaint {}", complaint.id);
        document.complaints.push(complaint);
        self.storage.persist_document(&document)?;
        Ok(true)
    }

    /// Set the status of the first request matching the id.
    ///
    /// The rejection reason is only written when a reason is supplied; an
    /// existing reason is never cleared, even when the status moves away
    /// from Rejected. Returns whether a matching request was found.
    pub async fn update_request_status(
        &self,
        id: &str,
        status: LeaveStatus,
        reason: Option<String>,
    ) -> Result<bool, StoreError> {
        let mut document = self.storage.read_document();
        let found = match document.find_request_mut(id) {
            Some(request) => {
                request.status = status;
                if let Some(reason) = reason {
                    request.rejection_reason = Some(reason);
                }
                true
            }
            None => false,
        };

        if found {
            self.storage.persist_document(&document)?;
            info!("Updated status of request {} to {:?}", id, status);
        }
        Ok(found)
    }

    /// Set the administrative note of the first complaint matching the id
    pub async fn update_complaint_note(&self, id: &str, note: String) -> Result<bool, StoreError> {
        let mut document = self.storage.read_document();
        let found = match document.find_complaint_mut(id) {
            Some(complaint) => {
                complaint.note = Some(note);
                true
            }
            None => false,
        };

        if found {
            self.storage.persist_document(&document)?;
            info!("Updated note of complaint {}", id);
        }
        Ok(found)
    }

    /// Remove all requests matching the id. An absent id is a no-op, not a
    /// failure; the operation always reports success.
    pub async fn delete_request(&self, id: &str) -> Result<bool, StoreError> {
        let mut document = self.storage.read_document();
        document.requests.retain(|r| r.id != id);
        self.storage.persist_document(&document)?;
        info!("Deleted request {}", id);
        Ok(true)
    }

    /// Remove all complaints matching the id
    pub async fn delete_complaint(&self, id: &str) -> Result<bool, StoreError> {
        let mut document = self.storage.read_document();
        document.complaints.retain(|c| c.id != id);
        self.storage.persist_document(&document)?;
        info!("Deleted complaint {}", id);
        Ok(true)
    }

    /// Return the inline evidence payload of a request, or None when the
    /// request or its payload is absent
    pub async fn fetch_evidence(&self, id: &str) -> Option<String> {
        let document = self.storage.read_document();
        document.find_request(id).and_then(|r| r.evidence.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplaintCategory, LeaveType};
    use crate::store::mock_store::MockDocumentStore;

    fn service() -> DocumentService {
        DocumentService::new(Arc::new(MockDocumentStore::new()))
    }

    fn request(id: &str) -> LeaveRequest {
        LeaveRequest {
            id: id.to_string(),
            requester_name: "Alice".to_string(),
            requester_id: "2210101".to_string(),
            class_name: "CS-3A".to_string(),
            course: "Networks".to_string(),
            instructor: "Dr. Chen".to_string(),
            date: "2026-09-03".to_string(),
            leave_type: LeaveType::Sick,
            reason: "Fever".to_string(),
            evidence: Some("data:image/png;base64,AAAA".to_string()),
            has_evidence: Some(true),
            letter: None,
            status: LeaveStatus::Pending,
            rejection_reason: None,
            created_at: 1756500000000,
        }
    }

    fn complaint(id: &str) -> ComplaintRequest {
        ComplaintRequest {
            id: id.to_string(),
            requester_name: "Bob".to_string(),
            requester_id: "2210102".to_string(),
            class_name: "CS-3B".to_string(),
            category: ComplaintCategory::Service,
            description: "Slow responses".to_string(),
            note: None,
            created_at: 1756500000000,
        }
    }

    #[tokio::test]
    async fn test_create_then_load_round_trip() {
        let service = service();
        let before = service.load().await;
        assert!(before.requests.is_empty());

        assert!(service.create_leave_request(request("r-1")).await.unwrap());

        let after = service.load().await;
        assert_eq!(after.requests.len(), before.requests.len() + 1);
        assert_eq!(after.requests[0], request("r-1"));
    }

    #[tokio::test]
    async fn test_update_status_sets_reason_only_when_supplied() {
        let service = service();
        service.create_leave_request(request("r-1")).await.unwrap();

        let found = service
            .update_request_status("r-1", LeaveStatus::Rejected, Some("Missing evidence".into()))
            .await
            .unwrap();
        assert!(found);

        let doc = service.load().await;
        assert_eq!(doc.requests[0].status, LeaveStatus::Rejected);
        assert_eq!(
            doc.requests[0].rejection_reason.as_deref(),
            Some("Missing evidence")
        );

        // moving away from Rejected without a reason leaves the old one in place
        service
            .update_request_status("r-1", LeaveStatus::Approved, None)
            .await
            .unwrap();
        let doc = service.load().await;
        assert_eq!(doc.requests[0].status, LeaveStatus::Approved);
        assert_eq!(
            doc.requests[0].rejection_reason.as_deref(),
            Some("Missing evidence")
        );
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_reports_not_found() {
        let service = service();
        let found = service
            .update_request_status("missing", LeaveStatus::Approved, None)
            .await
            .unwrap();
        assert!(!found);
    }

    #[tokio::test]
    async fn test_delete_request_is_idempotent() {
        let service = service();
        service.create_leave_request(request("r-1")).await.unwrap();
        service.create_leave_request(request("r-2")).await.unwrap();

        assert!(service.delete_request("r-1").await.unwrap());
        let once = service.load().await;

        assert!(service.delete_request("r-1").await.unwrap());
        let twice = service.load().await;

        assert_eq!(once, twice);
        assert_eq!(twice.requests.len(), 1);
        assert_eq!(twice.requests[0].id, "r-2");
    }

    #[tokio::test]
    async fn test_update_complaint_note() {
        let service = service();
        service.create_complaint(complaint("c-1")).await.unwrap();

        assert!(service
            .update_complaint_note("c-1", "Forwarded to facilities".into())
            .await
            .unwrap());
        assert!(!service
            .update_complaint_note("c-9", "nobody home".into())
            .await
            .unwrap());

        let doc = service.load().await;
        assert_eq!(
            doc.complaints[0].note.as_deref(),
            Some("Forwarded to facilities")
        );
    }

    #[tokio::test]
    async fn test_fetch_evidence() {
        let service = service();
        service.create_leave_request(request("r-1")).await.unwrap();

        let mut without = request("r-2");
        without.evidence = None;
        without.has_evidence = None;
        service.create_leave_request(without).await.unwrap();

        assert_eq!(
            service.fetch_evidence("r-1").await.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert!(service.fetch_evidence("r-2").await.is_none());
        assert!(service.fetch_evidence("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_accepted_silently() {
        let service = service();
        service.create_leave_request(request("r-1")).await.unwrap();
        service.create_leave_request(request("r-1")).await.unwrap();
        assert_eq!(service.load().await.requests.len(), 2);

        // delete removes all matches
        service.delete_request("r-1").await.unwrap();
        assert!(service.load().await.requests.is_empty());
    }
}
