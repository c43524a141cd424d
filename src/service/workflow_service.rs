//! Workflow layer above the document service
//!
//! Assembles records (assigning ids and creation timestamps), runs attached
//! evidence through the image codec, and drives status transitions. No
//! state-machine guard is enforced here: any status may overwrite any other
//! through `set_request_status`.

use crate::codec::{compress_image, CodecError};
use crate::models::{ComplaintCategory, ComplaintRequest, LeaveRequest, LeaveStatus, LeaveType};
use crate::service::document_service::DocumentService;
use crate::store::StoreError;
use chrono::Utc;
use log::info;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the workflow layer
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Evidence compression failed
    #[error("Evidence codec error: {0}")]
    Codec(#[from] CodecError),

    /// The document could not be persisted
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Raw evidence file as handed over by the file-selection surface
#[derive(Debug, Clone)]
pub struct EvidenceFile {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Input for a new leave request, before id and timestamp assignment
#[derive(Debug, Clone)]
pub struct NewLeaveRequest {
    pub requester_name: String,
    pub requester_id: String,
    pub class_name: String,
    pub course: String,
    pub instructor: String,
    pub date: String,
    pub leave_type: LeaveType,
    pub reason: String,
    pub evidence: Option<EvidenceFile>,
    pub letter: Option<String>,
}

/// Input for a new complaint
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub requester_name: String,
    pub requester_id: String,
    pub class_name: String,
    pub category: ComplaintCategory,
    pub description: String,
}

/// Workflow service with an injected document service
pub struct WorkflowService {
    documents: Arc<DocumentService>,
}

impl WorkflowService {
    pub fn new(documents: Arc<DocumentService>) -> Self {
        Self { documents }
    }

    /// Assemble and persist a leave request. Attached evidence is compressed
    /// first and stored inline as a data URL; it is not delegated to the
    /// remote vault.
    pub async fn submit_leave_request(
        &self,
        input: NewLeaveRequest,
    ) -> Result<LeaveRequest, WorkflowError> {
        let evidence = match &input.evidence {
            Some(file) => Some(compress_image(&file.bytes, &file.mime_type).await?),
            None => None,
        };
        let has_evidence = evidence.as_ref().map(|_| true);

        let request = LeaveRequest {
            id: Uuid::new_v4().to_string(),
            requester_name: input.requester_name,
            requester_id: input.requester_id,
            class_name: input.class_name,
            course: input.course,
            instructor: input.instructor,
            date: input.date,
            leave_type: input.leave_type,
            reason: input.reason,
            evidence,
            has_evidence,
            letter: input.letter,
            status: LeaveStatus::Pending,
            rejection_reason: None,
            created_at: Utc::now().timestamp_millis(),
        };

        info!("Submitting leave request {}", request.id);
        self.documents.create_leave_request(request.clone()).await?;
        Ok(request)
    }

    /// Assemble and persist a complaint
    pub async fn submit_complaint(
        &self,
        input: NewComplaint,
    ) -> Result<ComplaintRequest, WorkflowError> {
        let complaint = ComplaintRequest {
            id: Uuid::new_v4().to_string(),
            requester_name: input.requester_name,
            requester_id: input.requester_id,
            class_name: input.class_name,
            category: input.category,
            description: input.description,
            note: None,
            created_at: Utc::now().timestamp_millis(),
        };

        info!("Submitting complaint {}", complaint.id);
        self.documents.create_complaint(complaint.clone()).await?;
        Ok(complaint)
    }

    /// Approve a request. Returns whether the request was found.
    pub async fn approve_request(&self, id: &str) -> Result<bool, WorkflowError> {
        self.set_request_status(id, LeaveStatus::Approved, None).await
    }

    /// Reject a request with an optional reason
    pub async fn reject_request(
        &self,
        id: &str,
        reason: Option<String>,
    ) -> Result<bool, WorkflowError> {
        self.set_request_status(id, LeaveStatus::Rejected, reason).await
    }

    /// Set any status on a request; no transition table is enforced
    pub async fn set_request_status(
        &self,
        id: &str,
        status: LeaveStatus,
        reason: Option<String>,
    ) -> Result<bool, WorkflowError> {
        Ok(self
            .documents
            .update_request_status(id, status, reason)
            .await?)
    }

    /// Attach an administrative note to a complaint
    pub async fn annotate_complaint(&self, id: &str, note: String) -> Result<bool, WorkflowError> {
        Ok(self.documents.update_complaint_note(id, note).await?)
    }

    /// Withdraw (delete) a leave request; absent ids are a no-op
    pub async fn withdraw_request(&self, id: &str) -> Result<bool, WorkflowError> {
        Ok(self.documents.delete_request(id).await?)
    }

    /// Withdraw (delete) a complaint
    pub async fn withdraw_complaint(&self, id: &str) -> Result<bool, WorkflowError> {
        Ok(self.documents.delete_complaint(id).await?)
    }
}
