//! Data model for the locally persisted document
//!
//! All types serialize with camelCase field names so the document on disk
//! matches the JSON shape consumed by the presentation layer:
//! `{requests: [...], complaints: [...]}` under a single storage file.

use serde::{Deserialize, Serialize};

/// Kind of absence being requested
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Sick,
    FamilyEvent,
    Dispensation,
    Other,
}

/// Review status of a leave request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Category of a complaint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Facilities,
    Academic,
    Service,
    Other,
}

/// A leave/absence request record
///
/// The id is caller-generated and expected to be unique within the requests
/// collection; the store itself does not enforce this. `rejection_reason` is
/// only meaningful when status is Rejected, by convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub requester_name: String,
    pub requester_id: String,
    pub class_name: String,
    pub course: String,
    pub instructor: String,
    /// Calendar date of the absence, as entered by the requester
    pub date: String,
    pub leave_type: LeaveType,
    pub reason: String,
    /// Inline evidence payload as a data URL, bounded by the codec
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_evidence: Option<bool>,
    /// Generated formal letter text, if one was produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    pub status: LeaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Epoch milliseconds, set once at creation
    pub created_at: i64,
}

/// A complaint record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRequest {
    pub id: String,
    pub requester_name: String,
    pub requester_id: String,
    pub class_name: String,
    pub category: ComplaintCategory,
    pub description: String,
    /// Administrative note attached during review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: i64,
}

/// The aggregate root persisted as a single JSON value
///
/// Insertion order is the only ordering; there is no secondary index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub requests: Vec<LeaveRequest>,
    #[serde(default)]
    pub complaints: Vec<ComplaintRequest>,
}

impl Document {
    /// Find a leave request by id (first match, linear scan)
    pub fn find_request(&self, id: &str) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Find a leave request by id for mutation
    pub fn find_request_mut(&mut self, id: &str) -> Option<&mut LeaveRequest> {
        self.requests.iter_mut().find(|r| r.id == id)
    }

    /// Find a complaint by id for mutation
    pub fn find_complaint_mut(&mut self, id: &str) -> Option<&mut ComplaintRequest> {
        self.complaints.iter_mut().find(|c| c.id == id)
    }
}
