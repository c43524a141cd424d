//! Service layer
//!
//! Services own the application semantics above the storage abstractions:
//! document CRUD with the status workflow, request assembly with evidence
//! compression, and the vault's upload/delete envelope handling.

pub mod document_service;
pub mod vault_service;
pub mod workflow_service;
