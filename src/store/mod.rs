//! Persisted Document Storage Abstraction
//!
//! This module provides an abstraction over the medium holding the single
//! JSON document of requests and complaints. Backends read and persist the
//! whole document; there is no partial-write path and no transaction log,
//! so every mutation above this layer is a full read-modify-write cycle.

pub mod local_store;
pub mod mock_store;

use crate::models::Document;
use thiserror::Error;

/// Errors produced by the document storage layer
///
/// Reads never fail: an absent or unreadable document is indistinguishable
/// from an empty one. Only persisting can error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O failure while persisting the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Trait defining the document storage interface
pub trait DocumentStorage: Send + Sync {
    /// Read the current document; absent data yields a fresh empty document
    fn read_document(&self) -> Document;

    /// Persist the whole document, replacing whatever was stored before
    fn persist_document(&self, document: &Document) -> Result<(), StoreError>;
}
