//! Blob Vault Storage Abstraction
//!
//! This module provides an abstraction over blob storage backends for
//! uploaded evidence files, allowing the system to use different storage
//! implementations (local folders, hosted drives, etc.) without affecting
//! the protocol layer.

pub mod folder_store;
pub mod mock_store;

use actix_web::Error;
use serde::{Deserialize, Serialize};

/// Blob identifier type
pub type BlobId = String;

/// Result of storing a blob in the vault
#[derive(Debug, Clone, PartialEq)]
pub struct StoredBlob {
    /// Opaque identifier assigned at upload time
    pub id: BlobId,
    /// Public URL at which the blob can be viewed by anyone with the link
    pub url: String,
    /// Stored size in bytes, computed by the vault
    pub size: u64,
}

/// Descriptive metadata persisted alongside each blob
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlobMeta {
    /// Declared file name
    pub file_name: String,
    /// Declared media type
    pub mime_type: String,
    /// Stored size in bytes
    pub size: u64,
}

/// Trait defining the blob vault interface
pub trait BlobVault: Send + Sync {
    /// Store a named blob and return its assigned id, public URL and size
    fn store_blob(&self, file_name: &str, mime_type: &str, data: &[u8]) -> Result<StoredBlob, Error>;

    /// Retrieve a blob's media type and bytes, or None if absent or trashed
    fn fetch_blob(&self, id: &str) -> Result<Option<(String, Vec<u8>)>, Error>;

    /// Move a blob to the trash (recoverable). Returns whether it existed.
    fn trash_blob(&self, id: &str) -> Result<bool, Error>;
}

/// Render a byte count the way upload callers expect it: kibibytes to two
/// decimals under 1 MiB, mebibytes to two decimals from 1 MiB up.
pub fn format_file_size(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Assign an opaque blob id from the file name, upload instant and a nonce
pub(crate) fn assign_blob_id(file_name: &str) -> BlobId {
    let stamp = chrono::Utc::now().timestamp_micros();
    let nonce = uuid::Uuid::new_v4();
    hex::encode(md5::compute(format!("{}:{}:{}", file_name, stamp, nonce)).0)
}
