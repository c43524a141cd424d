//! Vault service that turns protocol requests into storage operations
//!
//! Every code path resolves to a well-formed response envelope; nothing in
//! here is allowed to escape as a transport-level failure. Callers branch on
//! the envelope's `status` field.

use crate::protocol::{UploadData, VaultResponse};
use crate::vault::{format_file_size, BlobVault};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::{info, warn};
use std::sync::Arc;

/// Vault service with an injected blob vault backend
pub struct VaultService {
    vault: Arc<dyn BlobVault>,
    default_mime_type: String,
}

impl VaultService {
    /// Create a new vault service with injected vault backend
    pub fn new(vault: Arc<dyn BlobVault>, default_mime_type: String) -> Self {
        Self {
            vault,
            default_mime_type,
        }
    }

    /// Handle an upload: decode the base64 transport payload, store the blob,
    /// and answer with id, public URL, formatted size and media type.
    pub fn upload(
        &self,
        file_data: &str,
        file_name: &str,
        mime_type: Option<&str>,
    ) -> VaultResponse {
        let bytes = match BASE64.decode(file_data) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Rejected upload of {}: bad base64 payload", file_name);
                return VaultResponse::error(format!("Upload Failed: {}", e));
            }
        };

        let mime_type = mime_type.unwrap_or(&self.default_mime_type);
        match self.vault.store_blob(file_name, mime_type, &bytes) {
            Ok(stored) => {
                info!("Uploaded {} as blob {}", file_name, stored.id);
                VaultResponse::success_data(UploadData {
                    id: stored.id,
                    url: stored.url,
                    file_size: format_file_size(stored.size),
                    mime_type: mime_type.to_string(),
                })
            }
            Err(e) => VaultResponse::error(format!("Upload Failed: {}", e)),
        }
    }

    /// Handle a delete: soft-delete the blob. A missing target is reported as
    /// success so caller-side flows never branch on delete failure; only a
    /// missing id is an error.
    pub fn delete(&self, id: Option<&str>) -> VaultResponse {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => return VaultResponse::error("No ID provided"),
        };

        match self.vault.trash_blob(id) {
            Ok(true) => VaultResponse::success_message("File moved to trash"),
            Ok(false) | Err(_) => {
                VaultResponse::success_message("File might already be deleted or not found")
            }
        }
    }

    /// Serve a stored blob's media type and bytes
    pub fn fetch(&self, id: &str) -> Option<(String, Vec<u8>)> {
        self.vault.fetch_blob(id).ok().flatten()
    }
}
