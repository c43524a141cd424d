//! Folder-backed blob vault implementation
//!
//! Blobs live as flat files named by id inside the configured destination
//! folder, with a JSON sidecar carrying the declared name and media type.
//! Soft deletion moves both files into a trash subfolder, from which they
//! remain recoverable by hand.

use crate::config::VaultConfig;
use crate::vault::{assign_blob_id, BlobMeta, BlobVault, StoredBlob};
use actix_web::error::ErrorInternalServerError;
use actix_web::Error;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

fn resolve_vault_directory(config: &VaultConfig) -> PathBuf {
    // Resolve the configured destination folder; fall back to the default
    // root rather than hard-failing when it cannot be created.
    let configured = PathBuf::from(&config.folder_path);
    match fs::create_dir_all(&configured) {
        Ok(()) => {
            info!("Using configured vault folder: {}", configured.display());
            configured
        }
        Err(e) => {
            warn!(
                "Could not resolve vault folder {}: {}, falling back to {}",
                configured.display(),
                e,
                config.fallback_path
            );
            let fallback = PathBuf::from(&config.fallback_path);
            fs::create_dir_all(&fallback).expect("Failed to create fallback vault folder");
            fallback
        }
    }
}

/// Folder-backed blob vault
pub struct FolderVault {
    vault_path: PathBuf,
    trash_path: PathBuf,
    public_url_base: String,
}

impl FolderVault {
    pub fn new(config: &VaultConfig) -> Self {
        let vault_path = resolve_vault_directory(config);
        let trash_path = vault_path.join(&config.trash_dir);
        if !trash_path.exists() {
            fs::create_dir_all(&trash_path).expect("Failed to create trash folder");
        }

        Self {
            vault_path,
            trash_path,
            public_url_base: config.public_url_base.trim_end_matches('/').to_string(),
        }
    }

    fn blob_path(&self, id: &str) -> PathBuf {
        self.vault_path.join(id)
    }

    fn meta_path(&self, id: &str) -> PathBuf {
        self.vault_path.join(format!("{}.json", id))
    }

    fn public_url(&self, id: &str) -> String {
        format!("{}/{}", self.public_url_base, id)
    }

    /// Reject ids that could escape the vault folder
    fn check_id(id: &str) -> Result<(), Error> {
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(actix_web::error::ErrorBadRequest("Invalid blob id"));
        }
        Ok(())
    }
}

impl BlobVault for FolderVault {
    fn store_blob(&self, file_name: &str, mime_type: &str, data: &[u8]) -> Result<StoredBlob, Error> {
        let id = assign_blob_id(file_name);

        fs::write(self.blob_path(&id), data).map_err(ErrorInternalServerError)?;

        let meta = BlobMeta {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            size: data.len() as u64,
        };
        let meta_json = serde_json::to_vec(&meta).map_err(ErrorInternalServerError)?;
        fs::write(self.meta_path(&id), meta_json).map_err(ErrorInternalServerError)?;

        info!(
            "Stored blob {} ({}, {} bytes) as {}",
            file_name,
            mime_type,
            data.len(),
            id
        );

        Ok(StoredBlob {
            url: self.public_url(&id),
            size: data.len() as u64,
            id,
        })
    }

    fn fetch_blob(&self, id: &str) -> Result<Option<(String, Vec<u8>)>, Error> {
        Self::check_id(id)?;

        let meta_path = self.meta_path(id);
        if !meta_path.exists() {
            return Ok(None);
        }

        let meta_json = fs::read(&meta_path).map_err(ErrorInternalServerError)?;
        let meta: BlobMeta = serde_json::from_slice(&meta_json).map_err(ErrorInternalServerError)?;
        let data = fs::read(self.blob_path(id)).map_err(ErrorInternalServerError)?;

        Ok(Some((meta.mime_type, data)))
    }

    fn trash_blob(&self, id: &str) -> Result<bool, Error> {
        Self::check_id(id)?;

        let blob_path = self.blob_path(id);
        if !blob_path.exists() {
            return Ok(false);
        }

        fs::rename(&blob_path, self.trash_path.join(id)).map_err(ErrorInternalServerError)?;
        let meta_path = self.meta_path(id);
        if meta_path.exists() {
            fs::rename(&meta_path, self.trash_path.join(format!("{}.json", id)))
                .map_err(ErrorInternalServerError)?;
        }

        info!("Moved blob {} to trash", id);
        Ok(true)
    }
}
