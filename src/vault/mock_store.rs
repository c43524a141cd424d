//! Mock implementation of BlobVault trait for testing

use crate::vault::{assign_blob_id, BlobMeta, BlobVault, StoredBlob};
use actix_web::Error;
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock implementation of BlobVault for testing
pub struct MockVault {
    // In-memory storage: id -> (meta, data)
    blobs: Arc<Mutex<HashMap<String, (BlobMeta, Vec<u8>)>>>,
    // Soft-deleted blobs stay recoverable here
    trash: Arc<Mutex<HashMap<String, (BlobMeta, Vec<u8>)>>>,
}

impl MockVault {
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(Mutex::new(HashMap::new())),
            trash: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of live (non-trashed) blobs
    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }

    /// Number of trashed blobs
    pub fn trash_count(&self) -> usize {
        self.trash.lock().unwrap().len()
    }

    /// Check whether a live blob with this id exists
    pub fn blob_exists(&self, id: &str) -> bool {
        self.blobs.lock().unwrap().contains_key(id)
    }
}

impl Default for MockVault {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobVault for MockVault {
    fn store_blob(&self, file_name: &str, mime_type: &str, data: &[u8]) -> Result<StoredBlob, Error> {
        let id = assign_blob_id(file_name);
        let meta = BlobMeta {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            size: data.len() as u64,
        };

        let mut blobs = self.blobs.lock().unwrap();
        blobs.insert(id.clone(), (meta, data.to_vec()));

        info!("Mock: stored blob {} as {}", file_name, id);

        Ok(StoredBlob {
            url: format!("mock://files/{}", id),
            size: data.len() as u64,
            id,
        })
    }

    fn fetch_blob(&self, id: &str) -> Result<Option<(String, Vec<u8>)>, Error> {
        let blobs = self.blobs.lock().unwrap();
        Ok(blobs
            .get(id)
            .map(|(meta, data)| (meta.mime_type.clone(), data.clone())))
    }

    fn trash_blob(&self, id: &str) -> Result<bool, Error> {
        let mut blobs = self.blobs.lock().unwrap();
        match blobs.remove(id) {
            Some(entry) => {
                self.trash.lock().unwrap().insert(id.to_string(), entry);
                info!("Mock: moved blob {} to trash", id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
