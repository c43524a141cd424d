//! File-backed document storage implementation
//!
//! The whole document lives as one JSON value in a single file, mirroring a
//! browser storage key. Writes replace the file in place; a crash mid-write
//! can corrupt the stored document, which a subsequent read treats as empty.

use crate::config::StoreConfig;
use crate::models::Document;
use crate::store::{DocumentStorage, StoreError};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// File-backed document storage
pub struct FileDocumentStore {
    path: PathBuf,
    // Keeps read-modify-write cycles coherent within this process
    write_lock: Mutex<()>,
}

impl FileDocumentStore {
    pub fn new(config: &StoreConfig) -> Self {
        let path = PathBuf::from(&config.document_path);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).expect("Failed to create document directory");
            }
        }
        info!("Using document file: {}", path.display());

        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }
}

impl DocumentStorage for FileDocumentStore {
    fn read_document(&self) -> Document {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // absent data is indistinguishable from empty data
            Err(_) => return Document::default(),
        };

        match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                warn!(
                    "Stored document at {} is unreadable ({}), starting empty",
                    self.path.display(),
                    e
                );
                Document::default()
            }
        }
    }

    fn persist_document(&self, document: &Document) -> Result<(), StoreError> {
        let _lock = self.write_lock.lock().unwrap();
        let json = serde_json::to_string(document)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
