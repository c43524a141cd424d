//! Application State Management
//!
//! This module provides the application state that contains all services
//! and their dependencies, following the dependency injection pattern:
//! stores are constructed once at startup and passed by handle, never
//! reached through ambient global lookup.

use log::info;
use std::sync::Arc;

use crate::config::{AppConfig, StoreBackend, StoreConfig, VaultBackend};
use crate::service::document_service::DocumentService;
use crate::service::vault_service::VaultService;
use crate::service::workflow_service::WorkflowService;
use crate::store::{local_store::FileDocumentStore, mock_store::MockDocumentStore, DocumentStorage};
use crate::vault::{folder_store::FolderVault, mock_store::MockVault, BlobVault};

/// Application state containing the vault service and configuration
#[derive(Clone)]
pub struct AppState {
    pub vault_service: Arc<VaultService>,
    pub config: AppConfig,
}

impl AppState {
    /// Create a new application state with services configured from YAML config
    pub fn new() -> Self {
        let config = AppConfig::load().expect("Failed to load configuration");
        Self::from_config(config)
    }

    /// Create application state from configuration
    pub fn from_config(config: AppConfig) -> Self {
        info!("Initializing application state with configuration");

        let vault_backend: Arc<dyn BlobVault> = match config.vault.backend {
            VaultBackend::Folder => {
                info!(
                    "Using folder vault backend with folder_path: {}",
                    config.vault.folder_path
                );
                Arc::new(FolderVault::new(&config.vault))
            }
            VaultBackend::Mock => {
                info!("Using mock vault backend");
                Arc::new(MockVault::new())
            }
        };

        let vault_service = Arc::new(VaultService::new(
            vault_backend,
            config.vault.default_mime_type.clone(),
        ));

        info!("Application state initialized successfully");
        Self {
            vault_service,
            config,
        }
    }

    /// Create application state for testing with mock backends
    pub fn new_for_testing() -> Self {
        let config = AppConfig::default();
        let vault_backend: Arc<dyn BlobVault> = Arc::new(MockVault::new());
        let vault_service = Arc::new(VaultService::new(
            vault_backend,
            config.vault.default_mime_type.clone(),
        ));

        Self {
            vault_service,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a document service from configuration
///
/// The document store is client-side state; embedding callers construct it
/// here once and hand the service around by reference.
pub fn create_document_service(config: &StoreConfig) -> Arc<DocumentService> {
    let storage: Arc<dyn DocumentStorage> = match config.backend {
        StoreBackend::File => {
            info!(
                "Using file document store with document_path: {}",
                config.document_path
            );
            Arc::new(FileDocumentStore::new(config))
        }
        StoreBackend::Mock => {
            info!("Using mock document store");
            Arc::new(MockDocumentStore::new())
        }
    };
    Arc::new(DocumentService::new(storage))
}

/// Build a workflow service over a document service built from configuration
pub fn create_workflow_service(config: &StoreConfig) -> WorkflowService {
    WorkflowService::new(create_document_service(config))
}
