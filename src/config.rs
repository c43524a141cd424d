//! Application Configuration
//!
//! This module provides configuration management for the application,
//! supporting YAML configuration files with sensible defaults.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Vault backend types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VaultBackend {
    Folder,
    Mock,
}

impl Default for VaultBackend {
    fn default() -> Self {
        VaultBackend::Folder
    }
}

/// Document store backend types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StoreBackend {
    File,
    Mock,
}

impl Default for StoreBackend {
    fn default() -> Self {
        StoreBackend::File
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Blob vault configuration
    pub vault: VaultConfig,
    /// Document store configuration
    pub store: StoreConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Number of worker threads
    pub workers: usize,
    /// Maximum payload size in bytes
    pub max_payload_size: usize,
    /// Display name used in the liveness response
    pub service_name: String,
}

/// Blob vault configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Vault backend type
    pub backend: VaultBackend,
    /// Configured destination folder for uploaded blobs
    pub folder_path: String,
    /// Fallback root used when the destination folder cannot be resolved
    pub fallback_path: String,
    /// Subfolder name for soft-deleted blobs
    pub trash_dir: String,
    /// Base of the public URL handed back to upload callers
    pub public_url_base: String,
    /// Media type assumed when an upload declares none
    pub default_mime_type: String,
}

/// Document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend type
    pub backend: StoreBackend,
    /// Path of the single JSON document file
    pub document_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Path to log configuration file
    pub config_file: String,
}

impl AppConfig {
    /// Load configuration from file, use defaults if not found
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = "config.yaml";
        if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path)?;
            let config: AppConfig = serde_yaml::from_str(&content)?;
            info!("Loaded configuration from {}", config_path);
            Ok(config)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 9710,
                workers: 4,
                max_payload_size: 33554432, // 32MB, evidence images are small
                service_name: "LeaveDesk Vault".to_string(),
            },
            vault: VaultConfig {
                backend: VaultBackend::Folder,
                folder_path: "./data/vault".to_string(),
                fallback_path: "./vault".to_string(),
                trash_dir: "trash".to_string(),
                public_url_base: "http://127.0.0.1:9710/files".to_string(),
                default_mime_type: "application/octet-stream".to_string(),
            },
            store: StoreConfig {
                backend: StoreBackend::File,
                document_path: "./data/leave_desk.json".to_string(),
            },
            logging: LoggingConfig {
                config_file: "server_log.yaml".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 9710);
        assert_eq!(config.vault.backend, VaultBackend::Folder);
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.vault.trash_dir, "trash");
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.server.host, config.server.host);
        assert_eq!(back.vault.folder_path, config.vault.folder_path);
        assert_eq!(back.store.document_path, config.store.document_path);
    }
}
