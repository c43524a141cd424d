//! HTTP client for the remote vault protocol
//!
//! Callers branch on the response envelope's `status` field, never on
//! transport success alone: the vault answers application errors with
//! HTTP 200 and an error envelope.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;
use serde_json::{json, Value};
use thiserror::Error;

use crate::protocol::{UploadData, VaultResponse};

/// Errors produced by the vault client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never completed or the body was not the JSON envelope
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The vault answered with an error envelope
    #[error("Vault error: {0}")]
    Vault(String),

    /// The vault answered success but the envelope was missing its payload
    #[error("Malformed vault response: {0}")]
    MalformedResponse(String),
}

/// Client for the single-endpoint vault protocol
pub struct VaultClient {
    endpoint: String,
    http: reqwest::Client,
}

impl VaultClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Upload a file and return its assigned id, URL, size string and type
    pub async fn upload_file(
        &self,
        file_name: &str,
        mime_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<UploadData, ClientError> {
        let body = upload_request_body(file_name, mime_type, bytes);
        debug!("Uploading {} ({} bytes) to vault", file_name, bytes.len());

        let response = self.post(&body).await?;
        if response.is_success() {
            response.data.ok_or_else(|| {
                ClientError::MalformedResponse("success envelope without data".to_string())
            })
        } else {
            Err(ClientError::Vault(
                response.message.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }

    /// Soft-delete a file by id and return the vault's message.
    ///
    /// Succeeds even when the target is already gone; the vault masks that
    /// case deliberately so delete flows never branch on failure.
    pub async fn delete_file(&self, id: &str) -> Result<String, ClientError> {
        let body = json!({"action": "delete_file", "id": id});
        let response = self.post(&body).await?;
        if response.is_success() {
            Ok(response.message.unwrap_or_default())
        } else {
            Err(ClientError::Vault(
                response.message.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }

    /// Liveness probe; returns the vault's running message
    pub async fn ping(&self) -> Result<String, ClientError> {
        let response: VaultResponse = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .json()
            .await?;
        if response.is_success() {
            Ok(response.message.unwrap_or_default())
        } else {
            Err(ClientError::Vault(
                response.message.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }

    async fn post(&self, body: &Value) -> Result<VaultResponse, ClientError> {
        Ok(self
            .http
            .post(&self.endpoint)
            .json(body)
            .send()
            .await?
            .json()
            .await?)
    }
}

/// Build the upload request body; `mimeType` is omitted when undeclared so
/// the vault's configured default applies.
fn upload_request_body(file_name: &str, mime_type: Option<&str>, bytes: &[u8]) -> Value {
    let mut body = json!({
        "action": "upload_file_only",
        "fileData": BASE64.encode(bytes),
        "fileName": file_name,
    });
    if let Some(mime_type) = mime_type {
        body["mimeType"] = Value::String(mime_type.to_string());
    }
    body
}
