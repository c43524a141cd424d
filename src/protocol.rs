//! Wire types for the vault's single-endpoint JSON protocol
//!
//! Every request carries an `action` discriminator and every response is a
//! well-formed JSON envelope with a `status` field, regardless of outcome.
//! Application errors never surface as transport failures; callers branch on
//! `status`, not on HTTP status codes.

use serde::{Deserialize, Serialize};

/// Tagged request decoded from the POST body
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action")]
pub enum VaultRequest {
    /// Upload a base64-transported file into the vault
    #[serde(rename = "upload_file_only")]
    Upload {
        #[serde(rename = "fileData")]
        file_data: String,
        #[serde(rename = "fileName")]
        file_name: String,
        /// Optional declared media type; the vault default applies when absent
        #[serde(rename = "mimeType")]
        mime_type: Option<String>,
    },
    /// Soft-delete a blob by id
    ///
    /// The id is optional at the wire level so a missing id can be answered
    /// with the contractual "No ID provided" error instead of a decode failure.
    #[serde(rename = "delete_file")]
    Delete { id: Option<String> },
    /// Any unrecognized action value
    #[serde(other)]
    Unknown,
}

/// Payload returned on a successful upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadData {
    pub id: String,
    pub url: String,
    /// Human-readable size string, e.g. "500.00 KB" or "2.00 MB"
    #[serde(rename = "fileSize")]
    pub file_size: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Response envelope shared by every code path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UploadData>,
}

impl VaultResponse {
    pub fn success_data(data: UploadData) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            data: Some(data),
        }
    }

    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_upload_request() {
        let body = r#"{"action":"upload_file_only","fileData":"aGVsbG8=","fileName":"note.png","mimeType":"image/png"}"#;
        let req: VaultRequest = serde_json::from_str(body).unwrap();
        match req {
            VaultRequest::Upload {
                file_data,
                file_name,
                mime_type,
            } => {
                assert_eq!(file_data, "aGVsbG8=");
                assert_eq!(file_name, "note.png");
                assert_eq!(mime_type.as_deref(), Some("image/png"));
            }
            other => panic!("decoded wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_decode_upload_without_mime_type() {
        let body = r#"{"action":"upload_file_only","fileData":"aGVsbG8=","fileName":"note.bin"}"#;
        let req: VaultRequest = serde_json::from_str(body).unwrap();
        match req {
            VaultRequest::Upload { mime_type, .. } => assert!(mime_type.is_none()),
            other => panic!("decoded wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_decode_delete_with_and_without_id() {
        let with_id: VaultRequest =
            serde_json::from_str(r#"{"action":"delete_file","id":"abc123"}"#).unwrap();
        match with_id {
            VaultRequest::Delete { id } => assert_eq!(id.as_deref(), Some("abc123")),
            other => panic!("decoded wrong variant: {:?}", other),
        }

        let without_id: VaultRequest = serde_json::from_str(r#"{"action":"delete_file"}"#).unwrap();
        match without_id {
            VaultRequest::Delete { id } => assert!(id.is_none()),
            other => panic!("decoded wrong variant: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_action_decodes_to_unknown_variant() {
        let req: VaultRequest =
            serde_json::from_str(r#"{"action":"reticulate_splines","x":1}"#).unwrap();
        assert!(matches!(req, VaultRequest::Unknown));
    }

    #[test]
    fn test_upload_data_wire_names() {
        let data = UploadData {
            id: "abc".to_string(),
            url: "http://example.com/files/abc".to_string(),
            file_size: "500.00 KB".to_string(),
            mime_type: "image/jpeg".to_string(),
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["fileSize"], "500.00 KB");
        assert_eq!(value["mimeType"], "image/jpeg");
    }

    #[test]
    fn test_envelope_omits_empty_fields() {
        let resp = VaultResponse::error("Invalid action");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "Invalid action");
        assert!(value.get("data").is_none());

        let ok = VaultResponse::success_message("LeaveDesk Vault is Running");
        assert!(ok.is_success());
    }
}
