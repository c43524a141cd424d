//! Vault protocol request handlers
//!
//! The vault speaks a single-endpoint contract: every POST body carries an
//! `action` discriminator and every outcome, including application errors,
//! is answered with HTTP 200 and a JSON envelope. Transport-level failures
//! are reserved for transport problems only.

use actix_web::{web, Error, HttpResponse};
use bytes::BytesMut;
use futures::StreamExt;
use log::{debug, warn};

use crate::app_state::AppState;
use crate::protocol::{VaultRequest, VaultResponse};

/// Single-endpoint action handler
/// Handles requests like: POST / with a JSON body carrying an `action` field
pub async fn vault_action_handler(
    mut payload: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let mut bytes = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                warn!("Error reading payload chunk: {}", e);
                return Ok(envelope(VaultResponse::error(format!("GAS Error: {}", e))));
            }
        };
        bytes.extend_from_slice(&chunk);
    }

    let value: serde_json::Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("Unparseable vault request: {}", e);
            return Ok(envelope(VaultResponse::error(format!("GAS Error: {}", e))));
        }
    };

    // A body without an action discriminator dispatches nowhere, which is the
    // same outcome as an unrecognized action
    let request = if value.get("action").is_none() {
        VaultRequest::Unknown
    } else {
        match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                warn!("Undecodable vault request: {}", e);
                return Ok(envelope(VaultResponse::error(format!("GAS Error: {}", e))));
            }
        }
    };

    let response = match request {
        VaultRequest::Upload {
            file_data,
            file_name,
            mime_type,
        } => {
            debug!("Vault upload: fileName={}", file_name);
            app_state
                .vault_service
                .upload(&file_data, &file_name, mime_type.as_deref())
        }
        VaultRequest::Delete { id } => {
            debug!("Vault delete: id={:?}", id);
            app_state.vault_service.delete(id.as_deref())
        }
        VaultRequest::Unknown => VaultResponse::error("Invalid action"),
    };

    Ok(envelope(response))
}

/// Liveness probe
/// Handles requests like: GET /
pub async fn liveness_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let message = format!("{} is Running", app_state.config.server.service_name);
    Ok(envelope(VaultResponse::success_message(message)))
}

/// Serve a stored blob by id
/// Handles requests like: GET /files/{id}
pub async fn fetch_file_handler(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let id = path.into_inner();
    match app_state.vault_service.fetch(&id) {
        Some((mime_type, data)) => Ok(HttpResponse::Ok().content_type(mime_type).body(data)),
        None => Ok(HttpResponse::NotFound().body("File not found")),
    }
}

fn envelope(response: VaultResponse) -> HttpResponse {
    HttpResponse::Ok().json(response)
}
