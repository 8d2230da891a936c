//! Multipart image upload.
//!
//! Files land in the configured public upload directory under a
//! timestamp-prefixed name and become servable immediately under
//! `/uploads/`. There is no content-type or size validation server-side;
//! the admin form's `accept` attribute is the only gate. Single-admin
//! deployment behind the shop owner's own machine makes that an accepted
//! risk.

use std::path::Path;

use axum::{Json, extract::Multipart, extract::State};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Upload result: where the file is now publicly reachable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub file_name: String,
}

/// Accept a multipart `file` field and store it.
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_owned();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let file_name = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(&original_name)
        );

        let upload_dir = &state.config().upload_dir;
        tokio::fs::create_dir_all(upload_dir).await?;
        tokio::fs::write(upload_dir.join(&file_name), &data).await?;

        let url = format!("/uploads/{file_name}");
        tracing::info!(%url, bytes = data.len(), "file uploaded");

        return Ok(Json(UploadResponse {
            success: true,
            url,
            file_name,
        }));
    }

    Err(AppError::BadRequest("no file provided".to_string()))
}

/// Lower-case the name and collapse every whitespace run to a single `-`.
///
/// Only the final path component is kept, so a hostile filename cannot
/// escape the upload directory.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .map_or(name, |n| n.to_str().unwrap_or(name));

    let mut out = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for c in base.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            out.extend(c.to_lowercase());
        }
    }
    out
}
