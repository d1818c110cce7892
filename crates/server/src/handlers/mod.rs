//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `animdna-server`.
//! `general` holds the liveness endpoints; `pdf` holds the upload endpoints
//! that run the extraction pipeline.

pub mod general;
pub mod pdf;

// Re-export all handlers so the router can reach them under a single
// `handlers::` path.
pub use general::*;
pub use pdf::*;

use super::errors::AppError;
use axum_extra::extract::Multipart;
use tracing::{info, warn};

/// The multipart field carrying the document.
const FILE_FIELD: &str = "file";

/// A document read from a multipart upload.
pub(crate) struct Upload {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Reads the `file` part of a multipart body.
///
/// Unknown parts, and any `file` part after the first, are skipped. A missing
/// or zero-byte first `file` part is reported as [`AppError::MissingInput`].
pub(crate) async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut upload: Option<Upload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name != FILE_FIELD {
            warn!("Ignoring unknown multipart field: {}", name);
            continue;
        }
        if upload.is_some() {
            warn!("Ignoring repeated '{}' field; the first one wins.", FILE_FIELD);
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?.to_vec();
        info!(
            "Received file '{}' ({} bytes).",
            file_name.as_deref().unwrap_or("<unnamed>"),
            bytes.len()
        );
        upload = Some(Upload { file_name, bytes });
    }

    match upload {
        Some(upload) if !upload.bytes.is_empty() => Ok(upload),
        _ => Err(AppError::MissingInput),
    }
}
