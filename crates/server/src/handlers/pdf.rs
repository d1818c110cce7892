//! # PDF Upload Handlers
//!
//! All three endpoints accept a multipart body with a `file` part. Extraction
//! and enhancement are CPU-bound, so they run on the blocking pool.

use super::{read_upload, Upload};
use crate::{
    errors::AppError,
    state::AppState,
    types::{DebugParams, ExtractResponse, PromptsResponse},
};
use animdna::{render_export, EXPORT_FILE_NAME};
use animdna_pdf::{looks_like_pdf, process_document, DocumentPrompts};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::{multipart::MultipartRejection, Multipart};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Handler for `POST /api/extract-pdf`: returns the extracted text.
pub async fn extract_pdf_handler(
    State(app_state): State<AppState>,
    debug_params: Result<Query<DebugParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let Query(debug_params) = debug_params?;
    let Upload { file_name, bytes } = read_upload(multipart?).await?;
    let size = bytes.len();
    let is_pdf = looks_like_pdf(&bytes);

    let extractor = Arc::clone(&app_state.extractor);
    let extraction = tokio::task::spawn_blocking(move || extractor.extract(&bytes))
        .await
        .map_err(anyhow::Error::from)??;

    let debug = debug_params.gate(|| {
        json!({
            "heuristic": extraction.heuristic,
            "bytes": size,
            "looks_like_pdf": is_pdf,
            "file_name": file_name,
        })
    });

    Ok(Json(ExtractResponse {
        text: extraction.text,
        debug,
    }))
}

/// Handler for `POST /api/prompts`: runs the whole pipeline and returns the
/// enhanced prompts.
pub async fn prompts_handler(
    State(app_state): State<AppState>,
    debug_params: Result<Query<DebugParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PromptsResponse>, AppError> {
    let Query(debug_params) = debug_params?;
    let upload = read_upload(multipart?).await?;
    let size = upload.bytes.len();
    let is_pdf = looks_like_pdf(&upload.bytes);
    let file_name = upload.file_name.clone();

    let result = run_pipeline(&app_state, upload).await?;

    let debug = debug_params.gate(|| {
        json!({
            "heuristic": result.heuristic,
            "text_length": result.text_length,
            "bytes": size,
            "looks_like_pdf": is_pdf,
            "file_name": file_name,
        })
    });

    Ok(Json(PromptsResponse {
        count: result.prompts.len(),
        prompts: result.prompts,
        debug,
    }))
}

/// Handler for `POST /api/prompts/export`: runs the pipeline and returns the
/// plain-text export as a download.
pub async fn export_prompts_handler(
    State(app_state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let upload = read_upload(multipart?).await?;
    let result = run_pipeline(&app_state, upload).await?;
    let body = render_export(&result.prompts);
    info!(prompts = result.prompts.len(), "Rendered export document.");

    let disposition = format!("attachment; filename=\"{EXPORT_FILE_NAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

async fn run_pipeline(app_state: &AppState, upload: Upload) -> Result<DocumentPrompts, AppError> {
    let extractor = Arc::clone(&app_state.extractor);
    let enhancer = Arc::clone(&app_state.enhancer);
    let result = tokio::task::spawn_blocking(move || {
        process_document(&upload.bytes, &extractor, &enhancer)
    })
    .await
    .map_err(anyhow::Error::from)??;
    Ok(result)
}
