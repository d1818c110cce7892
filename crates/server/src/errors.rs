use animdna_pdf::{ExtractError, PipelineError};
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::multipart::{MultipartError, MultipartRejection};
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Every variant is turned into a JSON `{ "error": ... }` body with a matching
/// HTTP status, so no failure leaks out as a partial success.
#[derive(Debug)]
pub enum AppError {
    /// No file part, or a zero-byte file, was uploaded.
    MissingInput,
    /// The request was refused before the handler ran (bad content type,
    /// missing boundary, malformed query string).
    Rejected { status: StatusCode, message: String },
    /// The multipart body could not be read.
    Multipart(MultipartError),
    /// Text extraction hit an internal fault.
    Extraction(ExtractError),
    /// A later pipeline stage failed.
    Pipeline(PipelineError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::MissingInput => AppError::MissingInput,
            other => AppError::Extraction(other),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Extract(e) => e.into(),
            other => AppError::Pipeline(other),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Multipart(err)
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::MissingInput => (StatusCode::BAD_REQUEST, "No file provided".to_string()),
            AppError::Rejected { status, message } => {
                warn!("Rejected request: {}", message);
                (status, message)
            }
            AppError::Multipart(err) => {
                warn!("Rejected multipart body: {}", err.body_text());
                (err.status(), err.body_text())
            }
            AppError::Extraction(err) => {
                error!("PDF extraction error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract text from PDF".to_string(),
                )
            }
            AppError::Pipeline(err) => {
                error!("Prompt pipeline error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate prompts".to_string(),
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animdna::EnhanceError;

    #[test]
    fn test_missing_input_is_bad_request() {
        let response = AppError::from(ExtractError::MissingInput).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            AppError::from(PipelineError::Extract(ExtractError::MissingInput)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_rejections_keep_their_status() {
        let response = AppError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "nope".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_internal_faults_are_server_errors() {
        let response = AppError::from(ExtractError::Exhausted).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response =
            AppError::from(PipelineError::Enhance(EnhanceError::EmptyPrompt)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
