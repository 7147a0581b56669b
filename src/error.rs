use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// Erreurs renvoyées par les services et les handlers.
/// Le client ne voit jamais le détail d'une erreur BD, seulement le statut HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    /// Champ requis absent (query ou body)
    #[error("{0}")]
    BadRequest(String),

    /// Body bien formé mais qui ne respecte pas le schéma (age < 0, poids <= 0, ...)
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationErrors),

    /// Aucune ligne trouvée / affectée
    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Unauthorized(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => HttpResponse::BadRequest().json(errors),
            AppError::Unauthorized(message) => {
                tracing::debug!(reason = %message, "rejected bearer token");
                HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": message
                }))
            }
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal server error")
            }
            AppError::BadRequest(_) | AppError::NotFound(_) => {
                HttpResponse::build(self.status_code())
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
        }
    }
}
