use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::repository::StorageError;

/// Everything a request can fail with, mapped onto HTTP responses.
///
/// Request validation failures carry one message per broken rule and turn
/// into a 400 with a JSON list body; the remaining variants answer with their
/// display text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("a group named {0} is already registered")]
    DuplicateGroup(String),

    #[error("group {0} does not exist")]
    GroupNotFound(String),

    #[error("payer {payer} is not a member of group {group}")]
    PayerNotMember { group: String, payer: String },

    #[error("storage failure")]
    Storage(#[from] StorageError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::DuplicateGroup(_)
            | AppError::PayerNotMember { .. } => StatusCode::BAD_REQUEST,
            AppError::GroupNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(messages) => HttpResponse::BadRequest().json(messages),
            AppError::Storage(cause) => {
                tracing::error!("storage failure: {}", cause);
                HttpResponse::InternalServerError().body("internal server error")
            }
            _ => HttpResponse::build(self.status_code()).body(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_kind() {
        let validation = AppError::Validation(vec!["group name is required".to_string()]);
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let missing = AppError::GroupNotFound("trip".to_string());
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let duplicate = AppError::DuplicateGroup("trip".to_string());
        assert_eq!(duplicate.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_names_the_group() {
        let err = AppError::GroupNotFound("trip".to_string());
        assert_eq!(err.to_string(), "group trip does not exist");
    }
}
