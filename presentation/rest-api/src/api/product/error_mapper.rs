use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, ValidationErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, response) = match self {
            ProductError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: error.to_string(),
                    errors: error
                        .errors
                        .into_iter()
                        .map(|e| ValidationErrorResponse {
                            context: e.context,
                            message: e.message,
                        })
                        .collect(),
                },
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "Product not found"),
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalError", "repository.persistence"),
            ),
        };

        (status, Json(response))
    }
}
