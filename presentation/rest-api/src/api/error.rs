use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// One violated rule of an aggregate validation failure.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ValidationErrorResponse {
    pub context: String,
    pub message: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Individual validation failures, in the order they were detected
    #[oai(skip_serializing_if_is_empty)]
    pub errors: Vec<ValidationErrorResponse>,
}

impl ErrorResponse {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
