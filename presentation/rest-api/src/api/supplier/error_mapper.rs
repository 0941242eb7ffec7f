use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::supplier::errors::SupplierError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for SupplierError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SupplierError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "supplier.name_empty",
            ),
            SupplierError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "supplier.not_found"),
            SupplierError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
