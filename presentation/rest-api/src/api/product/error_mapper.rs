use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::SkuEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.sku_empty",
            ),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::InvalidStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_stock",
            ),
            ProductError::InvalidImage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_image",
            ),
            ProductError::SupplierNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.supplier_not_found",
            ),
            ProductError::SkuDuplicated => (
                StatusCode::CONFLICT,
                "Conflict",
                "product.sku_duplicated",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(_) => (
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

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for err in [
            ProductError::NameEmpty,
            ProductError::SkuEmpty,
            ProductError::InvalidPrice,
            ProductError::InvalidStock,
            ProductError::InvalidImage,
            ProductError::SupplierNotFound,
        ] {
            let (status, json) = err.into_error_response();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json.0.name, "ValidationError");
        }
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
