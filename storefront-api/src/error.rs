use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_catalog::CatalogError;
use storefront_core::CustomerError;
use storefront_order::OrderError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::CustomerNotFound(_)
            | OrderError::ProductNotFound
            | OrderError::OrderNotFound(_) => AppError::NotFoundError(err.to_string()),
            OrderError::InsufficientStock { .. } => AppError::ConflictError(err.to_string()),
            OrderError::InvalidRequest(_) => AppError::ValidationError(err.to_string()),
            OrderError::Repository(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::EmailInUse => AppError::ConflictError(err.to_string()),
            CustomerError::Invalid(_) => AppError::ValidationError(err.to_string()),
            CustomerError::Repository(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NameInUse(_) => AppError::ConflictError(err.to_string()),
            CatalogError::Invalid(_) => AppError::ValidationError(err.to_string()),
            CatalogError::Repository(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}
