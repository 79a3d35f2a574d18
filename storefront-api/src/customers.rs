use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use storefront_core::{CreateCustomer, Customer};
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/customers", post(create_customer))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomer>,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let customer = state.create_customer_service().execute(req).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}
