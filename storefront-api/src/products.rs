use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use storefront_catalog::{CatalogProduct, CreateProduct};
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/products", post(create_product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProduct>,
) -> Result<(StatusCode, Json<CatalogProduct>), AppError> {
    let product = state.create_product_service().execute(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
