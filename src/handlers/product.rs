// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::instrument;

use crate::dtos::product::{ProductParams, ProductPayload, ProductResponse};
use crate::error::AppError;
use crate::format::ResponseFormat;
use crate::models::product::Product;
use crate::state::AppState;
use crate::store::ProductStore;
use crate::views;

// Identifier-resolution guard shared by the actions that render an
// existing product. Update and destroy get the same short-circuit from
// their single-query store calls.
async fn load_product(store: &dyn ProductStore, id: i64) -> Result<Product, AppError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))
}

// GET /products - List all products
#[instrument(skip(state))]
pub async fn list_products(
    format: ResponseFormat,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let products = state.store.list().await?;
    Ok(match format {
        ResponseFormat::Json => {
            let response: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            Json(response).into_response()
        }
        ResponseFormat::Html => Html(views::product::index_page(&products)).into_response(),
    })
}

// GET /products/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    format: ResponseFormat,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let product = load_product(state.store.as_ref(), id).await?;
    Ok(match format {
        ResponseFormat::Json => Json(ProductResponse::from(product)).into_response(),
        ResponseFormat::Html => Html(views::product::show_page(&product)).into_response(),
    })
}

// GET /products/new - Blank product template
#[instrument]
pub async fn new_product_form(format: ResponseFormat) -> Response {
    match format {
        ResponseFormat::Json => Json(ProductParams::default()).into_response(),
        ResponseFormat::Html => Html(views::product::new_page()).into_response(),
    }
}

// GET /products/{id}/edit - Prefilled edit form
#[instrument(skip(state))]
pub async fn edit_product_form(
    Path(id): Path<i64>,
    format: ResponseFormat,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let product = load_product(state.store.as_ref(), id).await?;
    Ok(match format {
        ResponseFormat::Json => Json(ProductResponse::from(product)).into_response(),
        ResponseFormat::Html => Html(views::product::edit_page(&product)).into_response(),
    })
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let new_product = payload.product.into_new()?;
    let product = state.store.insert(new_product).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PATCH/PUT /products/{id} - Update product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductResponse>, AppError> {
    let changes = payload.product.into_changes()?;
    let product = state
        .store
        .update(id, changes)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/{id} - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::not_found("Product not found"));
    }
    Ok(Json(()))
}
