use axum::{routing::get, Router};

use crate::handlers::product::{
    create_product, delete_product, edit_product_form, get_product, list_products,
    new_product_form, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/new", get(new_product_form))
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(update_product)
                .delete(delete_product),
        )
        .route("/products/{id}/edit", get(edit_product_form))
}
