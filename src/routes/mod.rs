// Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod api;
pub mod auth;

pub fn create_router(app_state: AppState) -> Router {
    // Every API route is guarded by the AuthenticatedUser extractor
    let api_router = Router::new()
        .route("/listings/:domain", get(api::list_listings))
        .route("/listings/:domain/:id", get(api::get_listing))
        .route("/export/:domain", get(api::export_listings))
        .route("/dashboard", get(api::dashboard))
        .route("/rentals/:id/quote", post(api::quote_rental));

    Router::new()
        .route("/login", post(auth::handle_login))
        .route("/logout", post(auth::handle_logout))
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
