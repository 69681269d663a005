//! CarVerse marketplace service: listing inventories, the filter evaluator
//! over them, and the JSON routes the marketplace views call.

use axum::extract::FromRef;
use std::sync::Arc;

pub mod auth_middleware;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pricing;
pub mod rental;
pub mod routes;
pub mod seed;
pub mod session;
pub mod store;

use crate::{config::Settings, session::SessionContext, store::Inventory};

// Shared application state handed to every handler
#[derive(Clone, FromRef)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub inventory: Arc<Inventory>,
    pub sessions: SessionContext,
}

impl AppState {
    pub fn new(settings: Settings, inventory: Inventory) -> Self {
        let sessions = SessionContext::new(settings.session_ttl());
        Self {
            settings: Arc::new(settings),
            inventory: Arc::new(inventory),
            sessions,
        }
    }
}
