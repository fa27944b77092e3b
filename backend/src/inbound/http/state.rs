//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the driving port and stay testable without real storage behind them.

use std::sync::Arc;

use crate::domain::ports::RestaurantService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Restaurant operations driving port.
    pub restaurants: Arc<dyn RestaurantService>,
}

impl HttpState {
    /// Bundle the given port implementation.
    pub fn new(restaurants: Arc<dyn RestaurantService>) -> Self {
        Self { restaurants }
    }
}
