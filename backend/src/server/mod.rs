//! Server construction and wiring.
//!
//! `build_app` assembles the actix `App` from injected state so integration
//! tests can drive the real routing table with test doubles; `run` wires the
//! production dependencies (pool, repository, service) and starts the
//! listener.

mod config;

pub use config::AppConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::RestaurantDirectoryService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::restaurants::{
    add_new_restaurant, delete_restaurant_by_id, get_restaurant_by_id, get_restaurant_by_name,
    list_all_restaurants, list_restaurants, update_restaurant,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DbPool, DieselRestaurantRepository, PoolSettings};

/// Assemble the application with the given handler state.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/restaurants")
        .service(list_restaurants)
        .service(list_all_restaurants)
        .service(get_restaurant_by_name)
        .service(get_restaurant_by_id)
        .service(add_new_restaurant)
        .service(update_restaurant)
        .service(delete_restaurant_by_id);

    let mut app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Build production dependencies and serve until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let settings =
        PoolSettings::new(&config.database_url).with_max_connections(config.pool_size);
    let pool = DbPool::connect(settings)
        .await
        .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;

    let repository = Arc::new(DieselRestaurantRepository::new(pool));
    let service = Arc::new(RestaurantDirectoryService::new(repository));
    let http_state = web::Data::new(HttpState::new(service));
    let health_state = web::Data::new(HealthState::new());

    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, "restaurant backend listening");
    server.run().await
}
