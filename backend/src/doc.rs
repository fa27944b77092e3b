//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API from the
//! `#[utoipa::path]` metadata on the inbound handlers. The document backs
//! Swagger UI in debug builds and is available to external tooling through
//! the `/api-docs/openapi.json` route.

use utoipa::OpenApi;

use crate::domain::restaurant::{Restaurant, RestaurantId};
use crate::inbound::http::error::ErrorDetail;
use crate::inbound::http::restaurants::{CreateRestaurantRequest, UpdateRestaurantRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Restaurant directory API",
        description = "CRUD HTTP interface over the restaurant directory, \
            with offset paging and multi-key sorting on list queries.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::restaurants::list_restaurants,
        crate::inbound::http::restaurants::list_all_restaurants,
        crate::inbound::http::restaurants::get_restaurant_by_id,
        crate::inbound::http::restaurants::get_restaurant_by_name,
        crate::inbound::http::restaurants::add_new_restaurant,
        crate::inbound::http::restaurants::update_restaurant,
        crate::inbound::http::restaurants::delete_restaurant_by_id,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Restaurant,
        RestaurantId,
        CreateRestaurantRequest,
        UpdateRestaurantRequest,
        ErrorDetail,
    )),
    tags(
        (name = "restaurants", description = "Operations on restaurant records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
