//! Restaurant HTTP handlers.
//!
//! ```text
//! GET    /restaurants/restaurants
//! GET    /restaurants/allrestaurants
//! GET    /restaurants/restaurant/{restaurantid}
//! GET    /restaurants/restaurant/name/{name}
//! POST   /restaurants/restaurant
//! PUT    /restaurants/restaurant/{restaurantid}
//! DELETE /restaurants/restaurant/{restaurantid}
//! ```
//!
//! Handlers translate HTTP input into driving-port calls and map results
//! back to responses; every service failure surfaces through
//! [`crate::inbound::http::error::ApiError`] unchanged.

use actix_web::{HttpRequest, HttpResponse, delete, get, http::header, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, Restaurant, RestaurantDraft, RestaurantId, RestaurantPatch, is_sortable_field,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorDetail;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    Violation, invalid_paging_error, unknown_sort_field_error, violations_error,
};
use pagination::PageRequest;

/// Request payload for creating a restaurant.
///
/// `name` is optional at the serde level so its absence produces a
/// structured violation instead of a bare deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantRequest {
    /// Restaurant name; required, must not be blank.
    pub name: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// Contact telephone number.
    pub telephone: Option<String>,
}

/// Request payload for updating a restaurant. Omitted fields keep their
/// stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRestaurantRequest {
    /// Replacement name; must not be blank when supplied.
    pub name: Option<String>,
    /// Replacement street address.
    pub address: Option<String>,
    /// Replacement city.
    pub city: Option<String>,
    /// Replacement state or region.
    pub state: Option<String>,
    /// Replacement telephone number.
    pub telephone: Option<String>,
}

fn parse_create(body: CreateRestaurantRequest) -> Result<RestaurantDraft, Error> {
    let CreateRestaurantRequest {
        name,
        address,
        city,
        state,
        telephone,
    } = body;

    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        Some(_) => return Err(violations_error(vec![Violation::blank("name")])),
        None => return Err(violations_error(vec![Violation::missing("name")])),
    };

    Ok(RestaurantDraft {
        name,
        address,
        city,
        state,
        telephone,
    })
}

fn parse_update(body: UpdateRestaurantRequest) -> Result<RestaurantPatch, Error> {
    if let Some(name) = &body.name {
        if name.trim().is_empty() {
            return Err(violations_error(vec![Violation::blank("name")]));
        }
    }

    let UpdateRestaurantRequest {
        name,
        address,
        city,
        state,
        telephone,
    } = body;

    Ok(RestaurantPatch {
        name,
        address,
        city,
        state,
        telephone,
    })
}

fn parse_page_request(query: &str) -> Result<PageRequest, Error> {
    let page = PageRequest::from_query(query).map_err(|err| invalid_paging_error(&err))?;
    for key in page.sort() {
        if !is_sortable_field(key.field()) {
            return Err(unknown_sort_field_error(key.field()));
        }
    }
    Ok(page)
}

/// List restaurants one page at a time.
#[utoipa::path(
    get,
    path = "/restaurants/restaurants",
    params(
        ("page" = Option<u32>, Query, description = "Results page to retrieve, 0-based; defaults to 0"),
        ("size" = Option<u32>, Query, description = "Number of records per page; defaults to 5"),
        ("sort" = Option<Vec<String>>, Query,
            description = "Sorting criteria in the format property(,asc|desc). \
                Ascending when the direction is omitted. Repeatable; criteria apply in order."),
    ),
    responses(
        (status = 200, description = "One page of restaurants", body = [Restaurant]),
        (status = 400, description = "Malformed paging or sort parameters", body = ErrorDetail)
    ),
    tags = ["restaurants"],
    operation_id = "listRestaurants"
)]
#[get("/restaurants")]
pub async fn list_restaurants(
    req: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let page = parse_page_request(req.query_string())?;
    let restaurants = state.restaurants.list(page).await?;
    Ok(HttpResponse::Ok().json(restaurants))
}

/// List every restaurant without paging.
#[utoipa::path(
    get,
    path = "/restaurants/allrestaurants",
    responses(
        (status = 200, description = "All restaurants", body = [Restaurant])
    ),
    tags = ["restaurants"],
    operation_id = "listAllRestaurants"
)]
#[get("/allrestaurants")]
pub async fn list_all_restaurants(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let restaurants = state.restaurants.list_all().await?;
    Ok(HttpResponse::Ok().json(restaurants))
}

/// Fetch the restaurant with the given identifier.
#[utoipa::path(
    get,
    path = "/restaurants/restaurant/{restaurantid}",
    params(
        ("restaurantid" = i64, Path, description = "Restaurant identifier", example = 1)
    ),
    responses(
        (status = 200, description = "Restaurant found", body = Restaurant),
        (status = 404, description = "Restaurant not found", body = ErrorDetail)
    ),
    tags = ["restaurants"],
    operation_id = "getRestaurantById"
)]
#[get("/restaurant/{restaurantid}")]
pub async fn get_restaurant_by_id(
    path: web::Path<i64>,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let id = RestaurantId::new(path.into_inner());
    let restaurant = state.restaurants.find_by_id(id).await?;
    Ok(HttpResponse::Ok().json(restaurant))
}

/// Fetch a restaurant by exact name. Duplicate names resolve to the record
/// with the lowest identifier.
#[utoipa::path(
    get,
    path = "/restaurants/restaurant/name/{name}",
    params(
        ("name" = String, Path, description = "Restaurant name", example = "Luigi's")
    ),
    responses(
        (status = 200, description = "Restaurant found", body = Restaurant),
        (status = 404, description = "Restaurant not found", body = ErrorDetail)
    ),
    tags = ["restaurants"],
    operation_id = "getRestaurantByName"
)]
#[get("/restaurant/name/{name}")]
pub async fn get_restaurant_by_name(
    path: web::Path<String>,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let restaurant = state.restaurants.find_by_name(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(restaurant))
}

/// Create a new restaurant. The new record's URI is sent in the `Location`
/// header; the body stays empty.
#[utoipa::path(
    post,
    path = "/restaurants/restaurant",
    request_body = CreateRestaurantRequest,
    responses(
        (
            status = 201,
            description = "Restaurant created",
            headers(("Location" = String, description = "URI of the new restaurant"))
        ),
        (status = 400, description = "Body failed validation", body = ErrorDetail),
        (status = 500, description = "Error creating restaurant", body = ErrorDetail)
    ),
    tags = ["restaurants"],
    operation_id = "addNewRestaurant"
)]
#[post("/restaurant")]
pub async fn add_new_restaurant(
    req: HttpRequest,
    state: web::Data<HttpState>,
    body: web::Json<CreateRestaurantRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create(body.into_inner())?;
    let created = state.restaurants.create(draft).await?;

    let location = format!("{}/{}", req.path(), created.restaurantid);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .finish())
}

/// Update the restaurant with the given identifier. Supplied fields replace
/// the stored values; omitted fields are kept.
#[utoipa::path(
    put,
    path = "/restaurants/restaurant/{restaurantid}",
    params(
        ("restaurantid" = i64, Path, description = "Restaurant identifier", example = 1)
    ),
    request_body = UpdateRestaurantRequest,
    responses(
        (status = 200, description = "Restaurant updated"),
        (status = 400, description = "Body failed validation", body = ErrorDetail),
        (status = 404, description = "Restaurant not found", body = ErrorDetail)
    ),
    tags = ["restaurants"],
    operation_id = "updateRestaurant"
)]
#[put("/restaurant/{restaurantid}")]
pub async fn update_restaurant(
    path: web::Path<i64>,
    state: web::Data<HttpState>,
    body: web::Json<UpdateRestaurantRequest>,
) -> ApiResult<HttpResponse> {
    let patch = parse_update(body.into_inner())?;
    let id = RestaurantId::new(path.into_inner());
    state.restaurants.update(id, patch).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Delete the restaurant with the given identifier.
#[utoipa::path(
    delete,
    path = "/restaurants/restaurant/{restaurantid}",
    params(
        ("restaurantid" = i64, Path, description = "Restaurant identifier", example = 1)
    ),
    responses(
        (status = 200, description = "Restaurant deleted"),
        (status = 404, description = "Restaurant not found", body = ErrorDetail)
    ),
    tags = ["restaurants"],
    operation_id = "deleteRestaurantById"
)]
#[delete("/restaurant/{restaurantid}")]
pub async fn delete_restaurant_by_id(
    path: web::Path<i64>,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let id = RestaurantId::new(path.into_inner());
    state.restaurants.delete(id).await?;
    Ok(HttpResponse::Ok().finish())
}
