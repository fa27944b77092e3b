//! End-to-end tests for the restaurant REST surface.
//!
//! The real routing table, handlers, and domain service run against an
//! in-memory repository adapter, so every assertion exercises the same code
//! paths production requests take short of the database itself.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use actix_web::http::{StatusCode, header};
use actix_web::{test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use backend::domain::ports::{RestaurantPersistenceError, RestaurantRepository};
use backend::domain::{Restaurant, RestaurantDirectoryService, RestaurantDraft, RestaurantId};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::build_app;
use pagination::{PageRequest, SortDirection};

#[derive(Default)]
struct MemoryState {
    rows: BTreeMap<i64, Restaurant>,
    next_id: i64,
}

/// In-memory stand-in for the Diesel adapter.
#[derive(Default)]
struct MemoryRestaurantRepository {
    state: Mutex<MemoryState>,
}

impl MemoryRestaurantRepository {
    fn field_value(restaurant: &Restaurant, field: &str) -> Option<String> {
        match field {
            "restaurantid" => Some(restaurant.restaurantid.to_string()),
            "name" => Some(restaurant.name.clone()),
            "address" => restaurant.address.clone(),
            "city" => restaurant.city.clone(),
            "state" => restaurant.state.clone(),
            "telephone" => restaurant.telephone.clone(),
            _ => None,
        }
    }
}

#[async_trait]
impl RestaurantRepository for MemoryRestaurantRepository {
    async fn find_page(
        &self,
        page: &PageRequest,
    ) -> Result<Vec<Restaurant>, RestaurantPersistenceError> {
        let state = self.state.lock().expect("state lock");
        let mut rows: Vec<Restaurant> = state.rows.values().cloned().collect();
        for key in page.sort().iter().rev() {
            rows.sort_by(|a, b| {
                let ordering =
                    Self::field_value(a, key.field()).cmp(&Self::field_value(b, key.field()));
                match key.direction() {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        Ok(rows
            .into_iter()
            .skip(usize::try_from(page.offset()).expect("offset fits usize"))
            .take(page.size() as usize)
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: RestaurantId,
    ) -> Result<Option<Restaurant>, RestaurantPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.rows.get(&id.as_i64()).cloned())
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Restaurant>, RestaurantPersistenceError> {
        let state = self.state.lock().expect("state lock");
        // Iteration order is ascending by key, so the first hit carries the
        // lowest identifier.
        Ok(state
            .rows
            .values()
            .find(|restaurant| restaurant.name == name)
            .cloned())
    }

    async fn insert(
        &self,
        draft: &RestaurantDraft,
    ) -> Result<Restaurant, RestaurantPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        state.next_id += 1;
        let id = state.next_id;
        let restaurant = Restaurant {
            restaurantid: RestaurantId::new(id),
            name: draft.name.clone(),
            address: draft.address.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            telephone: draft.telephone.clone(),
        };
        state.rows.insert(id, restaurant.clone());
        Ok(restaurant)
    }

    async fn replace(&self, restaurant: &Restaurant) -> Result<bool, RestaurantPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        let id = restaurant.restaurantid.as_i64();
        if !state.rows.contains_key(&id) {
            return Ok(false);
        }
        state.rows.insert(id, restaurant.clone());
        Ok(true)
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool, RestaurantPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        Ok(state.rows.remove(&id.as_i64()).is_some())
    }
}

fn test_state() -> (web::Data<HttpState>, web::Data<HealthState>) {
    let repository = Arc::new(MemoryRestaurantRepository::default());
    let service = Arc::new(RestaurantDirectoryService::new(repository));
    (
        web::Data::new(HttpState::new(service)),
        web::Data::new(HealthState::new()),
    )
}

macro_rules! spawn_app {
    () => {{
        let (http_state, health_state) = test_state();
        test::init_service(build_app(http_state, health_state)).await
    }};
}

macro_rules! send {
    ($app:expr, $request:expr) => {
        test::call_service($app, $request.to_request()).await
    };
}

#[actix_web::test]
async fn creating_a_restaurant_returns_201_with_its_location() {
    let app = spawn_app!();

    let response = send!(
        &app,
        test::TestRequest::post()
            .uri("/restaurants/restaurant")
            .set_json(json!({ "name": "Luigi's", "city": "Portland" }))
    );
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .expect("ascii header");
    assert_eq!(location, "/restaurants/restaurant/1");
    let body = test::read_body(response).await;
    assert!(body.is_empty(), "create responds with an empty body");

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurant/1")
    );
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["restaurantid"], 1);
    assert_eq!(body["name"], "Luigi's");
    assert_eq!(body["city"], "Portland");
}

#[actix_web::test]
async fn fetching_an_unknown_id_returns_an_error_detail() {
    let app = spawn_app!();

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurant/9999")
    );
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], 404);
    assert!(
        body["message"]
            .as_str()
            .expect("message string")
            .contains("9999")
    );
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn deleting_then_fetching_returns_404() {
    let app = spawn_app!();
    send!(
        &app,
        test::TestRequest::post()
            .uri("/restaurants/restaurant")
            .set_json(json!({ "name": "Luigi's" }))
    );

    let response = send!(
        &app,
        test::TestRequest::delete().uri("/restaurants/restaurant/1")
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert!(test::read_body(response).await.is_empty());

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurant/1")
    );
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_an_unknown_id_returns_404() {
    let app = spawn_app!();

    let response = send!(
        &app,
        test::TestRequest::delete().uri("/restaurants/restaurant/5")
    );
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn updating_merges_supplied_fields_into_the_stored_record() {
    let app = spawn_app!();
    send!(
        &app,
        test::TestRequest::post().uri("/restaurants/restaurant").set_json(json!({
            "name": "Luigi's",
            "address": "100 Pine St",
            "city": "Portland"
        }))
    );

    let response = send!(
        &app,
        test::TestRequest::put()
            .uri("/restaurants/restaurant/1")
            .set_json(json!({ "city": "Salem" }))
    );
    assert_eq!(response.status(), StatusCode::OK);
    assert!(test::read_body(response).await.is_empty());

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurant/1")
    );
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["name"], "Luigi's");
    assert_eq!(body["address"], "100 Pine St");
    assert_eq!(body["city"], "Salem");
}

#[actix_web::test]
async fn updating_an_unknown_id_returns_404() {
    let app = spawn_app!();

    let response = send!(
        &app,
        test::TestRequest::put()
            .uri("/restaurants/restaurant/9999")
            .set_json(json!({ "name": "Nobody" }))
    );
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn paged_listing_clips_the_page_and_sorts_by_name() {
    let app = spawn_app!();
    for name in ["Zoe's", "Arno's", "Mika's"] {
        send!(
            &app,
            test::TestRequest::post()
                .uri("/restaurants/restaurant")
                .set_json(json!({ "name": name }))
        );
    }

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurants?page=0&size=2&sort=name,asc")
    );
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|entry| entry["name"].as_str().expect("name string"))
        .collect();
    assert_eq!(names, ["Arno's", "Mika's"]);

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurants?page=7&size=2")
    );
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.as_array().expect("array body").len(), 0);

    let response = send!(&app, test::TestRequest::get().uri("/restaurants/allrestaurants"));
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body.as_array().expect("array body").len(), 3);
}

#[actix_web::test]
async fn blank_names_are_rejected_with_a_violation_list() {
    let app = spawn_app!();

    let response = send!(
        &app,
        test::TestRequest::post()
            .uri("/restaurants/restaurant")
            .set_json(json!({ "name": "   " }))
    );
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["details"]["violations"][0]["field"], "name");
    assert_eq!(body["details"]["violations"][0]["code"], "blank_field");
}

#[actix_web::test]
async fn missing_names_are_rejected_with_a_violation_list() {
    let app = spawn_app!();

    let response = send!(
        &app,
        test::TestRequest::post()
            .uri("/restaurants/restaurant")
            .set_json(json!({ "city": "Portland" }))
    );
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["details"]["violations"][0]["code"], "missing_field");
}

#[actix_web::test]
async fn unknown_sort_fields_are_rejected_before_the_service_runs() {
    let app = spawn_app!();

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurants?sort=menus,asc")
    );
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["details"]["code"], "unknown_sort_field");
}

#[actix_web::test]
async fn name_lookup_prefers_the_lowest_identifier() {
    let app = spawn_app!();
    for _ in 0..2 {
        send!(
            &app,
            test::TestRequest::post()
                .uri("/restaurants/restaurant")
                .set_json(json!({ "name": "Twins" }))
        );
    }

    let response = send!(
        &app,
        test::TestRequest::get().uri("/restaurants/restaurant/name/Twins")
    );
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["restaurantid"], 1);
}

#[actix_web::test]
async fn health_probes_reflect_readiness() {
    let (http_state, health_state) = test_state();
    let app = test::init_service(build_app(http_state, health_state.clone())).await;

    let response = send!(&app, test::TestRequest::get().uri("/health/live"));
    assert_eq!(response.status(), StatusCode::OK);

    let response = send!(&app, test::TestRequest::get().uri("/health/ready"));
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    health_state.mark_ready();
    let response = send!(&app, test::TestRequest::get().uri("/health/ready"));
    assert_eq!(response.status(), StatusCode::OK);
}
