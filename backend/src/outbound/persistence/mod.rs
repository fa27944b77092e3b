//! PostgreSQL persistence adapter: pool, schema, rows, and the repository.

mod diesel_restaurant_repository;
mod models;
pub mod pool;
pub(crate) mod schema;

pub use diesel_restaurant_repository::DieselRestaurantRepository;
pub use pool::{DbPool, PoolError, PoolSettings};
