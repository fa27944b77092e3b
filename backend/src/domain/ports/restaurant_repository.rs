//! Driven port for durable restaurant storage.
//!
//! Adapters map their infrastructure failures into the strongly typed
//! [`RestaurantPersistenceError`] variants instead of returning a catch-all
//! error, so the service layer can translate them predictably.

use async_trait::async_trait;
use pagination::PageRequest;
use thiserror::Error;

use crate::domain::{Restaurant, RestaurantDraft, RestaurantId};

/// Persistence failures raised by [`RestaurantRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestaurantPersistenceError {
    /// The store could not be reached or a connection could not be checked
    /// out.
    #[error("restaurant repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure context.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("restaurant repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure context.
        message: String,
    },
}

impl RestaurantPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for restaurant records.
///
/// Absence is expressed through `Option`/`bool` return values; translating
/// absence into a not-found failure is the service's job, not the adapter's.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Fetch one page of records, honouring the request's sort keys in
    /// order. Pages past the end of the data yield an empty vector.
    async fn find_page(
        &self,
        page: &PageRequest,
    ) -> Result<Vec<Restaurant>, RestaurantPersistenceError>;

    /// Fetch every record in persistence-layer default order.
    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(
        &self,
        id: RestaurantId,
    ) -> Result<Option<Restaurant>, RestaurantPersistenceError>;

    /// Fetch a record by exact name. Names are not unique; when several
    /// records match, the one with the lowest identifier is returned.
    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Restaurant>, RestaurantPersistenceError>;

    /// Insert a new record and return it with its assigned identifier.
    async fn insert(
        &self,
        draft: &RestaurantDraft,
    ) -> Result<Restaurant, RestaurantPersistenceError>;

    /// Overwrite the stored record whose identifier matches
    /// `restaurant.restaurantid`. Returns `false` when no such row exists.
    async fn replace(&self, restaurant: &Restaurant) -> Result<bool, RestaurantPersistenceError>;

    /// Permanently remove the record. Returns `false` when no row was
    /// deleted.
    async fn delete(&self, id: RestaurantId) -> Result<bool, RestaurantPersistenceError>;
}
