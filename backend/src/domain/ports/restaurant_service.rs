//! Driving port exposed to inbound adapters.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Error, Restaurant, RestaurantDraft, RestaurantId, RestaurantPatch};

/// Business-facing restaurant operations.
///
/// HTTP handlers depend on this trait only, so they stay testable without
/// touching real storage. Not-found conditions surface as
/// [`Error::not_found`]; the service never swallows them.
#[async_trait]
pub trait RestaurantService: Send + Sync {
    /// One page of records, sorted per the request. A page index past the
    /// end of the data yields an empty vector, never an error.
    async fn list(&self, page: PageRequest) -> Result<Vec<Restaurant>, Error>;

    /// Every record, unpaged, in persistence-layer default order.
    async fn list_all(&self) -> Result<Vec<Restaurant>, Error>;

    /// The record with the given identifier, or [`Error::not_found`].
    async fn find_by_id(&self, id: RestaurantId) -> Result<Restaurant, Error>;

    /// The record with the given name, or [`Error::not_found`]. Duplicate
    /// names resolve to the record with the lowest identifier.
    async fn find_by_name(&self, name: &str) -> Result<Restaurant, Error>;

    /// Persist a new record and return it with its assigned identifier.
    async fn create(&self, draft: RestaurantDraft) -> Result<Restaurant, Error>;

    /// Merge `patch` into the stored record and persist the result, or
    /// [`Error::not_found`] when the identifier does not exist.
    async fn update(&self, id: RestaurantId, patch: RestaurantPatch) -> Result<Restaurant, Error>;

    /// Permanently remove the record, or [`Error::not_found`] when the
    /// identifier does not exist.
    async fn delete(&self, id: RestaurantId) -> Result<(), Error>;
}
