//! Restaurant domain service implementing the driving port.
//!
//! Responsibilities beyond delegation: resolving repository absence into
//! explicit [`Error::not_found`] failures, performing the field-level merge
//! for updates, and translating persistence failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::ports::{RestaurantPersistenceError, RestaurantRepository, RestaurantService};
use crate::domain::{Error, Restaurant, RestaurantDraft, RestaurantId, RestaurantPatch};

/// Repository-backed implementation of [`RestaurantService`].
#[derive(Clone)]
pub struct RestaurantDirectoryService<R> {
    repository: Arc<R>,
}

impl<R> RestaurantDirectoryService<R> {
    /// Create a service backed by the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: RestaurantPersistenceError) -> Error {
    match error {
        RestaurantPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("restaurant repository unavailable: {message}"))
        }
        RestaurantPersistenceError::Query { message } => {
            Error::internal(format!("restaurant repository error: {message}"))
        }
    }
}

fn missing_restaurant(id: RestaurantId) -> Error {
    Error::not_found(format!("restaurant {id} not found"))
}

#[async_trait]
impl<R> RestaurantService for RestaurantDirectoryService<R>
where
    R: RestaurantRepository,
{
    async fn list(&self, page: PageRequest) -> Result<Vec<Restaurant>, Error> {
        self.repository
            .find_page(&page)
            .await
            .map_err(map_persistence_error)
    }

    async fn list_all(&self) -> Result<Vec<Restaurant>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn find_by_id(&self, id: RestaurantId) -> Result<Restaurant, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| missing_restaurant(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Restaurant, Error> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::not_found(format!("restaurant named {name:?} not found")))
    }

    async fn create(&self, draft: RestaurantDraft) -> Result<Restaurant, Error> {
        self.repository
            .insert(&draft)
            .await
            .map_err(map_persistence_error)
    }

    async fn update(&self, id: RestaurantId, patch: RestaurantPatch) -> Result<Restaurant, Error> {
        let mut current = self.find_by_id(id).await?;
        current.merge(patch);

        let replaced = self
            .repository
            .replace(&current)
            .await
            .map_err(map_persistence_error)?;
        // The row can vanish between the read and the write; surface that as
        // the same not-found failure the caller would have seen up front.
        if !replaced {
            return Err(missing_restaurant(id));
        }
        Ok(current)
    }

    async fn delete(&self, id: RestaurantId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !deleted {
            return Err(missing_restaurant(id));
        }
        Ok(())
    }
}
