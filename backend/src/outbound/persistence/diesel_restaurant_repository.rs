//! PostgreSQL-backed `RestaurantRepository` implementation using Diesel.
//!
//! A thin translator: domain values in, rows out. Dynamic ordering is built
//! from the page request's sort keys against a fixed set of boxed column
//! expressions; anything not in the whitelist is ignored here because the
//! inbound layer has already rejected it.

use async_trait::async_trait;
use diesel::expression::expression_types::NotSelectable;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageRequest, SortDirection, SortKey};
use tracing::debug;

use crate::domain::ports::{RestaurantPersistenceError, RestaurantRepository};
use crate::domain::{Restaurant, RestaurantDraft, RestaurantId};

use super::models::{NewRestaurantRow, RestaurantChangeset, RestaurantRow};
use super::pool::{DbPool, PoolError};
use super::schema::restaurants;

/// Diesel-backed implementation of the `RestaurantRepository` port.
#[derive(Clone)]
pub struct DieselRestaurantRepository {
    pool: DbPool,
}

impl DieselRestaurantRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RestaurantPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RestaurantPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> RestaurantPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RestaurantPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => RestaurantPersistenceError::query("record not found"),
        _ => RestaurantPersistenceError::query("database error"),
    }
}

/// Boxed ordering expression over the `restaurants` table.
type SortExpression =
    Box<dyn BoxableExpression<restaurants::table, diesel::pg::Pg, SqlType = NotSelectable>>;

macro_rules! sort_column {
    ($column:expr, $ascending:expr) => {
        if $ascending {
            Box::new($column.asc())
        } else {
            Box::new($column.desc())
        }
    };
}

fn sort_expression(key: &SortKey) -> Option<SortExpression> {
    let ascending = matches!(key.direction(), SortDirection::Asc);
    let expression: SortExpression = match key.field() {
        "restaurantid" => sort_column!(restaurants::restaurantid, ascending),
        "name" => sort_column!(restaurants::name, ascending),
        "address" => sort_column!(restaurants::address, ascending),
        "city" => sort_column!(restaurants::city, ascending),
        "state" => sort_column!(restaurants::state, ascending),
        "telephone" => sort_column!(restaurants::telephone, ascending),
        _ => return None,
    };
    Some(expression)
}

#[async_trait]
impl RestaurantRepository for DieselRestaurantRepository {
    async fn find_page(
        &self,
        page: &PageRequest,
    ) -> Result<Vec<Restaurant>, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = restaurants::table
            .select(RestaurantRow::as_select())
            .into_boxed();

        let mut expressions = page.sort().iter().filter_map(sort_expression);
        query = match expressions.next() {
            Some(first) => query.order_by(first),
            // Stable default so consecutive pages never overlap.
            None => {
                let by_id: SortExpression = Box::new(restaurants::restaurantid.asc());
                query.order_by(by_id)
            }
        };
        for expression in expressions {
            query = query.then_order_by(expression);
        }

        let rows: Vec<RestaurantRow> = query
            .offset(page.offset())
            .limit(page.limit())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RestaurantRow> = restaurants::table
            .select(RestaurantRow::as_select())
            .order(restaurants::restaurantid.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn find_by_id(
        &self,
        id: RestaurantId,
    ) -> Result<Option<Restaurant>, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RestaurantRow> = restaurants::table
            .find(id.as_i64())
            .select(RestaurantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Restaurant::from))
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Restaurant>, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Names are not unique; the lowest identifier is the documented
        // tie-break.
        let row: Option<RestaurantRow> = restaurants::table
            .filter(restaurants::name.eq(name))
            .order(restaurants::restaurantid.asc())
            .select(RestaurantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Restaurant::from))
    }

    async fn insert(
        &self,
        draft: &RestaurantDraft,
    ) -> Result<Restaurant, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: RestaurantRow = diesel::insert_into(restaurants::table)
            .values(NewRestaurantRow::from(draft))
            .returning(RestaurantRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Restaurant::from(row))
    }

    async fn replace(&self, restaurant: &Restaurant) -> Result<bool, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(restaurants::table.find(restaurant.restaurantid.as_i64()))
            .set(RestaurantChangeset::from(restaurant))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool, RestaurantPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(restaurants::table.find(id.as_i64()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
