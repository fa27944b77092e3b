//! Diesel row types bridging the `restaurants` table and the domain model.
//!
//! Kept separate from the domain entity so persistence concerns (borrowed
//! insert values, changeset semantics) never leak into `crate::domain`.

use diesel::prelude::*;

use crate::domain::{Restaurant, RestaurantDraft, RestaurantId};

use super::schema::restaurants;

/// Queryable row for restaurant records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RestaurantRow {
    pub restaurantid: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub telephone: Option<String>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            restaurantid: RestaurantId::new(row.restaurantid),
            name: row.name,
            address: row.address,
            city: row.city,
            state: row.state,
            telephone: row.telephone,
        }
    }
}

/// Insertable row for new restaurants; the identifier comes from the
/// database.
#[derive(Debug, Insertable)]
#[diesel(table_name = restaurants)]
pub(crate) struct NewRestaurantRow<'a> {
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub telephone: Option<&'a str>,
}

impl<'a> From<&'a RestaurantDraft> for NewRestaurantRow<'a> {
    fn from(draft: &'a RestaurantDraft) -> Self {
        Self {
            name: draft.name.as_str(),
            address: draft.address.as_deref(),
            city: draft.city.as_deref(),
            state: draft.state.as_deref(),
            telephone: draft.telephone.as_deref(),
        }
    }
}

/// Full-row changeset used by `replace`. `treat_none_as_null` makes a `None`
/// field clear the column rather than skip it, so the stored row always
/// matches the merged domain entity exactly.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = restaurants)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct RestaurantChangeset<'a> {
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub telephone: Option<&'a str>,
}

impl<'a> From<&'a Restaurant> for RestaurantChangeset<'a> {
    fn from(restaurant: &'a Restaurant) -> Self {
        Self {
            name: restaurant.name.as_str(),
            address: restaurant.address.as_deref(),
            city: restaurant.city.as_deref(),
            state: restaurant.state.as_deref(),
            telephone: restaurant.telephone.as_deref(),
        }
    }
}
