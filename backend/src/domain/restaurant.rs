//! Restaurant data model.
//!
//! The entity mirrors the `restaurants` table: a database-assigned numeric
//! identifier, a required name, and a handful of descriptive fields with no
//! behavioural significance. Create and update inputs get their own types so
//! the identifier rules are structural: a [`RestaurantDraft`] cannot carry an
//! identifier, and a [`RestaurantPatch`] can only touch mutable fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable numeric restaurant identifier, assigned by the persistence layer
/// on insert and immutable afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RestaurantId(i64);

impl RestaurantId {
    /// Wrap a raw identifier value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RestaurantId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A persisted restaurant record.
///
/// `name` is required and non-empty but not unique; lookups by name resolve
/// ties deterministically (see the repository port). The descriptive fields
/// are optional free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    /// Database-assigned identifier.
    #[schema(value_type = i64, example = 1)]
    pub restaurantid: RestaurantId,
    /// Restaurant name; required, not unique.
    #[schema(example = "Luigi's")]
    pub name: String,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Contact telephone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

impl Restaurant {
    /// Overwrite this record's fields with those supplied by `patch`.
    ///
    /// Merge semantics: a `Some` field in the patch replaces the stored
    /// value, a `None` field leaves it untouched. The identifier is never
    /// affected.
    pub fn merge(&mut self, patch: RestaurantPatch) {
        let RestaurantPatch {
            name,
            address,
            city,
            state,
            telephone,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(address) = address {
            self.address = Some(address);
        }
        if let Some(city) = city {
            self.city = Some(city);
        }
        if let Some(state) = state {
            self.state = Some(state);
        }
        if let Some(telephone) = telephone {
            self.telephone = Some(telephone);
        }
    }
}

/// Input for creating a restaurant. Has no identifier field: one is assigned
/// by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDraft {
    /// Restaurant name; validated non-empty before the service is invoked.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// Contact telephone number.
    pub telephone: Option<String>,
}

/// Partial update input. Every field is optional; `None` means "keep the
/// stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantPatch {
    /// Replacement name, when supplied.
    pub name: Option<String>,
    /// Replacement street address, when supplied.
    pub address: Option<String>,
    /// Replacement city, when supplied.
    pub city: Option<String>,
    /// Replacement state or region, when supplied.
    pub state: Option<String>,
    /// Replacement telephone number, when supplied.
    pub telephone: Option<String>,
}

impl RestaurantPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.telephone.is_none()
    }
}

/// Column names list endpoints may sort by. Sort keys are validated against
/// this whitelist before reaching the persistence adapter.
pub const SORTABLE_FIELDS: [&str; 6] = [
    "restaurantid",
    "name",
    "address",
    "city",
    "state",
    "telephone",
];

/// Whether `field` names a sortable column.
pub fn is_sortable_field(field: &str) -> bool {
    SORTABLE_FIELDS.contains(&field)
}
