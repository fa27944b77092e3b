//! Domain types, ports, and services.
//!
//! Purpose: define the restaurant entity and its operations independently of
//! HTTP and storage. Inbound adapters call the driving port
//! ([`ports::RestaurantService`]); outbound adapters implement the driven
//! port ([`ports::RestaurantRepository`]).
//!
//! Public surface:
//! - [`Restaurant`], [`RestaurantDraft`], [`RestaurantPatch`],
//!   [`RestaurantId`] — the data model.
//! - [`Error`] / [`ErrorCode`] — transport-agnostic failure payload.
//! - [`RestaurantDirectoryService`] — repository-backed service.

pub mod error;
pub mod ports;
pub mod restaurant;
mod restaurant_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::restaurant::{
    Restaurant, RestaurantDraft, RestaurantId, RestaurantPatch, SORTABLE_FIELDS,
    is_sortable_field,
};
pub use self::restaurant_service::RestaurantDirectoryService;
