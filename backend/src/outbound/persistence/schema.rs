//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/sql/schema.sql` exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Restaurant records.
    ///
    /// `restaurantid` is a `BIGSERIAL` primary key assigned on insert.
    /// `name` is required but carries no uniqueness constraint.
    restaurants (restaurantid) {
        /// Primary key, assigned by the database.
        restaurantid -> Int8,
        /// Restaurant name.
        name -> Varchar,
        /// Street address.
        address -> Nullable<Varchar>,
        /// City.
        city -> Nullable<Varchar>,
        /// State or region.
        state -> Nullable<Varchar>,
        /// Contact telephone number.
        telephone -> Nullable<Varchar>,
    }
}
