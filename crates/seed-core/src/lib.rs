//! Core types for the delivery-seed dataset generator.
//!
//! This crate provides the record types shared by the generator, the
//! JSON file populator and the MongoDB loader:
//!
//! - [`Restaurant`], [`User`], [`MenuItem`], [`Order`], [`Review`] - generated entities
//! - [`CuisineType`], [`DietaryPreference`], [`MenuCategory`], [`OrderStatus`] - closed vocabularies
//! - [`EntityKind`] - the file name and collection name of each entity kind
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator     (fabricates entities)
//!    ├─── populate-json      (writes/reads entity files)
//!    └─── populate-mongodb   (bulk-loads entity files)
//! ```
//!
//! Field names on the wire are the Spanish keys the downstream database
//! expects (`nombre`, `direccion`, `id_usuario`, ...). Rust field names are
//! English and mapped with `serde(rename)`.

pub mod entities;
pub mod kind;
pub mod types;
pub mod vocabulary;

// Re-exports for convenience
pub use entities::{
    GeoPoint, MenuItem, Order, OrderLine, OrderTotals, Restaurant, Review, User,
};
pub use kind::EntityKind;
pub use types::{CuisineType, DietaryPreference, MenuCategory, OrderStatus};
pub use vocabulary::DISH_NAMES;

/// Round a monetary value to 2 decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(12.345_6), 12.35);
        assert_eq!(round_cents(7.0), 7.0);
        assert_eq!(round_cents(0.004), 0.0);
        assert_eq!(round_cents(49.999), 50.0);
    }
}
