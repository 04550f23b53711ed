//! Data generator for the delivery-seed dataset.
//!
//! This crate provides the per-entity generator functions and the
//! [`DataGenerator`] that drives them across configured counts to build a
//! complete in-memory [`Dataset`].
//!
//! # Architecture
//!
//! ```text
//!   Catalog (dish names, reference date)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - catalog      │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │  generators::{restaurant, user, menu_item, order, review}
//!          ▼
//!    Dataset { restaurants, users, menu_items, orders, reviews }
//! ```
//!
//! Generators never touch global state: the vocabulary and the reference
//! date come from the injected [`Catalog`], randomness from the caller's RNG.
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{Catalog, DataGenerator, DatasetConfig, DatasetCounts};
//!
//! let counts = DatasetCounts {
//!     restaurants: 3,
//!     menu_items: 4,
//!     users: 5,
//!     orders: 10,
//!     reviews: 10,
//! };
//!
//! let mut generator = DataGenerator::new(Catalog::current(), Some(42));
//! let dataset = generator.build(&DatasetConfig::new(counts));
//! assert_eq!(dataset.orders.len(), 10);
//! ```

pub mod catalog;
pub mod dataset;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError};
pub use dataset::{Dataset, DatasetConfig, DatasetCounts};
pub use generator::DataGenerator;
