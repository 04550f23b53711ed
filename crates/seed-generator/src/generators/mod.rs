//! Per-entity generators.
//!
//! Every generator is a pure function of the caller's RNG, the identifying
//! arguments it needs and, for the ones drawing dish names or dates, the
//! injected [`Catalog`](crate::Catalog). None of them performs I/O or fails.

pub mod fake_data;
pub mod location;
pub mod menu_item;
pub mod numeric;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod timestamp;
pub mod user;

pub use location::geo_point;
pub use menu_item::menu_item;
pub use order::order;
pub use restaurant::restaurant;
pub use review::review;
pub use user::user;
