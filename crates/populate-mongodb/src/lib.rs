//! MongoDB loader for the delivery-seed dataset.
//!
//! Reads the entity files written by `populate-json` and bulk-inserts them
//! into the collection of the same name. The store sits behind the
//! [`DocumentStore`] trait so the pipeline runs unchanged against MongoDB
//! ([`MongoStore`]) or in memory ([`MemoryStore`], used by `--dry-run`).
//!
//! ```text
//!  Disconnected ──connect──▶ ConnectionAttempted ──ping ok──▶ Ready
//!                                     │
//!                                     └──error──▶ ConnectFailed
//!
//!  Ready: for each (file, collection)
//!         Pending ──▶ Inserted(n) | InsertFailed(err)
//! ```

pub mod args;
pub mod error;
pub mod geolocate;
pub mod indexes;
pub mod loader;
pub mod logging;
pub mod memory;
pub mod store;

pub use args::{LoadArgs, MongoDBArgs, DEFAULT_DATABASE};
pub use error::{ErrorCategory, LoadError};
pub use geolocate::geolocate_restaurants;
pub use indexes::{create_indexes, default_indexes, IndexSpec};
pub use loader::{decode_payload, CollectionOutcome, FailureMode, LoadReport, Loader, Payload};
pub use logging::mask_connection_password;
pub use memory::MemoryStore;
pub use store::{DocumentStore, MongoStore, CONNECT_TIMEOUT};
