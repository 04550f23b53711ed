//! Bulk loading of entity files into their collections.

use crate::error::LoadError;
use crate::store::DocumentStore;
use bson::Document;
use seed_core::EntityKind;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What to do after a collection fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Stop at the first failure; later collections are not attempted.
    #[default]
    FailFast,
    /// Attempt every collection and report each outcome.
    BestEffort,
}

/// Decoded content of an entity file.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A JSON array of documents, inserted as one batch.
    Many(Vec<Document>),
    /// A single JSON object, inserted alone.
    One(Document),
}

/// Outcome of loading one collection.
#[derive(Debug)]
pub struct CollectionOutcome {
    pub kind: EntityKind,
    /// Number of documents inserted, or why the collection failed.
    pub result: Result<u64, LoadError>,
}

impl CollectionOutcome {
    pub fn collection(&self) -> &'static str {
        self.kind.collection_name()
    }

    pub fn is_inserted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-collection results of a load run, in attempt order.
///
/// In fail-fast mode collections after the first failure do not appear.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub outcomes: Vec<CollectionOutcome>,
    pub total_duration: Duration,
}

impl LoadReport {
    /// Documents inserted across all successful collections.
    pub fn documents_inserted(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .sum()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CollectionOutcome::is_inserted)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CollectionOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_inserted())
    }

    /// The first failure, if any.
    pub fn first_error(&self) -> Option<&LoadError> {
        self.outcomes
            .iter()
            .find_map(|outcome| outcome.result.as_ref().err())
    }

    /// Turn the report into the total inserted count or the first error.
    pub fn into_result(self) -> Result<u64, LoadError> {
        let mut inserted = 0;
        for outcome in self.outcomes {
            inserted += outcome.result?;
        }
        Ok(inserted)
    }
}

/// Decode an entity file's content.
///
/// Arrays must contain only objects. Anything other than an array or an
/// object is rejected.
pub fn decode_payload(path: &Path, contents: &str) -> Result<Payload, LoadError> {
    let value: Value =
        serde_json::from_str(contents).map_err(|err| LoadError::file(path, err))?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(position, item)| to_document(path, item, Some(position)))
            .collect::<Result<Vec<_>, _>>()
            .map(Payload::Many),
        object @ Value::Object(_) => to_document(path, object, None).map(Payload::One),
        other => Err(LoadError::file(
            path,
            format!("expected an array or an object, found {}", json_type(&other)),
        )),
    }
}

fn to_document(path: &Path, value: Value, position: Option<usize>) -> Result<Document, LoadError> {
    let location = position
        .map(|p| format!("element {p}"))
        .unwrap_or_else(|| "document".to_string());

    match value {
        Value::Object(map) => Document::try_from(map)
            .map_err(|err| LoadError::file(path, format!("{location}: {err}"))),
        other => Err(LoadError::file(
            path,
            format!("{location} is {}, expected an object", json_type(&other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loads the entity files of a directory into a ready store.
///
/// The store must already have passed its liveness check (see
/// [`MongoStore::connect`](crate::MongoStore::connect)).
pub struct Loader<'a> {
    store: &'a dyn DocumentStore,
    mode: FailureMode,
}

impl<'a> Loader<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            store,
            mode: FailureMode::default(),
        }
    }

    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.mode
    }

    /// Read, decode and insert one file into `collection`.
    ///
    /// An empty array inserts nothing and reports 0.
    pub async fn load_file(&self, path: &Path, collection: &str) -> Result<u64, LoadError> {
        debug!("Reading {}", path.display());
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| LoadError::file(path, err))?;

        match decode_payload(path, &contents)? {
            Payload::Many(documents) if documents.is_empty() => {
                warn!("{} holds no documents, nothing to insert", path.display());
                Ok(0)
            }
            Payload::Many(documents) => self.store.insert_many(collection, documents).await,
            Payload::One(document) => self.store.insert_one(collection, document).await,
        }
    }

    /// Load the five entity files of `dir` in collection order.
    pub async fn load_dir(&self, dir: &Path) -> LoadReport {
        let start_time = Instant::now();
        let mut report = LoadReport::default();

        for kind in EntityKind::ALL {
            let path: PathBuf = dir.join(kind.file_name());
            let collection = kind.collection_name();
            let result = self.load_file(&path, collection).await;

            match &result {
                Ok(inserted) => info!(
                    "Data inserted into collection '{}' ({} documents)",
                    collection, inserted
                ),
                Err(err) => warn!("Collection '{}' failed: {}", collection, err),
            }

            let failed = result.is_err();
            report.outcomes.push(CollectionOutcome { kind, result });

            if failed && self.mode == FailureMode::FailFast {
                break;
            }
        }

        report.total_duration = start_time.elapsed();
        info!(
            "Load finished: {} documents in {:?}, {} of {} collections failed",
            report.documents_inserted(),
            report.total_duration,
            report.failures().count(),
            report.outcomes.len()
        );
        report
    }
}
