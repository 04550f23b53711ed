use bson::Document;
use delivery_seed::{exit_code, run_all, run_generate, run_load, RunArgs};
use populate_json::{DatasetCountArgs, GenerateArgs};
use populate_mongodb::{FailureMode, LoadArgs, Loader, MemoryStore, MongoDBArgs};
use seed_core::EntityKind;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn generate_small(dir: &Path, seed: u64) {
    let args = GenerateArgs {
        output_dir: dir.to_path_buf(),
        seed: Some(seed),
        counts: DatasetCountArgs {
            restaurants: 3,
            menu_items: 4,
            users: 5,
            orders: 10,
            reviews: 10,
            user_id_bound: None,
            restaurant_id_bound: None,
        },
    };
    run_generate(&args).unwrap();
}

fn file_documents(dir: &Path, kind: EntityKind) -> Vec<Document> {
    let content = std::fs::read_to_string(dir.join(kind.file_name())).unwrap();
    let items: Vec<serde_json::Map<String, Value>> = serde_json::from_str(&content).unwrap();
    items
        .into_iter()
        .map(|map| Document::try_from(map).unwrap())
        .collect()
}

fn snapshot(dir: &Path) -> Vec<String> {
    EntityKind::ALL
        .iter()
        .map(|kind| std::fs::read_to_string(dir.join(kind.file_name())).unwrap())
        .collect()
}

/// Every collection ends up holding exactly the records of its file.
#[tokio::test]
async fn test_load_matches_files() {
    let temp_dir = TempDir::new().unwrap();
    generate_small(temp_dir.path(), 42);

    let store = MemoryStore::new();
    let report = Loader::new(&store).load_dir(temp_dir.path()).await;
    assert!(report.is_success());
    assert_eq!(report.documents_inserted(), 32);

    for kind in EntityKind::ALL {
        let expected = file_documents(temp_dir.path(), kind);
        let mut stored = store.documents(kind.collection_name());
        assert_eq!(stored.len(), expected.len(), "{kind}");

        for (stored, expected) in stored.iter_mut().zip(&expected) {
            if !expected.contains_key("_id") {
                stored.remove("_id");
            }
            assert_eq!(&*stored, expected, "{kind}");
        }
    }
}

#[tokio::test]
async fn test_best_effort_reports_every_collection() {
    let temp_dir = TempDir::new().unwrap();
    generate_small(temp_dir.path(), 42);
    std::fs::write(temp_dir.path().join("articulos_menu.json"), "not json").unwrap();

    let store = MemoryStore::new();
    let report = Loader::new(&store)
        .with_failure_mode(FailureMode::BestEffort)
        .load_dir(temp_dir.path())
        .await;

    assert_eq!(report.outcomes.len(), 5);
    let failed: Vec<_> = report.failures().map(|o| o.kind).collect();
    assert_eq!(failed, vec![EntityKind::MenuItems]);
    assert_eq!(store.count("ordenes"), 10);
    assert_eq!(store.count("resenas"), 10);
}

#[tokio::test]
async fn test_fail_fast_stops_after_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    generate_small(temp_dir.path(), 42);
    std::fs::write(temp_dir.path().join("articulos_menu.json"), "not json").unwrap();

    let args = LoadArgs {
        input_dir: temp_dir.path().to_path_buf(),
        dry_run: true,
        ..LoadArgs::default()
    };
    let err = run_load(&args).await.unwrap_err();
    assert_eq!(exit_code(&err), 5);

    let store = MemoryStore::new();
    let report = Loader::new(&store).load_dir(temp_dir.path()).await;
    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(store.count("usuarios"), 5);
    assert_eq!(store.count("ordenes"), 0);
}

#[tokio::test]
async fn test_missing_connection_string_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    generate_small(temp_dir.path(), 42);
    let before = snapshot(temp_dir.path());

    let args = LoadArgs {
        input_dir: temp_dir.path().to_path_buf(),
        mongo: MongoDBArgs {
            mongodb_connection_string: None,
            ..MongoDBArgs::default()
        },
        ..LoadArgs::default()
    };
    let err = run_load(&args).await.unwrap_err();

    assert_eq!(exit_code(&err), 3);
    assert_eq!(snapshot(temp_dir.path()), before);
}

#[tokio::test]
async fn test_malformed_connection_string_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    generate_small(temp_dir.path(), 42);
    let before = snapshot(temp_dir.path());

    let args = LoadArgs {
        input_dir: temp_dir.path().to_path_buf(),
        mongo: MongoDBArgs {
            mongodb_connection_string: Some("localhost:27017".to_string()),
            ..MongoDBArgs::default()
        },
        ..LoadArgs::default()
    };
    let err = run_load(&args).await.unwrap_err();

    assert_eq!(exit_code(&err), 3);
    assert_eq!(snapshot(temp_dir.path()), before);
}

#[tokio::test]
async fn test_dry_run_generate_then_load() {
    let temp_dir = TempDir::new().unwrap();

    let mut args = RunArgs::default();
    args.generate.output_dir = temp_dir.path().join("files");
    args.generate.seed = Some(9);
    args.generate.counts.users = 20;
    args.generate.counts.orders = 30;
    args.generate.counts.reviews = 0;
    args.dry_run = true;

    let inserted = run_all(&args).await.unwrap();
    assert_eq!(inserted, 100 + 20 + 99 + 30);
}
