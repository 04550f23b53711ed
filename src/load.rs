//! Load command handler.

use anyhow::Context;
use populate_mongodb::{
    mask_connection_password, FailureMode, LoadArgs, LoadReport, Loader, MemoryStore,
    MongoDBArgs, MongoStore,
};

/// Connect to MongoDB and run the liveness check.
pub async fn connect(args: &MongoDBArgs) -> anyhow::Result<MongoStore> {
    let store = MongoStore::connect(
        args.mongodb_connection_string.as_deref(),
        &args.mongodb_database,
    )
    .await
    .context("Failed to connect to MongoDB")?;
    Ok(store)
}

/// Load every entity file of `args.input_dir`, returning the number of
/// documents inserted.
pub async fn run_load(args: &LoadArgs) -> anyhow::Result<u64> {
    let mode = if args.best_effort {
        FailureMode::BestEffort
    } else {
        FailureMode::FailFast
    };

    let report = if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Loading {} into memory, database '{}' is not touched",
            args.input_dir.display(),
            args.mongo.mongodb_database
        );
        if let Some(uri) = &args.mongo.mongodb_connection_string {
            tracing::info!("[DRY-RUN] Connection: {}", mask_connection_password(uri));
        }
        let store = MemoryStore::new();
        Loader::new(&store)
            .with_failure_mode(mode)
            .load_dir(&args.input_dir)
            .await
    } else {
        let store = connect(&args.mongo).await?;
        Loader::new(&store)
            .with_failure_mode(mode)
            .load_dir(&args.input_dir)
            .await
    };

    finish(report)
}

fn finish(report: LoadReport) -> anyhow::Result<u64> {
    let failed = report.failures().count();
    if failed > 1 {
        for outcome in report.failures() {
            if let Err(err) = &outcome.result {
                tracing::error!("Collection '{}': {}", outcome.collection(), err);
            }
        }
    }

    let attempted = report.outcomes.len();
    let inserted = report
        .into_result()
        .with_context(|| format!("{failed} of {attempted} collections failed to load"))?;

    tracing::info!("Loaded {} documents", inserted);
    Ok(inserted)
}
