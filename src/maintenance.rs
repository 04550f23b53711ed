//! Index and location maintenance on an already loaded database.

use crate::load::connect;
use populate_mongodb::{create_indexes, geolocate_restaurants, MongoDBArgs};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create the query indexes, returning their names.
pub async fn run_create_indexes(args: &MongoDBArgs) -> anyhow::Result<Vec<String>> {
    let store = connect(args).await?;
    let names = create_indexes(&store).await?;
    for name in &names {
        tracing::debug!("Index ready: {}", name);
    }
    Ok(names)
}

/// Give every loaded restaurant a random location.
pub async fn run_geolocate(args: &MongoDBArgs, seed: Option<u64>) -> anyhow::Result<u64> {
    let store = connect(args).await?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(geolocate_restaurants(&store, &mut rng).await?)
}
