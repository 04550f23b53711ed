//! Generate command handler.

use anyhow::Context;
use populate_json::{GenerateArgs, JsonFilePopulator, PopulateMetrics};
use seed_generator::{Catalog, DataGenerator, DatasetConfig};

/// Build the dataset in memory and write one JSON file per collection.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<PopulateMetrics> {
    let config = DatasetConfig::from(&args.counts);

    match args.seed {
        Some(seed) => tracing::info!("Generating dataset (seed={})", seed),
        None => tracing::info!("Generating dataset (unseeded)"),
    }

    let dataset = DataGenerator::new(Catalog::current(), args.seed).build(&config);

    JsonFilePopulator::new(&args.output_dir)
        .write_dataset(&dataset)
        .with_context(|| format!("Failed to save files into {:?}", args.output_dir))
}
