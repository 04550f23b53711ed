//! delivery-seed library
//!
//! Generates a synthetic food-delivery dataset (restaurants, users, menu
//! items, orders, reviews), writes it as one JSON file per collection and
//! bulk-loads those files into MongoDB.
//!
//! # Crates
//!
//! - `seed_core` - entity records, categorical vocabularies, collection names
//! - `seed_generator` - per-entity generators and the dataset builder
//! - `populate_json` - JSON file sink
//! - `populate_mongodb` - document store seam, MongoDB loader, index and
//!   location maintenance
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate the baseline dataset, then load it (MONGO_URI from .env)
//! delivery-seed
//!
//! # Deterministic small dataset
//! delivery-seed generate --seed 42 --restaurants 3 --menu-items 4 --users 5 \
//!   --orders 10 --reviews 10 --output-dir files
//!
//! # Load every collection that can be loaded, reporting each failure
//! delivery-seed load --input-dir files --best-effort
//! ```

pub mod cli;
pub mod generate;
pub mod load;
pub mod maintenance;

pub use cli::{Cli, Commands, RunArgs};
pub use generate::run_generate;
pub use load::{connect, run_load};
pub use maintenance::{run_create_indexes, run_geolocate};

use populate_json::PopulateError;
use populate_mongodb::{ErrorCategory, LoadError};

/// Process exit code for a failed command.
///
/// Load errors keep their category's code, file sink errors map to the file
/// category and anything else is unexpected.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(load_err) = err.downcast_ref::<LoadError>() {
        return load_err.exit_code();
    }
    if err.downcast_ref::<PopulateError>().is_some() {
        return ErrorCategory::File.exit_code();
    }
    ErrorCategory::Unexpected.exit_code()
}

/// Run the command selected on the command line.
///
/// Without a subcommand the generate step runs, then the load step reads
/// the files it just wrote.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Generate(args)) => {
            run_generate(&args)?;
        }
        Some(Commands::Load(args)) => {
            run_load(&args).await?;
        }
        Some(Commands::Run(args)) => {
            run_all(&args).await?;
        }
        Some(Commands::CreateIndexes { mongo }) => {
            run_create_indexes(&mongo).await?;
        }
        Some(Commands::Geolocate { seed, mongo }) => {
            run_geolocate(&mongo, seed).await?;
        }
        None => {
            run_all(&cli.run).await?;
        }
    }
    Ok(())
}

/// Generate the dataset, then load the written files.
pub async fn run_all(args: &RunArgs) -> anyhow::Result<u64> {
    run_generate(&args.generate)?;
    run_load(&args.load_args()).await
}
