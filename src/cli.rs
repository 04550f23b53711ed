//! Command-line definitions.

use clap::{Args, Parser, Subcommand};
use populate_json::GenerateArgs;
use populate_mongodb::{LoadArgs, MongoDBArgs};

#[derive(Parser, Debug)]
#[command(name = "delivery-seed")]
#[command(about = "Generate a synthetic food-delivery dataset and load it into MongoDB")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments of the default generate-then-load run
    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the dataset and write one JSON file per collection
    Generate(GenerateArgs),

    /// Load previously written JSON files into MongoDB
    Load(LoadArgs),

    /// Generate the dataset, then load it
    Run(RunArgs),

    /// Create the query indexes on the loaded collections
    CreateIndexes {
        #[command(flatten)]
        mongo: MongoDBArgs,
    },

    /// Give every loaded restaurant a random location
    Geolocate {
        /// Random seed for the generated points
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        mongo: MongoDBArgs,
    },
}

/// Arguments of a generate-then-load run. Files are loaded from the
/// directory they were written to.
#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Keep loading the remaining collections after one fails
    #[arg(long)]
    pub best_effort: bool,

    /// Load into an in-memory store instead of MongoDB
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub mongo: MongoDBArgs,
}

impl RunArgs {
    /// Load step arguments reading from the generate step's output.
    pub fn load_args(&self) -> LoadArgs {
        LoadArgs {
            input_dir: self.generate.output_dir.clone(),
            best_effort: self.best_effort,
            dry_run: self.dry_run,
            mongo: self.mongo.clone(),
        }
    }
}
