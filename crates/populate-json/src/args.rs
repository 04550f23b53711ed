//! CLI argument definitions for dataset generation.

use crate::populator::DEFAULT_OUTPUT_DIR;
use clap::Args;
use seed_generator::{DatasetConfig, DatasetCounts};
use std::path::PathBuf;

/// How many records of each kind to generate.
#[derive(Args, Clone, Debug)]
pub struct DatasetCountArgs {
    /// Number of restaurants to generate
    #[arg(long, default_value = "100")]
    pub restaurants: u64,

    /// Number of menu items to generate
    #[arg(long, default_value = "99")]
    pub menu_items: u64,

    /// Number of users to generate
    #[arg(long, default_value = "15000")]
    pub users: u64,

    /// Number of orders to generate
    #[arg(long, default_value = "50000")]
    pub orders: u64,

    /// Number of reviews to generate
    #[arg(long, default_value = "30000")]
    pub reviews: u64,

    /// Upper bound of user ids referenced by orders and reviews (default: --users)
    #[arg(long)]
    pub user_id_bound: Option<u64>,

    /// Upper bound of restaurant ids referenced by orders and reviews (default: --restaurants)
    #[arg(long)]
    pub restaurant_id_bound: Option<u64>,
}

impl Default for DatasetCountArgs {
    fn default() -> Self {
        let counts = DatasetCounts::default();
        Self {
            restaurants: counts.restaurants,
            menu_items: counts.menu_items,
            users: counts.users,
            orders: counts.orders,
            reviews: counts.reviews,
            user_id_bound: None,
            restaurant_id_bound: None,
        }
    }
}

impl From<&DatasetCountArgs> for DatasetConfig {
    fn from(args: &DatasetCountArgs) -> Self {
        DatasetConfig {
            counts: DatasetCounts {
                restaurants: args.restaurants,
                menu_items: args.menu_items,
                users: args.users,
                orders: args.orders,
                reviews: args.reviews,
            },
            user_id_bound: args.user_id_bound,
            restaurant_id_bound: args.restaurant_id_bound,
        }
    }
}

/// Arguments of the generate step.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Output directory for the entity files (one file per collection)
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub counts: DatasetCountArgs,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            counts: DatasetCountArgs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_match_default_counts() {
        let config = DatasetConfig::from(&GenerateArgs::default().counts);
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn test_bounds_forwarded() {
        let args = DatasetCountArgs {
            user_id_bound: Some(20),
            ..DatasetCountArgs::default()
        };
        let config = DatasetConfig::from(&args);
        assert_eq!(config.effective_user_bound(), 20);
        assert_eq!(config.effective_restaurant_bound(), 100);
    }
}
