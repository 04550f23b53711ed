//! Main data generator for producing the dataset.

use crate::dataset::{Dataset, DatasetConfig};
use crate::generators;
use crate::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{MenuItem, Order, Restaurant, Review, User};
use std::num::NonZeroU64;
use tracing::{info, warn};

/// Data generator that drives the entity generators.
///
/// With a seed the output is reproducible across runs with the same seed
/// and catalog. Without one the RNG is seeded from the operating system.
pub struct DataGenerator {
    /// Vocabulary and reference date
    catalog: Catalog,
    /// Random number generator shared by every generator call
    rng: StdRng,
    seed: Option<u64>,
}

impl DataGenerator {
    /// Create a new data generator with the given catalog and optional seed.
    pub fn new(catalog: Catalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { catalog, rng, seed }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn restaurant(&mut self, id: u64) -> Restaurant {
        generators::restaurant(&mut self.rng, id)
    }

    pub fn user(&mut self, id: u64) -> User {
        generators::user(&mut self.rng, id)
    }

    pub fn menu_item(&mut self) -> MenuItem {
        generators::menu_item(&self.catalog, &mut self.rng)
    }

    pub fn order(
        &mut self,
        order_number: u64,
        user_bound: NonZeroU64,
        restaurant_bound: NonZeroU64,
    ) -> Order {
        generators::order(
            &self.catalog,
            &mut self.rng,
            order_number,
            user_bound,
            restaurant_bound,
        )
    }

    /// Generate a review with owner ids drawn uniformly from `1..=bound`.
    pub fn sampled_review(&mut self, user_bound: NonZeroU64, restaurant_bound: NonZeroU64) -> Review {
        let user_id = self.rng.gen_range(1..=user_bound.get());
        let restaurant_id = self.rng.gen_range(1..=restaurant_bound.get());
        generators::review(&self.catalog, &mut self.rng, user_id, restaurant_id)
    }

    /// Build the whole dataset in memory.
    ///
    /// Restaurants and users get sequential ids from 1. Orders and reviews
    /// are skipped, with a warning, when either reference bound is zero.
    pub fn build(&mut self, config: &DatasetConfig) -> Dataset {
        let counts = config.counts;
        let mut dataset = Dataset::default();

        info!("Generating {} restaurants", counts.restaurants);
        dataset.restaurants = (1..=counts.restaurants)
            .map(|id| self.restaurant(id))
            .collect();

        info!("Generating {} users", counts.users);
        dataset.users = (1..=counts.users).map(|id| self.user(id)).collect();

        info!("Generating {} menu items", counts.menu_items);
        dataset.menu_items = (0..counts.menu_items).map(|_| self.menu_item()).collect();

        let bounds = (
            NonZeroU64::new(config.effective_user_bound()),
            NonZeroU64::new(config.effective_restaurant_bound()),
        );
        match bounds {
            (Some(user_bound), Some(restaurant_bound)) => {
                info!("Generating {} orders", counts.orders);
                dataset.orders = (1..=counts.orders)
                    .map(|number| self.order(number, user_bound, restaurant_bound))
                    .collect();

                info!("Generating {} reviews", counts.reviews);
                dataset.reviews = (0..counts.reviews)
                    .map(|_| self.sampled_review(user_bound, restaurant_bound))
                    .collect();
            }
            _ => {
                if counts.orders > 0 || counts.reviews > 0 {
                    warn!(
                        "Skipping {} orders and {} reviews: user bound {} / restaurant bound {} leave no id to reference",
                        counts.orders,
                        counts.reviews,
                        config.effective_user_bound(),
                        config.effective_restaurant_bound()
                    );
                }
            }
        }

        info!(
            "Dataset generated: {} records in total",
            dataset.total_records()
        );
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatasetCounts;
    use chrono::NaiveDate;
    use seed_core::EntityKind;

    fn catalog() -> Catalog {
        Catalog::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    fn small_counts() -> DatasetCounts {
        DatasetCounts {
            restaurants: 3,
            menu_items: 4,
            users: 5,
            orders: 10,
            reviews: 10,
        }
    }

    #[test]
    fn test_build_counts() {
        let mut generator = DataGenerator::new(catalog(), Some(42));
        let dataset = generator.build(&DatasetConfig::new(small_counts()));

        assert_eq!(dataset.len(EntityKind::Restaurants), 3);
        assert_eq!(dataset.len(EntityKind::MenuItems), 4);
        assert_eq!(dataset.len(EntityKind::Users), 5);
        assert_eq!(dataset.len(EntityKind::Orders), 10);
        assert_eq!(dataset.len(EntityKind::Reviews), 10);
    }

    #[test]
    fn test_sequential_ids() {
        let mut generator = DataGenerator::new(catalog(), Some(42));
        let dataset = generator.build(&DatasetConfig::new(small_counts()));

        let restaurant_ids: Vec<u64> = dataset.restaurants.iter().map(|r| r.id).collect();
        assert_eq!(restaurant_ids, vec![1, 2, 3]);

        let user_ids: Vec<u64> = dataset.users.iter().map(|u| u.id).collect();
        assert_eq!(user_ids, vec![1, 2, 3, 4, 5]);

        let order_numbers: Vec<u64> = dataset.orders.iter().map(|o| o.order_number).collect();
        assert_eq!(order_numbers, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_references_within_counts() {
        let mut generator = DataGenerator::new(catalog(), Some(42));
        let dataset = generator.build(&DatasetConfig::new(small_counts()));

        for order in &dataset.orders {
            assert!((1..=5).contains(&order.user_id));
            assert!((1..=3).contains(&order.restaurant_id));
        }
        for review in &dataset.reviews {
            assert!((1..=5).contains(&review.user_id));
            assert!((1..=3).contains(&review.restaurant_id));
        }
    }

    #[test]
    fn test_loose_reference_bounds() {
        let mut generator = DataGenerator::new(catalog(), Some(42));
        let config = DatasetConfig::new(DatasetCounts {
            orders: 200,
            ..small_counts()
        })
        .with_user_id_bound(1_000);
        let dataset = generator.build(&config);

        assert!(dataset.orders.iter().all(|o| (1..=1_000).contains(&o.user_id)));
        // With 200 draws over 1000 ids, some reference a user that was never generated.
        assert!(dataset.orders.iter().any(|o| o.user_id > 5));
    }

    #[test]
    fn test_deterministic_generation() {
        let config = DatasetConfig::new(small_counts());

        let dataset1 = DataGenerator::new(catalog(), Some(42)).build(&config);
        let dataset2 = DataGenerator::new(catalog(), Some(42)).build(&config);

        assert_eq!(dataset1, dataset2);
    }

    #[test]
    fn test_zero_counts() {
        let mut generator = DataGenerator::new(catalog(), Some(42));
        let config = DatasetConfig::new(DatasetCounts {
            restaurants: 0,
            menu_items: 0,
            users: 0,
            orders: 10,
            reviews: 10,
        });
        let dataset = generator.build(&config);

        assert!(dataset.is_empty());
    }

    #[test]
    fn test_zero_population_with_explicit_bounds() {
        let mut generator = DataGenerator::new(catalog(), Some(42));
        let config = DatasetConfig::new(DatasetCounts {
            restaurants: 0,
            menu_items: 0,
            users: 0,
            orders: 4,
            reviews: 2,
        })
        .with_user_id_bound(8)
        .with_restaurant_id_bound(2);
        let dataset = generator.build(&config);

        assert_eq!(dataset.orders.len(), 4);
        assert_eq!(dataset.reviews.len(), 2);
    }

    #[test]
    fn test_unseeded_generator() {
        let mut generator = DataGenerator::new(catalog(), None);
        assert_eq!(generator.seed(), None);

        let restaurant = generator.restaurant(1);
        assert_eq!(restaurant.id, 1);
    }
}
