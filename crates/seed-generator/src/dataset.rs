//! Dataset configuration and the in-memory dataset.

use seed_core::{EntityKind, MenuItem, Order, Restaurant, Review, User};

/// How many records of each kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetCounts {
    pub restaurants: u64,
    pub menu_items: u64,
    pub users: u64,
    pub orders: u64,
    pub reviews: u64,
}

impl Default for DatasetCounts {
    fn default() -> Self {
        Self {
            restaurants: 100,
            menu_items: 99,
            users: 15_000,
            orders: 50_000,
            reviews: 30_000,
        }
    }
}

/// Counts plus the id ranges orders and reviews draw their owners from.
///
/// The bounds default to the generated user and restaurant counts. Setting
/// them higher produces references to ids that were never generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetConfig {
    pub counts: DatasetCounts,
    pub user_id_bound: Option<u64>,
    pub restaurant_id_bound: Option<u64>,
}

impl DatasetConfig {
    pub fn new(counts: DatasetCounts) -> Self {
        Self {
            counts,
            user_id_bound: None,
            restaurant_id_bound: None,
        }
    }

    /// Override the upper bound of sampled user references.
    pub fn with_user_id_bound(mut self, bound: u64) -> Self {
        self.user_id_bound = Some(bound);
        self
    }

    /// Override the upper bound of sampled restaurant references.
    pub fn with_restaurant_id_bound(mut self, bound: u64) -> Self {
        self.restaurant_id_bound = Some(bound);
        self
    }

    pub fn effective_user_bound(&self) -> u64 {
        self.user_id_bound.unwrap_or(self.counts.users)
    }

    pub fn effective_restaurant_bound(&self) -> u64 {
        self.restaurant_id_bound.unwrap_or(self.counts.restaurants)
    }
}

/// The five generated collections, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub restaurants: Vec<Restaurant>,
    pub users: Vec<User>,
    pub menu_items: Vec<MenuItem>,
    pub orders: Vec<Order>,
    pub reviews: Vec<Review>,
}

impl Dataset {
    /// Number of records held for the given kind.
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Restaurants => self.restaurants.len(),
            EntityKind::Users => self.users.len(),
            EntityKind::MenuItems => self.menu_items.len(),
            EntityKind::Orders => self.orders.len(),
            EntityKind::Reviews => self.reviews.len(),
        }
    }

    /// Total number of records across all kinds.
    pub fn total_records(&self) -> usize {
        EntityKind::ALL.iter().map(|kind| self.len(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}
