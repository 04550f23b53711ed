//! Review generator.

use super::{fake_data, timestamp};
use crate::Catalog;
use rand::Rng;
use seed_core::Review;

/// Generate one review for the given user and restaurant.
///
/// The caller decides how the ids are sampled.
pub fn review<R: Rng>(catalog: &Catalog, rng: &mut R, user_id: u64, restaurant_id: u64) -> Review {
    Review {
        user_id,
        restaurant_id,
        rating: rng.gen_range(1..=5),
        comment: fake_data::sentence(rng),
        date: timestamp::date_string(rng, catalog.today()),
    }
}
