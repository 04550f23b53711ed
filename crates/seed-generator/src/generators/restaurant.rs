//! Restaurant generator.

use super::fake_data;
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::{CuisineType, Restaurant};

/// Generate one restaurant with the given id.
pub fn restaurant<R: Rng>(rng: &mut R, id: u64) -> Restaurant {
    let name = fake_data::company_name(rng);
    let address = fake_data::address(rng);
    let cuisine = *CuisineType::ALL.choose(rng).unwrap_or(&CuisineType::Italian);
    let opening_hours = format!(
        "{}:00 AM - {}:00 PM",
        rng.gen_range(8..=11),
        rng.gen_range(8..=11)
    );

    Restaurant {
        id,
        name,
        address,
        cuisine,
        opening_hours,
        estimated_delivery_minutes: rng.gen_range(10..=60),
        rating: rng.gen_range(1..=5),
    }
}
