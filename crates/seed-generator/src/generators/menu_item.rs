//! Menu item generator.

use super::{fake_data, numeric};
use crate::Catalog;
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::{round_cents, MenuCategory, MenuItem};

/// Generate one menu item.
pub fn menu_item<R: Rng>(catalog: &Catalog, rng: &mut R) -> MenuItem {
    let title = catalog.pick_dish(rng).to_string();
    let description = fake_data::sentence(rng);

    let amount = numeric::sample_size(rng, 1, 2, MenuCategory::ALL.len());
    let categories = MenuCategory::ALL
        .choose_multiple(rng, amount)
        .copied()
        .collect();

    MenuItem {
        title,
        description,
        categories,
        unit_price: numeric::money_range(rng, 5.0, 50.0),
        availability: rng.gen_range(0..=100),
        discount: round_cents(rng.gen_range(0.0..=0.5)),
    }
}
