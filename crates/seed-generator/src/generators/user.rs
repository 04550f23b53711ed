//! User generator.

use super::{fake_data, numeric};
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::{DietaryPreference, User};

/// Generate one user with the given id.
///
/// Preferences are 1 to 3 distinct entries of the fixed vocabulary.
pub fn user<R: Rng>(rng: &mut R, id: u64) -> User {
    let name = fake_data::person_name(rng);
    let address = fake_data::address(rng);
    let phone = fake_data::phone_number(rng);
    let email = fake_data::email(rng);
    let card_number = fake_data::card_number(rng);

    let amount = numeric::sample_size(rng, 1, 3, DietaryPreference::ALL.len());
    let preferences = DietaryPreference::ALL
        .choose_multiple(rng, amount)
        .copied()
        .collect();

    User {
        id,
        name,
        address,
        phone,
        email,
        card_number,
        preferences,
    }
}
