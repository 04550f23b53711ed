//! Immutable generation context shared by every generator.

use chrono::{Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::DISH_NAMES;

/// Error type for catalog construction.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A catalog needs at least one dish name to draw titles from.
    #[error("Dish vocabulary is empty")]
    EmptyVocabulary,
}

/// Vocabulary and reference date handed to the generators.
///
/// "Current year" dates are drawn between January 1st of `today`'s year and
/// `today` itself, so pinning `today` makes date generation reproducible.
#[derive(Debug, Clone)]
pub struct Catalog {
    dish_names: Vec<String>,
    today: NaiveDate,
}

impl Catalog {
    /// Catalog with the built-in dish vocabulary and the given reference date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            dish_names: DISH_NAMES.iter().map(|name| name.to_string()).collect(),
            today,
        }
    }

    /// Catalog with the built-in dish vocabulary, dated today (local time).
    pub fn current() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Catalog with a custom dish vocabulary.
    pub fn with_dish_names<I, S>(dish_names: I, today: NaiveDate) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dish_names: Vec<String> = dish_names.into_iter().map(Into::into).collect();
        if dish_names.is_empty() {
            return Err(CatalogError::EmptyVocabulary);
        }
        Ok(Self { dish_names, today })
    }

    pub fn dish_names(&self) -> &[String] {
        &self.dish_names
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Pick a dish name uniformly at random.
    pub fn pick_dish<R: Rng>(&self, rng: &mut R) -> &str {
        // Never empty: both constructors guarantee at least one name.
        self.dish_names
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
