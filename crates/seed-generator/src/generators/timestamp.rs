//! Date and time generators.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

/// Generate a random date between January 1st of `today`'s year and `today`.
pub fn date_this_year<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    let span = (today - start).num_days();
    start + Duration::days(rng.gen_range(0..=span))
}

/// Generate a random date formatted as `YYYY-MM-DD`.
pub fn date_string<R: Rng>(rng: &mut R, today: NaiveDate) -> String {
    date_this_year(rng, today).format("%Y-%m-%d").to_string()
}

/// Generate a random time of day formatted as `HH:MM:SS`.
pub fn time_string<R: Rng>(rng: &mut R) -> String {
    let seconds: u32 = rng.gen_range(0..86_400);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}
