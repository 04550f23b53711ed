//! Fake personal and business data.

use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

pub fn company_name<R: Rng>(rng: &mut R) -> String {
    CompanyName().fake_with_rng(rng)
}

pub fn person_name<R: Rng>(rng: &mut R) -> String {
    Name().fake_with_rng(rng)
}

/// Postal address on one line, e.g. `"512 Oak Street, Springfield, IL 62704"`.
pub fn address<R: Rng>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateAbbr().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{number} {street}, {city}, {state} {zip}")
}

pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    PhoneNumber().fake_with_rng(rng)
}

pub fn email<R: Rng>(rng: &mut R) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn card_number<R: Rng>(rng: &mut R) -> String {
    CreditCardNumber().fake_with_rng(rng)
}

/// A lorem ipsum sentence of 4 to 9 words.
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    Sentence(4..10).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fake_values_not_empty() {
        let mut rng = StdRng::seed_from_u64(42);

        assert!(!company_name(&mut rng).is_empty());
        assert!(!person_name(&mut rng).is_empty());
        assert!(!phone_number(&mut rng).is_empty());
        assert!(!card_number(&mut rng).is_empty());
        assert!(email(&mut rng).contains('@'));
        assert!(address(&mut rng).contains(", "));
    }

    #[test]
    fn test_sentence_word_count() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let words = sentence(&mut rng).split_whitespace().count();
            assert!((4..10).contains(&words));
        }
    }

    #[test]
    fn test_deterministic_fake_data() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        assert_eq!(person_name(&mut rng1), person_name(&mut rng2));
        assert_eq!(address(&mut rng1), address(&mut rng2));
    }
}
