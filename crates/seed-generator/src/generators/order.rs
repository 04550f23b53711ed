//! Order generator.
//!
//! Line prices are sampled per line instead of being looked up from the
//! generated menu items, so an order's cost is independent of the menu.

use super::{numeric, timestamp};
use crate::Catalog;
use rand::seq::SliceRandom;
use rand::Rng;
use seed_core::{round_cents, Order, OrderLine, OrderStatus, OrderTotals};
use std::num::NonZeroU64;

/// Tip charged on the food subtotal.
pub const TIP_RATE: f64 = 0.10;

/// Generate one order.
///
/// `user_bound` and `restaurant_bound` are the inclusive upper bounds the
/// owner references are drawn from, uniformly and independently. Nothing
/// checks that a referenced id was actually generated.
pub fn order<R: Rng>(
    catalog: &Catalog,
    rng: &mut R,
    order_number: u64,
    user_bound: NonZeroU64,
    restaurant_bound: NonZeroU64,
) -> Order {
    let line_count = rng.gen_range(1..=5);
    let mut lines = Vec::with_capacity(line_count);
    let mut subtotal = 0.0;

    for _ in 0..line_count {
        let item_name = catalog.pick_dish(rng).to_string();
        let quantity: u32 = rng.gen_range(1..=3);
        let unit_price = numeric::money_range(rng, 5.0, 50.0);
        subtotal += unit_price * f64::from(quantity);
        lines.push(OrderLine {
            item_name,
            quantity,
        });
    }

    // Each amount is rounded on its own; total may be off by a cent.
    let tip = round_cents(subtotal * TIP_RATE);
    let shipping = numeric::money_range(rng, 2.0, 8.0);
    let total = round_cents(subtotal + tip + shipping);

    let date = timestamp::date_string(rng, catalog.today());
    let time = timestamp::time_string(rng);

    let user_id = rng.gen_range(1..=user_bound.get());
    let restaurant_id = rng.gen_range(1..=restaurant_bound.get());

    Order {
        user_id,
        restaurant_id,
        order_number,
        lines,
        totals: OrderTotals {
            tip,
            shipping,
            food: round_cents(subtotal),
            total,
        },
        date,
        time,
        status: *OrderStatus::ALL.choose(rng).unwrap_or(&OrderStatus::Completed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CENT: f64 = 0.01 + 1e-9;

    fn bound(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    #[test]
    fn test_order_lines() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(42);

        for n in 1..=200 {
            let o = order(&catalog, &mut rng, n, bound(15), bound(4));
            assert_eq!(o.order_number, n);
            assert!((1..=5).contains(&o.lines.len()));
            for line in &o.lines {
                assert!((1..=3).contains(&line.quantity));
                assert!(catalog.dish_names().contains(&line.item_name));
            }
        }
    }

    #[test]
    fn test_order_totals_consistent() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(42);

        for n in 1..=500 {
            let t = order(&catalog, &mut rng, n, bound(10), bound(10)).totals;

            assert!((t.tip - round_cents(t.food * TIP_RATE)).abs() <= CENT);
            assert!((t.total - round_cents(t.food + t.tip + t.shipping)).abs() <= CENT);
            assert!((2.0..=8.0).contains(&t.shipping));
            // Smallest order: one line, one unit at 5.00; largest: 5 lines of 3 at 50.00.
            assert!((5.0..=750.0).contains(&t.food));
            for amount in [t.tip, t.shipping, t.food, t.total] {
                assert_eq!(round_cents(amount), amount);
            }
        }
    }

    #[test]
    fn test_owner_references_within_bounds() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(42);

        for n in 1..=300 {
            let o = order(&catalog, &mut rng, n, bound(5), bound(3));
            assert!((1..=5).contains(&o.user_id));
            assert!((1..=3).contains(&o.restaurant_id));
        }
    }

    #[test]
    fn test_single_owner_bound() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);

        let o = order(&catalog, &mut rng, 1, bound(1), bound(1));
        assert_eq!(o.user_id, 1);
        assert_eq!(o.restaurant_id, 1);
    }
}
