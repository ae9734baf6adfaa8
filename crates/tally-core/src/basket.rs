//! # Basket
//!
//! The list of products in a cart, and the offer-application algorithm
//! that prices it.
//!
//! ## Offer Application
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  total(offers)                                                          │
//! │                                                                         │
//! │  working copy ◄── clone of basket contents (basket never mutates)      │
//! │                                                                         │
//! │  for each offer, in the given order:                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─► offer.evaluate(working copy)                                      │
//! │  │        │                                                             │
//! │  │        ├── running total += bundle charge                           │
//! │  │        ├── working copy = remainder                                 │
//! │  └────────┴── repeat while a pass removed products                     │
//! │                                                                         │
//! │  grand total = running total + full price of whatever remains          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each offer runs to exhaustion before the next one starts, and the next
//! offer sees the working copy the previous one left behind. The result is
//! greedy and order-dependent: offers over overlapping product codes can
//! total differently under a different order. That is the documented
//! semantic, not a bug; in the typical setup offers target disjoint codes.

use tracing::debug;

use crate::money::Money;
use crate::offer::Offer;
use crate::product::Product;

/// An ordered multiset of products owned by one cart.
///
/// Duplicates are expected (seven pairs of socks is seven entries); order
/// is insertion order and irrelevant to pricing.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    products: Vec<Product>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes all products. The basket itself lives on.
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Current contents, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether the basket holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Total cost of the basket with the given offers applied.
    ///
    /// Pricing operates on a private working copy; the basket's contents
    /// are identical before and after, so it can be priced repeatedly and
    /// inspected afterwards.
    ///
    /// Offers apply left to right, each to exhaustion (one bundle per
    /// pass), against the same shrinking working copy. Whatever survives
    /// every offer - unmatched products, or matches below a threshold -
    /// is charged at full price.
    pub fn total(&self, offers: &[Offer]) -> Money {
        if offers.is_empty() {
            return self.products.iter().map(Product::price).sum();
        }

        let mut working: Vec<Product> = self.products.clone();
        let mut running = Money::zero();

        for offer in offers {
            loop {
                let count_before = working.len();
                let (remaining, bundle_charge) = offer.evaluate(&working);
                running += bundle_charge;
                working = remaining;

                // A pass that removed nothing means the threshold is no
                // longer met; move on to the next offer.
                if working.len() == count_before {
                    break;
                }

                debug!(
                    product_code = offer.product_code(),
                    bundle_charge = %bundle_charge.amount(),
                    remaining = working.len(),
                    "applied offer bundle"
                );
            }
        }

        running + working.iter().map(Product::price).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn product(code: &str, price: Decimal) -> Product {
        Product::new(format!("Product {code}"), code, Money::new(price)).unwrap()
    }

    fn three_for_two(code: &str) -> Offer {
        Offer::new(code, 3, dec!(1)).unwrap()
    }

    fn basket_of(products: Vec<Product>) -> Basket {
        let mut basket = Basket::new();
        for p in products {
            basket.add(p);
        }
        basket
    }

    #[test]
    fn test_no_offers_totals_plain_sum() {
        let basket = basket_of(vec![
            product("P01", dec!(1)),
            product("P01", dec!(1)),
            product("P02", dec!(2.50)),
        ]);
        assert_eq!(basket.total(&[]), Money::new(dec!(4.50)));
    }

    #[test]
    fn test_empty_basket_totals_zero() {
        let basket = Basket::new();
        assert!(basket.total(&[]).is_zero());
        assert!(basket.total(&[three_for_two("P01")]).is_zero());
    }

    #[test]
    fn test_total_never_mutates_the_basket() {
        let contents = vec![product("P01", dec!(1)); 7];
        let basket = basket_of(contents.clone());

        let offers = [three_for_two("P01")];
        basket.total(&offers);
        basket.total(&offers);

        assert_eq!(basket.products(), contents.as_slice());
        // Repricing after inspection still agrees
        assert_eq!(basket.total(&offers), Money::new(dec!(5)));
    }

    #[test]
    fn test_single_bundle() {
        let basket = basket_of(vec![product("P01", dec!(1)); 3]);
        assert_eq!(basket.total(&[three_for_two("P01")]), Money::new(dec!(2)));
    }

    #[test]
    fn test_offer_applies_to_exhaustion() {
        // 7 items, threshold 3: two bundles of 3 charged as 2, one left at
        // full price. 2×2 + 1 = 5.
        let basket = basket_of(vec![product("P01", dec!(1)); 7]);
        assert_eq!(basket.total(&[three_for_two("P01")]), Money::new(dec!(5)));
    }

    #[test]
    fn test_bundle_multiples_property() {
        // 3k matching items at unit price u total k·u·2; 3k+r adds r·u.
        let offer = [three_for_two("P01")];
        let unit = dec!(1.50);
        for k in 1..5u32 {
            for r in 0..3u32 {
                let n = (3 * k + r) as usize;
                let basket = basket_of(vec![product("P01", unit); n]);
                let expected = unit * Decimal::from(2 * k) + unit * Decimal::from(r);
                assert_eq!(
                    basket.total(&offer),
                    Money::new(expected),
                    "n = {n}"
                );
            }
        }
    }

    #[test]
    fn test_unmatched_products_stay_at_full_price() {
        let mut products = vec![product("P01", dec!(1)); 3];
        products.push(product("P02", dec!(10)));
        let basket = basket_of(products);

        assert_eq!(basket.total(&[three_for_two("P01")]), Money::new(dec!(12)));
    }

    #[test]
    fn test_offers_compose_sequentially_on_the_working_copy() {
        // The second offer prices what the first one left behind, not the
        // original basket.
        let mut products = vec![product("S01", dec!(7.95)); 2];
        products.extend(vec![product("J01", dec!(32.95)); 3]);
        let basket = basket_of(products);

        let offers = [
            Offer::new("J01", 2, dec!(0.5)).unwrap(),
            three_for_two("S01"),
        ];

        // Jeans: one bundle of 2 at 32.95×1.5 = 49.425, one left at 32.95.
        // Socks: 2 < 3, below threshold, both at full price 15.90.
        let total = basket.total(&offers);
        assert_eq!(total, Money::new(dec!(98.275)));
    }

    #[test]
    fn test_offer_order_is_left_to_right() {
        // Two offers over the same code: order decides which rule eats the
        // basket first. Both orders are legitimate; left-to-right is the
        // pinned semantic.
        let basket = basket_of(vec![product("P01", dec!(1)); 6]);

        let three = three_for_two("P01"); // bundle of 3 charged as 2
        let two = Offer::new("P01", 2, dec!(1)).unwrap(); // bundle of 2 charged as 1

        // three first: 6 → two bundles of 3 → 4. No items left for two.
        assert_eq!(
            basket.total(&[three.clone(), two.clone()]),
            Money::new(dec!(4))
        );
        // two first: 6 → three bundles of 2 → 3. Nothing left for three.
        assert_eq!(basket.total(&[two, three]), Money::new(dec!(3)));
    }

    #[test]
    fn test_clear_resets_contents() {
        let mut basket = basket_of(vec![product("P01", dec!(1)); 3]);
        assert_eq!(basket.products().len(), 3);

        basket.clear();
        assert!(basket.is_empty());
        assert!(basket.total(&[]).is_zero());
    }
}
