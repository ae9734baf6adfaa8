//! # Offer
//!
//! A single quantity-discount rule over one product code.
//!
//! ## The Bundle Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Offer { code: "J01", threshold: 3, discount_in_units: 1 }             │
//! │                                                                         │
//! │  "every 3 units of J01 cost as if only 2 were bought"                  │
//! │                                                                         │
//! │  evaluate([J01, J01, J01, J01, B01])                                   │
//! │       │                                                                 │
//! │       ├── matches: 4 ≥ threshold 3 → one bundle consumed               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  remaining: [J01, B01]     bundle cost: price(J01) × (3 − 1)           │
//! │                                                                         │
//! │  ONE bundle per call. The caller loops until a pass removes nothing,   │
//! │  so leftover matches below the threshold stay at full price.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `discount_in_units` may be fractional: 0.5 on a threshold of 2 is
//! "buy one, get the second half price".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::product::Product;

/// A quantity-discount rule: every `threshold` units of one product cost
/// as if only `threshold − discount_in_units` units were bought.
///
/// Immutable after construction; all numeric and relational constraints
/// are enforced by [`Offer::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OfferConfig")]
pub struct Offer {
    product_code: String,
    threshold: u32,
    discount_in_units: Decimal,
}

/// Raw config shape; conversion routes through [`Offer::new`] so a
/// deserialized offer satisfies the same relational constraints as a
/// constructed one.
#[derive(Deserialize)]
struct OfferConfig {
    product_code: String,
    threshold: u32,
    discount_in_units: Decimal,
}

impl TryFrom<OfferConfig> for Offer {
    type Error = PricingError;

    fn try_from(config: OfferConfig) -> PricingResult<Self> {
        Offer::new(config.product_code, config.threshold, config.discount_in_units)
    }
}

impl Offer {
    /// Creates an offer.
    ///
    /// ## Errors
    /// `InvalidArgument` when:
    /// - `threshold` < 2 (a one-item "bundle" is not an offer)
    /// - `discount_in_units` ≤ 0
    /// - `discount_in_units` ≥ `threshold` (the bundle must still cost
    ///   something)
    pub fn new(
        product_code: impl Into<String>,
        threshold: u32,
        discount_in_units: Decimal,
    ) -> PricingResult<Self> {
        if threshold < 2 {
            return Err(PricingError::invalid_argument(
                "An Offer's threshold must be a positive integer greater than one.",
            ));
        }
        if discount_in_units <= Decimal::ZERO {
            return Err(PricingError::invalid_argument(
                "An Offer's discount_in_units must be a positive number.",
            ));
        }
        if discount_in_units >= Decimal::from(threshold) {
            return Err(PricingError::invalid_argument(
                "An Offer's discount_in_units must be less than the threshold.",
            ));
        }

        Ok(Offer {
            product_code: product_code.into(),
            threshold,
            discount_in_units,
        })
    }

    /// Code of the product this offer applies to.
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    /// Units consumed by one bundle.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Units deducted from one bundle's charge. May be fractional.
    pub fn discount_in_units(&self) -> Decimal {
        self.discount_in_units
    }

    /// Evaluates the offer against a list of products, consuming at most
    /// one bundle.
    ///
    /// Returns the remaining products and the amount to charge for the
    /// consumed bundle. The returned amount is the bundle's price, not a
    /// discount to subtract: the caller adds it to the running total and
    /// the removed products' full prices never enter the sum.
    ///
    /// If fewer than `threshold` products match the offer's code, the
    /// input is returned unchanged with a zero charge. Exactly `threshold`
    /// matches are removed otherwise - never all of them - so repeated
    /// invocation prices one bundle per pass and leaves sub-threshold
    /// leftovers at full price.
    ///
    /// The unit price is read from the first matched item. A catalogue
    /// never holds two products with the same code, so all matches share
    /// one price.
    pub fn evaluate(&self, products: &[Product]) -> (Vec<Product>, Money) {
        let matches = products
            .iter()
            .filter(|p| p.code() == self.product_code)
            .count();

        if matches < self.threshold as usize {
            return (products.to_vec(), Money::zero());
        }

        let mut unit_price = Money::zero();
        let mut to_remove = self.threshold;
        let mut remaining = Vec::with_capacity(products.len() - self.threshold as usize);
        for product in products {
            if to_remove > 0 && product.code() == self.product_code {
                if to_remove == self.threshold {
                    unit_price = product.price();
                }
                to_remove -= 1;
                continue;
            }
            remaining.push(product.clone());
        }

        let charged_units = Decimal::from(self.threshold) - self.discount_in_units;
        (remaining, unit_price * charged_units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
