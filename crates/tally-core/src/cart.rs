//! # Shopping Cart
//!
//! Composes a catalogue, a delivery cost schedule, and a list of offers
//! around one basket to price a complete order.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add("J01") ──► Catalogue lookup ──► Basket.add(product)               │
//! │                                                                         │
//! │  total() ──► Basket.total(offers) ──► basket total                     │
//! │                   │                        │                            │
//! │                   │                        ▼                            │
//! │                   │         DeliveryCostSchedule.delivery_cost(total)  │
//! │                   │                        │                            │
//! │                   ▼                        ▼                            │
//! │              (basket total    +    shipping) ──► "£54.37"              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::basket::Basket;
use crate::catalogue::Catalogue;
use crate::delivery::DeliveryCostSchedule;
use crate::error::{PricingError, PricingResult};
use crate::offer::Offer;

/// A priced order in progress.
///
/// The catalogue and schedule are shared read-only (many carts may price
/// against the same setup); the offer list is fixed for the cart's
/// lifetime; the basket is exclusively owned and is the only mutable part.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    catalogue: Arc<Catalogue>,
    delivery_cost_schedule: Arc<DeliveryCostSchedule>,
    offers: Vec<Offer>,
    basket: Basket,
}

impl ShoppingCart {
    /// Creates a cart with an empty basket.
    pub fn new(
        catalogue: Arc<Catalogue>,
        delivery_cost_schedule: Arc<DeliveryCostSchedule>,
        offers: Vec<Offer>,
    ) -> Self {
        ShoppingCart {
            catalogue,
            delivery_cost_schedule,
            offers,
            basket: Basket::new(),
        }
    }

    /// Resolves a product code against the catalogue and adds the product
    /// to the basket.
    ///
    /// ## Errors
    /// `InvalidArgument` if the catalogue does not contain the code. The
    /// basket is untouched on failure.
    pub fn add(&mut self, product_code: &str) -> PricingResult<()> {
        let product = self
            .catalogue
            .product_by_code(product_code)
            .ok_or_else(|| {
                PricingError::invalid_argument(
                    "Only products in the catalogue can be added to the shopping cart.",
                )
            })?;

        debug!(product_code, "added product to cart");
        self.basket.add(product.clone());
        Ok(())
    }

    /// Empties the basket. Delegates to [`Basket::clear`].
    pub fn clear(&mut self) {
        self.basket.clear();
    }

    /// Read access to the owned basket.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// The grand total: basket total with offers applied, plus shipping,
    /// truncated to the cent and formatted with the currency symbol.
    ///
    /// ## Errors
    /// `InvalidArgument` from the delivery schedule when the basket total
    /// is not positive - an empty cart has no priceable order.
    pub fn total(&self) -> PricingResult<String> {
        let basket_total = self.basket.total(&self.offers);
        let shipping = self.delivery_cost_schedule.delivery_cost(basket_total)?;
        let grand_total = basket_total + shipping;

        debug!(
            basket_total = %basket_total.amount(),
            shipping = %shipping.amount(),
            grand_total = %grand_total.amount(),
            "priced order"
        );
        Ok(grand_total.formatted())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
