//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate is the **heart** of Tally. It computes the final price of a
//! shopping order - products, quantity offers, tiered shipping - as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host Application (not this crate)               │   │
//! │  │   loads catalogue/schedule/offers ──► drives carts ──► renders  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ catalogue │  │   offer   │  │  basket   │  │   │
//! │  │   │   Money   │  │  Product  │  │  bundle   │  │  offer    │  │   │
//! │  │   │  format   │  │  lookup   │  │  pricing  │  │  loop     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │ delivery  │  │   cart    │                                 │   │
//! │  │   │  tiers    │  │ composes  │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Money` with exact decimal arithmetic and truncating
//!   currency formatting
//! - [`product`] - the `Product` value type
//! - [`catalogue`] - unique-code product lookup
//! - [`delivery`] - tiered delivery cost schedule
//! - [`offer`] - single-rule quantity-discount evaluator
//! - [`basket`] - the offer-application algorithm
//! - [`cart`] - `ShoppingCart`, composing everything into a priced order
//! - [`error`] - the `InvalidArgument` error taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation is a deterministic, bounded
//!    computation over in-memory collections
//! 2. **No I/O**: database, network, and file system access are FORBIDDEN
//!    here; hosts own all of it
//! 3. **Exact Money**: `rust_decimal` end to end; truncation to the cent
//!    happens exactly once, at currency formatting
//! 4. **Validate Before Mutate**: precondition failures raise
//!    `InvalidArgument` and leave every collection untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use rust_decimal::Decimal;
//! use tally_core::{Catalogue, DeliveryCostSchedule, Money, Offer, Product, ShoppingCart};
//!
//! # fn main() -> tally_core::PricingResult<()> {
//! let mut catalogue = Catalogue::new();
//! catalogue.add(Product::new("Jeans", "J01", Money::from_major_minor(32, 95))?)?;
//!
//! let schedule = DeliveryCostSchedule::new(Money::from_major_minor(4, 95))?;
//!
//! // Buy one pair of jeans, get the second half price
//! let offers = vec![Offer::new("J01", 2, Decimal::new(5, 1))?];
//!
//! let mut cart = ShoppingCart::new(Arc::new(catalogue), Arc::new(schedule), offers);
//! cart.add("J01")?;
//! cart.add("J01")?;
//!
//! // 32.95 × 1.5 = 49.425, plus 4.95 shipping, truncated to the cent
//! assert_eq!(cart.total()?, "£54.37");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod cart;
pub mod catalogue;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offer;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use basket::Basket;
pub use cart::ShoppingCart;
pub use catalogue::Catalogue;
pub use delivery::{DeliveryCostSchedule, Tier};
pub use error::{PricingError, PricingResult};
pub use money::{Money, CURRENCY_SYMBOL};
pub use offer::Offer;
pub use product::Product;
