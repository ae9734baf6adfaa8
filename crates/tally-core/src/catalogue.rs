//! # Catalogue
//!
//! The set of products that can be purchased. Product codes are unique
//! within a catalogue; lookups by code drive cart additions.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::product::Product;

/// A read-mostly collection of products keyed by their unique codes.
///
/// Built once at setup, then treated as read-only by the pricing engine.
/// Safe to share across carts behind an `Arc` once construction finishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogueConfig")]
pub struct Catalogue {
    products: Vec<Product>,
}

/// Raw config shape; conversion re-adds every product through
/// [`Catalogue::add`], so code uniqueness holds for deserialized
/// catalogues too.
#[derive(Deserialize)]
struct CatalogueConfig {
    products: Vec<Product>,
}

impl TryFrom<CatalogueConfig> for Catalogue {
    type Error = PricingError;

    fn try_from(config: CatalogueConfig) -> PricingResult<Self> {
        let mut catalogue = Catalogue::new();
        for product in config.products {
            catalogue.add(product)?;
        }
        Ok(catalogue)
    }
}

impl Catalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product.
    ///
    /// ## Errors
    /// `InvalidArgument` if another product already uses the same code.
    /// The catalogue is unchanged on failure.
    pub fn add(&mut self, product: Product) -> PricingResult<()> {
        if self.contains_code(product.code()) {
            return Err(PricingError::invalid_argument(
                "Products in a catalogue must have unique codes.",
            ));
        }

        self.products.push(product);
        Ok(())
    }

    /// Looks up a product by its code.
    ///
    /// Absence is not an error at this boundary; the caller decides
    /// whether a missing code matters.
    pub fn product_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code() == code)
    }

    /// Whether any product carries the given code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.product_by_code(code).is_some()
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
