//! # Product
//!
//! A purchasable item: display name, unique code, positive price.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::money::Money;

/// A product available for sale.
///
/// Immutable after construction. Products compare by value (all fields),
/// which is what offer evaluation relies on when removing bundle items
/// from a working copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductConfig")]
pub struct Product {
    name: String,
    code: String,
    price: Money,
}

/// Raw config shape; conversion routes through [`Product::new`] so a
/// deserialized product is validated like a constructed one.
#[derive(Deserialize)]
struct ProductConfig {
    name: String,
    code: String,
    price: Money,
}

impl TryFrom<ProductConfig> for Product {
    type Error = PricingError;

    fn try_from(config: ProductConfig) -> PricingResult<Self> {
        Product::new(config.name, config.code, config.price)
    }
}

impl Product {
    /// Creates a product.
    ///
    /// ## Errors
    /// `InvalidArgument` if the price is not strictly positive. Free or
    /// negatively priced products cannot enter a catalogue.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        price: Money,
    ) -> PricingResult<Self> {
        if !price.is_positive() {
            return Err(PricingError::invalid_argument(
                "A Product's price must be a positive number.",
            ));
        }

        Ok(Product {
            name: name.into(),
            code: code.into(),
            price,
        })
    }

    /// Display name shown on receipts.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Business identifier, unique within a catalogue.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_product() {
        let jeans = Product::new("Jeans", "J01", Money::new(dec!(32.95))).unwrap();
        assert_eq!(jeans.name(), "Jeans");
        assert_eq!(jeans.code(), "J01");
        assert_eq!(jeans.price(), Money::new(dec!(32.95)));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let err = Product::new("Freebie", "F01", Money::zero()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "A Product's price must be a positive number."
        );

        assert!(Product::new("Refund", "R01", Money::new(dec!(-1))).is_err());
    }

    #[test]
    fn test_config_json_rejects_non_positive_price() {
        let json = r#"{ "name": "Freebie", "code": "F01", "price": "0" }"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err
            .to_string()
            .contains("A Product's price must be a positive number."));

        let json = r#"{ "name": "Jeans", "code": "J01", "price": "32.95" }"#;
        let jeans: Product = serde_json::from_str(json).unwrap();
        assert_eq!(jeans.price(), Money::new(dec!(32.95)));
    }

    #[test]
    fn test_compares_by_value() {
        let a = Product::new("Socks", "S01", Money::new(dec!(7.95))).unwrap();
        let b = Product::new("Socks", "S01", Money::new(dec!(7.95))).unwrap();
        assert_eq!(a, b);

        let c = Product::new("Socks", "S02", Money::new(dec!(7.95))).unwrap();
        assert_ne!(a, c);
    }
}
