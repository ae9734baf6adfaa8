//! # Delivery Cost Schedule
//!
//! The cost schedule for shipping orders.
//!
//! ## Tier Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base £4.95        tier £50 → £2.95        tier £90 → £0.00            │
//! │  ───────────────┼──────────────────────┼──────────────────────────     │
//! │  spend  £10.00 ──► £4.95   (below lowest added tier: base cost)        │
//! │  spend  £49.99 ──► £4.95                                               │
//! │  spend  £50.00 ──► £2.95   (threshold met: tier cost applies)          │
//! │  spend  £90.00 ──► £0.00                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The active tier is the highest-threshold tier whose threshold does not
//! exceed the amount spent.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{PricingError, PricingResult};
use crate::money::Money;

// =============================================================================
// Tier
// =============================================================================

/// A (threshold, delivery_cost) pair in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    threshold: Money,
    delivery_cost: Money,
}

impl Tier {
    /// Minimum spend at which this tier's cost applies.
    pub fn threshold(&self) -> Money {
        self.threshold
    }

    /// Shipping cost charged once the threshold is met or exceeded.
    pub fn delivery_cost(&self) -> Money {
        self.delivery_cost
    }
}

// =============================================================================
// Schedule
// =============================================================================

/// An ordered tier table mapping spend thresholds to delivery cost.
///
/// ## Invariants
/// - Tiers are sorted ascending by threshold
/// - A base tier at threshold zero always exists; it is created at
///   construction and callers cannot add a tier at or below zero
///
/// The invariants hold on every construction path: deserialization
/// funnels through the same validation as [`DeliveryCostSchedule::new`]
/// and [`DeliveryCostSchedule::add_tier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DeliveryCostScheduleConfig")]
pub struct DeliveryCostSchedule {
    tiers: Vec<Tier>,
}

/// Raw config shape. Conversion rebuilds the schedule through the
/// validating constructor and `add_tier`, so a deserialized schedule
/// carries the same guarantees as a constructed one: exactly one base
/// tier, non-negative costs, ascending threshold order.
#[derive(Deserialize)]
struct DeliveryCostScheduleConfig {
    tiers: Vec<Tier>,
}

impl TryFrom<DeliveryCostScheduleConfig> for DeliveryCostSchedule {
    type Error = PricingError;

    fn try_from(config: DeliveryCostScheduleConfig) -> PricingResult<Self> {
        let mut tiers = config.tiers;
        let base_index = tiers
            .iter()
            .position(|t| t.threshold.is_zero())
            .ok_or_else(|| {
                PricingError::invalid_argument(
                    "A DeliveryCostSchedule must include a base tier with a zero threshold.",
                )
            })?;
        let base = tiers.swap_remove(base_index);

        let mut schedule = DeliveryCostSchedule::new(base.delivery_cost)?;
        for tier in tiers {
            schedule.add_tier(tier.threshold, tier.delivery_cost)?;
        }
        Ok(schedule)
    }
}

impl DeliveryCostSchedule {
    /// Creates a schedule with the given base delivery cost, charged
    /// whenever the spend is below every added tier's threshold.
    ///
    /// ## Errors
    /// `InvalidArgument` if the base cost is negative. Zero is allowed
    /// (free shipping from the first pound).
    pub fn new(base_delivery_cost: Money) -> PricingResult<Self> {
        if base_delivery_cost.is_negative() {
            return Err(PricingError::invalid_argument(
                "A DeliveryCostSchedule's base_delivery_cost must be a non-negative number.",
            ));
        }

        Ok(DeliveryCostSchedule {
            tiers: vec![Tier {
                threshold: Money::zero(),
                delivery_cost: base_delivery_cost,
            }],
        })
    }

    /// Adds a discounted-shipping tier.
    ///
    /// Tiers may be added in any order; the table is re-sorted after each
    /// insert so lookups can walk it ascending.
    ///
    /// ## Errors
    /// `InvalidArgument` if the threshold is not strictly positive (zero is
    /// the base tier's reserved slot) or the cost is negative.
    pub fn add_tier(&mut self, threshold: Money, delivery_cost: Money) -> PricingResult<()> {
        if !threshold.is_positive() {
            return Err(PricingError::invalid_argument(
                "A DeliveryCostSchedule's tier threshold must be a positive number.",
            ));
        }
        if delivery_cost.is_negative() {
            return Err(PricingError::invalid_argument(
                "A DeliveryCostSchedule's tier delivery_cost must be a non-negative number.",
            ));
        }

        self.tiers.push(Tier {
            threshold,
            delivery_cost,
        });
        self.tiers.sort_by(|a, b| a.threshold.cmp(&b.threshold));
        Ok(())
    }

    /// Returns the delivery cost for the given spend.
    ///
    /// Walks the tiers in ascending threshold order and keeps the cost of
    /// every tier whose threshold has been met; the last one kept wins.
    ///
    /// ## Errors
    /// `InvalidArgument` unless the amount spent is strictly positive. An
    /// order for nothing has no meaningful shipping cost.
    pub fn delivery_cost(&self, amount_spent: Money) -> PricingResult<Money> {
        if !amount_spent.is_positive() {
            return Err(PricingError::invalid_argument(
                "The amount spent when calculating the delivery cost must be a positive number.",
            ));
        }

        // Base tier (threshold 0) always matches, so `cost` is always set.
        let mut cost = self.tiers[0].delivery_cost;
        for tier in &self.tiers {
            if amount_spent < tier.threshold {
                break;
            }
            cost = tier.delivery_cost;
        }

        trace!(
            amount_spent = %amount_spent.amount(),
            delivery_cost = %cost.amount(),
            "selected delivery tier"
        );
        Ok(cost)
    }

    /// All tiers, ascending by threshold. The base tier is first.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
