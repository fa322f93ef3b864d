//! Discount pricing in minor currency units.
//!
//! All arithmetic is integer-only to keep currency math exact; rounding is
//! half-up to the nearest minor unit.

use std::collections::HashMap;

use shared::{DiscountSpec, PriceTier, TierPrice};
use thiserror::Error;

/// Pricing failures. These are configuration errors: the caller must not
/// display a price and should surface the problem upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Discount percentage outside 1..=90, or a negative original price.
    #[error("invalid discount: {discount_percentage}% off {original_price} minor units")]
    InvalidDiscount {
        original_price: i64,
        discount_percentage: u8,
    },
}

/// Service computing discounted prices for deals and tiered menu items.
#[derive(Debug, Clone, Default)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Discounted price in minor units, rounded half-up.
    ///
    /// `round(original * (100 - pct) / 100)`, rejecting percentages outside
    /// 1..=90 and negative original prices. The result is never negative and
    /// never exceeds the original price.
    pub fn final_price(&self, spec: &DiscountSpec) -> Result<i64, PricingError> {
        if !(1..=90).contains(&spec.discount_percentage) || spec.original_price < 0 {
            return Err(PricingError::InvalidDiscount {
                original_price: spec.original_price,
                discount_percentage: spec.discount_percentage,
            });
        }

        // i128 keeps the multiply exact for any i64 price
        let remainder = (100 - spec.discount_percentage) as i128;
        let discounted = (spec.original_price as i128 * remainder + 50) / 100;
        Ok(discounted as i64)
    }

    /// Resolve dual pricing for a tiered deal.
    ///
    /// Only tiers whose label is selected and whose original amount is
    /// positive produce an entry; a zero amount means the tier is not priced.
    /// An empty map tells the caller to fall back to the single-price path;
    /// that fallback is the caller's decision, not made here.
    pub fn resolve_dual_pricing(
        &self,
        tiers: &[PriceTier],
        selected_labels: &[String],
        discount_percentage: u8,
    ) -> Result<HashMap<String, TierPrice>, PricingError> {
        let mut prices = HashMap::new();

        for tier in tiers {
            if !tier.is_priced() || !selected_labels.contains(&tier.label) {
                continue;
            }

            let discounted = self.final_price(&DiscountSpec {
                original_price: tier.original_amount,
                discount_percentage,
            })?;

            prices.insert(
                tier.label.clone(),
                TierPrice {
                    original: tier.original_amount,
                    discounted,
                },
            );
        }

        Ok(prices)
    }
}
