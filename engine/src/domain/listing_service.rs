//! Listing pipeline: raw deal rows in, ranked marketplace entries out.
//!
//! This is the single call a list view makes per render with a snapshot of
//! rows from the datastore. It owns the boundary normalization (raw day and
//! time representations become typed values here, never downstream) and the
//! single-price fallback when no dual-pricing tier qualifies.

use chrono::NaiveDateTime;
use shared::{DealRow, DiscountSpec, ListingEntry};

use crate::domain::availability_service::AvailabilityService;
use crate::domain::pricing_service::PricingService;
use crate::domain::ranking_service::RankingService;

/// Service assembling the classified, priced, ranked marketplace listing.
#[derive(Debug, Clone, Default)]
pub struct ListingService {
    availability: AvailabilityService,
    pricing: PricingService,
    ranking: RankingService,
}

impl ListingService {
    pub fn new() -> Self {
        Self {
            availability: AvailabilityService::new(),
            pricing: PricingService::new(),
            ranking: RankingService::new(),
        }
    }

    /// Build the ranked listing for a snapshot of deal rows.
    ///
    /// A row with an invalid discount configuration stays in the listing with
    /// no price rather than failing the whole render; the gap is logged so
    /// the misconfiguration is visible upstream.
    pub fn build_listing(&self, rows: &[DealRow], now: NaiveDateTime) -> Vec<ListingEntry> {
        let entries = rows.iter().map(|row| self.build_entry(row, now)).collect();
        self.ranking.rank(entries)
    }

    fn build_entry(&self, row: &DealRow, now: NaiveDateTime) -> ListingEntry {
        let window = row.window();
        let counters = row.counters();
        let availability = self.availability.classify(&window, &counters, now);

        let final_price = match self.pricing.final_price(&DiscountSpec {
            original_price: row.original_price,
            discount_percentage: row.discount_percentage,
        }) {
            Ok(price) => Some(price),
            Err(err) => {
                log::warn!("Deal {} has no displayable price: {}", row.id, err);
                None
            }
        };

        // Empty map = single-price fallback; the entry carries both and the
        // view picks
        let tier_prices = match self.pricing.resolve_dual_pricing(
            &row.price_tiers,
            &row.active_tiers,
            row.discount_percentage,
        ) {
            Ok(prices) => prices,
            Err(err) => {
                log::warn!("Deal {} tier pricing skipped: {}", row.id, err);
                Default::default()
            }
        };

        ListingEntry {
            id: row.id.clone(),
            title: row.title.clone(),
            restaurant_id: row.restaurant_id.clone(),
            availability,
            original_price: row.original_price,
            discount_percentage: row.discount_percentage,
            final_price,
            tier_prices,
            remaining: counters.remaining_total(),
            claimed_count: counters.claimed_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use shared::{Availability, PriceTier, RawDay};

    // 2025-06-02 is a Monday
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn row(id: &str, discount_percentage: u8) -> DealRow {
        DealRow {
            id: id.to_string(),
            title: format!("Deal {}", id),
            restaurant_id: "resto-1".to_string(),
            original_price: 12_900,
            discount_percentage,
            start_time: "11:00".to_string(),
            end_time: "15:00".to_string(),
            available_days: vec![RawDay::Name("monday".to_string())],
            total_limit: Some(50),
            claimed_count: 10,
            per_user_limit: 2,
            price_tiers: vec![],
            active_tiers: vec![],
        }
    }

    #[test]
    fn test_build_listing_classifies_prices_and_ranks() {
        let service = ListingService::new();
        let mut sold_out = row("sold-out", 60);
        sold_out.claimed_count = 50;
        let rows = vec![sold_out, row("shallow", 20), row("deep", 40)];

        let listing = service.build_listing(&rows, monday_at(12, 0));

        let ids: Vec<&str> = listing.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["deep", "shallow", "sold-out"]);

        assert_eq!(listing[0].availability, Availability::AvailableNow);
        // 12900 * 0.60 = 7740
        assert_eq!(listing[0].final_price, Some(7_740));
        assert_eq!(listing[0].remaining, Some(40));
        assert_eq!(listing[2].availability, Availability::SoldOut);
        assert_eq!(listing[2].remaining, Some(0));
    }

    #[test]
    fn test_invalid_discount_keeps_row_without_price() {
        let service = ListingService::new();
        let rows = vec![row("bad", 95), row("good", 30)];

        let listing = service.build_listing(&rows, monday_at(12, 0));

        let bad = listing.iter().find(|e| e.id == "bad").unwrap();
        assert_eq!(bad.final_price, None);
        let good = listing.iter().find(|e| e.id == "good").unwrap();
        assert_eq!(good.final_price, Some(9_030));
    }

    #[test]
    fn test_tier_prices_resolved_with_single_price_fallback() {
        let service = ListingService::new();

        let mut tiered = row("tiered", 25);
        tiered.price_tiers = vec![
            PriceTier {
                label: "student".to_string(),
                original_amount: 10_000,
            },
            PriceTier {
                label: "employee".to_string(),
                original_amount: 0,
            },
        ];
        tiered.active_tiers = vec!["student".to_string(), "employee".to_string()];

        let mut plain = row("plain", 25);
        plain.price_tiers = vec![PriceTier {
            label: "student".to_string(),
            original_amount: 10_000,
        }];
        // No tier selected: listing entry keeps an empty map and the view
        // falls back to the single price

        let listing = service.build_listing(&[tiered, plain], monday_at(12, 0));

        let tiered = listing.iter().find(|e| e.id == "tiered").unwrap();
        assert_eq!(tiered.tier_prices.len(), 1);
        assert_eq!(tiered.tier_prices["student"].discounted, 7_500);

        let plain = listing.iter().find(|e| e.id == "plain").unwrap();
        assert!(plain.tier_prices.is_empty());
        assert_eq!(plain.final_price, Some(9_675));
    }
}
