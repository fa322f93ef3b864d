//! Marketplace ordering of classified deals.

use shared::ListingEntry;

/// Service ordering listing entries for display.
#[derive(Debug, Clone, Default)]
pub struct RankingService;

impl RankingService {
    pub fn new() -> Self {
        Self
    }

    /// Order deals for the marketplace listing.
    ///
    /// Availability precedence first (available deals surface, inactive sink),
    /// then deeper discounts, then more-claimed deals as the popularity
    /// tie-break. The sort is stable: equal-key entries keep their incoming
    /// relative order.
    pub fn rank(&self, mut entries: Vec<ListingEntry>) -> Vec<ListingEntry> {
        entries.sort_by(|a, b| {
            a.availability
                .cmp(&b.availability)
                .then(b.discount_percentage.cmp(&a.discount_percentage))
                .then(b.claimed_count.cmp(&a.claimed_count))
        });
        entries
    }
}
