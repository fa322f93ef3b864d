//! Per-user claim allowance checks.
//!
//! The guard runs client-side before the claim write is issued. It is
//! advisory: the datastore owns the counters and performs the authoritative
//! check inside its own transactional boundary, so two concurrent claims can
//! still race past this guard and one of them will be rejected there.

use shared::{ClaimDecision, ClaimRejectReason, ClaimRequest};

/// Service validating claim requests against the per-user daily limit.
#[derive(Debug, Clone, Default)]
pub struct ClaimService;

impl ClaimService {
    pub fn new() -> Self {
        Self
    }

    /// Units the user may still claim today, clamped at zero.
    pub fn remaining_allowance(&self, per_user_limit: u32, claimed_today: u32) -> u32 {
        per_user_limit.saturating_sub(claimed_today)
    }

    /// Validate a claim request against the per-user daily limit.
    ///
    /// Rejects zero quantities and quantities above today's remaining
    /// allowance; otherwise allows the requested quantity unchanged.
    pub fn check_claim(&self, request: &ClaimRequest, per_user_limit: u32) -> ClaimDecision {
        if request.quantity < 1 {
            log::debug!("Claim rejected: non-positive quantity");
            return ClaimDecision::rejected(ClaimRejectReason::NonPositiveQuantity);
        }

        let remaining = self.remaining_allowance(per_user_limit, request.claimed_today_by_user);
        if request.quantity > remaining {
            log::debug!(
                "Claim rejected: requested {} with {} remaining of daily limit {}",
                request.quantity,
                remaining,
                per_user_limit
            );
            return ClaimDecision::rejected(ClaimRejectReason::ExceedsRemaining);
        }

        ClaimDecision::allowed(request.quantity)
    }
}
