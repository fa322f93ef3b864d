use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Day of the week, normalized to the Monday=1 .. Sunday=7 convention.
///
/// The datastore sends day values as a mix of numbers and lowercase English
/// names; everything is normalized into this enum at ingestion and only this
/// representation is used downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Number in the Monday=1 .. Sunday=7 convention.
    pub fn number(&self) -> u8 {
        match self {
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
            Weekday::Sunday => 7,
        }
    }

    /// Parse a 1..=7 day number (Monday=1).
    pub fn from_number(number: u8) -> Option<Weekday> {
        match number {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Parse an English day name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Weekday> {
        match name.trim().to_ascii_lowercase().as_str() {
            "monday" => Some(Weekday::Monday),
            "tuesday" => Some(Weekday::Tuesday),
            "wednesday" => Some(Weekday::Wednesday),
            "thursday" => Some(Weekday::Thursday),
            "friday" => Some(Weekday::Friday),
            "saturday" => Some(Weekday::Saturday),
            "sunday" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Parse a raw day value as received from the datastore.
    pub fn from_raw(raw: &RawDay) -> Option<Weekday> {
        match raw {
            RawDay::Number(n) => Weekday::from_number(*n),
            RawDay::Name(name) => Weekday::from_name(name),
        }
    }

    /// Normalize a raw day array into a deduplicated weekday set.
    ///
    /// Tokens that fail to parse are dropped; an empty result is the
    /// "every day" default, so a fully-garbage array degrades to a deal
    /// that is active on all days rather than one that never shows up.
    pub fn normalize_all(raw_days: &[RawDay]) -> Vec<Weekday> {
        let mut days = Vec::new();
        for raw in raw_days {
            if let Some(day) = Weekday::from_raw(raw) {
                if !days.contains(&day) {
                    days.push(day);
                }
            }
        }
        days
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        // chrono's number_from_monday() already uses the Monday=1 convention
        Weekday::from_number(day.number_from_monday() as u8).unwrap_or(Weekday::Monday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weekday::Monday => write!(f, "monday"),
            Weekday::Tuesday => write!(f, "tuesday"),
            Weekday::Wednesday => write!(f, "wednesday"),
            Weekday::Thursday => write!(f, "thursday"),
            Weekday::Friday => write!(f, "friday"),
            Weekday::Saturday => write!(f, "saturday"),
            Weekday::Sunday => write!(f, "sunday"),
        }
    }
}

/// A day-of-week value exactly as the datastore sends it: either a number
/// (1..=7, Monday=1) or an English name like "monday".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDay {
    Number(u8),
    Name(String),
}

/// The daily time window a deal is redeemable in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealWindow {
    /// Window start, "HH:MM" 24-hour clock (the store may append seconds)
    pub start_time: String,
    /// Window end, "HH:MM" 24-hour clock, expected to be after start_time
    pub end_time: String,
    /// Days the deal runs on; empty means every day
    pub available_days: Vec<Weekday>,
}

impl DealWindow {
    /// Whether the window runs on the given weekday (empty set = every day).
    pub fn runs_on(&self, day: Weekday) -> bool {
        self.available_days.is_empty() || self.available_days.contains(&day)
    }
}

/// Claim counters for a deal, denormalized from the datastore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealCounters {
    /// Total claims the deal allows; None means unlimited
    pub total_limit: Option<u32>,
    /// Claims recorded so far
    pub claimed_count: u32,
    /// Claims a single user may make per day
    pub per_user_limit: u32,
}

impl DealCounters {
    /// Whether the total limit has been reached (or exceeded).
    pub fn is_sold_out(&self) -> bool {
        match self.total_limit {
            Some(limit) => self.claimed_count >= limit,
            None => false,
        }
    }

    /// Remaining total quantity, clamped at zero.
    ///
    /// The steady state is claimed_count <= total_limit, but an overshot
    /// counter must never produce a negative remainder.
    pub fn remaining_total(&self) -> Option<u32> {
        self.total_limit
            .map(|limit| limit.saturating_sub(self.claimed_count))
    }
}

/// A single priced tier on a deal or menu item (e.g. "student", "employee").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub label: String,
    /// Original price in minor currency units; zero means the tier is not
    /// priced and must not appear in dual-pricing output
    pub original_amount: i64,
}

impl PriceTier {
    pub fn is_priced(&self) -> bool {
        self.original_amount > 0
    }
}

/// Original and discounted price pair for one tier, in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPrice {
    pub original: i64,
    pub discounted: i64,
}

/// Inputs to the single-price discount calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountSpec {
    /// Original price in minor currency units, must be non-negative
    pub original_price: i64,
    /// Percentage off, must be within 1..=90
    pub discount_percentage: u8,
}

/// A user's request to claim units of a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// Units the user wants to claim
    pub quantity: u32,
    /// Units this user has already claimed today
    pub claimed_today_by_user: u32,
}

/// Why a claim request was rejected by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimRejectReason {
    /// Requested quantity was zero
    NonPositiveQuantity,
    /// Requested quantity exceeds today's remaining per-user allowance
    ExceedsRemaining,
}

impl fmt::Display for ClaimRejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimRejectReason::NonPositiveQuantity => write!(f, "non_positive_quantity"),
            ClaimRejectReason::ExceedsRemaining => write!(f, "exceeds_remaining"),
        }
    }
}

/// The guard's verdict on a claim request.
///
/// Advisory only: the datastore performs the authoritative check when the
/// claim is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDecision {
    /// Quantity the guard allows; zero when rejected
    pub allowed_quantity: u32,
    pub rejected: bool,
    pub reason: Option<ClaimRejectReason>,
}

impl ClaimDecision {
    pub fn allowed(quantity: u32) -> Self {
        Self {
            allowed_quantity: quantity,
            rejected: false,
            reason: None,
        }
    }

    pub fn rejected(reason: ClaimRejectReason) -> Self {
        Self {
            allowed_quantity: 0,
            rejected: true,
            reason: Some(reason),
        }
    }
}

/// Lifecycle classification of a deal at a point in time.
///
/// Variant order is the marketplace sort precedence: available deals list
/// first, inactive deals last. Ord derives from declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Redeemable right now
    AvailableNow,
    /// Runs today but the window has not opened yet
    UpcomingToday,
    /// Runs on one of the next six days
    UpcomingThisWeek,
    /// Total claim limit reached
    SoldOut,
    /// Not running today or within the coming week
    Inactive,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::AvailableNow => write!(f, "available_now"),
            Availability::UpcomingToday => write!(f, "upcoming_today"),
            Availability::UpcomingThisWeek => write!(f, "upcoming_this_week"),
            Availability::SoldOut => write!(f, "sold_out"),
            Availability::Inactive => write!(f, "inactive"),
        }
    }
}

fn default_per_user_limit() -> u32 {
    1
}

/// A denormalized deal row as fetched from the datastore for the listing view.
///
/// Time and day fields carry the store's raw representations; the engine
/// normalizes them before any business rule runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealRow {
    pub id: String,
    pub title: String,
    /// Reference to the restaurant that owns the deal
    pub restaurant_id: String,
    /// Original price in minor currency units
    pub original_price: i64,
    /// Percentage off, expected within 1..=90
    pub discount_percentage: u8,
    /// Window start, "HH:MM" or "HH:MM:SS"
    pub start_time: String,
    /// Window end, "HH:MM" or "HH:MM:SS"
    pub end_time: String,
    /// Days the deal runs on, as the store sends them (strings or numbers)
    #[serde(default)]
    pub available_days: Vec<RawDay>,
    /// Total claims allowed; None means unlimited
    #[serde(default)]
    pub total_limit: Option<u32>,
    /// Claims recorded so far
    #[serde(default)]
    pub claimed_count: u32,
    /// Claims a single user may make per day
    #[serde(default = "default_per_user_limit")]
    pub per_user_limit: u32,
    /// Tiered original prices, when the deal carries dual pricing
    #[serde(default)]
    pub price_tiers: Vec<PriceTier>,
    /// Tier labels the restaurant has enabled for this deal
    #[serde(default)]
    pub active_tiers: Vec<String>,
}

impl DealRow {
    /// Normalize the row's raw window fields into a `DealWindow`.
    pub fn window(&self) -> DealWindow {
        DealWindow {
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            available_days: Weekday::normalize_all(&self.available_days),
        }
    }

    pub fn counters(&self) -> DealCounters {
        DealCounters {
            total_limit: self.total_limit,
            claimed_count: self.claimed_count,
            per_user_limit: self.per_user_limit,
        }
    }
}

/// A classified, priced deal ready for marketplace display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub id: String,
    pub title: String,
    pub restaurant_id: String,
    pub availability: Availability,
    /// Original single price in minor currency units
    pub original_price: i64,
    pub discount_percentage: u8,
    /// Discounted single price; None when the discount spec is invalid
    pub final_price: Option<i64>,
    /// Per-tier prices when dual pricing applies; empty means the single
    /// price is the one to display
    pub tier_prices: HashMap<String, TierPrice>,
    /// Remaining total quantity, clamped at zero; None means unlimited
    pub remaining: Option<u32>,
    /// Claims recorded so far (popularity tie-break for ranking)
    pub claimed_count: u32,
}
