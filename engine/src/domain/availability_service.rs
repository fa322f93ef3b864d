//! Deal lifecycle classification.
//!
//! Combines the schedule predicates with the deal's claim counters to bucket
//! a deal into the marketplace availability classes. Pure and total: any
//! well-formed window and counter pair classifies without panicking.

use chrono::NaiveDateTime;
use shared::{Availability, DealCounters, DealWindow};

use crate::domain::schedule_service::ScheduleService;

/// Service that classifies deals for listing and detail views.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityService {
    schedule: ScheduleService,
}

impl AvailabilityService {
    pub fn new() -> Self {
        Self {
            schedule: ScheduleService::new(),
        }
    }

    /// Classify a deal at the given instant.
    ///
    /// Precedence:
    /// 1. Sold out whenever the total limit is reached, even mid-window.
    /// 2. Available now when today is active and the clock is inside the window.
    /// 3. Upcoming today when today is active and the window opens later.
    /// 4. Upcoming this week when any of the next six days is active.
    /// 5. Inactive otherwise.
    pub fn classify(
        &self,
        window: &DealWindow,
        counters: &DealCounters,
        now: NaiveDateTime,
    ) -> Availability {
        if counters.is_sold_out() {
            return Availability::SoldOut;
        }

        if self.schedule.is_active_today(window, now) {
            if self.schedule.is_within_window(window, now) {
                return Availability::AvailableNow;
            }
            if self.schedule.starts_later_today(window, now) {
                return Availability::UpcomingToday;
            }
        }

        if self.schedule.next_active_day(window, now).is_some() {
            return Availability::UpcomingThisWeek;
        }

        Availability::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use shared::Weekday;

    // 2025-06-02 is a Monday
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn monday_lunch() -> DealWindow {
        DealWindow {
            start_time: "11:00".to_string(),
            end_time: "15:00".to_string(),
            available_days: vec![Weekday::Monday],
        }
    }

    fn open_counters() -> DealCounters {
        DealCounters {
            total_limit: Some(50),
            claimed_count: 10,
            per_user_limit: 2,
        }
    }

    #[test]
    fn test_available_now_inside_window() {
        let service = AvailabilityService::new();
        assert_eq!(
            service.classify(&monday_lunch(), &open_counters(), monday_at(12, 0)),
            Availability::AvailableNow
        );
    }

    #[test]
    fn test_upcoming_today_before_window_opens() {
        let service = AvailabilityService::new();
        assert_eq!(
            service.classify(&monday_lunch(), &open_counters(), monday_at(9, 0)),
            Availability::UpcomingToday
        );
    }

    #[test]
    fn test_inactive_after_window_with_no_other_day() {
        let service = AvailabilityService::new();
        assert_eq!(
            service.classify(&monday_lunch(), &open_counters(), monday_at(16, 0)),
            Availability::Inactive
        );
    }

    #[test]
    fn test_upcoming_this_week_on_later_day() {
        let service = AvailabilityService::new();
        let window = DealWindow {
            start_time: "11:00".to_string(),
            end_time: "15:00".to_string(),
            available_days: vec![Weekday::Thursday],
        };

        assert_eq!(
            service.classify(&window, &open_counters(), monday_at(12, 0)),
            Availability::UpcomingThisWeek
        );
    }

    #[test]
    fn test_sold_out_wins_even_inside_active_window() {
        let service = AvailabilityService::new();
        let counters = DealCounters {
            total_limit: Some(10),
            claimed_count: 10,
            per_user_limit: 2,
        };

        assert_eq!(
            service.classify(&monday_lunch(), &counters, monday_at(12, 0)),
            Availability::SoldOut
        );

        // Overshot counter still reads as sold out
        let overshot = DealCounters {
            total_limit: Some(10),
            claimed_count: 14,
            per_user_limit: 2,
        };
        assert_eq!(
            service.classify(&monday_lunch(), &overshot, monday_at(12, 0)),
            Availability::SoldOut
        );
    }

    #[test]
    fn test_unlimited_deal_never_sold_out() {
        let service = AvailabilityService::new();
        let counters = DealCounters {
            total_limit: None,
            claimed_count: 10_000,
            per_user_limit: 2,
        };

        assert_eq!(
            service.classify(&monday_lunch(), &counters, monday_at(12, 0)),
            Availability::AvailableNow
        );
    }

    #[test]
    fn test_every_day_deal_rolls_to_tomorrow_after_close() {
        let service = AvailabilityService::new();
        let window = DealWindow {
            start_time: "11:00".to_string(),
            end_time: "15:00".to_string(),
            available_days: vec![],
        };

        assert_eq!(
            service.classify(&window, &open_counters(), monday_at(16, 0)),
            Availability::UpcomingThisWeek
        );
    }

    #[test]
    fn test_malformed_times_classify_without_panicking() {
        let service = AvailabilityService::new();
        let window = DealWindow {
            start_time: "noon-ish".to_string(),
            end_time: "15:00".to_string(),
            available_days: vec![Weekday::Monday],
        };

        // Active today by day set, but the window itself can never open
        assert_eq!(
            service.classify(&window, &open_counters(), monday_at(12, 0)),
            Availability::Inactive
        );
    }
}
