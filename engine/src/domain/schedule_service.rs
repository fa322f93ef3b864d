//! Time window and active-day logic for deals.
//!
//! All predicates take `now` as an explicit parameter instead of reading the
//! system clock, so callers control the evaluation instant and tests need no
//! clock mocking.

use chrono::{Datelike, NaiveDateTime, Timelike};
use shared::{DealWindow, Weekday};

/// Parse an "HH:MM" 24-hour clock string into minutes since midnight.
///
/// The datastore's time columns sometimes arrive as "HH:MM:SS"; trailing
/// seconds are ignored. Returns `None` for anything else, including
/// out-of-range components.
pub fn parse_clock(value: &str) -> Option<u16> {
    let mut parts = value.trim().splitn(3, ':');
    let hours: u16 = parts.next()?.parse().ok()?;
    let minutes: u16 = parts.next()?.parse().ok()?;
    if let Some(seconds) = parts.next() {
        let _: u16 = seconds.parse().ok()?;
    }
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Service answering "is this deal's window open?" style questions.
#[derive(Debug, Clone, Default)]
pub struct ScheduleService;

impl ScheduleService {
    pub fn new() -> Self {
        Self
    }

    /// Minutes since local midnight for the given instant.
    pub fn minutes_of_day(&self, now: NaiveDateTime) -> u16 {
        (now.hour() * 60 + now.minute()) as u16
    }

    /// Weekday of the given instant in the Monday=1 convention.
    pub fn weekday_of(&self, now: NaiveDateTime) -> Weekday {
        Weekday::from(now.weekday())
    }

    /// Whether `now`'s clock time falls inside the window, inclusive on both
    /// bounds.
    ///
    /// A window with an unparsable start or end time is never active.
    /// Midnight-crossing windows (`end < start`) are not supported: the
    /// comparison is a plain numeric range check, so such a window is never
    /// within bounds. Extending this to wraparound is a behavior change that
    /// needs its own sign-off.
    pub fn is_within_window(&self, window: &DealWindow, now: NaiveDateTime) -> bool {
        let (start, end) = match (parse_clock(&window.start_time), parse_clock(&window.end_time)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                log::warn!(
                    "Unparsable deal window times '{}'..'{}', treating window as never active",
                    window.start_time,
                    window.end_time
                );
                return false;
            }
        };

        let current = self.minutes_of_day(now);
        start <= current && current <= end
    }

    /// Whether the deal runs on `now`'s weekday (empty day set = every day).
    pub fn is_active_today(&self, window: &DealWindow, now: NaiveDateTime) -> bool {
        window.runs_on(self.weekday_of(now))
    }

    /// Whether the window opens later today than `now`.
    pub fn starts_later_today(&self, window: &DealWindow, now: NaiveDateTime) -> bool {
        match parse_clock(&window.start_time) {
            Some(start) => start > self.minutes_of_day(now),
            None => false,
        }
    }

    /// The next day the deal runs on, scanning tomorrow through six days out.
    ///
    /// The scan deliberately stops before wrapping back to today's weekday:
    /// a deal whose only active day is today, with its window already past,
    /// is not "upcoming this week".
    pub fn next_active_day(&self, window: &DealWindow, now: NaiveDateTime) -> Option<Weekday> {
        for offset in 1..=6u64 {
            let date = now.date().checked_add_days(chrono::Days::new(offset))?;
            let day = Weekday::from(date.weekday());
            if window.runs_on(day) {
                return Some(day);
            }
        }
        None
    }
}
