//! Due-date urgency classification

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::BillStatus;

/// A bill due within this many days (inclusive) is due soon
pub const DUE_SOON_DAYS: i64 = 3;

/// Whole days from `now` until the start of `due_date`, rounded up
///
/// Negative once the due date has passed. A bill due today is `0` for the
/// whole of today, since the partial day rounds up.
pub fn days_until_due(due_date: NaiveDate, now: NaiveDateTime) -> i64 {
    let delta = start_of_day(due_date) - now;
    let whole_days = delta.num_days();
    if delta - Duration::days(whole_days) > Duration::zero() {
        whole_days + 1
    } else {
        whole_days
    }
}

/// Classify a due date relative to `now`
pub fn classify_status(due_date: NaiveDate, now: NaiveDateTime) -> BillStatus {
    let days = days_until_due(due_date, now);
    if days < 0 {
        BillStatus::Overdue
    } else if days <= DUE_SOON_DAYS {
        BillStatus::DueSoon
    } else {
        BillStatus::Upcoming
    }
}

/// Classify against the start of `today`
pub fn classify_status_on(due_date: NaiveDate, today: NaiveDate) -> BillStatus {
    classify_status(due_date, start_of_day(today))
}

/// Midnight at the beginning of `date`
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        d.and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_boundaries_at_midnight() {
        let today = date(2025, 6, 15);
        let now = at(today, 0, 0);

        assert_eq!(classify_status(today, now), BillStatus::DueSoon);
        assert_eq!(classify_status(today + Duration::days(3), now), BillStatus::DueSoon);
        assert_eq!(classify_status(today + Duration::days(4), now), BillStatus::Upcoming);
        assert_eq!(classify_status(today - Duration::days(1), now), BillStatus::Overdue);
    }

    #[test]
    fn test_partial_days_round_up() {
        let today = date(2025, 6, 15);
        let afternoon = at(today, 14, 30);

        // Due today, mid-afternoon: -0.6 days rounds up to 0
        assert_eq!(days_until_due(today, afternoon), 0);
        assert_eq!(classify_status(today, afternoon), BillStatus::DueSoon);

        // Due yesterday: -1.6 days rounds up to -1
        assert_eq!(days_until_due(today - Duration::days(1), afternoon), -1);

        // Due in 4 calendar days: 3.4 days rounds up to 4
        assert_eq!(days_until_due(today + Duration::days(4), afternoon), 4);
        assert_eq!(
            classify_status(today + Duration::days(4), afternoon),
            BillStatus::Upcoming
        );
    }

    #[test]
    fn test_days_until_due_exact_days() {
        let now = at(date(2025, 1, 1), 0, 0);
        assert_eq!(days_until_due(date(2025, 1, 1), now), 0);
        assert_eq!(days_until_due(date(2025, 1, 2), now), 1);
        assert_eq!(days_until_due(date(2024, 12, 29), now), -3);
        assert_eq!(days_until_due(date(2025, 2, 1), now), 31);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let due = date(2025, 3, 3);
        let now = at(date(2025, 3, 1), 8, 0);
        let first = classify_status(due, now);
        for _ in 0..10 {
            assert_eq!(classify_status(due, now), first);
        }
    }

    #[test]
    fn test_urgency_never_decreases_as_time_advances() {
        let due = date(2025, 8, 20);
        let mut now = at(date(2025, 8, 1), 0, 0);
        let end = at(date(2025, 9, 5), 0, 0);
        let mut previous = classify_status(due, now);

        while now < end {
            now += Duration::hours(5);
            let current = classify_status(due, now);
            assert!(
                current >= previous,
                "status went from {:?} back to {:?} at {}",
                previous,
                current,
                now
            );
            previous = current;
        }
        assert_eq!(previous, BillStatus::Overdue);
    }

    #[test]
    fn test_classify_on_day() {
        let today = date(2025, 6, 15);
        assert_eq!(classify_status_on(date(2025, 6, 18), today), BillStatus::DueSoon);
        assert_eq!(classify_status_on(date(2025, 6, 19), today), BillStatus::Upcoming);
        assert_eq!(classify_status_on(date(2025, 6, 14), today), BillStatus::Overdue);
    }
}
