use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};

/// Booking calendar rules: weekdays only, a rolling horizon, and a fixed half-hour grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsultationSchedule {
    /// Days ahead of today that can be booked, inclusive on both ends.
    pub earliest_day: i64,
    pub latest_day: i64,
    /// Minutes after midnight of the first and last slot start.
    pub first_slot: u32,
    pub last_slot: u32,
    pub slot_minutes: u32,
}

impl Default for ConsultationSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConsultationSchedule {
    pub const fn standard() -> Self {
        Self {
            earliest_day: 1,
            latest_day: 14,
            first_slot: 9 * 60,
            last_slot: 17 * 60,
            slot_minutes: 30,
        }
    }

    pub fn bookable_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        (self.earliest_day..=self.latest_day)
            .filter_map(|offset| today.checked_add_signed(Duration::days(offset)))
            .filter(|date| is_weekday(*date))
            .collect()
    }

    pub fn is_bookable_date(&self, today: NaiveDate, date: NaiveDate) -> bool {
        let offset = (date - today).num_days();
        (self.earliest_day..=self.latest_day).contains(&offset) && is_weekday(date)
    }

    pub fn time_slots(&self) -> Vec<NaiveTime> {
        (self.first_slot..=self.last_slot)
            .step_by(self.slot_minutes as usize)
            .filter_map(|minute| NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0))
            .collect()
    }

    pub fn is_slot(&self, time: NaiveTime) -> bool {
        if time.second() != 0 || time.nanosecond() != 0 {
            return false;
        }
        let minute = time.hour() * 60 + time.minute();
        (self.first_slot..=self.last_slot).contains(&minute)
            && (minute - self.first_slot) % self.slot_minutes == 0
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    #[test]
    fn bookable_dates_skip_weekends_and_today() {
        // 2026-03-06 is a Friday.
        let today = date(2026, 3, 6);
        let dates = ConsultationSchedule::standard().bookable_dates(today);

        assert_eq!(dates.first(), Some(&date(2026, 3, 9)));
        assert_eq!(dates.last(), Some(&date(2026, 3, 20)));
        assert_eq!(dates.len(), 10);
        assert!(!dates.contains(&today));
    }

    #[test]
    fn date_window_is_inclusive() {
        let schedule = ConsultationSchedule::standard();
        // Wednesday.
        let today = date(2026, 3, 4);
        assert!(schedule.is_bookable_date(today, date(2026, 3, 5)));
        assert!(schedule.is_bookable_date(today, date(2026, 3, 18)));
        assert!(!schedule.is_bookable_date(today, date(2026, 3, 19)));
        assert!(!schedule.is_bookable_date(today, today));
        assert!(!schedule.is_bookable_date(today, date(2026, 3, 7)));
    }

    #[test]
    fn slots_run_every_half_hour_until_five() {
        let schedule = ConsultationSchedule::standard();
        let slots = schedule.time_slots();
        assert_eq!(slots.len(), 17);
        assert_eq!(slots.first(), Some(&at(9, 0)));
        assert_eq!(slots.last(), Some(&at(17, 0)));

        assert!(schedule.is_slot(at(12, 30)));
        assert!(!schedule.is_slot(at(17, 30)));
        assert!(!schedule.is_slot(at(8, 30)));
        assert!(!schedule.is_slot(at(10, 15)));
    }
}
