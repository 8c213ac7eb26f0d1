// ABOUTME: Month grid math for the booking calendar: weekday offsets, day counts,
// ABOUTME: unbounded month navigation and past/today/upcoming day classification

use chrono::{Datelike, NaiveDate};

/// A displayed calendar month. Pure value type; `today` is always passed
/// in so classification stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Weekday of the 1st, Sunday-based (0-6). This many blank cells lead
    /// the grid.
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        next.first_day()
            .pred_opt()
            .map_or(31, |last| last.day())
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// "June 2025" header text.
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Clamp a day-of-month cursor into this month's range.
    pub fn clamp_day(&self, day: u32) -> u32 {
        day.clamp(1, self.days_in_month())
    }

    fn first_day(&self) -> NaiveDate {
        // Month is always 1-12 by construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch exists"))
    }
}

/// How a day cell behaves. Past days are visible but inert; today gets a
/// marker and stays selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Past,
    Today,
    Upcoming,
}

impl DayStatus {
    pub fn is_selectable(&self) -> bool {
        !matches!(self, DayStatus::Past)
    }
}

/// Date-only comparison against `today`; time of day never matters here.
pub fn classify_day(date: NaiveDate, today: NaiveDate) -> DayStatus {
    if date < today {
        DayStatus::Past
    } else if date == today {
        DayStatus::Today
    } else {
        DayStatus::Upcoming
    }
}

/// Long-form date used on the summary and confirmation screens,
/// e.g. "Monday, June 16, 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_june_2025_starts_on_sunday_with_thirty_days() {
        let month = CalendarMonth {
            year: 2025,
            month: 6,
        };
        assert_eq!(month.first_weekday_offset(), 0);
        assert_eq!(month.days_in_month(), 30);
        assert_eq!(month.title(), "June 2025");
    }

    #[test]
    fn test_leap_and_common_februaries() {
        let leap = CalendarMonth {
            year: 2024,
            month: 2,
        };
        assert_eq!(leap.days_in_month(), 29);
        assert_eq!(leap.first_weekday_offset(), 4); // Thu

        let common = CalendarMonth {
            year: 2025,
            month: 2,
        };
        assert_eq!(common.days_in_month(), 28);
        assert_eq!(common.first_weekday_offset(), 6); // Sat
    }

    #[test]
    fn test_grid_cell_count_is_offset_plus_days() {
        let month = CalendarMonth {
            year: 2025,
            month: 1,
        };
        // Jan 1 2025 was a Wednesday.
        assert_eq!(month.first_weekday_offset(), 3);
        assert_eq!(month.first_weekday_offset() + month.days_in_month(), 34);
    }

    #[test]
    fn test_navigation_wraps_across_year_boundaries() {
        let december = CalendarMonth {
            year: 2025,
            month: 12,
        };
        assert_eq!(
            december.next(),
            CalendarMonth {
                year: 2026,
                month: 1
            }
        );

        let january = CalendarMonth {
            year: 2025,
            month: 1,
        };
        assert_eq!(
            january.previous(),
            CalendarMonth {
                year: 2024,
                month: 12
            }
        );
    }

    #[test]
    fn test_classifies_days_around_today() {
        let today = date(2025, 6, 16);
        assert_eq!(classify_day(date(2025, 6, 15), today), DayStatus::Past);
        assert_eq!(classify_day(date(2025, 6, 16), today), DayStatus::Today);
        assert_eq!(classify_day(date(2025, 6, 17), today), DayStatus::Upcoming);
        assert!(!classify_day(date(2025, 6, 15), today).is_selectable());
        assert!(classify_day(date(2025, 6, 16), today).is_selectable());
    }

    #[test]
    fn test_clamps_cursor_when_month_shrinks() {
        let january = CalendarMonth {
            year: 2025,
            month: 1,
        };
        let february = january.next();
        assert_eq!(february.clamp_day(31), 28);
        assert_eq!(february.clamp_day(0), 1);
    }

    #[test]
    fn test_formats_long_dates() {
        assert_eq!(format_long_date(date(2025, 6, 16)), "Monday, June 16, 2025");
        assert_eq!(format_long_date(date(2025, 6, 3)), "Tuesday, June 3, 2025");
    }
}
