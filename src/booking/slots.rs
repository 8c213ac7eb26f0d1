// ABOUTME: Half-hour appointment slots within studio hours, behind a swappable
// ABOUTME: availability source (simulated locally until the backend exposes one)

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use thiserror::Error;

use super::service::Service;

/// Studio hours: slots start on the half hour from opening until 30
/// minutes before closing.
pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 18;

/// Fraction of candidate slots the simulated source reports free.
pub const SIMULATED_AVAILABILITY_RATE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime) -> Self {
        Self { start }
    }

    /// "9:00 AM" label shown in the slot list.
    pub fn label(&self) -> String {
        format_time_12h(self.start)
    }

    pub fn end_for(&self, duration_min: i64) -> NaiveTime {
        self.start + Duration::minutes(duration_min)
    }
}

/// Every bookable start time in a day: 18 half-hour marks, 9:00 through
/// 5:30 PM.
pub fn candidate_slots() -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(((CLOSING_HOUR - OPENING_HOUR) * 2) as usize);
    for hour in OPENING_HOUR..CLOSING_HOUR {
        for minute in [0, 30] {
            if let Some(start) = NaiveTime::from_hms_opt(hour, minute, 0) {
                slots.push(TimeSlot::new(start));
            }
        }
    }
    slots
}

#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("Could not load available times: {0}")]
    Unavailable(String),
}

/// Where the wizard gets open slots for a date. The simulation stands in
/// for a backend availability endpoint; swapping sources must not touch
/// the wizard.
pub trait AvailabilitySource: Send {
    fn slots_for(
        &mut self,
        date: NaiveDate,
        service: &Service,
    ) -> Result<Vec<TimeSlot>, AvailabilityError>;
}

/// Marks each candidate slot free with independent probability
/// `SIMULATED_AVAILABILITY_RATE`.
#[derive(Debug, Default)]
pub struct SimulatedAvailability;

impl AvailabilitySource for SimulatedAvailability {
    fn slots_for(
        &mut self,
        _date: NaiveDate,
        _service: &Service,
    ) -> Result<Vec<TimeSlot>, AvailabilityError> {
        let mut rng = rand::thread_rng();
        Ok(candidate_slots()
            .into_iter()
            .filter(|_| rng.gen_bool(SIMULATED_AVAILABILITY_RATE))
            .collect())
    }
}

/// 12-hour clock label, unpadded hour, zero-padded minutes: "9:00 AM",
/// "12:30 PM", "5:30 PM".
pub fn format_time_12h(time: NaiveTime) -> String {
    use chrono::Timelike;
    let (hour, minute) = (time.hour(), time.minute());
    let (display_hour, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{display_hour}:{minute:02} {meridiem}")
}

/// "10:00 AM - 11:00 AM" range shown on summaries and confirmations.
pub fn format_time_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", format_time_12h(start), format_time_12h(end))
}
