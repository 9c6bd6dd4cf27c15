//! Booking schedule constants and date math.

use chrono::{Days, NaiveDate};

use crate::error::CoreError;

/// The fixed set of bookable time slots (HH:MM, local to the operator).
pub const TIME_SLOTS: &[&str] = &["09:00", "11:30", "13:00", "15:00", "17:00", "19:30"];

/// Number of contiguous calendar days offered by the booking window.
pub const BOOKING_WINDOW_DAYS: u64 = 14;

/// The rolling booking window: `from` plus the next thirteen days.
///
/// The window is advisory for date pickers; any valid calendar date is
/// accepted at submission time.
pub fn booking_window(from: NaiveDate) -> Vec<NaiveDate> {
    (0..BOOKING_WINDOW_DAYS)
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .collect()
}

/// Validate that `time` is one of the fixed bookable slots.
pub fn validate_slot(time: &str) -> Result<(), CoreError> {
    if TIME_SLOTS.contains(&time) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid time slot '{time}'. Must be one of: {TIME_SLOTS:?}"
        )))
    }
}
