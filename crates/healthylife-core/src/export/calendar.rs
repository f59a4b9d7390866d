//! Single-event calendar export (iCalendar subset).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::BookingConfirmation;

/// All-day calendar event for a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    /// Booking ID
    pub uid: String,
    pub summary: String,
    pub start: NaiveDate,
}

impl CalendarEvent {
    /// Event for a booking; bookings for any day start today (UTC).
    pub fn from_confirmation(confirmation: &BookingConfirmation) -> Self {
        Self::from_confirmation_on(confirmation, chrono::Utc::now().date_naive())
    }

    /// Like [`CalendarEvent::from_confirmation`] with an explicit fallback day.
    pub fn from_confirmation_on(confirmation: &BookingConfirmation, today: NaiveDate) -> Self {
        Self {
            uid: confirmation.id.to_string(),
            summary: format!("Appointment with {}", confirmation.doctor),
            start: confirmation.date.unwrap_or(today),
        }
    }

    pub fn to_ics(&self) -> String {
        [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", self.uid),
            format!("SUMMARY:{}", self.summary),
            format!("DTSTART;VALUE=DATE:{}", self.start.format("%Y%m%d")),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ]
        .join("\n")
    }

    pub fn file_name(&self) -> String {
        format!("booking-{}.ics", self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ics_layout() {
        let event = CalendarEvent {
            uid: "HL-LOYW3V28".into(),
            summary: "Appointment with Dr. Anna Patel".into(),
            start: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
        };

        assert_eq!(
            event.to_ics(),
            "BEGIN:VCALENDAR\nVERSION:2.0\nBEGIN:VEVENT\nUID:HL-LOYW3V28\n\
             SUMMARY:Appointment with Dr. Anna Patel\nDTSTART;VALUE=DATE:20250304\n\
             END:VEVENT\nEND:VCALENDAR"
        );
        assert_eq!(event.file_name(), "booking-HL-LOYW3V28.ics");
    }
}
