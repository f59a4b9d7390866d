//! Plain-text receipt for a confirmed booking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{format_currency, BookingConfirmation};

/// Receipt lines, in the order they are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    pub booking_id: String,
    pub doctor: String,
    pub service: String,
    /// `YYYY-MM-DD`, empty when any day
    pub date: String,
    pub time: String,
    pub total_paid: Decimal,
}

impl Receipt {
    pub fn from_confirmation(confirmation: &BookingConfirmation) -> Self {
        Self {
            booking_id: confirmation.id.to_string(),
            doctor: confirmation.doctor.clone(),
            service: confirmation.service.clone(),
            date: confirmation.date_text(),
            time: confirmation.times.clone(),
            total_paid: confirmation.total,
        }
    }

    /// `Key: Value` lines, each terminated by a newline.
    pub fn to_text(&self) -> String {
        format!(
            "Booking ID: {}\nDoctor: {}\nService: {}\nDate: {}\nTime: {}\nTotal paid: {}\n",
            self.booking_id,
            self.doctor,
            self.service,
            self.date,
            self.time,
            format_currency(self.total_paid),
        )
    }

    /// Suggested download name.
    pub fn file_name(&self) -> String {
        format!("receipt-{}.txt", self.booking_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> Receipt {
        Receipt {
            booking_id: "HL-LOYW3V28".into(),
            doctor: "Dr. Anna Patel".into(),
            service: "Telehealth Appointment".into(),
            date: "2025-03-14".into(),
            time: "Morning".into(),
            total_paid: Decimal::from(172),
        }
    }

    #[test]
    fn test_receipt_text() {
        assert_eq!(
            receipt().to_text(),
            "Booking ID: HL-LOYW3V28\n\
             Doctor: Dr. Anna Patel\n\
             Service: Telehealth Appointment\n\
             Date: 2025-03-14\n\
             Time: Morning\n\
             Total paid: $172.00\n"
        );
    }

    #[test]
    fn test_receipt_file_name() {
        assert_eq!(receipt().file_name(), "receipt-HL-LOYW3V28.txt");
    }

    #[test]
    fn test_blank_date_line() {
        let mut receipt = receipt();
        receipt.date = String::new();
        assert!(receipt.to_text().contains("\nDate: \n"));
    }
}
