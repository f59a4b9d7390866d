//! Booking request, price breakdown and confirmation models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::ServiceMode;

/// Round to whole cents, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `$X.XX`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", round_cents(amount))
}

/// One pricing calculation requested by the booking page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    /// Service name as selected (unknown names are priced at the default)
    pub service: String,
    /// Number of sessions, must be at least 1
    pub quantity: u32,
    /// New patients pay the joining fee
    pub is_new_patient: bool,
}

impl BookingRequest {
    pub fn new(service: impl Into<String>, quantity: u32, is_new_patient: bool) -> Self {
        Self {
            service: service.into(),
            quantity,
            is_new_patient,
        }
    }
}

/// Itemized price for a booking request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    pub unit_price: Decimal,
    /// unit_price × quantity
    pub subtotal: Decimal,
    /// Flat fee, zero unless new patient
    pub joining_fee: Decimal,
    /// Bundle discount on the subtotal (never more than the subtotal)
    pub discount: Decimal,
    /// subtotal + joining_fee - discount
    pub total: Decimal,
}

impl PriceBreakdown {
    pub fn has_joining_fee(&self) -> bool {
        self.joining_fee > Decimal::ZERO
    }

    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }
}

/// Public booking reference, `HL-XXXXXXXX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub(crate) fn from_raw(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the patient picked on the search page, carried into confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDetails {
    pub doctor: String,
    pub specialty: String,
    pub service: String,
    /// Requested day; `None` means any day
    pub date: Option<NaiveDate>,
    /// Preferred time of day ("Any" when not chosen)
    pub times: String,
    pub email: String,
}

impl BookingDetails {
    pub fn new(doctor: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            doctor: doctor.into(),
            specialty: String::new(),
            service: service.into(),
            date: None,
            times: "Any".to_string(),
            email: String::new(),
        }
    }

    pub fn mode(&self) -> ServiceMode {
        ServiceMode::for_service(&self.service)
    }
}

/// A confirmed and paid booking, handed to the success page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub id: BookingId,
    pub doctor: String,
    pub specialty: String,
    pub service: String,
    pub date: Option<NaiveDate>,
    pub times: String,
    pub quantity: u32,
    /// Amount paid
    pub total: Decimal,
    pub email: String,
    /// Confirmation timestamp (RFC 3339)
    pub confirmed_at: String,
}

impl BookingConfirmation {
    pub fn new(
        id: BookingId,
        details: BookingDetails,
        quantity: u32,
        price: &PriceBreakdown,
    ) -> Self {
        Self {
            id,
            doctor: details.doctor,
            specialty: details.specialty,
            service: details.service,
            date: details.date,
            times: details.times,
            quantity,
            total: price.total,
            email: details.email,
            confirmed_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Date as `YYYY-MM-DD`, empty when any day.
    pub fn date_text(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
