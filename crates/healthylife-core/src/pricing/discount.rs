//! Bundle discount policies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{round_cents, ServiceOffering};

/// Percentage off the service subtotal once enough sessions of one service
/// are booked together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleDiscount {
    /// Service name the bundle applies to (exact match)
    pub service: String,
    /// Smallest quantity that qualifies
    pub min_quantity: u32,
    /// Percent taken off the subtotal (0 - 100)
    pub percent: Decimal,
}

impl BundleDiscount {
    pub fn new(service: impl Into<String>, min_quantity: u32, percent: Decimal) -> Self {
        Self {
            service: service.into(),
            min_quantity,
            percent,
        }
    }

    /// 10% off three or more telehealth sessions.
    pub fn telehealth_bundle() -> Self {
        Self::new(
            ServiceOffering::TelehealthAppointment.name(),
            3,
            Decimal::from(10),
        )
    }

    pub fn applies_to(&self, service: &str, quantity: u32) -> bool {
        self.service == service && quantity >= self.min_quantity
    }

    /// Discount on a subtotal, rounded to cents. `None` on overflow.
    pub fn amount(&self, subtotal: Decimal) -> Option<Decimal> {
        let off = subtotal.checked_mul(self.percent)? / Decimal::ONE_HUNDRED;
        Some(round_cents(off))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telehealth_bundle_threshold() {
        let bundle = BundleDiscount::telehealth_bundle();
        assert!(!bundle.applies_to("Telehealth Appointment", 2));
        assert!(bundle.applies_to("Telehealth Appointment", 3));
        assert!(bundle.applies_to("Telehealth Appointment", 5));
        assert!(!bundle.applies_to("General Consultation", 5));
    }

    #[test]
    fn test_amount_is_percent_of_subtotal() {
        let bundle = BundleDiscount::telehealth_bundle();
        assert_eq!(bundle.amount(Decimal::from(180)), Some(Decimal::from(18)));
        assert_eq!(bundle.amount(Decimal::from(300)), Some(Decimal::from(30)));
    }

    #[test]
    fn test_amount_rounds_to_cents() {
        let bundle = BundleDiscount::new("Vaccination", 2, Decimal::new(125, 1));
        // 12.5% of 40.10 = 5.0125
        assert_eq!(bundle.amount(Decimal::new(4010, 2)), Some(Decimal::new(501, 2)));
    }

    #[test]
    fn test_amount_overflow_is_none() {
        let bundle = BundleDiscount::new("Vaccination", 1, Decimal::from(100));
        assert_eq!(bundle.amount(Decimal::MAX), None);
    }
}
