//! Booking pricing engine.
//!
//! Order of operations:
//! 1. Unit price lookup (default price for unknown services)
//! 2. Subtotal = unit price × quantity
//! 3. Joining fee for new patients
//! 4. Bundle discount on the subtotal (fee excluded)
//! 5. Total = subtotal + joining fee - discount
//!
//! Every amount except the unit price is rounded to cents.

mod booking_id;
mod config;
mod discount;

pub use booking_id::*;
pub use config::*;
pub use discount::*;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    round_cents, BookingConfirmation, BookingDetails, BookingRequest, PriceBreakdown,
};

/// Pricing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid quantity: {0} (at least one session is required)")]
    InvalidQuantity(u32),

    #[error("Amount overflow pricing {quantity} x {service}")]
    AmountOverflow { service: String, quantity: u32 },
}

pub type PricingResult<T> = Result<T, PricingError>;

/// Price a booking with the clinic's built-in price list.
pub fn compute_price(
    service: &str,
    quantity: u32,
    is_new_patient: bool,
) -> PricingResult<PriceBreakdown> {
    PricingEngine::default().compute_price(service, quantity, is_new_patient)
}

/// Computes itemized prices from an immutable [`PricingConfig`].
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Unit price for a service name; unknown names get the default price.
    pub fn unit_price(&self, service: &str) -> Decimal {
        match self.config.prices.get(service) {
            Some(price) => *price,
            None => {
                warn!(
                    "No price for service {:?}, using default {}",
                    service, self.config.default_unit_price
                );
                self.config.default_unit_price
            }
        }
    }

    /// Price `quantity` sessions of `service`.
    ///
    /// Amounts stay far below `Decimal::MAX` for a validated config; an
    /// unvalidated one can still overflow, which is reported rather than
    /// panicking.
    pub fn compute_price(
        &self,
        service: &str,
        quantity: u32,
        is_new_patient: bool,
    ) -> PricingResult<PriceBreakdown> {
        if quantity < 1 {
            return Err(PricingError::InvalidQuantity(quantity));
        }

        let overflow = || PricingError::AmountOverflow {
            service: service.to_string(),
            quantity,
        };

        let unit_price = self.unit_price(service);
        let subtotal = unit_price
            .checked_mul(Decimal::from(quantity))
            .map(round_cents)
            .ok_or_else(overflow)?;
        let joining_fee = if is_new_patient {
            round_cents(self.config.joining_fee)
        } else {
            Decimal::ZERO
        };
        let discount = self.discount_for(service, quantity, subtotal)?;
        let total = subtotal
            .checked_add(joining_fee)
            .ok_or_else(overflow)?
            - discount;

        debug!(
            "Priced {} x {}: subtotal {}, fee {}, discount {}, total {}",
            quantity, service, subtotal, joining_fee, discount, total
        );

        Ok(PriceBreakdown {
            unit_price,
            subtotal,
            joining_fee,
            discount,
            total,
        })
    }

    pub fn quote(&self, request: &BookingRequest) -> PricingResult<PriceBreakdown> {
        self.compute_price(&request.service, request.quantity, request.is_new_patient)
    }

    /// Largest applicable bundle discount, never more than the subtotal.
    pub fn discount_for(
        &self,
        service: &str,
        quantity: u32,
        subtotal: Decimal,
    ) -> PricingResult<Decimal> {
        let mut best = Decimal::ZERO;
        for bundle in &self.config.bundle_discounts {
            if !bundle.applies_to(service, quantity) {
                continue;
            }
            let amount = bundle
                .amount(subtotal)
                .ok_or_else(|| PricingError::AmountOverflow {
                    service: service.to_string(),
                    quantity,
                })?;
            best = best.max(amount);
        }
        Ok(best.min(subtotal))
    }

    /// Price the booking and issue a confirmation with a fresh booking ID.
    pub fn confirm(
        &self,
        details: BookingDetails,
        quantity: u32,
        is_new_patient: bool,
    ) -> PricingResult<BookingConfirmation> {
        let price = self.compute_price(&details.service, quantity, is_new_patient)?;
        let id = generate_booking_id();
        info!("Confirmed booking {} with {} ({})", id, details.doctor, details.service);
        Ok(BookingConfirmation::new(id, details, quantity, &price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_services_without_discount() {
        let engine = PricingEngine::default();

        let price = engine.compute_price("General Consultation", 2, false).unwrap();
        assert_eq!(price.unit_price, Decimal::from(80));
        assert_eq!(price.subtotal, Decimal::from(160));
        assert_eq!(price.total, Decimal::from(160));

        let price = engine.compute_price("Vaccination", 4, false).unwrap();
        assert_eq!(price.total, Decimal::from(160));
        assert!(!price.has_discount());
    }

    #[test]
    fn test_discount_boundary() {
        let engine = PricingEngine::default();

        let two = engine.compute_price("Telehealth Appointment", 2, false).unwrap();
        assert_eq!(two.discount, Decimal::ZERO);
        assert_eq!(two.total, Decimal::from(120));

        let three = engine.compute_price("Telehealth Appointment", 3, false).unwrap();
        assert_eq!(three.discount, Decimal::new(1800, 2));
        assert_eq!(three.total, Decimal::from(162));
    }

    #[test]
    fn test_joining_fee_is_added() {
        let price = compute_price("General Consultation", 1, true).unwrap();
        assert_eq!(price.joining_fee, Decimal::from(10));
        assert_eq!(price.total, Decimal::from(90));
        assert!(price.has_joining_fee());
    }

    #[test]
    fn test_discount_excludes_joining_fee() {
        let price = compute_price("Telehealth Appointment", 3, true).unwrap();
        assert_eq!(price.subtotal, Decimal::from(180));
        assert_eq!(price.joining_fee, Decimal::from(10));
        assert_eq!(price.discount, Decimal::from(18));
        assert_eq!(price.total, Decimal::new(17200, 2));
    }

    #[test]
    fn test_unknown_service_uses_default_price() {
        let price = compute_price("Unknown Service", 1, false).unwrap();
        assert_eq!(price.unit_price, Decimal::from(80));
        assert_eq!(price.total, Decimal::from(80));
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        assert_eq!(
            compute_price("General Consultation", 0, false),
            Err(PricingError::InvalidQuantity(0))
        );
    }

    #[test]
    fn test_no_upper_bound_on_quantity() {
        let price = compute_price("Vaccination", 12, false).unwrap();
        assert_eq!(price.total, Decimal::from(480));
    }

    #[test]
    fn test_largest_bundle_wins_and_is_capped() {
        let mut config = PricingConfig::default();
        config.add_bundle_discount(BundleDiscount::new(
            "Telehealth Appointment",
            4,
            Decimal::from(25),
        ));
        let engine = PricingEngine::new(config);

        let three = engine.compute_price("Telehealth Appointment", 3, false).unwrap();
        assert_eq!(three.discount, Decimal::from(18));

        let four = engine.compute_price("Telehealth Appointment", 4, false).unwrap();
        assert_eq!(four.discount, Decimal::from(60));
        assert_eq!(four.total, Decimal::from(180));
    }

    #[test]
    fn test_custom_price_table() {
        let mut config = PricingConfig::default();
        config.set_price("Vaccination", Decimal::new(4550, 2));
        let engine = PricingEngine::new(config);

        let request = BookingRequest::new("Vaccination", 2, false);
        assert_eq!(engine.quote(&request).unwrap().total, Decimal::from(91));
    }

    #[test]
    fn test_sub_cent_prices_round_to_cents() {
        let mut config = PricingConfig::default();
        config.set_price("Vaccination", Decimal::new(33333, 3));
        config.joining_fee = Decimal::new(9995, 3);
        let engine = PricingEngine::new(config);

        let price = engine.compute_price("Vaccination", 3, true).unwrap();
        assert_eq!(price.unit_price, Decimal::new(33333, 3));
        assert_eq!(price.subtotal, Decimal::from(100));
        assert_eq!(price.joining_fee, Decimal::new(1000, 2));
        assert_eq!(price.total, Decimal::from(110));
        assert_eq!(price.total.scale(), 2);
    }

    #[test]
    fn test_overflow_is_an_error_not_a_panic() {
        let mut config = PricingConfig::default();
        config.set_price("Vaccination", Decimal::MAX);
        let engine = PricingEngine::new(config);

        assert_eq!(
            engine.compute_price("Vaccination", 2, false),
            Err(PricingError::AmountOverflow {
                service: "Vaccination".into(),
                quantity: 2,
            })
        );
        assert!(engine.compute_price("Vaccination", 1, false).is_ok());
    }

    #[test]
    fn test_confirm_uses_computed_total() {
        let engine = PricingEngine::default();
        let details = BookingDetails::new("Dr. Anna Patel", "Telehealth Appointment");

        let confirmation = engine.confirm(details, 3, true).unwrap();
        assert_eq!(confirmation.total, Decimal::from(172));
        assert!(confirmation.id.as_str().starts_with("HL-"));

        let details = BookingDetails::new("Dr. Anna Patel", "Telehealth Appointment");
        assert!(engine.confirm(details, 0, false).is_err());
    }
}
