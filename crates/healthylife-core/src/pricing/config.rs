//! Price list and fee configuration.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::BundleDiscount;
use crate::config::{ConfigError, ConfigResult};
use crate::models::ServiceOffering;

/// Largest accepted price or fee. Keeps `price × u32::MAX` and the bundle
/// percentage arithmetic inside `Decimal` range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Prices, fees and discount rules used by the pricing engine.
///
/// Missing fields in a JSON document fall back to the clinic's built-in
/// values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Unit price per service name
    pub prices: BTreeMap<String, Decimal>,
    /// Unit price for service names missing from `prices`
    pub default_unit_price: Decimal,
    /// One-time fee for new patients
    pub joining_fee: Decimal,
    pub bundle_discounts: Vec<BundleDiscount>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            prices: Self::default_prices(),
            default_unit_price: Decimal::from(80),
            joining_fee: Decimal::from(10),
            bundle_discounts: vec![BundleDiscount::telehealth_bundle()],
        }
    }
}

impl PricingConfig {
    /// Set or replace the unit price of a service.
    pub fn set_price(&mut self, service: &str, price: Decimal) {
        self.prices.insert(service.to_string(), price);
    }

    pub fn add_bundle_discount(&mut self, discount: BundleDiscount) {
        self.bundle_discounts.push(discount);
    }

    /// Check that every amount is within `0..=MAX_AMOUNT` and every discount
    /// rule is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        for (service, price) in &self.prices {
            check_amount(&format!("price for {}", service), *price)?;
        }
        check_amount("default unit price", self.default_unit_price)?;
        check_amount("joining fee", self.joining_fee)?;
        for bundle in &self.bundle_discounts {
            if bundle.min_quantity == 0 {
                return Err(ConfigError::Invalid(format!(
                    "bundle discount for {} needs a min_quantity of at least 1",
                    bundle.service
                )));
            }
            if bundle.percent.is_sign_negative() || bundle.percent > Decimal::from(100) {
                return Err(ConfigError::Invalid(format!(
                    "bundle discount for {} must be between 0 and 100 percent",
                    bundle.service
                )));
            }
        }
        Ok(())
    }

    fn default_prices() -> BTreeMap<String, Decimal> {
        let mut map = BTreeMap::new();
        map.insert(ServiceOffering::GeneralConsultation.name().into(), Decimal::from(80));
        map.insert(ServiceOffering::Vaccination.name().into(), Decimal::from(40));
        map.insert(ServiceOffering::TelehealthAppointment.name().into(), Decimal::from(60));
        map
    }
}

fn check_amount(what: &str, amount: Decimal) -> ConfigResult<()> {
    if amount.is_sign_negative() {
        return Err(ConfigError::Invalid(format!("negative {}: {}", what, amount)));
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(ConfigError::Invalid(format!(
            "{} above {}: {}",
            what, MAX_AMOUNT, amount
        )));
    }
    Ok(())
}
