//! HealthyLife Core Library
//!
//! Pricing, doctor search and booking receipts for the HealthyLife clinic
//! booking pages.
//!
//! # Architecture
//!
//! ```text
//!   Search page                 Confirm page                  Success page
//!       │                            │                             │
//!       ▼                            ▼                             ▼
//!  ┌──────────┐   doctor    ┌─────────────────┐  confirmation  ┌──────────┐
//!  │Directory │ ──────────▶ │ PricingEngine   │ ─────────────▶ │  export  │
//!  │ search() │             │ compute_price() │                │ receipt  │
//!  └──────────┘             │ confirm()       │                │ calendar │
//!                           └─────────────────┘                └──────────┘
//!                                    ▲
//!                           forms::CheckoutForm
//! ```
//!
//! Both the price list and the roster are immutable configuration handed in
//! at construction ([`CoreConfig`]); the built-in defaults match the clinic's
//! published prices and doctors.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Doctor, ServiceOffering, PriceBreakdown, etc.)
//! - [`pricing`]: Price lookup, joining fee, bundle discounts, booking IDs
//! - [`directory`]: Doctor roster and search filter
//! - [`export`]: Receipt text and calendar event
//! - [`forms`]: Checkout and registration validation
//! - [`config`]: JSON configuration loading

pub mod config;
pub mod directory;
pub mod export;
pub mod forms;
pub mod models;
pub mod pricing;

// Re-export commonly used types
pub use config::{ConfigError, CoreConfig};
pub use directory::{search, Directory, SearchFilter, SlotPreference};
pub use export::{CalendarEvent, Receipt};
pub use forms::{CheckoutForm, RegistrationForm, ValidationErrors};
pub use models::{
    BookingConfirmation, BookingDetails, BookingId, BookingRequest, Doctor, PatientProfile,
    PriceBreakdown, ServiceMode, ServiceOffering, Specialty, TimeSlot,
};
pub use pricing::{compute_price, generate_booking_id, PricingConfig, PricingEngine, PricingError};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HealthyLifeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<PricingError> for HealthyLifeError {
    fn from(e: PricingError) -> Self {
        HealthyLifeError::InvalidInput(e.to_string())
    }
}

impl From<ConfigError> for HealthyLifeError {
    fn from(e: ConfigError) -> Self {
        HealthyLifeError::Configuration(e.to_string())
    }
}

impl From<serde_json::Error> for HealthyLifeError {
    fn from(e: serde_json::Error) -> Self {
        HealthyLifeError::Serialization(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Core with the clinic's built-in prices and doctors.
#[uniffi::export]
pub fn open_default() -> Arc<HealthyLifeCore> {
    Arc::new(HealthyLifeCore::default())
}

/// Core configured from a JSON file.
#[uniffi::export]
pub fn open_config(path: String) -> Result<Arc<HealthyLifeCore>, HealthyLifeError> {
    let config = CoreConfig::load(&path)?;
    Ok(Arc::new(HealthyLifeCore::from_config(config)?))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Immutable pricing engine and directory shared with the view layer.
#[derive(Debug, Default, uniffi::Object)]
pub struct HealthyLifeCore {
    engine: PricingEngine,
    directory: Directory,
}

impl HealthyLifeCore {
    pub fn from_config(config: CoreConfig) -> Result<Self, ConfigError> {
        let (engine, directory) = config.into_parts()?;
        Ok(Self { engine, directory })
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }
}

#[uniffi::export]
impl HealthyLifeCore {
    // =========================================================================
    // Pricing
    // =========================================================================

    /// Itemized price for `quantity` sessions of `service`.
    pub fn quote(
        &self,
        service: String,
        quantity: u32,
        is_new_patient: bool,
    ) -> Result<FfiPriceBreakdown, HealthyLifeError> {
        let price = self.engine.compute_price(&service, quantity, is_new_patient)?;
        Ok(FfiPriceBreakdown::from_breakdown(&service, &price))
    }

    /// Price the booking, issue a booking ID and render receipt/calendar.
    pub fn confirm_booking(
        &self,
        details: FfiBookingDetails,
        quantity: u32,
        is_new_patient: bool,
    ) -> Result<FfiConfirmation, HealthyLifeError> {
        let details = details.into_details()?;
        let confirmation = self.engine.confirm(details, quantity, is_new_patient)?;
        FfiConfirmation::from_confirmation(&confirmation)
    }

    // =========================================================================
    // Directory
    // =========================================================================

    pub fn list_doctors(&self) -> Vec<FfiDoctor> {
        self.directory.doctors().iter().map(FfiDoctor::from).collect()
    }

    /// Doctors matching every set field of `filter`, in roster order.
    pub fn search_doctors(&self, filter: FfiSearchFilter) -> Vec<FfiDoctor> {
        match filter.into_filter() {
            Some(filter) => self
                .directory
                .search(&filter)
                .into_iter()
                .map(FfiDoctor::from)
                .collect(),
            None => Vec::new(),
        }
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// Field errors for the checkout form; empty when valid.
    pub fn validate_checkout(&self, form: FfiCheckoutForm) -> Vec<FfiFieldError> {
        match CheckoutForm::from(form).validate() {
            Ok(()) => Vec::new(),
            Err(errors) => FfiFieldError::from_errors(&errors),
        }
    }

    pub fn register_patient(&self, form: FfiRegistrationForm) -> FfiRegistrationOutcome {
        match RegistrationForm::from(form).register(self.engine.config().joining_fee) {
            Ok(registration) => FfiRegistrationOutcome {
                errors: Vec::new(),
                patient: Some(registration.patient.into()),
                welcome_message: Some(registration.welcome_message),
            },
            Err(errors) => FfiRegistrationOutcome {
                errors: FfiFieldError::from_errors(&errors),
                patient: None,
                welcome_message: None,
            },
        }
    }
}

// =========================================================================
// FFI Types
// =========================================================================

fn to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// FFI-safe price breakdown.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPriceBreakdown {
    pub unit_price: f64,
    pub subtotal: f64,
    pub joining_fee: f64,
    pub discount: f64,
    pub total: f64,
    /// `$X.XX`
    pub total_display: String,
    /// "Telehealth" or "In-person"
    pub mode: String,
}

impl FfiPriceBreakdown {
    fn from_breakdown(service: &str, price: &PriceBreakdown) -> Self {
        Self {
            unit_price: to_f64(price.unit_price),
            subtotal: to_f64(price.subtotal),
            joining_fee: to_f64(price.joining_fee),
            discount: to_f64(price.discount),
            total: to_f64(price.total),
            total_display: models::format_currency(price.total),
            mode: ServiceMode::for_service(service).label().to_string(),
        }
    }
}

/// FFI-safe doctor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub services: Vec<String>,
    pub available_times: Vec<String>,
}

impl From<&Doctor> for FfiDoctor {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialty: doctor.specialty.label().to_string(),
            services: doctor.services.iter().map(|s| s.name().to_string()).collect(),
            available_times: doctor
                .available_times
                .iter()
                .map(|t| t.name().to_string())
                .collect(),
        }
    }
}

/// FFI-safe search filter. Blank or "Any" fields are unset.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiSearchFilter {
    pub name_pattern: Option<String>,
    pub specialty: Option<String>,
    pub service: Option<String>,
    pub time_slot: Option<String>,
}

fn chosen(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && !v.trim().eq_ignore_ascii_case("any"))
}

impl FfiSearchFilter {
    /// `None` when a field names something that does not exist; such a
    /// filter matches no doctor.
    fn into_filter(self) -> Option<SearchFilter> {
        let mut filter = SearchFilter {
            name_pattern: self.name_pattern,
            ..SearchFilter::default()
        };

        if let Some(specialty) = chosen(self.specialty) {
            match Specialty::parse(&specialty) {
                Some(s) => filter.specialty = Some(s),
                None => {
                    warn!("Unknown specialty in search: {:?}", specialty);
                    return None;
                }
            }
        }
        if let Some(service) = chosen(self.service) {
            match ServiceOffering::from_name(&service) {
                Some(s) => filter.service = Some(s),
                None => {
                    warn!("Unknown service in search: {:?}", service);
                    return None;
                }
            }
        }
        if let Some(slot) = chosen(self.time_slot) {
            match SlotPreference::parse(&slot) {
                Some(p) => filter.time_slot = p,
                None => {
                    warn!("Unknown time slot in search: {:?}", slot);
                    return None;
                }
            }
        }

        Some(filter)
    }
}

/// FFI-safe booking details.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBookingDetails {
    pub doctor: String,
    pub specialty: String,
    pub service: String,
    /// `YYYY-MM-DD`; blank for any day
    pub date: Option<String>,
    pub times: Option<String>,
    pub email: String,
}

impl FfiBookingDetails {
    fn into_details(self) -> Result<BookingDetails, HealthyLifeError> {
        let date = match self.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => Some(chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|e| {
                HealthyLifeError::InvalidInput(format!("Invalid date {:?}: {}", d, e))
            })?),
            None => None,
        };

        Ok(BookingDetails {
            doctor: self.doctor,
            specialty: self.specialty,
            service: self.service,
            date,
            times: self
                .times
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Any".to_string()),
            email: self.email,
        })
    }
}

/// FFI-safe booking confirmation with its downloadable artifacts.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConfirmation {
    pub booking_id: String,
    pub doctor: String,
    pub specialty: String,
    pub service: String,
    pub date: Option<String>,
    pub times: String,
    pub quantity: u32,
    pub total: f64,
    pub email: String,
    pub receipt_text: String,
    pub receipt_file_name: String,
    pub calendar_text: String,
    pub calendar_file_name: String,
    pub json: String,
}

impl FfiConfirmation {
    fn from_confirmation(confirmation: &BookingConfirmation) -> Result<Self, HealthyLifeError> {
        let receipt = Receipt::from_confirmation(confirmation);
        let event = CalendarEvent::from_confirmation(confirmation);

        Ok(Self {
            booking_id: confirmation.id.to_string(),
            doctor: confirmation.doctor.clone(),
            specialty: confirmation.specialty.clone(),
            service: confirmation.service.clone(),
            date: confirmation.date.map(|d| d.format("%Y-%m-%d").to_string()),
            times: confirmation.times.clone(),
            quantity: confirmation.quantity,
            total: to_f64(confirmation.total),
            email: confirmation.email.clone(),
            receipt_text: receipt.to_text(),
            receipt_file_name: receipt.file_name(),
            calendar_text: event.to_ics(),
            calendar_file_name: event.file_name(),
            json: confirmation.to_json()?,
        })
    }
}

/// FFI-safe field validation error.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiFieldError {
    pub field: String,
    pub message: String,
}

impl FfiFieldError {
    fn from_errors(errors: &ValidationErrors) -> Vec<Self> {
        errors
            .iter()
            .map(|(field, message)| FfiFieldError {
                field: field.to_string(),
                message: message.to_string(),
            })
            .collect()
    }
}

/// FFI-safe checkout form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact: String,
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub postcode: String,
    pub consent: bool,
    pub tips_opt_in: bool,
}

impl From<FfiCheckoutForm> for CheckoutForm {
    fn from(form: FfiCheckoutForm) -> Self {
        CheckoutForm {
            full_name: form.full_name,
            email: form.email,
            phone: form.phone,
            emergency_contact: form.emergency_contact,
            card_name: form.card_name,
            card_number: form.card_number,
            expiry: form.expiry,
            cvc: form.cvc,
            postcode: form.postcode,
            consent: form.consent,
            tips_opt_in: form.tips_opt_in,
        }
    }
}

/// FFI-safe registration form.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRegistrationForm {
    pub full_name: String,
    pub age: String,
    pub contact: String,
    pub emergency_contact: String,
    pub username: String,
    pub password: String,
    pub security_question: String,
    pub security_answer: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub consent: bool,
    pub tips_opt_in: bool,
}

impl From<FfiRegistrationForm> for RegistrationForm {
    fn from(form: FfiRegistrationForm) -> Self {
        RegistrationForm {
            full_name: form.full_name,
            age: form.age,
            contact: form.contact,
            emergency_contact: form.emergency_contact,
            username: form.username,
            password: form.password,
            security_question: form.security_question,
            security_answer: form.security_answer,
            card_number: form.card_number,
            expiry: form.expiry,
            cvc: form.cvc,
            consent: form.consent,
            tips_opt_in: form.tips_opt_in,
        }
    }
}

/// FFI-safe patient profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub local_id: String,
    pub full_name: String,
    pub age: u8,
    pub contact: String,
    pub username: String,
    pub is_new_patient: bool,
}

impl From<PatientProfile> for FfiPatient {
    fn from(patient: PatientProfile) -> Self {
        Self {
            local_id: patient.local_id,
            full_name: patient.full_name,
            age: patient.age,
            contact: patient.contact,
            username: patient.username,
            is_new_patient: patient.is_new_patient,
        }
    }
}

/// Registration result: either field errors or the new patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRegistrationOutcome {
    pub errors: Vec<FfiFieldError>,
    pub patient: Option<FfiPatient>,
    pub welcome_message: Option<String>,
}
