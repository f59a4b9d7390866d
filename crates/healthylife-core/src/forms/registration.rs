//! New patient registration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{char_len, is_valid_card_number, is_valid_cvc, is_valid_expiry, ValidationErrors};
use crate::models::PatientProfile;

/// Security questions offered on the registration page.
pub const SECURITY_QUESTIONS: [&str; 3] = ["pet", "street", "teacher"];

const MAX_AGE: i64 = 120;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistrationForm {
    pub full_name: String,
    /// As typed; a whole number 0-120, blank counts as 0
    pub age: String,
    /// Email or phone
    pub contact: String,
    pub emergency_contact: String,
    pub username: String,
    pub password: String,
    /// One of [`SECURITY_QUESTIONS`]
    pub security_question: String,
    pub security_answer: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub consent: bool,
    pub tips_opt_in: bool,
}

/// A successful registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub patient: PatientProfile,
    pub welcome_message: String,
}

impl RegistrationForm {
    fn parsed_age(&self) -> Option<u8> {
        let age = self.age.trim();
        if age.is_empty() {
            return Some(0);
        }
        age.parse::<i64>()
            .ok()
            .filter(|age| (0..=MAX_AGE).contains(age))
            .and_then(|age| u8::try_from(age).ok())
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(char_len(&self.full_name) >= 2, "full_name", "Enter your full name");
        errors.check(self.parsed_age().is_some(), "age", "Enter an age between 0 and 120");
        errors.check(
            char_len(&self.contact) >= 5,
            "contact",
            "Enter a valid contact (email or phone)",
        );
        errors.check(
            char_len(&self.emergency_contact) >= 5,
            "emergency_contact",
            "Enter an emergency contact",
        );
        errors.check(char_len(&self.username) >= 3, "username", "Choose a username");

        errors.check(
            char_len(&self.password) >= 8,
            "password",
            "Password must be at least 8 characters",
        );
        errors.check(
            self.password.chars().any(|c| c.is_ascii_uppercase()),
            "password",
            "Include an uppercase letter",
        );
        errors.check(
            self.password.chars().any(|c| c.is_ascii_digit()),
            "password",
            "Include a number",
        );

        errors.check(
            SECURITY_QUESTIONS.contains(&self.security_question.as_str()),
            "security_question",
            "Select a question",
        );
        errors.check(
            char_len(&self.security_answer) >= 2,
            "security_answer",
            "Provide an answer",
        );
        errors.check(
            is_valid_card_number(&self.card_number),
            "card_number",
            "Enter a 16-digit card number",
        );
        errors.check(is_valid_expiry(&self.expiry), "expiry", "MM/YY");
        errors.check(is_valid_cvc(&self.cvc), "cvc", "3 or 4 digits");
        errors.check(self.consent, "consent", "Consent is required");

        errors.into_result()
    }

    /// Validate and create the patient profile. Card and credentials are not
    /// kept on the profile.
    pub fn register(&self, joining_fee: Decimal) -> Result<Registration, ValidationErrors> {
        self.validate()?;

        let age = self.parsed_age().unwrap_or_default();
        let mut patient = PatientProfile::new(
            self.full_name.clone(),
            age,
            self.contact.clone(),
            self.emergency_contact.clone(),
            self.username.clone(),
        );
        patient.tips_opt_in = self.tips_opt_in;

        let welcome_message = format!(
            "Welcome, {}! Your ${} joining fee will be processed securely.",
            patient.full_name,
            joining_fee.normalize()
        );

        Ok(Registration {
            patient,
            welcome_message,
        })
    }
}
