//! Contact and payment details collected on the confirm page.

use serde::{Deserialize, Serialize};

use super::{is_valid_card_number, is_valid_cvc, is_valid_email, is_valid_expiry, ValidationErrors};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Optional
    pub emergency_contact: String,
    pub card_name: String,
    /// Spaces are allowed between digit groups
    pub card_number: String,
    /// `MM/YY`
    pub expiry: String,
    pub cvc: String,
    pub postcode: String,
    pub consent: bool,
    pub tips_opt_in: bool,
}

impl CheckoutForm {
    /// Card number with all whitespace removed.
    pub fn normalized_card_number(&self) -> String {
        self.card_number.split_whitespace().collect()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.check(!self.full_name.is_empty(), "full_name", "Enter full name");
        errors.check(is_valid_email(&self.email), "email", "Enter a valid email");
        errors.check(!self.phone.is_empty(), "phone", "Enter a phone number");
        errors.check(self.consent, "consent", "Consent is required");
        errors.check(!self.card_name.is_empty(), "card_name", "Enter cardholder name");
        errors.check(
            is_valid_card_number(&self.normalized_card_number()),
            "card_number",
            "Enter a 16-digit card number",
        );
        errors.check(is_valid_expiry(&self.expiry), "expiry", "Enter expiry in MM/YY");
        errors.check(is_valid_cvc(&self.cvc), "cvc", "Enter a 3 or 4 digit CVC");
        errors.check(!self.postcode.is_empty(), "postcode", "Enter billing postcode");

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Sam Taylor".into(),
            email: "sam@example.com".into(),
            phone: "0400 000 000".into(),
            emergency_contact: String::new(),
            card_name: "S TAYLOR".into(),
            card_number: "4111 1111 1111 1111".into(),
            expiry: "08/27".into(),
            cvc: "123".into(),
            postcode: "3000".into(),
            consent: true,
            tips_opt_in: false,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_card_number_whitespace_is_ignored() {
        let form = valid_form();
        assert_eq!(form.normalized_card_number(), "4111111111111111");
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = CheckoutForm::default().validate().unwrap_err();

        assert_eq!(errors.len(), 9);
        assert_eq!(errors.get("full_name"), Some("Enter full name"));
        assert_eq!(errors.get("email"), Some("Enter a valid email"));
        assert_eq!(errors.get("phone"), Some("Enter a phone number"));
        assert_eq!(errors.get("consent"), Some("Consent is required"));
        assert_eq!(errors.get("card_name"), Some("Enter cardholder name"));
        assert_eq!(errors.get("card_number"), Some("Enter a 16-digit card number"));
        assert_eq!(errors.get("expiry"), Some("Enter expiry in MM/YY"));
        assert_eq!(errors.get("cvc"), Some("Enter a 3 or 4 digit CVC"));
        assert_eq!(errors.get("postcode"), Some("Enter billing postcode"));
        assert_eq!(errors.get("emergency_contact"), None);
    }

    #[test]
    fn test_single_bad_field() {
        let mut form = valid_form();
        form.expiry = "13/27".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("expiry"), Some("Enter expiry in MM/YY"));
    }
}
