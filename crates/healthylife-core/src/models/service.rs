//! Bookable service offerings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A service a patient can book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceOffering {
    #[serde(rename = "General Consultation")]
    GeneralConsultation,
    #[serde(rename = "Vaccination")]
    Vaccination,
    #[serde(rename = "Telehealth Appointment")]
    TelehealthAppointment,
}

/// How a service is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceMode {
    InPerson,
    Telehealth,
}

impl ServiceOffering {
    /// Every offering, in catalog order.
    pub const ALL: [ServiceOffering; 3] = [
        ServiceOffering::GeneralConsultation,
        ServiceOffering::Vaccination,
        ServiceOffering::TelehealthAppointment,
    ];

    /// Name as shown on the booking pages and used as the price table key.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceOffering::GeneralConsultation => "General Consultation",
            ServiceOffering::Vaccination => "Vaccination",
            ServiceOffering::TelehealthAppointment => "Telehealth Appointment",
        }
    }

    /// Look up an offering by its display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub fn mode(&self) -> ServiceMode {
        match self {
            ServiceOffering::TelehealthAppointment => ServiceMode::Telehealth,
            _ => ServiceMode::InPerson,
        }
    }
}

impl fmt::Display for ServiceOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ServiceMode {
    /// Mode for a raw service name; anything not recognized is in-person.
    pub fn for_service(service: &str) -> Self {
        ServiceOffering::from_name(service)
            .map(|s| s.mode())
            .unwrap_or(ServiceMode::InPerson)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceMode::InPerson => "In-person",
            ServiceMode::Telehealth => "Telehealth",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(
            ServiceOffering::from_name("Telehealth Appointment"),
            Some(ServiceOffering::TelehealthAppointment)
        );
        assert_eq!(
            ServiceOffering::from_name("general consultation"),
            Some(ServiceOffering::GeneralConsultation)
        );
        assert_eq!(ServiceOffering::from_name("Massage"), None);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ServiceOffering::TelehealthAppointment).unwrap();
        assert_eq!(json, "\"Telehealth Appointment\"");

        let parsed: ServiceOffering = serde_json::from_str("\"Vaccination\"").unwrap();
        assert_eq!(parsed, ServiceOffering::Vaccination);
    }

    #[test]
    fn test_service_mode() {
        assert_eq!(ServiceMode::for_service("Telehealth Appointment"), ServiceMode::Telehealth);
        assert_eq!(ServiceMode::for_service("Vaccination"), ServiceMode::InPerson);
        assert_eq!(ServiceMode::for_service("Unknown Service").label(), "In-person");
    }
}
