//! Doctor directory records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ServiceOffering;

/// Clinical specialty of a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "GP", alias = "General Practice")]
    GeneralPractice,
    #[serde(rename = "Pediatrics")]
    Pediatrics,
    #[serde(rename = "Vaccination")]
    Vaccination,
    #[serde(rename = "Telehealth")]
    Telehealth,
}

impl Specialty {
    pub const ALL: [Specialty; 4] = [
        Specialty::GeneralPractice,
        Specialty::Pediatrics,
        Specialty::Vaccination,
        Specialty::Telehealth,
    ];

    /// Short code used in filters and query strings.
    pub fn code(&self) -> &'static str {
        match self {
            Specialty::GeneralPractice => "GP",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::Vaccination => "Vaccination",
            Specialty::Telehealth => "Telehealth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Specialty::GeneralPractice => "General Practice",
            other => other.code(),
        }
    }

    /// Parse either the code or the label (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|s| {
            s.code().eq_ignore_ascii_case(value) || s.label().eq_ignore_ascii_case(value)
        })
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse time-of-day availability bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn name(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A doctor in the clinic directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Stable unique identifier
    pub id: String,
    /// Display name (e.g., "Dr. Anna Patel")
    pub name: String,
    pub specialty: Specialty,
    /// Services this doctor offers (never empty)
    pub services: BTreeSet<ServiceOffering>,
    /// Time-of-day buckets this doctor is available (never empty)
    pub available_times: BTreeSet<TimeSlot>,
}

impl Doctor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        specialty: Specialty,
        services: impl IntoIterator<Item = ServiceOffering>,
        available_times: impl IntoIterator<Item = TimeSlot>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty,
            services: services.into_iter().collect(),
            available_times: available_times.into_iter().collect(),
        }
    }

    pub fn offers(&self, service: ServiceOffering) -> bool {
        self.services.contains(&service)
    }

    pub fn is_available(&self, slot: TimeSlot) -> bool {
        self.available_times.contains(&slot)
    }

    /// Case-insensitive substring match on the doctor's name.
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> Doctor {
        Doctor::new(
            "doc-1",
            "Dr. Anna Patel",
            Specialty::GeneralPractice,
            [ServiceOffering::GeneralConsultation, ServiceOffering::TelehealthAppointment],
            [TimeSlot::Morning, TimeSlot::Afternoon],
        )
    }

    #[test]
    fn test_name_contains_ignores_case() {
        let doctor = anna();
        assert!(doctor.name_contains("anna"));
        assert!(doctor.name_contains("PATEL"));
        assert!(!doctor.name_contains("chloe"));
    }

    #[test]
    fn test_offers_and_availability() {
        let doctor = anna();
        assert!(doctor.offers(ServiceOffering::TelehealthAppointment));
        assert!(!doctor.offers(ServiceOffering::Vaccination));
        assert!(doctor.is_available(TimeSlot::Morning));
        assert!(!doctor.is_available(TimeSlot::Evening));
    }

    #[test]
    fn test_specialty_parse() {
        assert_eq!(Specialty::parse("GP"), Some(Specialty::GeneralPractice));
        assert_eq!(Specialty::parse("general practice"), Some(Specialty::GeneralPractice));
        assert_eq!(Specialty::parse("Pediatrics"), Some(Specialty::Pediatrics));
        assert_eq!(Specialty::parse("Cardiology"), None);
    }

    #[test]
    fn test_specialty_serde_accepts_label() {
        let parsed: Specialty = serde_json::from_str("\"General Practice\"").unwrap();
        assert_eq!(parsed, Specialty::GeneralPractice);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"GP\"");
    }

    #[test]
    fn test_time_slot_parse() {
        assert_eq!(TimeSlot::parse("evening"), Some(TimeSlot::Evening));
        assert_eq!(TimeSlot::parse("Any"), None);
    }
}
