//! Patient models.

use serde::{Deserialize, Serialize};

/// A newly registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    /// Local UUID - generated at registration
    pub local_id: String,
    pub full_name: String,
    pub age: u8,
    /// Email or phone used for booking confirmations
    pub contact: String,
    pub emergency_contact: String,
    pub username: String,
    /// Opted in to health tips and reminders
    pub tips_opt_in: bool,
    /// New patients pay the joining fee on their first booking
    pub is_new_patient: bool,
    /// Creation timestamp
    pub created_at: String,
}

impl PatientProfile {
    /// Create a new patient with required fields.
    pub fn new(
        full_name: String,
        age: u8,
        contact: String,
        emergency_contact: String,
        username: String,
    ) -> Self {
        Self {
            local_id: uuid::Uuid::new_v4().to_string(),
            full_name,
            age,
            contact,
            emergency_contact,
            username,
            tips_opt_in: false,
            is_new_patient: true,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// First word of the full name, for greetings.
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient() {
        let patient = PatientProfile::new(
            "Sam Taylor".into(),
            34,
            "sam@example.com".into(),
            "Alex 0400 000 000".into(),
            "samt".into(),
        );
        assert!(patient.is_new_patient);
        assert!(!patient.tips_opt_in);
        assert_eq!(patient.local_id.len(), 36); // UUID format
        assert_eq!(patient.first_name(), "Sam");
    }
}
