//! Built-in clinic roster.

use crate::models::{Doctor, ServiceOffering, Specialty, TimeSlot};

/// The five doctors listed on the booking page.
pub fn default_roster() -> Vec<Doctor> {
    use ServiceOffering::*;
    use TimeSlot::*;

    vec![
        Doctor::new(
            "doc-1",
            "Dr. Anna Patel",
            Specialty::GeneralPractice,
            [GeneralConsultation, TelehealthAppointment],
            [Morning, Afternoon],
        ),
        Doctor::new(
            "doc-2",
            "Dr. Ben Okafor",
            Specialty::Pediatrics,
            [GeneralConsultation, Vaccination],
            [Morning],
        ),
        Doctor::new(
            "doc-3",
            "Dr. Chloe Nguyen",
            Specialty::GeneralPractice,
            [GeneralConsultation, Vaccination],
            [Afternoon, Evening],
        ),
        Doctor::new(
            "doc-4",
            "Dr. David Kim",
            Specialty::Telehealth,
            [TelehealthAppointment],
            [Evening],
        ),
        Doctor::new(
            "doc-5",
            "Dr. Emma Wilson",
            Specialty::GeneralPractice,
            [GeneralConsultation, Vaccination, TelehealthAppointment],
            [Morning, Evening],
        ),
    ]
}
