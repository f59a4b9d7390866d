//! Search filter for the doctor directory.

use serde::{Deserialize, Serialize};

use crate::models::{Doctor, ServiceOffering, Specialty, TimeSlot};

/// Preferred time of day; `Any` matches every doctor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotPreference {
    #[default]
    Any,
    Only(TimeSlot),
}

impl SlotPreference {
    /// Parse a time-of-day choice; blank and "Any" mean no preference.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            return Some(SlotPreference::Any);
        }
        TimeSlot::parse(value).map(SlotPreference::Only)
    }

    pub fn accepts(&self, doctor: &Doctor) -> bool {
        match self {
            SlotPreference::Any => true,
            SlotPreference::Only(slot) => doctor.is_available(*slot),
        }
    }
}

impl From<TimeSlot> for SlotPreference {
    fn from(slot: TimeSlot) -> Self {
        SlotPreference::Only(slot)
    }
}

/// Conjunction of optional criteria. Unset criteria always match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Case-insensitive substring of the doctor's name
    pub name_pattern: Option<String>,
    pub specialty: Option<Specialty>,
    pub service: Option<ServiceOffering>,
    pub time_slot: SlotPreference,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.specialty = Some(specialty);
        self
    }

    pub fn with_service(mut self, service: ServiceOffering) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_time_slot(mut self, slot: impl Into<SlotPreference>) -> Self {
        self.time_slot = slot.into();
        self
    }

    /// Name pattern with surrounding whitespace removed; blank counts as unset.
    fn name_pattern(&self) -> Option<&str> {
        self.name_pattern
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.name_pattern().is_none()
            && self.specialty.is_none()
            && self.service.is_none()
            && self.time_slot == SlotPreference::Any
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(pattern) = self.name_pattern() {
            if !doctor.name_contains(pattern) {
                return false;
            }
        }
        if let Some(specialty) = self.specialty {
            if doctor.specialty != specialty {
                return false;
            }
        }
        if let Some(service) = self.service {
            if !doctor.offers(service) {
                return false;
            }
        }
        self.time_slot.accepts(doctor)
    }
}
