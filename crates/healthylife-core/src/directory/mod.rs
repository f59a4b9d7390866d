//! Doctor directory and search.
//!
//! The directory is fixed at construction and never mutated, so a single
//! instance can be shared across threads and searched concurrently.

mod filter;
mod seed;

pub use filter::*;
pub use seed::*;

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::models::Doctor;

/// Directory construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Duplicate doctor id: {0}")]
    DuplicateId(String),

    #[error("Doctor {0} offers no services")]
    NoServices(String),

    #[error("Doctor {0} has no available times")]
    NoAvailability(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Filter `doctors` in their original order.
pub fn search<'a>(filter: &SearchFilter, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
    doctors.iter().filter(|d| filter.matches(d)).collect()
}

/// Read-only roster of doctors.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    doctors: Vec<Doctor>,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            doctors: default_roster(),
        }
    }
}

impl Directory {
    /// Build a directory, checking ids are unique and every record is bookable.
    pub fn new(doctors: Vec<Doctor>) -> DirectoryResult<Self> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if !seen.insert(doctor.id.as_str()) {
                return Err(DirectoryError::DuplicateId(doctor.id.clone()));
            }
            if doctor.services.is_empty() {
                return Err(DirectoryError::NoServices(doctor.id.clone()));
            }
            if doctor.available_times.is_empty() {
                return Err(DirectoryError::NoAvailability(doctor.id.clone()));
            }
        }
        Ok(Self { doctors })
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Lazily iterate over matching doctors in directory order.
    pub fn matching<'a>(
        &'a self,
        filter: &'a SearchFilter,
    ) -> impl Iterator<Item = &'a Doctor> + 'a {
        self.doctors.iter().filter(move |d| filter.matches(d))
    }

    pub fn search(&self, filter: &SearchFilter) -> Vec<&Doctor> {
        let results = search(filter, &self.doctors);
        debug!("Directory search matched {} of {} doctors", results.len(), self.doctors.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceOffering, Specialty, TimeSlot};

    #[test]
    fn test_default_roster_is_valid() {
        let roster = default_roster();
        assert_eq!(roster.len(), 5);
        assert!(Directory::new(roster).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut roster = default_roster();
        roster[1].id = "doc-1".into();
        assert_eq!(
            Directory::new(roster),
            Err(DirectoryError::DuplicateId("doc-1".into()))
        );
    }

    #[test]
    fn test_empty_services_rejected() {
        let mut roster = default_roster();
        roster[2].services.clear();
        assert_eq!(
            Directory::new(roster),
            Err(DirectoryError::NoServices("doc-3".into()))
        );
    }

    #[test]
    fn test_empty_times_rejected() {
        let roster = vec![Doctor::new(
            "doc-x",
            "Dr. Nobody",
            Specialty::Pediatrics,
            [ServiceOffering::Vaccination],
            Vec::<TimeSlot>::new(),
        )];
        assert_eq!(
            Directory::new(roster),
            Err(DirectoryError::NoAvailability("doc-x".into()))
        );
    }

    #[test]
    fn test_get_by_id() {
        let directory = Directory::default();
        assert_eq!(directory.get("doc-4").map(|d| d.name.as_str()), Some("Dr. David Kim"));
        assert!(directory.get("doc-99").is_none());
    }

    #[test]
    fn test_matching_is_lazy_view_of_search() {
        let directory = Directory::default();
        let filter = SearchFilter::new().with_time_slot(TimeSlot::Evening);
        let lazy: Vec<&Doctor> = directory.matching(&filter).collect();
        assert_eq!(lazy, directory.search(&filter));
        assert_eq!(lazy.len(), 3);
    }
}
