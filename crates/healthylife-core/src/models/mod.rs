//! Domain models for the booking core.

mod booking;
mod doctor;
mod patient;
mod service;

pub use booking::*;
pub use doctor::*;
pub use patient::*;
pub use service::*;
