//! Receipt and calendar export for confirmed bookings.

mod calendar;
mod receipt;

pub use calendar::*;
pub use receipt::*;
