//! Booking reference generation.
//!
//! IDs are `HL-` followed by the last 8 base-36 digits of the epoch
//! millisecond timestamp, uppercase. Not cryptographic; short enough to read
//! out over the phone.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::models::BookingId;

/// Prefix of every booking reference.
pub const BOOKING_ID_PREFIX: &str = "HL";

const SUFFIX_LEN: usize = 8;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Last millisecond handed out in this process.
static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Generate a booking ID for the current instant.
///
/// Calls within the same millisecond advance to the next unused one, so a
/// process never issues the same ID twice.
pub fn generate_booking_id() -> BookingId {
    let now = chrono::Utc::now().timestamp_millis();
    booking_id_at(reserve_millis(now))
}

/// Booking ID for a given epoch millisecond.
pub fn booking_id_at(millis: i64) -> BookingId {
    let encoded = to_base36(millis.unsigned_abs());
    let tail = &encoded[encoded.len().saturating_sub(SUFFIX_LEN)..];
    BookingId::from_raw(format!("{}-{:0>width$}", BOOKING_ID_PREFIX, tail, width = SUFFIX_LEN))
}

fn reserve_millis(now: i64) -> i64 {
    let mut last = LAST_ISSUED_MS.load(Ordering::SeqCst);
    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_ISSUED_MS.compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
