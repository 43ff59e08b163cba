//! Deterministic record-of-the-day selection.
//!
//! The pick is a pure function of the calendar date and the record-list
//! length: the date collapses to an integer seed, the seed drives a small
//! multiplicative congruential generator, and exactly one draw selects the
//! index. A changed list length or order between calls on the same day may
//! change the pick; that is accepted, not hardened against.

use chrono::{Datelike, NaiveDate};

use crate::catalog::record::CatalogRecord;
use crate::{PelagosError, Result};

const LCG_MODULUS: u64 = (1 << 35) - 31;
const LCG_MULTIPLIER: u64 = 185_852;

/// Seeded multiplicative congruential generator yielding values in [0, 1).
#[derive(Debug, Clone)]
pub struct DaySeededRng {
    state: u64,
}

impl DaySeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(day_seed(date))
    }

    /// Advance the generator and return the next value in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        // state < 2^35 and multiplier < 2^18, so the product fits in u64.
        self.state = (self.state * LCG_MULTIPLIER) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

/// Collapse a calendar date to the integer seed `year*10000 + month*100 +
/// day` (month 1-indexed).
pub fn day_seed(date: NaiveDate) -> u64 {
    let packed =
        date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64;
    packed.rem_euclid(LCG_MODULUS as i64) as u64
}

/// Pick the record of the day: one draw of the date-seeded generator,
/// scaled to the list length. Stable for all calls on the same calendar
/// day against a list of the same length.
pub fn pick_of_the_day(records: &[CatalogRecord], date: NaiveDate) -> Result<&CatalogRecord> {
    if records.is_empty() {
        return Err(PelagosError::EmptyCatalog);
    }
    let mut rng = DaySeededRng::for_date(date);
    let index = (rng.next_unit() * records.len() as f64) as usize;
    Ok(&records[index])
}
