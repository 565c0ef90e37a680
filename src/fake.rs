//! Fake data generation helpers.
//!
//! Random name tokens, calendar dates and bounded integers, all drawn from a
//! caller-supplied RNG so a seeded run is reproducible.

use rand::Rng;
use std::fmt;

/// Month abbreviations with their day counts. February never has 29 days.
pub const MONTHS: [(&str, u8); 12] = [
    ("Jan", 31),
    ("Feb", 28),
    ("Mar", 31),
    ("Apr", 30),
    ("May", 31),
    ("Jun", 30),
    ("Jul", 31),
    ("Aug", 31),
    ("Sep", 30),
    ("Oct", 31),
    ("Nov", 30),
    ("Dec", 31),
];

/// Day count for a zero-based month index
pub fn days_in_month(month: usize) -> u8 {
    MONTHS[month].1
}

/// A generated date, rendered as `DD-Mon-YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u8,
    /// Zero-based index into [`MONTHS`]
    pub month: usize,
    pub year: u16,
}

impl CalendarDate {
    pub fn month_abbrev(&self) -> &'static str {
        MONTHS[self.month].0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}-{}", self.day, self.month_abbrev(), self.year)
    }
}

/// Fake data generator over any RNG
pub struct FakeData<R: Rng> {
    rng: R,
}

impl<R: Rng> FakeData<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Name-like token: one uppercase letter then `len - 1` lowercase letters.
    /// Lengths below 1 give an empty string.
    pub fn name(&mut self, len: i32) -> String {
        if len < 1 {
            return String::new();
        }
        let mut token = String::with_capacity(len as usize);
        token.push(self.rng.random_range(b'A'..=b'Z') as char);
        for _ in 1..len {
            token.push(self.rng.random_range(b'a'..=b'z') as char);
        }
        token
    }

    /// Name token followed by a fixed suffix, e.g. `"Qwert House"`
    pub fn suffixed_name(&mut self, len: i32, suffix: &str) -> String {
        let mut token = self.name(len);
        token.push_str(suffix);
        token
    }

    /// Date with a uniform month, a uniform year in `[min_year, max_year]`
    /// and a uniform day within that month
    pub fn date(&mut self, min_year: u16, max_year: u16) -> CalendarDate {
        let month = self.rng.random_range(0..MONTHS.len());
        let year = self.rng.random_range(min_year..=max_year);
        let day = self.rng.random_range(1..=days_in_month(month));
        CalendarDate { day, month, year }
    }

    /// Uniform integer in `[min, max]`
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.random_range(min..=max)
    }

    /// Uniform index in `[0, len)`
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// `amount` distinct values from `[0, len)`, in random order
    pub fn sample_distinct(&mut self, len: usize, amount: usize) -> anyhow::Result<Vec<usize>> {
        if amount > len {
            anyhow::bail!(
                "cannot sample {} distinct values from a population of {}",
                amount,
                len
            );
        }
        Ok(rand::seq::index::sample(&mut self.rng, len, amount).into_vec())
    }
}
