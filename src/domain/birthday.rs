//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for rendering and storage.
const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Date format accepted from user input at the prompt.
const INPUT_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Holds a valid calendar date and renders it in `dd-mm-yyyy` form. The
/// user-facing `dd.mm.yyyy` text form is parsed by [`Birthday::parse`];
/// constructing from an already-validated [`NaiveDate`] is infallible.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::parse("14.02.1990").unwrap();
/// assert_eq!(birthday.to_string(), "14-02-1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a Birthday from a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a Birthday from user input in `dd.mm.yyyy` form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not a
    /// valid calendar date in that form.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(text, INPUT_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next calendar occurrence of this birthday on or after `today`.
    ///
    /// A Feb 29 birthday maps to Mar 1 in non-leap target years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = Self::occurrence_in(self.0, today.year());
        if this_year >= today {
            this_year
        } else {
            Self::occurrence_in(self.0, today.year() + 1)
        }
    }

    /// Days from `today` (inclusive) to the next occurrence (exclusive).
    ///
    /// Zero when `today` matches the birthday's month and day.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
            // only reachable for Feb 29 in a non-leap year
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
    }
}

// Serde support - serialize in the same dd-mm-yyyy form the prompt renders
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from dd-mm-yyyy with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DISPLAY_FORMAT)
            .map(Birthday)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
