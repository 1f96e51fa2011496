//! The address book: a uniquely-keyed, insertion-ordered collection of
//! contact records.
//!
//! Records are filed under their rendered name. Enumeration, search, and
//! pagination all walk the records in the order they were first added.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Contacts shown per page when the caller does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// What [`AddressBook::add_record`] did with the incoming data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created under the name.
    Created,
    /// The name was already filed; the phone was appended and the birthday
    /// overwritten only when a new one was supplied.
    Updated,
}

/// A bounded slice of the contact listing.
///
/// Carries enough context for callers to render `Page X/Y` headers and
/// absolute 1-based indices.
#[derive(Debug)]
pub struct Page<'a> {
    /// Records on this page, in book order.
    pub records: &'a [Record],
    /// 1-based page number.
    pub number: usize,
    /// Total number of pages at this page size.
    pub total: usize,
    /// Absolute index of the first record on this page.
    pub offset: usize,
}

/// Mapping from contact name to record, with stable enumeration order.
///
/// Invariant: every record's name equals the key it is filed under, and
/// names are unique. Repeated adds under the same name accumulate into the
/// existing record instead of duplicating it.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert-or-update keyed by name.
    ///
    /// A new name creates a record with the single phone and optional
    /// birthday. An existing name appends the phone to the record and
    /// overwrites its birthday only when one is supplied.
    pub fn add_record(
        &mut self,
        name: Name,
        phone: Phone,
        birthday: Option<Birthday>,
    ) -> AddOutcome {
        if let Some(&slot) = self.index.get(name.as_str()) {
            let record = &mut self.records[slot];
            record.add_phone(phone);
            if let Some(birthday) = birthday {
                record.set_birthday(birthday);
            }
            AddOutcome::Updated
        } else {
            let mut record = Record::new(name);
            record.add_phone(phone);
            if let Some(birthday) = birthday {
                record.set_birthday(birthday);
            }
            self.index
                .insert(record.name().as_str().to_string(), self.records.len());
            self.records.push(record);
            AddOutcome::Created
        }
    }

    /// Exact-key lookup. Absence is a normal result.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    /// Exact-key lookup, mutable.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let slot = *self.index.get(name)?;
        Some(&mut self.records[slot])
    }

    /// Replace every occurrence of `old` with `new` on the named record.
    ///
    /// # Errors
    ///
    /// `ContactNotFound` when no record carries the name, `PhoneNotFound`
    /// when the record holds no phone equal to `old`. The book is unchanged
    /// in both cases.
    pub fn change_phone(&mut self, name: &str, old: &Phone, new: &Phone) -> BookResult<()> {
        let record = self
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        if record.change_phone(old, new) {
            Ok(())
        } else {
            Err(BookError::PhoneNotFound {
                name: name.to_string(),
                phone: old.as_str().to_string(),
            })
        }
    }

    /// Set or overwrite the birthday on the named record.
    ///
    /// # Errors
    ///
    /// `ContactNotFound` when no record carries the name.
    pub fn set_birthday(&mut self, name: &str, birthday: Birthday) -> BookResult<()> {
        let record = self
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        record.set_birthday(birthday);
        Ok(())
    }

    /// All records in insertion order.
    pub fn contacts(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records in insertion order. Restartable.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Substring search against the rendered name or any rendered phone.
    ///
    /// Name matching is case-insensitive; no match yields an empty vec.
    pub fn search(&self, text: &str) -> Vec<&Record> {
        let needle = text.to_lowercase();
        self.iter()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&needle)
                    || record.phones().iter().any(|p| p.as_str().contains(text))
            })
            .collect()
    }

    /// A 1-indexed page of the contact listing.
    ///
    /// The last page may be partial.
    ///
    /// # Errors
    ///
    /// `PageOutOfRange` when `number` falls outside `1..=total` (an empty
    /// book has zero pages, so every request is out of range) or when
    /// `size` is zero.
    pub fn page(&self, number: usize, size: usize) -> BookResult<Page<'_>> {
        let total = if size == 0 {
            0
        } else {
            (self.records.len() + size - 1) / size
        };

        if number < 1 || number > total {
            return Err(BookError::PageOutOfRange {
                page: number,
                total,
            });
        }

        let offset = (number - 1) * size;
        let end = (offset + size).min(self.records.len());

        Ok(Page {
            records: &self.records[offset..end],
            number,
            total,
            offset,
        })
    }

    /// Names with a birthday falling within `[today, today + horizon_days)`,
    /// grouped by weekday in Monday-first order.
    ///
    /// Occurrences landing on a weekend are shifted forward to the following
    /// Monday before the window check, so weekend birthdays near the end of
    /// the window drop out and Saturday/Sunday groups are always empty.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        horizon_days: i64,
    ) -> Vec<(Weekday, Vec<String>)> {
        const WEEKDAYS: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];

        let window_end = today + Duration::days(horizon_days);
        let mut groups: [Vec<String>; 7] = Default::default();

        for record in self {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let mut occurrence = birthday.next_occurrence(today);
            let from_monday = occurrence.weekday().num_days_from_monday();
            if from_monday >= 5 {
                occurrence = occurrence + Duration::days(7 - i64::from(from_monday));
            }
            if occurrence < window_end {
                let slot = occurrence.weekday().num_days_from_monday() as usize;
                groups[slot].push(record.name().as_str().to_string());
            }
        }

        WEEKDAYS
            .into_iter()
            .zip(groups)
            .filter(|(_, names)| !names.is_empty())
            .collect()
    }

    /// Rebuild a book from stored records, refusing duplicate names.
    fn from_records(records: Vec<Record>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(records.len());
        for (slot, record) in records.iter().enumerate() {
            if index
                .insert(record.name().as_str().to_string(), slot)
                .is_some()
            {
                return Err(format!(
                    "duplicate contact name: {}",
                    record.name().as_str()
                ));
            }
        }
        Ok(Self { records, index })
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// Serde support - the persisted form is just the ordered record list;
// the name index is rebuilt (and re-checked) on the way in.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        AddressBook::from_records(records).map_err(serde::de::Error::custom)
    }
}
