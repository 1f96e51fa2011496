//! Record model representing a single contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at construction; it is the key the address book files
/// the record under. Phone numbers keep their insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// Returns `false` (and leaves the record untouched) when no phone
    /// matches `old`. Not-found is a reported outcome, not a fault.
    pub fn change_phone(&mut self, old: &Phone, new: &Phone) -> bool {
        let mut changed = false;
        for phone in &mut self.phones {
            if phone == old {
                *phone = new.clone();
                changed = true;
            }
        }
        changed
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// `None` when no birthday is set; `Some(0)` when `today` matches the
    /// birthday's month and day.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until(today))
    }

    /// Days until the next birthday, anchored at the local current date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Render the record as a single line, counting days from `today`.
    pub fn render_at(&self, today: NaiveDate) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        match self.birthday {
            Some(birthday) => format!(
                "{}: {}, birthday: {} (in {} days)",
                self.name,
                phones,
                birthday,
                birthday.days_until(today)
            ),
            None => format!("{}: {}, birthday: N/A", self.name, phones),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_at(Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn phone(digits: &str) -> Phone {
        Phone::new(digits).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record_has_no_phones() {
        let rec = record("Ada");
        assert_eq!(rec.name().as_str(), "Ada");
        assert!(rec.phones().is_empty());
        assert!(rec.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut rec = record("Ada");
        rec.add_phone(phone("5551234567"));
        rec.add_phone(phone("9998887777"));
        rec.add_phone(phone("5551234567"));

        let rendered: Vec<_> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(rendered, ["5551234567", "9998887777", "5551234567"]);
    }

    #[test]
    fn test_change_phone_replaces_every_match() {
        let mut rec = record("Ada");
        rec.add_phone(phone("5551234567"));
        rec.add_phone(phone("9998887777"));
        rec.add_phone(phone("5551234567"));

        assert!(rec.change_phone(&phone("5551234567"), &phone("1112223333")));

        let rendered: Vec<_> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(rendered, ["1112223333", "9998887777", "1112223333"]);
    }

    #[test]
    fn test_change_phone_missing_reports_not_found() {
        let mut rec = record("Ada");
        rec.add_phone(phone("5551234567"));

        assert!(!rec.change_phone(&phone("0000000000"), &phone("1112223333")));

        let rendered: Vec<_> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(rendered, ["5551234567"]);
    }

    #[test]
    fn test_days_to_birthday_unset_is_none() {
        let rec = record("Ada");
        assert_eq!(rec.days_to_birthday_from(date(2026, 8, 7)), None);
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let mut rec = record("Ada");
        rec.set_birthday(Birthday::new(date(1990, 8, 7)));
        assert_eq!(rec.days_to_birthday_from(date(2026, 8, 7)), Some(0));
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut rec = record("Ada");
        rec.set_birthday(Birthday::parse("14.02.1990").unwrap());
        rec.set_birthday(Birthday::parse("15.02.1990").unwrap());
        assert_eq!(rec.birthday().unwrap().to_string(), "15-02-1990");
    }

    #[test]
    fn test_render_with_birthday() {
        let mut rec = record("Ada");
        rec.add_phone(phone("5551234567"));
        rec.add_phone(phone("9998887777"));
        rec.set_birthday(Birthday::parse("10.08.1990").unwrap());

        assert_eq!(
            rec.render_at(date(2026, 8, 7)),
            "Ada: 5551234567, 9998887777, birthday: 10-08-1990 (in 3 days)"
        );
    }

    #[test]
    fn test_render_without_birthday() {
        let mut rec = record("Ada");
        rec.add_phone(phone("5551234567"));
        assert_eq!(
            rec.render_at(date(2026, 8, 7)),
            "Ada: 5551234567, birthday: N/A"
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut rec = record("Ada");
        rec.add_phone(phone("5551234567"));
        rec.set_birthday(Birthday::parse("14.02.1990").unwrap());

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"Ada","phones":["555-1234"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
