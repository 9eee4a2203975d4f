use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// One ledger line: a day, a free-text label and a signed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    date: NaiveDate,
    description: String,
    change: Decimal,
}

impl LedgerEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>, change: Decimal) -> Self {
        Self {
            date,
            description: description.into(),
            change,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn change(&self) -> Decimal {
        self.change
    }

    pub fn is_negative(&self) -> bool {
        self.change < Decimal::ZERO
    }
}

/// Builds an entry from ISO date text and an amount in minor units (cents).
///
/// A trailing time of day is accepted and dropped.
pub fn create_entry(
    date: &str,
    description: &str,
    change_minor_units: i64,
) -> Result<LedgerEntry, LedgerError> {
    let date = parse_date(date)?;
    Ok(LedgerEntry::new(
        date,
        description,
        Decimal::new(change_minor_units, 2),
    ))
}

fn parse_date(text: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|moment| moment.date())
        .ok_or_else(|| LedgerError::invalid(format!("unparseable date `{}`", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_minor_units_exactly() {
        let entry = create_entry("2015-01-16", "Coffee", -200).unwrap();
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2015, 1, 16).unwrap());
        assert_eq!(entry.description(), "Coffee");
        assert_eq!(entry.change(), Decimal::new(-2, 0));
        assert_eq!(entry.change().to_string(), "-2.00");
        assert!(entry.is_negative());

        let cents = create_entry("2015-01-16", "Refund", 1).unwrap();
        assert_eq!(cents.change().to_string(), "0.01");
    }

    #[test]
    fn accepts_time_of_day() {
        let entry = create_entry(" 2015-03-12T10:30:00 ", "Lunch", 0).unwrap();
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2015, 3, 12).unwrap());
        assert!(!entry.is_negative());
        let spaced = create_entry("2015-03-12 23:59:59", "Lunch", 0).unwrap();
        assert_eq!(spaced.date(), entry.date());
    }

    #[test]
    fn rejects_unparseable_dates() {
        for text in ["", "12/03/2015", "2015-02-30", "yesterday"] {
            assert!(
                matches!(
                    create_entry(text, "x", 100),
                    Err(LedgerError::InvalidArgument(_))
                ),
                "`{text}` should be rejected"
            );
        }
    }

    #[test]
    fn serializes_change_as_exact_text() {
        let entry = create_entry("2015-01-16", "Coffee", -200).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""change":"-2.00""#), "{json}");
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn keeps_long_descriptions_intact() {
        let long = "a".repeat(80);
        let entry = create_entry("2015-01-01", &long, 100).unwrap();
        assert_eq!(entry.description(), long);
    }
}
