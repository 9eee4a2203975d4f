use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Currencies a ledger table can be rendered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 2] = [CurrencyCode::Usd, CurrencyCode::Eur];

    /// Parses an ISO 4217 code, ignoring ASCII case.
    pub fn parse(code: &str) -> Result<Self, LedgerError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| LedgerError::invalid(format!("unsupported currency `{}`", code)))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
        }
    }

    pub fn minor_units(self) -> u32 {
        2
    }
}

impl FromStr for CurrencyCode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How negative amounts are marked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    /// `-$1,234.56`
    Sign,
    /// `($1,234.56)`
    Parentheses,
}

/// Decimal and digit-grouping punctuation for a locale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Renders a non-negative magnitude with grouping and a fixed number of
/// fraction digits.
pub fn format_number(number: &NumberFormat, value: Decimal, precision: u32) -> String {
    let rounded = value
        .abs()
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", precision as usize, rounded);
    match body.split_once('.') {
        Some((int_part, fraction)) => format!(
            "{}{}{}",
            group_digits(int_part, number.grouping_separator),
            number.decimal_separator,
            fraction
        ),
        None => group_digits(&body, number.grouping_separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `amount` as currency text: symbol directly before the number, with
/// negatives marked according to `negative_style`.
pub fn format_currency_value(
    amount: Decimal,
    code: CurrencyCode,
    number: &NumberFormat,
    negative_style: NegativeStyle,
) -> String {
    let body = format!(
        "{}{}",
        code.symbol(),
        format_number(number, amount, code.minor_units())
    );
    if amount.is_sign_negative() && !amount.is_zero() {
        match negative_style {
            NegativeStyle::Sign => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        }
    } else {
        body
    }
}
