//! Static (locale, currency) formatting profiles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{CurrencyCode, NegativeStyle, NumberFormat},
    errors::LedgerError,
};

const ENGLISH_HEADER: &str = "Date       | Description               | Change       ";
const DUTCH_HEADER: &str = "Datum      | Omschrijving              | Verandering  ";

const ENGLISH_NUMBERS: NumberFormat = NumberFormat {
    decimal_separator: '.',
    grouping_separator: ',',
};
const DUTCH_NUMBERS: NumberFormat = NumberFormat {
    decimal_separator: ',',
    grouping_separator: '.',
};

/// Locales a ledger table can be rendered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "nl-NL")]
    NlNl,
}

impl LocaleCode {
    pub const ALL: [LocaleCode; 2] = [LocaleCode::EnUs, LocaleCode::NlNl];

    /// Parses a language tag. Matching is exact: `en-us` is rejected.
    pub fn parse(tag: &str) -> Result<Self, LedgerError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == tag)
            .ok_or_else(|| LedgerError::invalid(format!("unsupported locale `{}`", tag)))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocaleCode::EnUs => "en-US",
            LocaleCode::NlNl => "nl-NL",
        }
    }
}

impl FromStr for LocaleCode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short-date layout, always `/`-separated with a four digit year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatePattern {
    /// `MM/dd/yyyy`
    MonthFirst,
    /// `dd/MM/yyyy`
    DayFirst,
}

impl DatePattern {
    /// The equivalent `chrono` format string.
    pub fn strftime(self) -> &'static str {
        match self {
            DatePattern::MonthFirst => "%m/%d/%Y",
            DatePattern::DayFirst => "%d/%m/%Y",
        }
    }
}

/// A resolved formatting profile for one (locale, currency) pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub locale: LocaleCode,
    pub currency: CurrencyCode,
    pub date_pattern: DatePattern,
    pub negative_style: NegativeStyle,
    pub number_format: NumberFormat,
    pub header: &'static str,
}

impl LocaleConfig {
    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }
}

// en-US keeps month-first dates only for USD.
static PROFILES: [LocaleConfig; 4] = [
    LocaleConfig {
        locale: LocaleCode::EnUs,
        currency: CurrencyCode::Usd,
        date_pattern: DatePattern::MonthFirst,
        negative_style: NegativeStyle::Sign,
        number_format: ENGLISH_NUMBERS,
        header: ENGLISH_HEADER,
    },
    LocaleConfig {
        locale: LocaleCode::EnUs,
        currency: CurrencyCode::Eur,
        date_pattern: DatePattern::DayFirst,
        negative_style: NegativeStyle::Sign,
        number_format: ENGLISH_NUMBERS,
        header: ENGLISH_HEADER,
    },
    LocaleConfig {
        locale: LocaleCode::NlNl,
        currency: CurrencyCode::Usd,
        date_pattern: DatePattern::DayFirst,
        negative_style: NegativeStyle::Parentheses,
        number_format: DUTCH_NUMBERS,
        header: DUTCH_HEADER,
    },
    LocaleConfig {
        locale: LocaleCode::NlNl,
        currency: CurrencyCode::Eur,
        date_pattern: DatePattern::DayFirst,
        negative_style: NegativeStyle::Parentheses,
        number_format: DUTCH_NUMBERS,
        header: DUTCH_HEADER,
    },
];

/// Looks up the profile for a locale tag and a currency code.
///
/// The locale is validated first, so a call with both codes unsupported
/// reports the locale.
pub fn resolve(locale_code: &str, currency_code: &str) -> Result<LocaleConfig, LedgerError> {
    let locale = LocaleCode::parse(locale_code)?;
    let currency = CurrencyCode::parse(currency_code)?;
    Ok(profile(locale, currency))
}

/// Returns the profile for an already validated pair.
pub fn profile(locale: LocaleCode, currency: CurrencyCode) -> LocaleConfig {
    let idx = match (locale, currency) {
        (LocaleCode::EnUs, CurrencyCode::Usd) => 0,
        (LocaleCode::EnUs, CurrencyCode::Eur) => 1,
        (LocaleCode::NlNl, CurrencyCode::Usd) => 2,
        (LocaleCode::NlNl, CurrencyCode::Eur) => 3,
    };
    PROFILES[idx]
}

/// Every supported profile.
pub fn supported_pairs() -> impl Iterator<Item = &'static LocaleConfig> {
    PROFILES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_indices_match_pairs() {
        for locale in LocaleCode::ALL {
            for currency in CurrencyCode::ALL {
                let config = profile(locale, currency);
                assert_eq!(config.locale, locale);
                assert_eq!(config.currency, currency);
            }
        }
    }

    #[test]
    fn resolves_behavior_table() {
        let us_usd = resolve("en-US", "USD").unwrap();
        assert_eq!(us_usd.date_pattern, DatePattern::MonthFirst);
        assert_eq!(us_usd.symbol(), "$");
        assert_eq!(us_usd.negative_style, NegativeStyle::Sign);
        assert_eq!(us_usd.header, ENGLISH_HEADER);

        let us_eur = resolve("en-US", "eur").unwrap();
        assert_eq!(us_eur.date_pattern, DatePattern::DayFirst);
        assert_eq!(us_eur.symbol(), "€");
        assert_eq!(us_eur.negative_style, NegativeStyle::Sign);

        let nl_usd = resolve("nl-NL", "usd").unwrap();
        assert_eq!(nl_usd.date_pattern, DatePattern::DayFirst);
        assert_eq!(nl_usd.symbol(), "$");
        assert_eq!(nl_usd.negative_style, NegativeStyle::Parentheses);
        assert_eq!(nl_usd.header, DUTCH_HEADER);
        assert_eq!(nl_usd.number_format.decimal_separator, ',');
    }

    #[test]
    fn headers_span_the_row_width() {
        for config in supported_pairs() {
            assert_eq!(config.header.chars().count(), 10 + 3 + 25 + 3 + 13);
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(matches!(
            resolve("fr-FR", "EUR"),
            Err(LedgerError::InvalidArgument(msg)) if msg.contains("fr-FR")
        ));
        assert!(matches!(
            resolve("en-US", "JPY"),
            Err(LedgerError::InvalidArgument(msg)) if msg.contains("JPY")
        ));
        assert!(resolve("en-us", "USD").is_err());
        assert!(matches!(
            resolve("xx", "yyy"),
            Err(LedgerError::InvalidArgument(msg)) if msg.contains("locale")
        ));
    }
}
