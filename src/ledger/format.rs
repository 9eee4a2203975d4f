use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{entry::LedgerEntry, sort::sort_entries};
use crate::{
    config::FormatConfig,
    currency::format_currency_value,
    errors::LedgerError,
    locale::{self, LocaleConfig},
};

const DESCRIPTION_WIDTH: usize = 25;
const TRUNCATED_LENGTH: usize = 22;
const CHANGE_WIDTH: usize = 13;
const ELLIPSIS: &str = "...";

/// Renders a date with the profile's short-date pattern.
pub fn format_date(config: &LocaleConfig, date: NaiveDate) -> String {
    date.format(config.date_pattern.strftime()).to_string()
}

/// Truncates descriptions longer than the column and pads to its width.
pub fn format_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_WIDTH {
        let head: String = description.chars().take(TRUNCATED_LENGTH).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        format!("{:<width$}", description, width = DESCRIPTION_WIDTH)
    }
}

/// Renders the change column. Non-negative amounts get a trailing space so
/// their digits line up with parenthesized negatives. Wide amounts overflow
/// the column rather than being cut.
pub fn format_change(config: &LocaleConfig, change: Decimal) -> String {
    let mut text = format_currency_value(
        change,
        config.currency,
        &config.number_format,
        config.negative_style,
    );
    if change >= Decimal::ZERO {
        text.push(' ');
    }
    format!("{:>width$}", text, width = CHANGE_WIDTH)
}

pub fn format_row(config: &LocaleConfig, entry: &LedgerEntry) -> String {
    format!(
        "{} | {} | {}",
        format_date(config, entry.date()),
        format_description(entry.description()),
        format_change(config, entry.change())
    )
}

/// Renders the full table: the localized header followed by one row per
/// entry in display order. There is no trailing newline.
pub fn format_entries(
    currency: &str,
    locale: &str,
    entries: &[LedgerEntry],
) -> Result<String, LedgerError> {
    let config = locale::resolve(locale, currency)?;
    Ok(render_table(&config, entries))
}

/// Same as [`format_entries`], taking the codes from a loaded configuration.
pub fn format_with_config(
    config: &FormatConfig,
    entries: &[LedgerEntry],
) -> Result<String, LedgerError> {
    let profile = config.resolve()?;
    Ok(render_table(&profile, entries))
}

fn render_table(config: &LocaleConfig, entries: &[LedgerEntry]) -> String {
    tracing::debug!(
        locale = config.locale.as_str(),
        currency = config.currency.as_str(),
        entries = entries.len(),
        "formatting ledger table"
    );
    let mut out = String::from(config.header);
    for entry in sort_entries(entries) {
        out.push('\n');
        out.push_str(&format_row(config, entry));
    }
    out
}
