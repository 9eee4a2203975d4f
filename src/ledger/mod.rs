//! Ledger entries and their table rendering.

pub mod entry;
pub mod format;
pub mod sort;

pub use entry::{create_entry, LedgerEntry};
pub use format::{
    format_change, format_date, format_description, format_entries, format_row,
    format_with_config,
};
pub use sort::{sort_entries, sort_key};
