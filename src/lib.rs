#![doc(test(attr(deny(warnings))))]

//! Ledger Table renders ledger entries as a fixed-width, locale-aware text
//! table.
//!
//! ```
//! let entries = vec![ledger_table::create_entry("2015-01-16", "Coffee", -200).unwrap()];
//! let table = ledger_table::format("USD", "en-US", &entries).unwrap();
//! assert!(table.ends_with("|        -$2.00"));
//! ```

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod locale;
pub mod utils;

pub use errors::LedgerError;
pub use ledger::{create_entry, format_entries as format, LedgerEntry};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Table tracing initialized.");
    });
}
