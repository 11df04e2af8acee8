//! CSV export for report downloads.

mod csv_export;

#[cfg(test)]
mod csv_export_tests;

pub use csv_export::export_records;
