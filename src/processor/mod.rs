//! Batch scanning of tabular sources
//!
//! Drives the classify/decode/extract pipeline over every cell of a CSV
//! file, the way the coursework's flag decoder walked a leaked-transactions
//! dump. The processor is the batch host the core assumes: it iterates
//! candidates one at a time and collects per-cell results and errors
//! independently, so one bad cell never aborts a scan.

pub mod csv_scanner;

pub use csv_scanner::CsvScanner;
