//! Error types and error reporting for the scanner.
//!
//! This module defines the errors raised while scanning KPL source. It includes:
//!
//! - Error structures carrying the line and column of the offending lexeme
//! - One variant per lexical error kind, plus I/O failure
//! - Suggestions shown next to a diagnostic
//! - The `Diagnostics` sink the scanner reports recoverable errors into

pub mod errors;
