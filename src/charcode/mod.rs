//! Character classification for KPL source.
//!
//! Maps every raw byte to the class the scanner dispatches on: letter, digit,
//! whitespace, one of the operator/punctuation symbols, or unknown. The table
//! is built once and never changes afterwards.

pub mod charcode;
