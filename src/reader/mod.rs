//! Source reader.
//!
//! Owns the read position (line, column, lookahead byte) and advances through
//! the input one byte at a time.

pub mod reader;
