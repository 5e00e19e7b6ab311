//! Lexical analysis for KPL.
//!
//! This module contains the scanner that converts source bytes into a stream
//! of tokens for parsing. It handles:
//!
//! - Keywords, identifiers, integer and character literals
//! - One- and two-character operators (`:=`, `>=`, `<=`, `!=`, `(.`, `.)`)
//! - Whitespace and `(* ... *)` comments
//! - Recovery from malformed input, one diagnostic per bad lexeme

pub mod lexer;
pub mod tokens;
