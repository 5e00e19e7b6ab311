//! File-level scanning.
//!
//! Opens a source file, pulls tokens until end-of-input, prints each one and
//! every diagnostic as it is reported, then closes the file.

pub mod driver;
