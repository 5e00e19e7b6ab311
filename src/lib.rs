#![allow(clippy::module_inception)]

use std::{
    fmt::Display,
    io::{self, Write},
    sync::Once,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod charcode;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod reader;

/// Line and column of a character in the source, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub u32, pub u32);

impl Position {
    pub fn start() -> Self {
        Position(1, 1)
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn column(&self) -> u32 {
        self.1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// The longest identifier classic KPL accepts.
pub const MAX_IDENT_LEN: usize = 15;

/// Tunables for a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Identifiers longer than this are rejected with `IdentifierTooLong`.
    pub max_ident_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            max_ident_len: MAX_IDENT_LEN,
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=kpl_scanner=trace` to see every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of the 1-based `line` of `content`, without its line ending.
pub fn get_line_at_position(content: &str, line: u32) -> Option<&str> {
    let index = usize::try_from(line).ok()?.checked_sub(1)?;
    content
        .split('\n')
        .nth(index)
        .map(|text| text.trim_end_matches('\r'))
}


/// Writes a diagnostic together with an excerpt of the offending source line.
///
/// ```text
/// 2-10:Error: InvalidSymbol (Invalid symbol `$`, ...)
/// -> input.kpl
///    |
///  2 | x := $;
///    | -----^
/// ```
pub fn display_error<W: Write>(
    error: &Error,
    file_name: &str,
    content: &str,
    out: &mut W,
) -> io::Result<()> {
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "{}:Error: {}", position, error.get_error_name())?;
    } else {
        writeln!(
            out,
            "{}:Error: {} ({})",
            position,
            error.get_error_name(),
            error.get_tip()
        )?;
    }
    writeln!(out, "-> {}", file_name)?;

    // End-of-input diagnostics can point one line past the last one.
    let Some(line_text) = get_line_at_position(content, position.line()) else {
        return Ok(());
    };

    let line_string = format!(" {}", position.line());
    let padding = line_string.len() + 2;
    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let column = position.column() as usize;
    let arrows = column.saturating_sub(removed_whitespace).max(1);
    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
