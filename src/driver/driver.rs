use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Scanner,
    reader::reader::Reader,
    Position, ScannerConfig,
};

/// Counts from one completed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub tokens: usize,
    pub diagnostics: usize,
}

/// Scans the file at `path`, writing one line per token to `out` and each
/// lexical diagnostic to `err` right after the token it belongs to.
///
/// Only I/O failures are returned as errors; lexical errors are counted in
/// the summary.
pub fn scan_file<P, O, E>(path: P, out: &mut O, err: &mut E) -> Result<ScanSummary, Error>
where
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    scan_file_with_config(path, ScannerConfig::default(), out, err)
}

#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn scan_file_with_config<P, O, E>(
    path: P,
    config: ScannerConfig,
    out: &mut O,
    err: &mut E,
) -> Result<ScanSummary, Error>
where
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    let path = path.as_ref();
    let file_name = path.display().to_string();
    let mut scanner = Scanner::with_config(Reader::open(path)?, config);
    let mut source: Option<String> = None;
    let mut summary = ScanSummary::default();

    loop {
        let token = scanner.next_token();

        if !token.is_eof() {
            writeln!(out, "{}", token).map_err(|e| io_failure(e, token.position))?;
            summary.tokens += 1;
        }

        for error in scanner.diagnostics_mut().drain() {
            let content = source.get_or_insert_with(|| read_source(path));
            display_error(&error, &file_name, content, err)
                .map_err(|e| io_failure(e, *error.get_position()))?;
            summary.diagnostics += 1;
        }

        if token.is_eof() {
            break;
        }
    }

    let reader = scanner.reader_mut();
    if let Some(read_error) = reader.take_io_error() {
        return Err(io_failure(read_error, reader.position()));
    }

    tracing::debug!(
        tokens = summary.tokens,
        diagnostics = summary.diagnostics,
        "scan finished"
    );
    Ok(summary)
}

fn io_failure(err: io::Error, position: Position) -> Error {
    Error::new(
        ErrorImpl::IoFailure {
            message: err.to_string(),
        },
        position,
    )
}

// Only needed for diagnostic excerpts, so a second read that fails just
// loses the excerpt.
fn read_source(path: &Path) -> String {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
