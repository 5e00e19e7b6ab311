use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::InvalidCharConstant => "InvalidCharConstant",
            ErrorImpl::InvalidSymbol { .. } => "InvalidSymbol",
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::NumericOverflow { .. } => "NumericOverflow",
            ErrorImpl::IoFailure { .. } => "IOFailure",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "End of input reached inside a comment, did you forget `*)`?",
            )),
            ErrorImpl::InvalidCharConstant => ErrorTip::Suggestion(String::from(
                "A character constant holds exactly one character between single quotes",
            )),
            ErrorImpl::InvalidSymbol { symbol } => ErrorTip::Suggestion(format!(
                "Invalid symbol `{}`, it is not part of the KPL alphabet",
                symbol.escape_default()
            )),
            ErrorImpl::IdentifierTooLong { max } => ErrorTip::Suggestion(format!(
                "Identifiers are limited to {} characters",
                max
            )),
            ErrorImpl::NumericOverflow { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::IoFailure { .. } => ErrorTip::None,
        }
    }

    /// Whether scanning can produce further meaningful tokens after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self.internal_error,
            ErrorImpl::UnterminatedComment | ErrorImpl::IoFailure { .. }
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("end of comment expected")]
    UnterminatedComment,
    #[error("invalid char constant")]
    InvalidCharConstant,
    #[error("invalid symbol: {symbol:?}")]
    InvalidSymbol { symbol: char },
    #[error("identifier too long (max {max:?})")]
    IdentifierTooLong { max: usize },
    #[error("number out of range: {literal:?}")]
    NumericOverflow { literal: String },
    #[error("can't read input: {message}")]
    IoFailure { message: String },
}

/// Collects the lexical errors reported during a scan, in report order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
    reported: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: Error) {
        tracing::debug!(
            kind = error.get_error_name(),
            line = error.get_position().line(),
            column = error.get_position().column(),
            "lexical error"
        );
        self.reported += 1;
        self.errors.push(error);
    }

    /// Errors not yet handed out by `drain`.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Total number of errors reported, including drained ones.
    pub fn error_count(&self) -> usize {
        self.reported
    }

    pub fn has_errors(&self) -> bool {
        self.reported > 0
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Error> {
        self.errors.drain(..)
    }
}
