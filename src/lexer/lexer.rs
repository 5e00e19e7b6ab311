use std::io::Read;

use crate::{
    charcode::charcode::{char_code, CharCode},
    errors::errors::{Diagnostics, Error, ErrorImpl},
    reader::reader::Reader,
    Position, ScannerConfig, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

/// Progress through a `(* ... *)` comment once the opener is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentState {
    /// Looking for a `*`.
    Seek,
    /// Consuming a run of `*`.
    Run,
    /// Just past a run of `*`; a `)` here closes the comment.
    Check,
}

/// Finite-state tokenizer over a `Reader`.
///
/// Each call to `next_token` yields exactly one token. Malformed input
/// produces a `TokenKind::None` token and a diagnostic instead of an error,
/// so the caller can keep pulling tokens until `TokenKind::EOF`.
pub struct Scanner<R: Read> {
    reader: Reader<R>,
    diagnostics: Diagnostics,
    config: ScannerConfig,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: Reader<R>) -> Scanner<R> {
        Scanner::with_config(reader, ScannerConfig::default())
    }

    pub fn with_config(reader: Reader<R>, config: ScannerConfig) -> Scanner<R> {
        Scanner {
            reader,
            diagnostics: Diagnostics::new(),
            config,
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    pub fn reader_mut(&mut self) -> &mut Reader<R> {
        &mut self.reader
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.reader.position();
            let Some(code) = self.code() else {
                return MK_TOKEN!(TokenKind::EOF, start);
            };

            let token = match code {
                CharCode::Space => {
                    self.reader.advance();
                    continue;
                }
                CharCode::Letter => self.read_ident_keyword(start),
                CharCode::Digit => self.read_number(start),
                CharCode::SingleQuote => self.read_const_char(start),

                CharCode::Plus => self.single(TokenKind::Plus, start),
                CharCode::Minus => self.single(TokenKind::Minus, start),
                CharCode::Times => self.single(TokenKind::Times, start),
                CharCode::Slash => self.single(TokenKind::Slash, start),
                CharCode::RParen => self.single(TokenKind::RParen, start),
                CharCode::Eq => self.single(TokenKind::Eq, start),
                CharCode::Comma => self.single(TokenKind::Comma, start),
                CharCode::Semicolon => self.single(TokenKind::Semicolon, start),

                CharCode::Gt => self.pair(CharCode::Eq, TokenKind::GreaterEq, TokenKind::Greater, start),
                CharCode::Lt => self.pair(CharCode::Eq, TokenKind::LessEq, TokenKind::Less, start),
                CharCode::Colon => self.pair(CharCode::Eq, TokenKind::Assign, TokenKind::Colon, start),
                CharCode::Period => self.pair(CharCode::RParen, TokenKind::RSel, TokenKind::Period, start),
                CharCode::Exclamation => self.exclamation(start),

                CharCode::LParen => match self.lparen(start) {
                    Some(token) => token,
                    None => continue,
                },

                CharCode::Unknown => {
                    let symbol = self.reader.current().map(char::from).unwrap_or_default();
                    self.reader.advance();
                    self.malformed(ErrorImpl::InvalidSymbol { symbol }, start)
                }
            };

            tracing::trace!(%token, "scanned");
            return token;
        }
    }

    fn code(&self) -> Option<CharCode> {
        self.reader.current().map(char_code)
    }

    fn current_is(&self, codes: &[CharCode]) -> Option<u8> {
        self.reader
            .current()
            .filter(|byte| codes.contains(&char_code(*byte)))
    }

    fn skip_while(&mut self, codes: &[CharCode]) {
        while self.current_is(codes).is_some() {
            self.reader.advance();
        }
    }

    fn malformed(&mut self, error: ErrorImpl, start: Position) -> Token {
        self.diagnostics.report(Error::new(error, start));
        MK_TOKEN!(TokenKind::None, start)
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        self.reader.advance();
        MK_TOKEN!(kind, start)
    }

    /// Consumes the first character, then `second` too if it follows.
    fn pair(&mut self, second: CharCode, double: TokenKind, single: TokenKind, start: Position) -> Token {
        self.reader.advance();

        if self.code() == Some(second) {
            self.reader.advance();
            MK_TOKEN!(double, start)
        } else {
            MK_TOKEN!(single, start)
        }
    }

    // A lone `!` is consumed and dropped.
    fn exclamation(&mut self, start: Position) -> Token {
        self.reader.advance();

        if self.code() == Some(CharCode::Eq) {
            self.reader.advance();
            MK_TOKEN!(TokenKind::NotEq, start)
        } else {
            self.malformed(ErrorImpl::InvalidSymbol { symbol: '!' }, start)
        }
    }

    /// `(`, `(.` or the start of a comment. Returns `None` once a comment
    /// has been skipped so the caller retries.
    fn lparen(&mut self, start: Position) -> Option<Token> {
        self.reader.advance();

        match self.code() {
            Some(CharCode::Times) => {
                self.reader.advance();
                self.skip_comment(start);
                None
            }
            Some(CharCode::Period) => {
                self.reader.advance();
                Some(MK_TOKEN!(TokenKind::LSel, start))
            }
            _ => Some(MK_TOKEN!(TokenKind::LParen, start)),
        }
    }

    fn skip_comment(&mut self, opened_at: Position) {
        let mut state = CommentState::Seek;

        loop {
            let Some(code) = self.code() else {
                let position = self.reader.position();
                self.diagnostics
                    .report(Error::new(ErrorImpl::UnterminatedComment, position));
                return;
            };

            state = match (state, code) {
                (CommentState::Seek, CharCode::Times) => CommentState::Run,
                (CommentState::Seek, _) => {
                    self.reader.advance();
                    CommentState::Seek
                }
                (CommentState::Run, _) => {
                    self.skip_while(&[CharCode::Times]);
                    CommentState::Check
                }
                (CommentState::Check, CharCode::RParen) => {
                    self.reader.advance();
                    tracing::debug!(
                        from = %opened_at,
                        to = %self.reader.position(),
                        "skipped comment"
                    );
                    return;
                }
                (CommentState::Check, _) => CommentState::Seek,
            };
        }
    }

    fn read_ident_keyword(&mut self, start: Position) -> Token {
        let mut ident = String::new();

        while let Some(byte) = self.current_is(&[CharCode::Letter, CharCode::Digit]) {
            if ident.len() >= self.config.max_ident_len {
                self.skip_while(&[CharCode::Letter, CharCode::Digit]);
                return self.malformed(
                    ErrorImpl::IdentifierTooLong {
                        max: self.config.max_ident_len,
                    },
                    start,
                );
            }

            ident.push(char::from(byte));
            self.reader.advance();
        }

        if let Some(kind) = RESERVED_LOOKUP.get(ident.as_str()) {
            MK_TOKEN!(*kind, start)
        } else {
            MK_TOKEN!(TokenKind::Identifier, TokenValue::Text(ident), start)
        }
    }

    fn read_number(&mut self, start: Position) -> Token {
        let mut literal = String::new();
        let mut value = Some(0i32);

        while let Some(byte) = self.current_is(&[CharCode::Digit]) {
            literal.push(char::from(byte));
            value = value
                .and_then(|value| value.checked_mul(10))
                .and_then(|value| value.checked_add(i32::from(byte - b'0')));
            self.reader.advance();
        }

        match value {
            Some(value) => MK_TOKEN!(TokenKind::Number, TokenValue::Number(value), start),
            None => self.malformed(ErrorImpl::NumericOverflow { literal }, start),
        }
    }

    /// `start` is the opening quote, still unconsumed.
    fn read_const_char(&mut self, start: Position) -> Token {
        self.reader.advance();

        let Some(payload) = self.reader.current() else {
            return self.malformed(ErrorImpl::InvalidCharConstant, start);
        };
        self.reader.advance();

        if self.code() == Some(CharCode::SingleQuote) {
            self.reader.advance();
            MK_TOKEN!(
                TokenKind::Char,
                TokenValue::Text(char::from(payload).to_string()),
                start
            )
        } else {
            self.malformed(ErrorImpl::InvalidCharConstant, start)
        }
    }
}

/// Yields tokens up to, but not including, `TokenKind::EOF`.
impl<R: Read> Iterator for Scanner<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

/// Scans a whole string. The last token is always `TokenKind::EOF`.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut scanner = Scanner::new(Reader::new(source.as_bytes()));
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    let errors = scanner.diagnostics_mut().drain().collect();
    (tokens, errors)
}
