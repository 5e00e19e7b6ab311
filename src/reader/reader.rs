use std::{
    fs::File,
    io::{self, BufReader, Bytes, Read},
    path::Path,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Cursor over a byte source.
///
/// Holds the lookahead byte and its 1-based position. `None` as the current
/// byte is the end-of-input sentinel.
pub struct Reader<R: Read> {
    bytes: Bytes<BufReader<R>>,
    current: Option<u8>,
    line: u32,
    column: u32,
    io_error: Option<io::Error>,
}

impl Reader<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Reader<File>, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            Error::new(
                ErrorImpl::IoFailure {
                    message: format!("{}: {}", path.display(), err),
                },
                Position::start(),
            )
        })?;

        Ok(Reader::new(file))
    }
}

impl<R: Read> Reader<R> {
    pub fn new(source: R) -> Reader<R> {
        let mut reader = Reader {
            bytes: BufReader::new(source).bytes(),
            current: None,
            line: 1,
            column: 1,
            io_error: None,
        };
        reader.current = reader.read_byte();
        reader
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> Position {
        Position(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Consumes the lookahead byte. Does nothing once end-of-input is reached.
    pub fn advance(&mut self) {
        let Some(consumed) = self.current else {
            return;
        };

        self.current = self.read_byte();
        if consumed == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// The read error that cut the input short, if any.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.io_error.is_some() {
            return None;
        }

        match self.bytes.next()? {
            Ok(byte) => Some(byte),
            Err(err) => {
                tracing::warn!(line = self.line, column = self.column, %err, "read failed, treating as end of input");
                self.io_error = Some(err);
                None
            }
        }
    }
}
