use lazy_static::lazy_static;

lazy_static! {
    pub static ref CHAR_CODES: [CharCode; 256] = {
        let mut table = [CharCode::Unknown; 256];

        for byte in [b' ', b'\t', b'\n', b'\r'] {
            table[byte as usize] = CharCode::Space;
        }
        for byte in b'a'..=b'z' {
            table[byte as usize] = CharCode::Letter;
        }
        for byte in b'A'..=b'Z' {
            table[byte as usize] = CharCode::Letter;
        }
        for byte in b'0'..=b'9' {
            table[byte as usize] = CharCode::Digit;
        }

        table[b'+' as usize] = CharCode::Plus;
        table[b'-' as usize] = CharCode::Minus;
        table[b'*' as usize] = CharCode::Times;
        table[b'/' as usize] = CharCode::Slash;
        table[b'<' as usize] = CharCode::Lt;
        table[b'>' as usize] = CharCode::Gt;
        table[b'!' as usize] = CharCode::Exclamation;
        table[b'=' as usize] = CharCode::Eq;
        table[b',' as usize] = CharCode::Comma;
        table[b'.' as usize] = CharCode::Period;
        table[b':' as usize] = CharCode::Colon;
        table[b';' as usize] = CharCode::Semicolon;
        table[b'\'' as usize] = CharCode::SingleQuote;
        table[b'(' as usize] = CharCode::LParen;
        table[b')' as usize] = CharCode::RParen;
        table
    };
}

/// Semantic class of a source byte.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharCode {
    Space,
    Letter,
    Digit,
    Plus,
    Minus,
    Times,
    Slash,
    Lt,
    Gt,
    Exclamation,
    Eq,
    Comma,
    Period,
    Colon,
    Semicolon,
    SingleQuote,
    LParen,
    RParen,
    Unknown,
}

pub fn char_code(byte: u8) -> CharCode {
    CHAR_CODES[byte as usize]
}
