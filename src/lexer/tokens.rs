use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROGRAM", TokenKind::Program);
        map.insert("CONST", TokenKind::Const);
        map.insert("TYPE", TokenKind::Type);
        map.insert("VAR", TokenKind::Var);
        map.insert("INTEGER", TokenKind::Integer);
        map.insert("CHAR", TokenKind::CharKw);
        map.insert("ARRAY", TokenKind::Array);
        map.insert("OF", TokenKind::Of);
        map.insert("FUNCTION", TokenKind::Function);
        map.insert("PROCEDURE", TokenKind::Procedure);
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("END", TokenKind::End);
        map.insert("CALL", TokenKind::Call);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ELSE", TokenKind::Else);
        map.insert("WHILE", TokenKind::While);
        map.insert("DO", TokenKind::Do);
        map.insert("FOR", TokenKind::For);
        map.insert("TO", TokenKind::To);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// No valid token could be formed here.
    None,
    Identifier,
    Number,
    Char,

    // Reserved
    Program,
    Const,
    Type,
    Var,
    Integer,
    CharKw,
    Array,
    Of,
    Function,
    Procedure,
    Begin,
    End,
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,

    Semicolon,
    Colon,
    Period,
    Comma,
    Assign,    // :=
    Eq,        // =
    NotEq,     // !=
    Less,      // <
    LessEq,    // <=
    Greater,   // >
    GreaterEq, // >=
    Plus,
    Minus,
    Times,
    Slash,
    LParen,
    RParen,
    LSel, // (.
    RSel, // .)
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Program
                | TokenKind::Const
                | TokenKind::Type
                | TokenKind::Var
                | TokenKind::Integer
                | TokenKind::CharKw
                | TokenKind::Array
                | TokenKind::Of
                | TokenKind::Function
                | TokenKind::Procedure
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::Call
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::For
                | TokenKind::To
        )
    }

    /// The label printed for this kind in scanner output.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::EOF => "TK_EOF",
            TokenKind::None => "TK_NONE",
            TokenKind::Identifier => "TK_IDENT",
            TokenKind::Number => "TK_NUMBER",
            TokenKind::Char => "TK_CHAR",

            TokenKind::Program => "KW_PROGRAM",
            TokenKind::Const => "KW_CONST",
            TokenKind::Type => "KW_TYPE",
            TokenKind::Var => "KW_VAR",
            TokenKind::Integer => "KW_INTEGER",
            TokenKind::CharKw => "KW_CHAR",
            TokenKind::Array => "KW_ARRAY",
            TokenKind::Of => "KW_OF",
            TokenKind::Function => "KW_FUNCTION",
            TokenKind::Procedure => "KW_PROCEDURE",
            TokenKind::Begin => "KW_BEGIN",
            TokenKind::End => "KW_END",
            TokenKind::Call => "KW_CALL",
            TokenKind::If => "KW_IF",
            TokenKind::Then => "KW_THEN",
            TokenKind::Else => "KW_ELSE",
            TokenKind::While => "KW_WHILE",
            TokenKind::Do => "KW_DO",
            TokenKind::For => "KW_FOR",
            TokenKind::To => "KW_TO",

            TokenKind::Semicolon => "SB_SEMICOLON",
            TokenKind::Colon => "SB_COLON",
            TokenKind::Period => "SB_PERIOD",
            TokenKind::Comma => "SB_COMMA",
            TokenKind::Assign => "SB_ASSIGN",
            TokenKind::Eq => "SB_EQ",
            TokenKind::NotEq => "SB_NEQ",
            TokenKind::Less => "SB_LT",
            TokenKind::LessEq => "SB_LE",
            TokenKind::Greater => "SB_GT",
            TokenKind::GreaterEq => "SB_GE",
            TokenKind::Plus => "SB_PLUS",
            TokenKind::Minus => "SB_MINUS",
            TokenKind::Times => "SB_TIMES",
            TokenKind::Slash => "SB_SLASH",
            TokenKind::LParen => "SB_LPAR",
            TokenKind::RParen => "SB_RPAR",
            TokenKind::LSel => "SB_LSEL",
            TokenKind::RSel => "SB_RSEL",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Payload of a token. Identifiers and character literals carry text,
/// numbers carry their value, every other kind carries nothing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    None,
    Text(String),
    Number(i32),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Token {
        Token {
            kind,
            value: TokenValue::None,
            position,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<i32> {
        match self.value {
            TokenValue::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == TokenKind::None
    }
}

/// Renders `<line>-<column>:<label>` plus the payload, e.g. `1-1:TK_IDENT(x)`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.position, self.kind)?;

        match (&self.kind, &self.value) {
            (TokenKind::Char, TokenValue::Text(text)) => write!(f, "('{}')", text),
            (_, TokenValue::Text(text)) => write!(f, "({})", text),
            (_, TokenValue::Number(value)) => write!(f, "({})", value),
            (_, TokenValue::None) => Ok(()),
        }
    }
}
