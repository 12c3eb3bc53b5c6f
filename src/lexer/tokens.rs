use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Fn);
        map.insert("struct", TokenKind::Struct);
        map.insert("copy", TokenKind::Copy);
        map.insert("unique", TokenKind::Unique);
        map.insert("shared", TokenKind::Shared);
        map.insert("ref", TokenKind::Ref);
        map.insert("mutref", TokenKind::Mutref);
        map.insert("match", TokenKind::Match);
        map.insert("case", TokenKind::Case);
        map.insert("unsafe", TokenKind::Unsafe);
        map.insert("extern", TokenKind::Extern);
        map.insert("drop", TokenKind::Drop);
        map.insert("return", TokenKind::Return);
        map.insert("defer", TokenKind::Defer);
        map.insert("spawn", TokenKind::Spawn);
        map
    };

    /// Operator and punctuation spellings. Two-character entries are tried
    /// before single characters.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("->", TokenKind::Arrow);
        map.insert("=>", TokenKind::FatArrow);
        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert(":=", TokenKind::ColonAssign);

        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("%", TokenKind::Percent);
        map.insert("=", TokenKind::Assignment);
        map.insert("!", TokenKind::Not);
        map.insert("<", TokenKind::Less);
        map.insert(">", TokenKind::Greater);
        map.insert("&", TokenKind::Amp);
        map.insert("|", TokenKind::Pipe);
        map.insert(".", TokenKind::Dot);
        map.insert(",", TokenKind::Comma);
        map.insert(":", TokenKind::Colon);
        map.insert(";", TokenKind::Semicolon);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Unknown,

    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Assignment,  // =
    ColonAssign, // :=
    Equals,      // ==
    NotEquals,   // !=
    Not,         // !

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And, // &&
    Or,  // ||
    Amp,
    AmpMut,
    Pipe,

    Dot,
    Comma,
    Colon,
    Semicolon,
    Arrow,
    FatArrow,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    // Reserved
    Let,
    Fn,
    Struct,
    Copy,
    Unique,
    Shared,
    Ref,
    Mutref,
    Match,
    Case,
    Unsafe,
    Extern,
    Drop,
    Return,
    Defer,
    Spawn,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharLiteral => "CHAR_LITERAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::ColonAssign => "COLON_ASSIGN",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NEQ",
            TokenKind::Not => "BANG",
            TokenKind::Less => "LT",
            TokenKind::LessEquals => "LTE",
            TokenKind::Greater => "GT",
            TokenKind::GreaterEquals => "GTE",
            TokenKind::And => "AND_AND",
            TokenKind::Or => "OR_OR",
            TokenKind::Amp => "AMP",
            TokenKind::AmpMut => "AMP_MUT",
            TokenKind::Pipe => "PIPE",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Arrow => "ARROW",
            TokenKind::FatArrow => "FAT_ARROW",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LBRACK",
            TokenKind::CloseBracket => "RBRACK",
            TokenKind::Let => "KW_LET",
            TokenKind::Fn => "KW_FN",
            TokenKind::Struct => "KW_STRUCT",
            TokenKind::Copy => "KW_COPY",
            TokenKind::Unique => "KW_UNIQUE",
            TokenKind::Shared => "KW_SHARED",
            TokenKind::Ref => "KW_REF",
            TokenKind::Mutref => "KW_MUTREF",
            TokenKind::Match => "KW_MATCH",
            TokenKind::Case => "KW_CASE",
            TokenKind::Unsafe => "KW_UNSAFE",
            TokenKind::Extern => "KW_EXTERN",
            TokenKind::Drop => "KW_DROP",
            TokenKind::Return => "KW_RETURN",
            TokenKind::Defer => "KW_DEFER",
            TokenKind::Spawn => "KW_SPAWN",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {:?}, {}, {})",
            self.kind, self.lexeme, self.position.line, self.position.column
        )
    }
}
