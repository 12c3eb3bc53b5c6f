use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl, Stage},
    symbols::scope_table::ScopeTable,
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP};

/// Single-pass scanner over the source characters.
///
/// When built with [`Lexer::with_symbol_table`] every plain identifier is
/// also registered in the given table, in whichever scope is innermost when
/// [`Lexer::tokenize`] runs. The lexer stays usable afterwards, so callers can
/// open a scope, scan, and close it again. Later stages do not rely on that
/// table; they build their own.
pub struct Lexer<'a> {
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    symbols: Option<&'a mut ScopeTable>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &str) -> Lexer<'a> {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            symbols: None,
        }
    }

    pub fn with_symbol_table(source: &str, symbols: &'a mut ScopeTable) -> Lexer<'a> {
        let mut lexer = Lexer::new(source);
        lexer.symbols = Some(symbols);
        lexer
    }

    pub fn enter_scope(&mut self) {
        if let Some(symbols) = self.symbols.as_deref_mut() {
            symbols.enter_scope();
        }
    }

    pub fn exit_scope(&mut self) -> Result<(), Error> {
        let position = self.position();
        match self.symbols.as_deref_mut() {
            Some(symbols) => symbols
                .exit_scope()
                .map_err(|error| Error::new(error.into(), Stage::Lexer, Some(position))),
            None => Ok(()),
        }
    }

    pub fn at(&self) -> char {
        self.source_at(0)
    }

    pub fn peek_next(&self) -> char {
        self.source_at(1)
    }

    fn source_at(&self, offset: usize) -> char {
        self.source.get(self.pos + offset).copied().unwrap_or('\0')
    }

    pub fn advance(&mut self) -> char {
        let c = self.at();
        self.pos += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        c
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn remainder_starts_with(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(offset, c)| self.source.get(self.pos + offset) == Some(&c))
    }

    fn register_identifier(&mut self, name: &str, position: Position) -> Result<(), Error> {
        if let Some(symbols) = self.symbols.as_deref_mut() {
            if !symbols.is_declared(name) {
                symbols
                    .declare(name)
                    .map_err(|error| Error::new(error.into(), Stage::Lexer, Some(position)))?;
            }
        }

        Ok(())
    }

    /// Scans the remaining input and returns its tokens, ending in EOF.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        loop {
            skip_handler(self);

            if self.at_eof() {
                break;
            }

            let c = self.at();
            if c.is_ascii_alphabetic() || c == '_' {
                symbol_handler(self)?;
            } else if c.is_ascii_digit() {
                number_handler(self);
            } else if c == '"' {
                string_handler(self)?;
            } else if c == '\'' {
                char_handler(self)?;
            } else {
                operator_handler(self);
            }
        }

        let position = self.position();
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
        Ok(std::mem::take(&mut self.tokens))
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn skip_handler(lexer: &mut Lexer) {
    loop {
        let c = lexer.at();

        if !lexer.at_eof() && c.is_whitespace() {
            lexer.advance();
        } else if c == '/' && lexer.peek_next() == '/' {
            while !lexer.at_eof() && lexer.at() != '\n' {
                lexer.advance();
            }
        } else if c == '/' && lexer.peek_next() == '*' {
            lexer.advance();
            lexer.advance();

            while !lexer.at_eof() && !(lexer.at() == '*' && lexer.peek_next() == '/') {
                lexer.advance();
            }

            // An unclosed block comment runs to the end of the input
            if !lexer.at_eof() {
                lexer.advance();
                lexer.advance();
            }
        } else {
            return;
        }
    }
}

fn symbol_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.position();
    let mut word = String::new();

    while !lexer.at_eof() && is_identifier_char(lexer.at()) {
        word.push(lexer.advance());
    }

    if let Some(kind) = RESERVED_LOOKUP.get(word.as_str()) {
        lexer.push(MK_TOKEN!(*kind, word, start));
    } else {
        lexer.register_identifier(&word, start)?;
        lexer.push(MK_TOKEN!(TokenKind::Identifier, word, start));
    }

    Ok(())
}

fn number_handler(lexer: &mut Lexer) {
    let start = lexer.position();
    let mut number = String::new();
    let mut is_float = false;

    while lexer.at().is_ascii_digit() {
        number.push(lexer.advance());
    }

    if lexer.at() == '.' && lexer.peek_next().is_ascii_digit() {
        is_float = true;
        number.push(lexer.advance());

        while lexer.at().is_ascii_digit() {
            number.push(lexer.advance());
        }
    }

    let kind = if is_float {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntLiteral
    };

    lexer.push(MK_TOKEN!(kind, number, start));
}

fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance();

    let mut content = String::new();
    while !lexer.at_eof() && lexer.at() != '"' {
        content.push(lexer.advance());
    }

    if lexer.at_eof() {
        return Err(Error::new(
            ErrorImpl::UnterminatedString,
            Stage::Lexer,
            Some(start),
        ));
    }

    lexer.advance();
    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, content, start));
    Ok(())
}

fn char_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let start = lexer.position();
    let unterminated = || Error::new(ErrorImpl::UnterminatedChar, Stage::Lexer, Some(start));
    lexer.advance();

    if lexer.at_eof() {
        return Err(unterminated());
    }

    let mut content = String::new();
    let c = lexer.advance();
    content.push(c);

    if c == '\\' {
        if lexer.at_eof() {
            return Err(unterminated());
        }
        content.push(lexer.advance());
    }

    if lexer.at_eof() || lexer.at() != '\'' {
        return Err(unterminated());
    }

    lexer.advance();
    lexer.push(MK_TOKEN!(TokenKind::CharLiteral, content, start));
    Ok(())
}

fn operator_handler(lexer: &mut Lexer) {
    let start = lexer.position();

    if lexer.remainder_starts_with("&mut") && !is_identifier_char(lexer.source_at(4)) {
        for _ in 0..4 {
            lexer.advance();
        }
        lexer.push(MK_TOKEN!(TokenKind::AmpMut, String::from("&mut"), start));
        return;
    }

    let pair: String = [lexer.at(), lexer.peek_next()].iter().collect();
    if let Some(kind) = OPERATOR_LOOKUP.get(pair.as_str()) {
        lexer.advance();
        lexer.advance();
        lexer.push(MK_TOKEN!(*kind, pair, start));
        return;
    }

    let single = lexer.advance().to_string();
    let kind = OPERATOR_LOOKUP
        .get(single.as_str())
        .copied()
        .unwrap_or(TokenKind::Unknown);

    lexer.push(MK_TOKEN!(kind, single, start));
}

/// Tokenizes `source` without registering identifiers anywhere.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source).tokenize()?;
    debug!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}

/// Tokenizes `source`, registering each plain identifier in `symbols`.
pub fn tokenize_with_symbols(source: &str, symbols: &mut ScopeTable) -> Result<Vec<Token>, Error> {
    Lexer::with_symbol_table(source, symbols).tokenize()
}
