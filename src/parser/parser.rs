//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched through a statement lookup table and
//! expressions through a NUD table; there are no infix operators yet.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Stmt,
    config::CompileOptions,
    errors::errors::{Error, ErrorImpl, Stage},
    lexer::tokens::{Token, TokenKind},
    symbols::scope_table::{ScopeTable, SymbolError},
    Position, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Names visible at the current point of the parse
    symbols: ScopeTable,
}

impl Parser {
    /// Creates a parser over `tokens` with builtins and the configured
    /// externs already declared in the global scope.
    pub fn new(mut tokens: Vec<Token>, options: &CompileOptions) -> Result<Self, Error> {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.position)
                .unwrap_or(Position::new(1, 1));
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
        }

        let mut parser = Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            symbols: ScopeTable::new(),
        };

        create_token_lookups(&mut parser);

        for (name, classification) in options.predeclared() {
            if !parser.symbols.is_declared(&name) {
                parser.symbols.declare(&name).map_err(|error| parser.symbol_error(error))?;
            }
            parser
                .symbols
                .set_type(&name, classification)
                .map_err(|error| parser.symbol_error(error))?;
        }

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. Never moves past EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Consumes a token of `expected_kind`, or fails with `message`.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(message))
        }
    }

    /// Builds an unexpected-token error at the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        let token = self.current_token();
        let found = if token.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            token.lexeme.clone()
        };

        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from(message),
                found,
            },
            Stage::Parser,
            Some(token.position),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn enter_scope(&mut self) {
        self.symbols.enter_scope();
    }

    pub fn exit_scope(&mut self) -> Result<(), Error> {
        self.symbols
            .exit_scope()
            .map_err(|error| self.symbol_error(error))
    }

    /// Declares `name` in the innermost scope; a name already declared there is an error.
    pub fn declare(&mut self, name: &str, position: Position) -> Result<(), Error> {
        self.symbols
            .declare(name)
            .map_err(|error| Error::new(error.into(), Stage::Parser, Some(position)))
    }

    /// Fails unless `name` is visible from the current scope.
    pub fn ensure_declared(&self, name: &str, position: Position) -> Result<(), Error> {
        if self.symbols.is_declared(name) {
            Ok(())
        } else {
            Err(Error::new(
                SymbolError::Undefined {
                    name: String::from(name),
                }
                .into(),
                Stage::Parser,
                Some(position),
            ))
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.symbols.is_declared(name)
    }

    /// Parses a single declaration or expression statement.
    pub fn parse_declaration(&mut self) -> Result<Stmt, Error> {
        let stmt = parse_stmt(self)?;
        trace!("parsed statement {:?}", stmt);
        Ok(stmt)
    }

    /// Parses declarations until EOF.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, Error> {
        let mut body = vec![];

        while self.has_tokens() {
            body.push(self.parse_declaration()?);
        }

        Ok(body)
    }

    fn symbol_error(&self, error: SymbolError) -> Error {
        Error::new(error.into(), Stage::Parser, Some(self.get_position()))
    }
}

/// Parses a stream of tokens into a list of statements.
///
/// The first error aborts the parse; there is no recovery.
pub fn parse(tokens: Vec<Token>, options: &CompileOptions) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens, options)?;
    let body = parser.parse_program()?;
    debug!("parsed {} statements", body.len());
    Ok(body)
}
