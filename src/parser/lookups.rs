use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.nud(TokenKind::IntLiteral, parse_literal_expr);
    parser.nud(TokenKind::FloatLiteral, parse_literal_expr);
    parser.nud(TokenKind::StringLiteral, parse_literal_expr);
    parser.nud(TokenKind::Identifier, parse_call_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
