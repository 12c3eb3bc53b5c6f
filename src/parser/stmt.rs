use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    let expression = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon, "Expected ';' after expression.")?;

    Ok(Stmt::Expression(expression))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name_token = parser.expect(TokenKind::Identifier, "Expected variable name.")?;

    // Registered before the initializer is parsed, so `let x = x;` gets through here
    parser.declare(&name_token.lexeme, name_token.position)?;

    let initializer = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    parser.expect(
        TokenKind::Semicolon,
        "Expected ';' after variable declaration.",
    )?;

    Ok(Stmt::VarDecl {
        name: name_token.lexeme,
        initializer,
    })
}
