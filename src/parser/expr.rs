use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    let handler = parser.get_nud_lookup().get(&token_kind).copied();
    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("Expected expression.")),
    }
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Literal(parser.advance().lexeme))
}

/// `IDENTIFIER "(" args? ")"` or a plain variable reference.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name_token = parser.advance();
    parser.ensure_declared(&name_token.lexeme, name_token.position)?;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Variable(name_token.lexeme));
    }

    parser.advance();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen, "Expected ')' after arguments.")?;

    Ok(Expr::Call {
        callee: name_token.lexeme,
        arguments,
    })
}
