//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip, Stage};
use crate::symbols::scope_table::SymbolError;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnterminatedString,
        Stage::Lexer,
        Some(Position::new(3, 7)),
    );

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_stage(), Stage::Lexer);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("Expected expression."),
            found: String::from(";"),
        },
        Stage::Parser,
        Some(Position::new(4, 2)),
    );

    assert_eq!(error.get_position(), Some(Position::new(4, 2)));
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_symbol_errors_keep_their_kind_in_any_stage() {
    let duplicate = Error::new(
        SymbolError::Duplicate {
            name: String::from("a"),
        }
        .into(),
        Stage::Parser,
        None,
    );
    let undefined = Error::new(
        SymbolError::Undefined {
            name: String::from("b"),
        }
        .into(),
        Stage::TypeChecker,
        None,
    );
    let no_scope = Error::new(SymbolError::NoScope.into(), Stage::Parser, None);

    assert_eq!(duplicate.kind(), ErrorKind::DuplicateSymbol);
    assert_eq!(undefined.kind(), ErrorKind::UndefinedSymbol);
    assert_eq!(no_scope.kind(), ErrorKind::Scope);
    assert_eq!(duplicate.get_error_name(), "DuplicateSymbol");
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            variable: String::from("x"),
            expected: String::from("int"),
            received: String::from("float"),
        },
        Stage::TypeChecker,
        None,
    );

    assert_eq!(error.kind(), ErrorKind::Semantic);
    let message = error.to_string();
    assert!(message.starts_with("Semantic error:"));
    assert!(message.contains("\"int\""));
    assert!(message.contains("\"float\""));
}

#[test]
fn test_codegen_errors() {
    let errors = [
        ErrorImpl::PrintArguments { received: 2 },
        ErrorImpl::UnsupportedPrintType {
            type_: String::from("i32"),
        },
        ErrorImpl::UnknownFunction {
            function: String::from("foo"),
        },
        ErrorImpl::UnsupportedBinary {
            operator: String::from("+"),
        },
        ErrorImpl::VerificationFailed {
            message: String::from("broken"),
        },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, Stage::Codegen, None);
        assert_eq!(error.kind(), ErrorKind::Codegen);
        assert!(error.to_string().starts_with("Codegen error:"));
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::VerificationFailed {
            message: String::from("bad"),
        },
        Stage::Codegen,
        None,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::PrintArguments { received: 2 },
        Stage::Codegen,
        None,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("received 2")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
