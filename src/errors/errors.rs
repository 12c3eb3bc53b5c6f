use std::fmt::Display;

use thiserror::Error;

use crate::{symbols::scope_table::SymbolError, Position};

/// The pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexer,
    Parser,
    TypeChecker,
    Codegen,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Lexer => write!(f, "Lexer"),
            Stage::Parser => write!(f, "Parser"),
            Stage::TypeChecker => write!(f, "Semantic"),
            Stage::Codegen => write!(f, "Codegen"),
        }
    }
}

/// Coarse classification of every failure the pipeline can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    DuplicateSymbol,
    UndefinedSymbol,
    Scope,
    Semantic,
    Codegen,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    stage: Stage,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, stage: Stage, position: Option<Position>) -> Self {
        Error {
            internal_error: error_impl,
            stage,
            position,
        }
    }

    pub fn get_position(&self) -> Option<Position> {
        self.position
    }

    pub fn get_stage(&self) -> Stage {
        self.stage
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnterminatedString | ErrorImpl::UnterminatedChar => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::Syntax,
            ErrorImpl::Symbol(SymbolError::Duplicate { .. }) => ErrorKind::DuplicateSymbol,
            ErrorImpl::Symbol(SymbolError::Undefined { .. }) => ErrorKind::UndefinedSymbol,
            ErrorImpl::Symbol(SymbolError::NoScope) => ErrorKind::Scope,
            ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::BinaryTypeMatchError { .. }
            | ErrorImpl::MissingType { .. } => ErrorKind::Semantic,
            ErrorImpl::PrintArguments { .. }
            | ErrorImpl::UnsupportedPrintType { .. }
            | ErrorImpl::StorageTypeMatchError { .. }
            | ErrorImpl::UnknownFunction { .. }
            | ErrorImpl::UnknownVariable { .. }
            | ErrorImpl::UnexpectedArguments { .. }
            | ErrorImpl::ArgumentTypeMatchError { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnsupportedBinary { .. }
            | ErrorImpl::VerificationFailed { .. }
            | ErrorImpl::Builder { .. }
            | ErrorImpl::WriteFailed { .. } => ErrorKind::Codegen,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::Symbol(SymbolError::Duplicate { .. }) => "DuplicateSymbol",
            ErrorImpl::Symbol(SymbolError::Undefined { .. }) => "UndefinedSymbol",
            ErrorImpl::Symbol(SymbolError::NoScope) => "NoScope",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::BinaryTypeMatchError { .. } => "BinaryTypeMatchError",
            ErrorImpl::MissingType { .. } => "MissingType",
            ErrorImpl::PrintArguments { .. } => "PrintArguments",
            ErrorImpl::UnsupportedPrintType { .. } => "UnsupportedPrintType",
            ErrorImpl::StorageTypeMatchError { .. } => "StorageTypeMatchError",
            ErrorImpl::UnknownFunction { .. } => "UnknownFunction",
            ErrorImpl::UnknownVariable { .. } => "UnknownVariable",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnsupportedBinary { .. } => "UnsupportedBinary",
            ErrorImpl::VerificationFailed { .. } => "VerificationFailed",
            ErrorImpl::Builder { .. } => "BuilderError",
            ErrorImpl::WriteFailed { .. } => "WriteFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnterminatedChar => {
                ErrorTip::Suggestion(String::from("Character literal is missing its closing `'`"))
            }
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("{} Found `{}`", expected, found))
            }
            ErrorImpl::Symbol(SymbolError::Duplicate { name }) => {
                ErrorTip::Suggestion(format!("`{}` is already declared in this scope", name))
            }
            ErrorImpl::Symbol(SymbolError::Undefined { name }) => {
                ErrorTip::Suggestion(format!("`{}` is not declared", name))
            }
            ErrorImpl::Symbol(SymbolError::NoScope) => ErrorTip::None,
            ErrorImpl::TypeMatchError {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` is declared as `{}` but initialized with `{}`",
                variable, expected, received
            )),
            ErrorImpl::BinaryTypeMatchError { left, right } => ErrorTip::Suggestion(format!(
                "Operands have different types: `{}` and `{}`",
                left, right
            )),
            ErrorImpl::MissingType { name } => {
                ErrorTip::Suggestion(format!("`{}` has no type assigned", name))
            }
            ErrorImpl::PrintArguments { received } => ErrorTip::Suggestion(format!(
                "`print` expects exactly one argument, received {}",
                received
            )),
            ErrorImpl::UnsupportedPrintType { type_ } => {
                ErrorTip::Suggestion(format!("`print` cannot print a value of type `{}`", type_))
            }
            ErrorImpl::StorageTypeMatchError {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Storage for `{}` is `{}` but the initializer produces `{}`",
                variable, expected, received
            )),
            ErrorImpl::UnknownFunction { function } => {
                ErrorTip::Suggestion(format!("No routine named `{}` is declared", function))
            }
            ErrorImpl::UnknownVariable { variable } => {
                ErrorTip::Suggestion(format!("`{}` has no storage at this point", variable))
            }
            ErrorImpl::UnexpectedArguments {
                function,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` expects {} arguments, received {}",
                function, expected, received
            )),
            ErrorImpl::ArgumentTypeMatchError {
                function,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "`{}` expects an argument of type `{}`, received `{}`",
                function, expected, received
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnsupportedBinary { .. } => ErrorTip::Suggestion(String::from(
                "Binary expressions cannot be lowered yet",
            )),
            ErrorImpl::WriteFailed { path, .. } => {
                ErrorTip::Suggestion(format!("Check that `{}` is writable", path))
            }
            ErrorImpl::VerificationFailed { .. } | ErrorImpl::Builder { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.stage, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unterminated char literal")]
    UnterminatedChar,
    #[error("{expected} (found {found:?})")]
    UnexpectedToken { expected: String, found: String },
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    #[error("type mismatch: variable {variable:?} is declared as {expected:?} but initialized with {received:?}")]
    TypeMatchError {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("type mismatch in binary expression: {left:?} and {right:?}")]
    BinaryTypeMatchError { left: String, right: String },
    #[error("symbol {name:?} has no type")]
    MissingType { name: String },
    #[error("print() expects exactly one argument, received {received}")]
    PrintArguments { received: usize },
    #[error("print: unsupported argument type {type_}")]
    UnsupportedPrintType { type_: String },
    #[error("initializer type {received} does not match storage type {expected} of variable {variable:?}")]
    StorageTypeMatchError {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("call to unknown function {function:?}")]
    UnknownFunction { function: String },
    #[error("use of undeclared variable {variable:?}")]
    UnknownVariable { variable: String },
    #[error("unexpected arguments to {function:?}: expected {expected}, received {received}")]
    UnexpectedArguments {
        function: String,
        expected: usize,
        received: usize,
    },
    #[error("argument types do not match for {function:?}: expected {expected}, received {received}")]
    ArgumentTypeMatchError {
        function: String,
        expected: String,
        received: String,
    },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("binary expressions are not supported in IR generation (operator {operator:?})")]
    UnsupportedBinary { operator: String },
    #[error("IR verification failed: {message}")]
    VerificationFailed { message: String },
    #[error("IR builder failed: {message}")]
    Builder { message: String },
    #[error("could not write IR to {path:?}: {message}")]
    WriteFailed { path: String, message: String },
}
