//! Semantic analysis module.
//!
//! This module checks a parsed program against the language's single
//! classification discipline:
//!
//! - Every declared variable is classified `int`
//! - Initializers must produce `int`
//! - Binary operands must share a classification
//! - Every referenced name and callee must be declared
//!
//! The checker builds its own scope table; nothing is carried over from
//! the parser.

pub mod type_checker;
