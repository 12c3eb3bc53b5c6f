//! Lexical analysis module for the compiler.
//!
//! This module contains the scanner that turns source text into a stream
//! of tokens for parsing. It handles:
//!
//! - Keywords, identifiers, numeric, string and character literals
//! - One and two character operators, including `&mut`
//! - Line and block comments
//! - Line/column tracking for error reporting
//!
//! Characters the language does not know become `Unknown` tokens; the
//! parser is the stage that rejects them.

pub mod lexer;
pub mod tokens;
