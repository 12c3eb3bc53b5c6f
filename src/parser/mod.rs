//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the token
//! stream into a list of statements. Dispatch goes through lookup tables:
//!
//! - Statement handlers keyed by the leading token (`let`)
//! - NUD (null denotation) handlers for literals, variables and calls
//!
//! The parser owns its own scope table. Every `let` declares its name in the
//! innermost scope and every identifier use must already be visible.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
