//! Error types and error handling for the compiler.
//!
//! This module defines the error type shared by every pipeline stage.
//! It includes:
//!
//! - One error structure carrying the failure, its originating stage and
//!   an optional source position
//! - Specific error variants for lexing, parsing, symbol tables, semantic
//!   validation and IR lowering
//! - A coarse `ErrorKind` classification and helpful suggestions

pub mod errors;

#[cfg(test)]
mod tests;
