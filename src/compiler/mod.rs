//! Code generation module for the compiler.
//!
//! This module lowers the validated AST into LLVM IR through inkwell:
//!
//! - One `i32 main()` entry routine holding every statement
//! - A stack slot per declared variable, allocated in the entry block
//! - Heuristic literal typing (`i64`, `double` or a global string)
//! - `print` dispatched to `print_i64`, `print_double` or `print_str`
//! - Calls to configured extern routines by exact name

pub mod compiler;
pub mod expr;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
