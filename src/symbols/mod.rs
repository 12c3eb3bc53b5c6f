//! Scoped symbol table shared by the parser and the type checker.
//!
//! Each stage builds and owns its own [`scope_table::ScopeTable`]; nothing
//! is shared between them.

pub mod scope_table;
