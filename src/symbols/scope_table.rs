use std::{collections::HashMap, fmt::Display};

use log::trace;
use thiserror::Error;

/// The type classification a symbol carries through semantic validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Int,
    Float,
    String,
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Int => write!(f, "int"),
            Classification::Float => write!(f, "float"),
            Classification::String => write!(f, "string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// `None` until a stage assigns one with [`ScopeTable::set_type`].
    pub type_: Option<Classification>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol {name:?} already declared in this scope")]
    Duplicate { name: String },
    #[error("symbol {name:?} not declared")]
    Undefined { name: String },
    #[error("no scope available")]
    NoScope,
}

/// A stack of lexical scopes, innermost last.
///
/// A new table starts with the global scope already open. Lookups walk from
/// the innermost scope outwards, so inner declarations shadow outer ones.
#[derive(Debug, Clone)]
pub struct ScopeTable {
    scopes: Vec<HashMap<String, Symbol>>,
}

impl Default for ScopeTable {
    fn default() -> Self {
        ScopeTable::new()
    }
}

impl ScopeTable {
    pub fn new() -> Self {
        ScopeTable {
            scopes: vec![HashMap::new()],
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
        trace!("entered scope (depth {})", self.scopes.len());
    }

    pub fn exit_scope(&mut self) -> Result<(), SymbolError> {
        if self.scopes.pop().is_none() {
            return Err(SymbolError::NoScope);
        }

        trace!("exited scope (depth {})", self.scopes.len());
        Ok(())
    }

    /// Declares `name` in the innermost scope.
    ///
    /// Fails if the innermost scope already holds `name`; a declaration in an
    /// outer scope is shadowed instead.
    pub fn declare(&mut self, name: &str) -> Result<(), SymbolError> {
        let current = self.scopes.last_mut().ok_or(SymbolError::NoScope)?;

        if current.contains_key(name) {
            return Err(SymbolError::Duplicate {
                name: name.to_string(),
            });
        }

        current.insert(
            name.to_string(),
            Symbol {
                name: name.to_string(),
                type_: None,
            },
        );
        Ok(())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn set_type(&mut self, name: &str, type_: Classification) -> Result<(), SymbolError> {
        let symbol = self
            .scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name))
            .ok_or_else(|| SymbolError::Undefined {
                name: name.to_string(),
            })?;

        symbol.type_ = Some(type_);
        Ok(())
    }

    pub fn get_type(&self, name: &str) -> Result<Option<Classification>, SymbolError> {
        self.lookup(name)
            .map(|symbol| symbol.type_)
            .ok_or_else(|| SymbolError::Undefined {
                name: name.to_string(),
            })
    }
}
