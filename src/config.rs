//! Options shared by every pipeline stage.

use crate::{compiler::types::IrType, symbols::scope_table::Classification};

/// Routines every program can call without declaring them.
pub const BUILTIN_ROUTINES: [&str; 1] = ["print"];

/// An externally defined routine the program may call by name.
///
/// The parser and type checker see it as a declared symbol; lowering
/// declares it in the module so calls resolve by exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternRoutine {
    pub name: String,
    pub params: Vec<IrType>,
    pub returns: Option<IrType>,
}

impl ExternRoutine {
    pub fn new(name: &str, params: Vec<IrType>, returns: Option<IrType>) -> Self {
        ExternRoutine {
            name: String::from(name),
            params,
            returns,
        }
    }

    /// Routines returning nothing are classified as `int`.
    pub fn classification(&self) -> Classification {
        self.returns
            .map(|returns| returns.classification())
            .unwrap_or(Classification::Int)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub module_name: String,
    pub externs: Vec<ExternRoutine>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            module_name: String::from("main"),
            externs: vec![],
        }
    }
}

impl CompileOptions {
    pub fn with_module_name(mut self, module_name: &str) -> Self {
        self.module_name = String::from(module_name);
        self
    }

    pub fn with_extern(mut self, routine: ExternRoutine) -> Self {
        self.externs.push(routine);
        self
    }

    /// Names and classifications to pre-declare in a stage's global scope.
    pub fn predeclared(&self) -> Vec<(String, Classification)> {
        BUILTIN_ROUTINES
            .iter()
            .map(|name| (String::from(*name), Classification::Int))
            .chain(
                self.externs
                    .iter()
                    .map(|routine| (routine.name.clone(), routine.classification())),
            )
            .collect()
    }
}
