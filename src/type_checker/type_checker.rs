use log::{debug, trace};

use crate::{
    ast::ast::{Expr, Stmt},
    config::CompileOptions,
    errors::errors::{Error, ErrorImpl, Stage},
    symbols::scope_table::{Classification, ScopeTable, SymbolError},
};

#[derive(Debug)]
pub struct TypeChecker {
    pub symbols: ScopeTable,
}

impl TypeChecker {
    /// A checker whose global scope already holds the builtins and externs.
    pub fn new(options: &CompileOptions) -> Result<Self, Error> {
        let mut type_checker = TypeChecker {
            symbols: ScopeTable::new(),
        };

        for (name, classification) in options.predeclared() {
            if !type_checker.symbols.is_declared(&name) {
                type_checker.symbols.declare(&name).map_err(symbol_error)?;
            }
            type_checker
                .symbols
                .set_type(&name, classification)
                .map_err(symbol_error)?;
        }

        Ok(type_checker)
    }

    /// Classification of a visible name, failing if it is undeclared or untyped.
    pub fn fetch_type(&self, name: &str) -> Result<Classification, Error> {
        match self.symbols.get_type(name).map_err(symbol_error)? {
            Some(classification) => Ok(classification),
            None => Err(semantic_error(ErrorImpl::MissingType {
                name: String::from(name),
            })),
        }
    }
}

fn semantic_error(error: ErrorImpl) -> Error {
    Error::new(error, Stage::TypeChecker, None)
}

fn symbol_error(error: SymbolError) -> Error {
    semantic_error(error.into())
}

pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &Expr) -> Result<Classification, Error> {
    match expr {
        // Literal text is not inspected here; lowering infers its own types
        Expr::Literal(_) => Ok(Classification::Int),
        Expr::Variable(name) => type_checker.fetch_type(name),
        Expr::Binary { left, right, .. } => {
            let left = type_check_expr(type_checker, left)?;
            let right = type_check_expr(type_checker, right)?;

            if left != right {
                return Err(semantic_error(ErrorImpl::BinaryTypeMatchError {
                    left: left.to_string(),
                    right: right.to_string(),
                }));
            }

            Ok(left)
        }
        Expr::Call { callee, arguments } => {
            let returns = type_checker.fetch_type(callee)?;

            for argument in arguments {
                type_check_expr(type_checker, argument)?;
            }

            Ok(returns)
        }
    }
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt) -> Result<(), Error> {
    match stmt {
        Stmt::VarDecl { name, initializer } => {
            type_checker.symbols.declare(name).map_err(symbol_error)?;
            type_checker
                .symbols
                .set_type(name, Classification::Int)
                .map_err(symbol_error)?;

            if let Some(initializer) = initializer {
                let received = type_check_expr(type_checker, initializer)?;

                if received != Classification::Int {
                    return Err(semantic_error(ErrorImpl::TypeMatchError {
                        variable: name.clone(),
                        expected: Classification::Int.to_string(),
                        received: received.to_string(),
                    }));
                }
            }

            trace!("checked declaration of {}", name);
            Ok(())
        }
        Stmt::Expression(expr) => type_check_expr(type_checker, expr).map(|_| ()),
    }
}

/// Checks every statement in order, returning the checker's final state.
pub fn type_check(statements: &[Stmt], options: &CompileOptions) -> Result<TypeChecker, Error> {
    let mut type_checker = TypeChecker::new(options)?;

    for stmt in statements {
        type_check_stmt(&mut type_checker, stmt)?;
    }

    debug!("checked {} statements", statements.len());
    Ok(type_checker)
}

/// Validates a program; the first violation aborts the check.
pub fn analyze(statements: &[Stmt], options: &CompileOptions) -> Result<(), Error> {
    type_check(statements, options).map(|_| ())
}
