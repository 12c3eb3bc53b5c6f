use log::trace;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::{Error, ErrorImpl},
};

use super::{
    compiler::{builder_error, codegen_error, Compiler, StorageSlot},
    expr::gen_expression,
    types::IrType,
};

/// Storage type for a declaration. Only literal initializers are inspected;
/// anything else (or no initializer) is `i64`.
pub fn declared_type(initializer: Option<&Expr>) -> IrType {
    match initializer {
        Some(Expr::Literal(text)) => IrType::infer_literal(text),
        _ => IrType::Int64,
    }
}

pub fn gen_statement<'a>(compiler: &mut Compiler<'a>, statement: &Stmt) -> Result<(), Error> {
    match statement {
        Stmt::VarDecl { name, initializer } => {
            let declared = declared_type(initializer.as_ref());

            let value = match initializer {
                Some(initializer) => gen_expression(compiler, initializer)?,
                None => Some(declared.zero_value(compiler.context)),
            };

            let received = value.and_then(IrType::of_value);
            let value = match value {
                Some(value) if received == Some(declared) => value,
                _ => {
                    return Err(codegen_error(ErrorImpl::StorageTypeMatchError {
                        variable: name.clone(),
                        expected: declared.to_string(),
                        received: received
                            .map(|ty| ty.to_string())
                            .unwrap_or_else(|| String::from("void")),
                    }))
                }
            };

            // The slot is registered after the initializer is lowered
            let pointer = compiler.create_entry_alloca(declared, name)?;
            compiler
                .builder
                .build_store(pointer, value)
                .map_err(builder_error)?;

            compiler.named_allocas.insert(
                name.clone(),
                StorageSlot {
                    pointer,
                    ty: declared,
                },
            );
            trace!("allocated {} as {}", name, declared);
        }
        Stmt::Expression(expression) => {
            gen_expression(compiler, expression)?;
        }
    }

    Ok(())
}
