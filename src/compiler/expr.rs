use inkwell::values::{BasicMetadataValueEnum, BasicValueEnum};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
};

use super::{
    compiler::{builder_error, codegen_error, Compiler},
    types::IrType,
};

/// Lowers one expression. `None` is the result of a call returning void.
pub fn gen_expression<'a>(
    compiler: &mut Compiler<'a>,
    expression: &Expr,
) -> Result<Option<BasicValueEnum<'a>>, Error> {
    match expression {
        Expr::Literal(text) => gen_literal(compiler, text).map(Some),
        Expr::Variable(name) => {
            let slot = compiler.named_allocas.get(name).copied().ok_or_else(|| {
                codegen_error(ErrorImpl::UnknownVariable {
                    variable: name.clone(),
                })
            })?;

            let value = compiler
                .builder
                .build_load(slot.pointer, name)
                .map_err(builder_error)?;

            Ok(Some(value))
        }
        Expr::Binary { operator, .. } => Err(codegen_error(ErrorImpl::UnsupportedBinary {
            operator: operator.clone(),
        })),
        Expr::Call { callee, arguments } if callee == "print" => {
            gen_print(compiler, arguments).map(|_| None)
        }
        Expr::Call { callee, arguments } => gen_call(compiler, callee, arguments),
    }
}

fn gen_literal<'a>(compiler: &Compiler<'a>, text: &str) -> Result<BasicValueEnum<'a>, Error> {
    let number_error = || {
        codegen_error(ErrorImpl::NumberParseError {
            token: String::from(text),
        })
    };

    match IrType::infer_literal(text) {
        IrType::Int64 => {
            let value = text.parse::<i64>().map_err(|_| number_error())?;
            Ok(compiler
                .context
                .i64_type()
                .const_int(value as u64, true)
                .into())
        }
        IrType::Double => {
            let value = text.parse::<f64>().map_err(|_| number_error())?;
            Ok(compiler.context.f64_type().const_float(value).into())
        }
        IrType::Str => {
            let global = compiler
                .builder
                .build_global_string_ptr(text, "str")
                .map_err(builder_error)?;
            Ok(global.as_pointer_value().into())
        }
    }
}

/// `print(x)` picks its routine from the lowered type of `x`.
fn gen_print<'a>(compiler: &mut Compiler<'a>, arguments: &[Expr]) -> Result<(), Error> {
    if arguments.len() != 1 {
        return Err(codegen_error(ErrorImpl::PrintArguments {
            received: arguments.len(),
        }));
    }

    let value = gen_expression(compiler, &arguments[0])?.ok_or_else(|| {
        codegen_error(ErrorImpl::UnsupportedPrintType {
            type_: String::from("void"),
        })
    })?;

    let ty = IrType::of_value(value).ok_or_else(|| {
        codegen_error(ErrorImpl::UnsupportedPrintType {
            type_: format!("{:?}", value.get_type()),
        })
    })?;

    let routine = compiler.print_routine(ty);
    compiler
        .builder
        .build_call(routine, &[value.into()], "")
        .map_err(builder_error)?;

    Ok(())
}

fn gen_call<'a>(
    compiler: &mut Compiler<'a>,
    callee: &str,
    arguments: &[Expr],
) -> Result<Option<BasicValueEnum<'a>>, Error> {
    let function = compiler.module.get_function(callee).ok_or_else(|| {
        codegen_error(ErrorImpl::UnknownFunction {
            function: String::from(callee),
        })
    })?;

    let expected = function.count_params() as usize;
    if arguments.len() != expected {
        return Err(codegen_error(ErrorImpl::UnexpectedArguments {
            function: String::from(callee),
            expected,
            received: arguments.len(),
        }));
    }

    let params = compiler
        .externs
        .get(callee)
        .map(|routine| routine.params.clone());

    let mut args: Vec<BasicMetadataValueEnum<'a>> = vec![];
    for (index, argument) in arguments.iter().enumerate() {
        let value = gen_expression(compiler, argument)?;
        let received = value.and_then(IrType::of_value);

        let param = params
            .as_ref()
            .and_then(|params| params.get(index).copied());
        if let Some(param) = param {
            if received != Some(param) {
                return Err(codegen_error(ErrorImpl::ArgumentTypeMatchError {
                    function: String::from(callee),
                    expected: param.to_string(),
                    received: received
                        .map(|ty| ty.to_string())
                        .unwrap_or_else(|| String::from("void")),
                }));
            }
        }

        match value {
            Some(value) => args.push(value.into()),
            None => {
                return Err(codegen_error(ErrorImpl::ArgumentTypeMatchError {
                    function: String::from(callee),
                    expected: String::from("a value"),
                    received: String::from("void"),
                }))
            }
        }
    }

    let call = compiler
        .builder
        .build_call(function, &args, "")
        .map_err(builder_error)?;

    Ok(call.try_as_basic_value().left())
}
