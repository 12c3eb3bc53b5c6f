//! Main compiler module.
//!
//! This module contains the core Compiler structure, which owns the LLVM
//! module and builder, tracks variable storage, and drives lowering from
//! statements to a verified module.

use std::{collections::HashMap, path::Path};

use inkwell::{
    attributes::{Attribute, AttributeLoc},
    basic_block::BasicBlock,
    builder::{Builder, BuilderError},
    context::Context,
    module::{Linkage, Module},
    targets::TargetMachine,
    types::{BasicMetadataTypeEnum, BasicType, FunctionType},
    values::{FunctionValue, InstructionOpcode, PointerValue},
};
use log::{debug, trace};

use crate::{
    ast::ast::Stmt,
    config::{CompileOptions, ExternRoutine},
    errors::errors::{Error, ErrorImpl, Stage},
};

use super::{stmt::gen_statement, types::IrType};

pub const ENTRY_FUNCTION: &str = "main";

/// Stack storage backing one declared variable.
#[derive(Debug, Clone, Copy)]
pub struct StorageSlot<'a> {
    pub pointer: PointerValue<'a>,
    pub ty: IrType,
}

/// Lowering state for one module.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the LLVM context
pub struct Compiler<'a> {
    /// Reference to the LLVM context
    pub context: &'a Context,
    /// The LLVM module being built
    pub module: Module<'a>,
    /// The LLVM IR builder, positioned inside the entry routine while lowering
    pub builder: Builder<'a>,
    /// Map of variable names to their storage slots
    pub named_allocas: HashMap<String, StorageSlot<'a>>,
    /// Signatures of the declared extern routines
    pub externs: HashMap<String, ExternRoutine>,
    entry: Option<FunctionValue<'a>>,
}

impl<'a> Compiler<'a> {
    pub fn new(context: &'a Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        module.set_triple(&TargetMachine::get_default_triple());

        Compiler {
            context,
            module,
            builder: context.create_builder(),
            named_allocas: HashMap::new(),
            externs: HashMap::new(),
            entry: None,
        }
    }

    /// Declares each extern routine in the module so calls resolve by name.
    pub fn declare_externs(&mut self, externs: &[ExternRoutine]) {
        for routine in externs {
            let params = routine
                .params
                .iter()
                .map(|param| param.metadata_type(self.context))
                .collect::<Vec<BasicMetadataTypeEnum>>();

            let function_type = match routine.returns {
                Some(returns) => returns.basic_type(self.context).fn_type(&params, false),
                None => self.context.void_type().fn_type(&params, false),
            };

            if self.module.get_function(&routine.name).is_none() {
                self.module
                    .add_function(&routine.name, function_type, Some(Linkage::External));
            }
            self.externs.insert(routine.name.clone(), routine.clone());
        }
    }

    /// Creates the entry routine and positions the builder in its entry block.
    pub fn create_entry_function(&mut self) -> FunctionValue<'a> {
        let function_type = self.context.i32_type().fn_type(&[], false);
        let function = self.create_function(ENTRY_FUNCTION, function_type);
        self.entry = Some(function);
        function
    }

    /// Creates a new function in the module.
    ///
    /// If the function already exists, it reuses the existing declaration.
    /// Adds the 'uwtable' and 'nounwind' attributes.
    pub fn create_function(&self, name: &str, function_type: FunctionType<'a>) -> FunctionValue<'a> {
        let function = self
            .module
            .get_function(name)
            .unwrap_or_else(|| self.create_function_proto(name, function_type));

        self.create_function_block(function);

        let attributes = [
            self.context
                .create_enum_attribute(Attribute::get_named_enum_kind_id("uwtable"), 0),
            self.context
                .create_enum_attribute(Attribute::get_named_enum_kind_id("nounwind"), 0),
        ];

        for attribute in attributes.iter() {
            function.add_attribute(AttributeLoc::Function, *attribute);
        }

        function
    }

    fn create_function_proto(&self, name: &str, function_type: FunctionType<'a>) -> FunctionValue<'a> {
        self.module
            .add_function(name, function_type, Some(Linkage::External))
    }

    fn create_function_block(&self, function: FunctionValue<'a>) {
        let entry = self.create_basic_block("entry", function);
        self.builder.position_at_end(entry);
    }

    fn create_basic_block(&self, name: &str, function: FunctionValue<'a>) -> BasicBlock<'a> {
        self.context.append_basic_block(function, name)
    }

    pub fn entry_function(&self) -> Option<FunctionValue<'a>> {
        self.entry
    }

    /// Allocates a slot in the entry block after any earlier slots, so it is
    /// live for the whole routine and slots stay in declaration order.
    pub fn create_entry_alloca(&self, ty: IrType, name: &str) -> Result<PointerValue<'a>, Error> {
        let entry_block = self
            .entry
            .and_then(|function| function.get_first_basic_block())
            .ok_or_else(|| {
                codegen_error(ErrorImpl::Builder {
                    message: String::from("no entry routine to allocate in"),
                })
            })?;

        let mut last_alloca = None;
        let mut instruction = entry_block.get_first_instruction();
        while let Some(current) = instruction {
            if current.get_opcode() != InstructionOpcode::Alloca {
                break;
            }
            last_alloca = Some(current);
            instruction = current.get_next_instruction();
        }

        let builder = self.context.create_builder();
        let insert_before = match last_alloca {
            Some(alloca) => alloca.get_next_instruction(),
            None => entry_block.get_first_instruction(),
        };
        match insert_before {
            Some(instruction) => builder.position_before(&instruction),
            None => builder.position_at_end(entry_block),
        }

        builder
            .build_alloca(ty.basic_type(self.context), name)
            .map_err(builder_error)
    }

    /// The print routine for `ty`, declared on first use.
    pub fn print_routine(&self, ty: IrType) -> FunctionValue<'a> {
        let name = match ty {
            IrType::Int64 => "print_i64",
            IrType::Double => "print_double",
            IrType::Str => "print_str",
        };

        self.module.get_function(name).unwrap_or_else(|| {
            let function_type = self
                .context
                .void_type()
                .fn_type(&[ty.metadata_type(self.context)], false);
            self.module
                .add_function(name, function_type, Some(Linkage::External))
        })
    }

    /// Storage type of a lowered variable.
    pub fn slot_type(&self, name: &str) -> Option<IrType> {
        self.named_allocas.get(name).map(|slot| slot.ty)
    }

    /// Returns 0 from the entry routine and verifies the routine and module.
    pub fn finish(&mut self) -> Result<(), Error> {
        self.builder
            .build_return(Some(&self.context.i32_type().const_zero()))
            .map_err(builder_error)?;

        if let Some(function) = self.entry {
            if !function.verify(false) {
                return Err(codegen_error(ErrorImpl::VerificationFailed {
                    message: format!("routine {:?} is malformed", ENTRY_FUNCTION),
                }));
            }
        }

        self.module.verify().map_err(|message| {
            codegen_error(ErrorImpl::VerificationFailed {
                message: message.to_string(),
            })
        })
    }

    /// Textual IR of the whole module.
    pub fn print_ir(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// Saves the current LLVM module to a file.
    pub fn save_module_to_file(&self, output_file: &Path) -> Result<(), Error> {
        self.module.print_to_file(output_file).map_err(|message| {
            codegen_error(ErrorImpl::WriteFailed {
                path: output_file.display().to_string(),
                message: message.to_string(),
            })
        })
    }
}

pub fn codegen_error(error: ErrorImpl) -> Error {
    Error::new(error, Stage::Codegen, None)
}

pub fn builder_error(error: BuilderError) -> Error {
    codegen_error(ErrorImpl::Builder {
        message: error.to_string(),
    })
}

/// Lowers `statements` into a fresh, verified module.
///
/// All statements go into one entry routine, which returns 0 after them.
pub fn emit<'a>(
    statements: &[Stmt],
    options: &CompileOptions,
    context: &'a Context,
) -> Result<Compiler<'a>, Error> {
    let mut compiler = Compiler::new(context, &options.module_name);

    compiler.declare_externs(&options.externs);
    compiler.create_entry_function();

    for statement in statements {
        trace!("lowering {:?}", statement);
        gen_statement(&mut compiler, statement)?;
    }

    compiler.finish()?;
    debug!(
        "lowered {} statements into module {:?}",
        statements.len(),
        options.module_name
    );

    Ok(compiler)
}
