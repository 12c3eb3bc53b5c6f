use std::fmt::Display;

use inkwell::{
    context::Context,
    types::{BasicMetadataTypeEnum, BasicTypeEnum},
    values::BasicValueEnum,
    AddressSpace,
};
use lazy_static::lazy_static;
use regex::Regex;

use crate::symbols::scope_table::Classification;

lazy_static! {
    static ref INTEGER_LITERAL: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref DOUBLE_LITERAL: Regex = Regex::new(r"^([0-9]+\.[0-9]*|\.[0-9]+)$").unwrap();
}

/// The value types lowering can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IrType {
    Int64,
    Double,
    /// Pointer to a nul-terminated byte string.
    Str,
}

impl IrType {
    /// Infers the IR type of a literal purely from its text: all digits is
    /// `i64`, digits with one `.` is `double`, anything else is a string.
    pub fn infer_literal(text: &str) -> IrType {
        if INTEGER_LITERAL.is_match(text) {
            IrType::Int64
        } else if DOUBLE_LITERAL.is_match(text) {
            IrType::Double
        } else {
            IrType::Str
        }
    }

    pub fn basic_type<'a>(&self, context: &'a Context) -> BasicTypeEnum<'a> {
        match self {
            IrType::Int64 => context.i64_type().into(),
            IrType::Double => context.f64_type().into(),
            IrType::Str => context.i8_type().ptr_type(AddressSpace::default()).into(),
        }
    }

    pub fn metadata_type<'a>(&self, context: &'a Context) -> BasicMetadataTypeEnum<'a> {
        self.basic_type(context).into()
    }

    /// Maps a produced LLVM type back onto the lowering types, if it is one.
    pub fn from_basic_type(type_: BasicTypeEnum) -> Option<IrType> {
        match type_ {
            BasicTypeEnum::IntType(int) if int.get_bit_width() == 64 => Some(IrType::Int64),
            BasicTypeEnum::FloatType(_) => Some(IrType::Double),
            BasicTypeEnum::PointerType(_) => Some(IrType::Str),
            _ => None,
        }
    }

    pub fn of_value(value: BasicValueEnum) -> Option<IrType> {
        IrType::from_basic_type(value.get_type())
    }

    /// Zero (or null) constant used for declarations without an initializer.
    pub fn zero_value<'a>(&self, context: &'a Context) -> BasicValueEnum<'a> {
        match self {
            IrType::Int64 => context.i64_type().const_zero().into(),
            IrType::Double => context.f64_type().const_zero().into(),
            IrType::Str => context
                .i8_type()
                .ptr_type(AddressSpace::default())
                .const_null()
                .into(),
        }
    }

    /// Classification the parser and type checker give a routine returning this type.
    pub fn classification(&self) -> Classification {
        match self {
            IrType::Int64 => Classification::Int,
            IrType::Double => Classification::Float,
            IrType::Str => Classification::String,
        }
    }
}

impl Display for IrType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrType::Int64 => write!(f, "i64"),
            IrType::Double => write!(f, "double"),
            IrType::Str => write!(f, "ptr"),
        }
    }
}
