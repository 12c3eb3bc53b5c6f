//! Runs every stage in order: scan, parse, check, lower.

use std::time::Instant;

use inkwell::context::Context;
use log::debug;

use crate::{
    ast::ast::Stmt,
    compiler::compiler::{emit, Compiler},
    config::CompileOptions,
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    type_checker::type_checker::analyze,
};

/// Everything the pipeline produced for one source file.
pub struct Compilation<'a> {
    pub tokens: Vec<Token>,
    pub statements: Vec<Stmt>,
    pub compiler: Compiler<'a>,
}

/// Scans and parses `source`, returning the tokens alongside the statements.
pub fn parse_source(source: &str, options: &CompileOptions) -> Result<(Vec<Token>, Vec<Stmt>), Error> {
    let start = Instant::now();
    let tokens = tokenize(source)?;
    debug!("tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let start = Instant::now();
    let statements = parse(tokens.clone(), options)?;
    debug!("parsed {} statements in {:?}", statements.len(), start.elapsed());

    Ok((tokens, statements))
}

/// Runs the whole pipeline. The first failing stage aborts the rest.
pub fn compile_source<'a>(
    source: &str,
    options: &CompileOptions,
    context: &'a Context,
) -> Result<Compilation<'a>, Error> {
    let (tokens, statements) = parse_source(source, options)?;

    let start = Instant::now();
    analyze(&statements, options)?;
    debug!("semantic analysis finished in {:?}", start.elapsed());

    let start = Instant::now();
    let compiler = emit(&statements, options, context)?;
    debug!("lowering finished in {:?}", start.elapsed());

    Ok(Compilation {
        tokens,
        statements,
        compiler,
    })
}
