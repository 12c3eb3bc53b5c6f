use std::{fs::read_to_string, path::PathBuf, process::exit};

use astra::{
    ast::ast::format_program,
    config::CompileOptions,
    errors::errors::Error,
    pipeline::{compile_source, Compilation},
    render_error,
};
use clap::Parser;
use inkwell::context::Context;
use log::info;

/// Compile one source file to LLVM IR.
#[derive(Parser, Debug)]
#[command(name = "astra", version, about)]
struct Cli {
    /// Source file to compile
    file: PathBuf,

    /// Write the IR here instead of printing it
    #[arg(long, value_name = "PATH")]
    emit_ir: Option<PathBuf>,

    /// Print the token stream
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed statements
    #[arg(long)]
    dump_ast: bool,

    /// Name of the produced module
    #[arg(long, value_name = "NAME", default_value = "main")]
    module_name: String,
}

fn report(compilation: &Compilation, cli: &Cli) -> Result<(), Error> {
    if cli.dump_tokens {
        for token in &compilation.tokens {
            println!("{}", token);
        }
    }

    if cli.dump_ast {
        print!("{}", format_program(&compilation.statements));
    }

    match &cli.emit_ir {
        Some(path) => {
            compilation.compiler.save_module_to_file(path)?;
            info!("wrote IR to {}", path.display());
        }
        None => print!("{}", compilation.compiler.print_ir()),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let file_name = cli.file.display().to_string();

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("astra: cannot read {}: {}", file_name, error);
            exit(1);
        }
    };

    let options = CompileOptions::default().with_module_name(&cli.module_name);
    let context = Context::create();

    let result = compile_source(&source, &options, &context)
        .and_then(|compilation| report(&compilation, &cli));

    if let Err(error) = result {
        eprintln!("{}", error);
        eprint!("{}", render_error(&error, &file_name, &source));
        exit(1);
    }
}
