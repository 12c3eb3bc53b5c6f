use inkwell::context::Context;

use super::{compiler::emit, stmt::declared_type, types::IrType};
use crate::{
    ast::ast::{Expr, Stmt},
    config::{CompileOptions, ExternRoutine},
    errors::errors::{ErrorImpl, ErrorKind, Stage},
};

#[test]
fn test_infer_literal() {
    assert_eq!(IrType::infer_literal("42"), IrType::Int64);
    assert_eq!(IrType::infer_literal("3.14"), IrType::Double);
    assert_eq!(IrType::infer_literal("hello"), IrType::Str);
    assert_eq!(IrType::infer_literal("1.2.3"), IrType::Str);
    assert_eq!(IrType::infer_literal(""), IrType::Str);
}

#[test]
fn test_declared_type() {
    assert_eq!(declared_type(None), IrType::Int64);
    assert_eq!(declared_type(Some(&Expr::literal("2.5"))), IrType::Double);
    assert_eq!(declared_type(Some(&Expr::variable("a"))), IrType::Int64);
}

#[test]
fn test_let_and_print() {
    let context = Context::create();
    let statements = vec![
        Stmt::var_decl("x", Some(Expr::literal("5"))),
        Stmt::expression(Expr::call("print", vec![Expr::variable("x")])),
    ];

    let compiler = emit(&statements, &CompileOptions::default(), &context).unwrap();
    let ir = compiler.print_ir();

    assert_eq!(compiler.slot_type("x"), Some(IrType::Int64));
    assert!(ir.contains("define i32 @main()"));
    assert!(ir.contains("alloca i64"));
    assert!(ir.contains("store i64 5"));
    assert!(ir.contains("declare void @print_i64(i64)"));
    assert!(ir.contains("call void @print_i64(i64 %"));
    assert!(ir.contains("ret i32 0"));
    assert!(!ir.contains("print_double"));
    assert!(!ir.contains("print_str"));
}

#[test]
fn test_declaration_without_initializer_is_zero() {
    let context = Context::create();
    let statements = vec![
        Stmt::var_decl("y", None),
        Stmt::expression(Expr::call("print", vec![Expr::variable("y")])),
    ];

    let compiler = emit(&statements, &CompileOptions::default(), &context).unwrap();

    assert_eq!(compiler.slot_type("y"), Some(IrType::Int64));
    assert!(compiler.print_ir().contains("store i64 0"));
}

#[test]
fn test_string_declaration() {
    let context = Context::create();
    let statements = vec![Stmt::var_decl("z", Some(Expr::literal("hello")))];

    let compiler = emit(&statements, &CompileOptions::default(), &context).unwrap();
    let ir = compiler.print_ir();

    assert_eq!(compiler.slot_type("z"), Some(IrType::Str));
    assert!(ir.contains(r#"c"hello\00""#));
    assert!(ir.contains("alloca i8*"));
}

#[test]
fn test_print_overloads() {
    let context = Context::create();
    let statements = vec![
        Stmt::expression(Expr::call("print", vec![Expr::literal("42")])),
        Stmt::expression(Expr::call("print", vec![Expr::literal("3.14")])),
        Stmt::expression(Expr::call("print", vec![Expr::literal("hi")])),
        Stmt::expression(Expr::call("print", vec![Expr::literal("7")])),
    ];

    let compiler = emit(&statements, &CompileOptions::default(), &context).unwrap();
    let ir = compiler.print_ir();

    assert!(ir.contains("call void @print_i64(i64 42)"));
    assert!(ir.contains("call void @print_double(double"));
    assert!(ir.contains("call void @print_str(i8*"));
    assert_eq!(ir.matches("declare void @print_i64").count(), 1);
}

#[test]
fn test_print_argument_count() {
    let context = Context::create();
    let statements = vec![
        Stmt::var_decl("a", None),
        Stmt::var_decl("b", None),
        Stmt::expression(Expr::call(
            "print",
            vec![Expr::variable("a"), Expr::variable("b")],
        )),
    ];

    let error = emit(&statements, &CompileOptions::default(), &context).err().unwrap();
    assert_eq!(error.get_impl(), &ErrorImpl::PrintArguments { received: 2 });
    assert_eq!(error.kind(), ErrorKind::Codegen);
    assert_eq!(error.get_stage(), Stage::Codegen);
}

#[test]
fn test_print_of_void() {
    let context = Context::create();
    let statements = vec![Stmt::expression(Expr::call(
        "print",
        vec![Expr::call("print", vec![Expr::literal("1")])],
    ))];

    let error = emit(&statements, &CompileOptions::default(), &context).err().unwrap();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnsupportedPrintType {
            type_: String::from("void")
        }
    );
}

#[test]
fn test_binary_is_unsupported() {
    let context = Context::create();
    let statements = vec![Stmt::var_decl(
        "s",
        Some(Expr::binary(Expr::literal("1"), "+", Expr::literal("2"))),
    )];

    let error = emit(&statements, &CompileOptions::default(), &context).err().unwrap();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnsupportedBinary {
            operator: String::from("+")
        }
    );
}

#[test]
fn test_storage_type_mismatch() {
    let context = Context::create();
    let statements = vec![
        Stmt::var_decl("a", Some(Expr::literal("hello"))),
        Stmt::var_decl("b", Some(Expr::variable("a"))),
    ];

    let error = emit(&statements, &CompileOptions::default(), &context).err().unwrap();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::StorageTypeMatchError {
            variable: String::from("b"),
            expected: String::from("i64"),
            received: String::from("ptr"),
        }
    );
}

#[test]
fn test_self_reference_has_no_storage_yet() {
    let context = Context::create();
    let statements = vec![Stmt::var_decl("x", Some(Expr::variable("x")))];

    let error = emit(&statements, &CompileOptions::default(), &context).err().unwrap();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnknownVariable {
            variable: String::from("x")
        }
    );
}

#[test]
fn test_integer_out_of_range() {
    let context = Context::create();
    let statements = vec![Stmt::var_decl(
        "big",
        Some(Expr::literal("99999999999999999999")),
    )];

    let error = emit(&statements, &CompileOptions::default(), &context).err().unwrap();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_unknown_function() {
    let context = Context::create();
    let statements = vec![Stmt::expression(Expr::call("shout", vec![]))];

    let error = emit(&statements, &CompileOptions::default(), &context).err().unwrap();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnknownFunction {
            function: String::from("shout")
        }
    );
}

#[test]
fn test_extern_calls() {
    let context = Context::create();
    let options = CompileOptions::default()
        .with_module_name("externs")
        .with_extern(ExternRoutine::new("seed", vec![], Some(IrType::Int64)))
        .with_extern(ExternRoutine::new("log_value", vec![IrType::Int64], None));
    let statements = vec![
        Stmt::var_decl("n", Some(Expr::call("seed", vec![]))),
        Stmt::expression(Expr::call("log_value", vec![Expr::variable("n")])),
    ];

    let compiler = emit(&statements, &options, &context).unwrap();
    let ir = compiler.print_ir();

    assert!(ir.contains("; ModuleID = 'externs'"));
    assert!(ir.contains("declare i64 @seed()"));
    assert!(ir.contains("call i64 @seed()"));
    assert!(ir.contains("call void @log_value(i64 %"));
    assert_eq!(compiler.slot_type("n"), Some(IrType::Int64));
}

#[test]
fn test_extern_argument_checks() {
    let context = Context::create();
    let options = CompileOptions::default().with_extern(ExternRoutine::new(
        "log_value",
        vec![IrType::Int64],
        None,
    ));

    let too_many = vec![Stmt::expression(Expr::call(
        "log_value",
        vec![Expr::literal("1"), Expr::literal("2")],
    ))];
    let error = emit(&too_many, &options, &context).err().unwrap();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedArguments {
            function: String::from("log_value"),
            expected: 1,
            received: 2,
        }
    );

    let wrong_type = vec![Stmt::expression(Expr::call(
        "log_value",
        vec![Expr::literal("1.5")],
    ))];
    let error = emit(&wrong_type, &options, &context).err().unwrap();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::ArgumentTypeMatchError {
            function: String::from("log_value"),
            expected: String::from("i64"),
            received: String::from("double"),
        }
    );
}

#[test]
fn test_entry_function_is_verified() {
    let context = Context::create();
    let compiler = emit(&[], &CompileOptions::default(), &context).unwrap();

    let entry = compiler.entry_function().unwrap();
    assert_eq!(entry.get_name().to_str(), Ok("main"));
    assert!(entry.verify(false));
}

#[test]
fn test_slots_keep_declaration_order() {
    let context = Context::create();
    let statements = vec![
        Stmt::var_decl("first", Some(Expr::literal("1.5"))),
        Stmt::expression(Expr::call("print", vec![Expr::variable("first")])),
        Stmt::var_decl("second", Some(Expr::literal("2.5"))),
        Stmt::var_decl("third", None),
    ];

    let compiler = emit(&statements, &CompileOptions::default(), &context).unwrap();
    let ir = compiler.print_ir();

    let first = ir.find("%first = alloca double").unwrap();
    let second = ir.find("%second = alloca double").unwrap();
    let third = ir.find("%third = alloca i64").unwrap();
    let first_store = ir.find("store double").unwrap();
    assert!(first < second);
    assert!(second < third);
    assert!(third < first_store);
}

#[test]
fn test_malformed_entry_routine_fails_verification() {
    let context = Context::create();
    // A void `main` clashes with the `ret i32 0` the entry routine ends with
    let options = CompileOptions::default().with_extern(ExternRoutine::new("main", vec![], None));

    let error = emit(&[], &options, &context).err().unwrap();
    assert_eq!(error.get_error_name(), "VerificationFailed");
    assert_eq!(error.kind(), ErrorKind::Codegen);
    assert_eq!(error.get_stage(), Stage::Codegen);
}
