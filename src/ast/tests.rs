use super::ast::{format_program, Expr, Stmt};

#[test]
fn test_constructors_build_owned_children() {
    let expr = Expr::binary(Expr::literal("1"), "+", Expr::variable("a"));

    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            assert_eq!(*left, Expr::Literal(String::from("1")));
            assert_eq!(operator, "+");
            assert_eq!(*right, Expr::Variable(String::from("a")));
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_print_var_decl() {
    let stmt = Stmt::var_decl("x", Some(Expr::literal("5")));

    assert_eq!(stmt.to_string(), "VarDeclStmt: x\n  LiteralExpr: 5\n");
    assert_eq!(Stmt::var_decl("y", None).to_string(), "VarDeclStmt: y\n");
}

#[test]
fn test_print_nested_call() {
    let stmt = Stmt::expression(Expr::call(
        "print",
        vec![Expr::binary(Expr::variable("a"), "*", Expr::literal("2"))],
    ));

    let expected = "ExprStmt\n  CallExpr: print\n    BinaryExpr: *\n      VariableExpr: a\n      LiteralExpr: 2\n";
    assert_eq!(stmt.to_string(), expected);
}

#[test]
fn test_format_program() {
    let program = vec![
        Stmt::var_decl("x", Some(Expr::literal("5"))),
        Stmt::expression(Expr::call("print", vec![Expr::variable("x")])),
    ];

    assert_eq!(
        format_program(&program),
        "VarDeclStmt: x\n  LiteralExpr: 5\nExprStmt\n  CallExpr: print\n    VariableExpr: x\n"
    );
}
