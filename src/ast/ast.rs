use std::fmt::{Display, Write};

/// Expression nodes. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Raw literal text; string literals are stored without their quotes.
    Literal(String),
    Variable(String),
    Binary {
        left: Box<Expr>,
        operator: String,
        right: Box<Expr>,
    },
    Call {
        callee: String,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn literal(value: &str) -> Self {
        Expr::Literal(String::from(value))
    }

    pub fn variable(name: &str) -> Self {
        Expr::Variable(String::from(name))
    }

    pub fn binary(left: Expr, operator: &str, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator: String::from(operator),
            right: Box::new(right),
        }
    }

    pub fn call(callee: &str, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: String::from(callee),
            arguments,
        }
    }

    fn write_tree(&self, out: &mut String, indent: usize) -> std::fmt::Result {
        write_indent(out, indent)?;
        match self {
            Expr::Literal(value) => writeln!(out, "LiteralExpr: {}", value),
            Expr::Variable(name) => writeln!(out, "VariableExpr: {}", name),
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                writeln!(out, "BinaryExpr: {}", operator)?;
                left.write_tree(out, indent + 1)?;
                right.write_tree(out, indent + 1)
            }
            Expr::Call { callee, arguments } => {
                writeln!(out, "CallExpr: {}", callee)?;
                for argument in arguments {
                    argument.write_tree(out, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl {
        name: String,
        initializer: Option<Expr>,
    },
    Expression(Expr),
}

impl Stmt {
    pub fn var_decl(name: &str, initializer: Option<Expr>) -> Self {
        Stmt::VarDecl {
            name: String::from(name),
            initializer,
        }
    }

    pub fn expression(expression: Expr) -> Self {
        Stmt::Expression(expression)
    }

    fn write_tree(&self, out: &mut String, indent: usize) -> std::fmt::Result {
        write_indent(out, indent)?;
        match self {
            Stmt::VarDecl { name, initializer } => {
                writeln!(out, "VarDeclStmt: {}", name)?;
                match initializer {
                    Some(initializer) => initializer.write_tree(out, indent + 1),
                    None => Ok(()),
                }
            }
            Stmt::Expression(expression) => {
                writeln!(out, "ExprStmt")?;
                expression.write_tree(out, indent + 1)
            }
        }
    }
}

fn write_indent(out: &mut String, indent: usize) -> std::fmt::Result {
    write!(out, "{}", "  ".repeat(indent))
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.write_tree(&mut out, 0)?;
        write!(f, "{}", out)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.write_tree(&mut out, 0)?;
        write!(f, "{}", out)
    }
}

/// Prints a whole program, one tree per statement.
pub fn format_program(statements: &[Stmt]) -> String {
    statements.iter().map(|statement| statement.to_string()).collect()
}
