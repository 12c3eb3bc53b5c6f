/// AST (Abstract Syntax Tree) module
/// Contains the statement and expression nodes produced by the parser
///
/// Submodules:
/// - ast: Node definitions, constructors and the indented debug printer
pub mod ast;

#[cfg(test)]
mod tests;
