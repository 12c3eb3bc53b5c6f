#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod pipeline;
pub mod symbols;
pub mod type_checker;

extern crate regex;

/// Line and column of a token, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` in `source`, without its line ending.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, render_error, Position};
    use crate::errors::errors::{Error, ErrorImpl, Stage};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nlet x = 5;\r\n\nTesting { }\n";

        assert_eq!(get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(get_line_at_position(source, 2), Some("let x = 5;"));
        assert_eq!(get_line_at_position(source, 3), Some(""));
        assert_eq!(get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(get_line_at_position(source, 0), None);
        assert_eq!(get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_render_error_with_caret() {
        let source = "let a = 1;\n    print(b);\n";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("Expected ';' after variable declaration."),
                found: String::from("b"),
            },
            Stage::Parser,
            Some(Position::new(2, 11)),
        );

        let rendered = render_error(&error, "test.astra", source);
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert!(lines[0].starts_with("Error: UnexpectedToken"));
        assert_eq!(lines[1], "-> test.astra:2:11");
        assert_eq!(lines[3], "2 | print(b);");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_render_error_without_position() {
        let error = Error::new(
            ErrorImpl::UnknownFunction {
                function: String::from("foo"),
            },
            Stage::Codegen,
            None,
        );

        let rendered = render_error(&error, "test.astra", "foo();");
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("-> test.astra"));
    }
}

/// Renders an error with a source excerpt and a caret under the failing column.
///
/// ```text
/// Error: UnexpectedToken (...)
/// -> final.astra:2:9
///   |
/// 2 | let a = #;
///   | --------^
/// ```
pub fn render_error(error: &Error, file: &str, source: &str) -> String {
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let position = match error.get_position() {
        Some(position) => position,
        None => {
            rendered.push_str(&format!("-> {}\n", file));
            return rendered;
        }
    };

    rendered.push_str(&format!("-> {}:{}\n", file, position));

    let line_text = match get_line_at_position(source, position.line) {
        Some(text) => text,
        None => return rendered,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
