//! Canonical source rendering
//!
//! Prints an AST back as source text in one canonical layout:
//! - every infix and prefix operation parenthesized, so precedence is explicit
//! - keywords cased per [`KeywordCase`]; `.T.`, `.F.` and `NIL` for the literals
//! - explicit `EndFunction` / `EndMethod` / `EndIf` / `EndDo` / `Next` / `EndClass`
//! - class attributes before methods, one `Data` line each
//!
//! Rendering a parsed program and parsing the result again yields an equivalent tree, so rendering twice is
//! stable.

mod config;
mod renderer;
mod writer;

pub use config::{KeywordCase, RenderConfig};
pub use renderer::Renderer;

use std::fmt;

use crate::ast::{Expression, Program};

/// Render a whole program.
pub fn render_program(program: &Program, config: &RenderConfig) -> String {
    Renderer::new(config.clone()).render(program)
}

/// Render one expression on its own (no trailing newline).
pub fn render_expression(expression: &Expression, config: &RenderConfig) -> String {
    Renderer::new(config.clone()).render_expression(expression)
}

// `{}` on a tree prints it with the default configuration.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_program(self, &RenderConfig::default()))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_expression(self, &RenderConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Statement;
    use crate::parser::parse_source;

    fn render(source: &str, config: &RenderConfig) -> String {
        let output = parse_source(source, "render.prw");
        assert!(output.diagnostics.is_empty(), "{:#?}", output.diagnostics);
        render_program(&output.program, config)
    }

    fn render_default(source: &str) -> String {
        render(source, &RenderConfig::default())
    }

    #[test]
    fn test_infix_is_fully_parenthesized() {
        assert_eq!(render_default("Local a := 5 + 10 * 2"), "Local a := (5 + (10 * 2))\n");
        assert_eq!(render_default("(5 + 10) * 2"), "((5 + 10) * 2)\n");
    }

    #[test]
    fn test_function_with_if() {
        let source = "function soma(a, b)\nif a > b\nreturn a - b\nelse\nreturn b\nendif\nreturn 0";
        let expected = "\
Function soma(a, b)
    If (a > b)
        Return (a - b)
    Else
        Return b
    EndIf
    Return 0
EndFunction
";
        assert_eq!(render_default(source), expected);
    }

    #[test]
    fn test_upper_keyword_case() {
        let config = RenderConfig::new().with_keyword_case(KeywordCase::Upper);
        assert_eq!(render("Local x := .t. .and. !y", &config), "LOCAL x := (.T. .AND. (!y))\n");
    }

    #[test]
    fn test_lower_keyword_case() {
        let config = RenderConfig::new().with_keyword_case(KeywordCase::Lower);
        assert_eq!(render("If x == Nil\nEndIf", &config), "if (x == nil)\nendif\n");
    }

    #[test]
    fn test_class_renders_explicit_terminators() {
        let source = "Class B From A\nData n\nMethod New()\n::n := 0\nReturn Self\nEndClass";
        let expected = "\
Class B From A
    Data n
    Method New()
        ::n := 0
        Return Self
    EndMethod
EndClass
";
        assert_eq!(render_default(source), expected);
    }

    #[test]
    fn test_blank_lines_around_declarations() {
        let source = "Local a\nFunction F()\nReturn\nFunction G()\nReturn\n";
        let expected = "\
Local a

Function F()
    Return
EndFunction

Function G()
    Return
EndFunction
";
        assert_eq!(render_default(source), expected);

        let compact = RenderConfig::new().with_blank_lines_top_level(0).with_indent_width(2);
        assert_eq!(
            render(source, &compact),
            "Local a\nFunction F()\n  Return\nEndFunction\nFunction G()\n  Return\nEndFunction\n"
        );
    }

    #[test]
    fn test_nested_assignment_is_parenthesized() {
        assert_eq!(render_default("x := (y := 1) + 2"), "x := ((y := 1) + 2)\n");
    }

    #[test]
    fn test_loops() {
        let source = "For i := 1 To 10 Step 2\nx := x + i\nNext\nDo While x > 0\nx := x - 1\nEndDo";
        let expected = "\
For i := 1 To 10 Step 2
    x := (x + i)
Next
While (x > 0)
    x := (x - 1)
EndDo
";
        assert_eq!(render_default(source), expected);
    }

    #[test]
    fn test_render_expression() {
        let output = parse_source("a[1, 2]:Nome(\"x\", {1, .F.})", "e.prw");
        let Statement::Expression(stmt) = &output.program.statements[0] else {
            panic!("expected expression statement");
        };
        assert_eq!(
            render_expression(&stmt.expression, &RenderConfig::default()),
            "a[1][2]:Nome(\"x\", {1, .F.})"
        );
    }

    #[test]
    fn test_render_is_stable() {
        let source = "static function f(x)\nlocal a := {1, 'b', 01/02/2024}, b\nif x <> 1 .or. a[1] $ \"abc\"\nb := -x % 2\nendif\nreturn a\n";
        let once = render_default(source);
        let twice = render_default(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_display_uses_default_config() {
        let output = parse_source("function f()\nreturn 5 + 10 * 2", "d.prw");
        assert_eq!(output.program.to_string(), "Function f()\n    Return (5 + (10 * 2))\nEndFunction\n");

        let Statement::Expression(stmt) = &parse_source("(5 + 10) * 2", "d.prw").program.statements[0] else {
            panic!("expected expression statement");
        };
        assert_eq!(stmt.expression.to_string(), "((5 + 10) * 2)");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(render_default(""), "");
    }
}
