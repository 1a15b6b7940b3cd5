//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of an `if` is always a statement.

use std::fmt::Display;

use crate::{parser::expression::Expression, scanner::Token};

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
	/// An expression used as a statement.
	Expression(Expression<'a>),
	/// A print statement.
	Print(Expression<'a>),
	/// A variable declaration statement.
	VarDeclaration {
		/// The token of the variable being declared.
		name_token:  Token<'a>,
		/// An optional initializer expression.
		initializer: Option<Expression<'a>>,
	},
	/// A block of statements, executed in order in a scope of its own.
	Block(Vec<Statement<'a>>),
	If {
		condition:   Expression<'a>,
		then_branch: Box<Statement<'a>>,
		else_branch: Option<Box<Statement<'a>>>,
	},
}

impl Display for Statement<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Expression(expression) => write!(f, "(; {expression})"),
			Statement::Print(expression) => write!(f, "(print {expression})"),
			Statement::VarDeclaration { name_token, initializer: Some(initializer) } => {
				write!(f, "(var {} {initializer})", name_token.lexeme)
			}
			Statement::VarDeclaration { name_token, initializer: None } => write!(f, "(var {})", name_token.lexeme),
			Statement::Block(statements) => {
				write!(f, "(block")?;
				for statement in statements {
					write!(f, " {statement}")?;
				}
				write!(f, ")")
			}
			Statement::If { condition, then_branch, else_branch: Some(else_branch) } => {
				write!(f, "(if {condition} {then_branch} {else_branch})")
			}
			Statement::If { condition, then_branch, else_branch: None } => write!(f, "(if {condition} {then_branch})"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{diagnostics::Diagnostics, parser::Parser, scanner::Scanner};

	fn parse_statements(input: &str) -> Vec<Statement<'_>> {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(input, &mut diagnostics).scan_tokens();
		let statements = Parser::new(tokens, &mut diagnostics).parse();
		assert!(!diagnostics.had_error(), "{input:?}");
		statements
	}

	/// Helper function to parse a string into statements and return the count
	fn parse_statement_count(input: &str) -> usize { parse_statements(input).len() }

	/// Helper function to parse a string and check if the first statement matches
	/// expected type
	fn parse_statement_type(input: &str, expected_type: &str) -> bool {
		let statements = parse_statements(input);

		match expected_type {
			"print" => matches!(statements[0], Statement::Print(_)),
			"expression" => matches!(statements[0], Statement::Expression(_)),
			"var" => matches!(statements[0], Statement::VarDeclaration { .. }),
			"block" => matches!(statements[0], Statement::Block(_)),
			"if" => matches!(statements[0], Statement::If { .. }),
			_ => false,
		}
	}

	/// Helper function to parse a variable declaration and check its properties
	fn parse_var_declaration(input: &str, name: &str, has_initializer: bool) -> bool {
		match &parse_statements(input)[0] {
			Statement::VarDeclaration { name_token, initializer } => {
				name_token.lexeme == name && initializer.is_some() == has_initializer
			}
			_ => false,
		}
	}

	fn printed(input: &str) -> String {
		parse_statements(input).iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
	}

	#[test]
	fn test_expression_statement() {
		assert_eq!(parse_statement_count("123;"), 1);
		assert_eq!(parse_statement_count("1 + 2;"), 1);
		assert_eq!(parse_statement_count("1 + 2; 3 + 4;"), 2);
		assert!(parse_statement_type("123;", "expression"));
		assert!(parse_statement_type("x + y;", "expression"));
	}

	#[test]
	fn test_print_statement() {
		assert_eq!(parse_statement_count("print 123; print 456;"), 2);
		assert!(parse_statement_type("print 123;", "print"));
		assert!(parse_statement_type("print 1 + 2;", "print"));
	}

	#[test]
	fn test_var_declaration() {
		assert!(parse_statement_type("var x;", "var"));
		assert!(parse_var_declaration("var x;", "x", false));
		assert!(parse_var_declaration("var y = 42;", "y", true));
		assert!(parse_var_declaration("var z = 1 + 2 * 3;", "z", true));
	}

	#[test]
	fn test_block_statement() {
		assert_eq!(parse_statement_count("{ var a = 1; print a; }"), 1);
		assert!(parse_statement_type("{}", "block"));
		let statements = parse_statements("{ var a = 1; { print a; } a = 2; }");
		match &statements[0] {
			Statement::Block(inner) => {
				assert_eq!(inner.len(), 3);
				assert!(matches!(inner[0], Statement::VarDeclaration { .. }));
				assert!(matches!(inner[1], Statement::Block(_)));
				assert!(matches!(inner[2], Statement::Expression(_)));
			}
			other => panic!("expected block, got {other}"),
		}
	}

	#[test]
	fn test_if_statement() {
		assert!(parse_statement_type("if (true) print 1;", "if"));
		assert_eq!(printed("if (a) print 1;"), "(if a (print 1))");
		assert_eq!(printed("if (a) print 1; else print 2;"), "(if a (print 1) (print 2))");
		// The dangling else binds to the nearest if.
		assert_eq!(printed("if (a) if (b) print 1; else print 2;"), "(if a (if b (print 1) (print 2)))");
	}

	#[test]
	fn test_mixed_statements() {
		assert_eq!(parse_statement_count("var x = 5; print x; x + 1;"), 3);
		let expected = "(var x 5) (print x) (; (= x (+ x 1))) (block (var y))";
		assert_eq!(printed("var x = 5; print x; x = x + 1; { var y; }"), expected);
	}
}
