//! Lox tree-walk interpreter.
//!
//! The interpreter walks the abstract syntax tree (AST) produced by the parser,
//! recursively evaluating each expression and computing its runtime value.
//!
//! # Expression Types
//!
//! - **Literals**: `nil`, booleans, numbers, strings
//! - **Unary**: `-` (negation), `!` (logical NOT)
//! - **Binary**: `+`, `-`, `*`, `/`, comparisons, equality
//! - **Logical**: `and`, `or`, short-circuiting
//! - **Grouping**: Parenthesized expressions
//! - **Variable** and **Assign**: resolved through the [`Environment`] chain

pub mod value;

use std::io::{Stdout, Write};

use Expression::*;
use value::Value;

use crate::{environment::Environment, error::interpreter::InterpreterError, parser::expression::Expression, scanner::{Token, TokenType}, statement::Statement, utils::RcCell};

/// Interpreter that executes Lox statements, `print` goes to `output`.
pub struct Interpreter<W: Write = Stdout> {
	environment: RcCell<Environment>,
	output:      W,
}

impl Interpreter<Stdout> {
	pub fn new() -> Self { Self::with_output(std::io::stdout()) }
}

impl Default for Interpreter<Stdout> {
	fn default() -> Self { Self::new() }
}

impl<W: Write> Interpreter<W> {
	pub fn with_output(output: W) -> Self { Self { environment: RcCell::new(Environment::new()), output } }

	pub fn output(&self) -> &W { &self.output }

	/// The frame statements currently run in.
	pub fn environment(&self) -> &RcCell<Environment> { &self.environment }

	/// Execute statements in order, stopping at the first runtime error.
	pub fn interpret(&mut self, statements: &[Statement]) -> Result<(), InterpreterError> {
		for statement in statements {
			self.execute(statement)?;
		}
		self.output.flush()?;
		Ok(())
	}

	fn execute(&mut self, statement: &Statement) -> Result<(), InterpreterError> {
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression)?;
			}
			Statement::Print(expression) => {
				let value = self.evaluate(expression)?;
				writeln!(self.output, "{value}")?;
			}
			Statement::VarDeclaration { name_token, initializer } => {
				let value = match initializer {
					Some(initializer) => self.evaluate(initializer)?,
					None => Value::Nil,
				};
				self.environment.borrow_mut().define(name_token.lexeme, value);
			}
			Statement::Block(statements) => {
				let block = Environment::with_enclosing(self.environment.clone());
				self.execute_block(statements, RcCell::new(block))?
			}
			Statement::If { condition, then_branch, else_branch } => {
				if self.evaluate(condition)?.is_truthy() {
					self.execute(then_branch)?
				} else if let Some(else_branch) = else_branch {
					self.execute(else_branch)?
				}
			}
		}
		Ok(())
	}

	/// Run `statements` in `environment`, the previous frame comes back
	/// whether or not they succeed.
	fn execute_block(
		&mut self,
		statements: &[Statement],
		environment: RcCell<Environment>,
	) -> Result<(), InterpreterError> {
		log::debug!("entering block of {} statements", statements.len());
		let previous = std::mem::replace(&mut self.environment, environment);
		let result = statements.iter().try_for_each(|statement| self.execute(statement));
		self.environment = previous;
		result
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&mut self, expression: &Expression) -> Result<Value, InterpreterError> {
		Ok(match expression {
			Literal(literal) => Value::from(literal),
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right = self.evaluate(right)?;
				match (operator.r#type, right) {
					(TokenType::Bang, right) => Value::Bool(!right.is_truthy()),
					(TokenType::Minus, Value::Number(n)) => Value::Number(-n),
					(TokenType::Minus, _) => return Err(InterpreterError::OperandMustBeNumber { line: operator.line }),
					_ => return Err(unsupported(operator)),
				}
			}
			Binary { left, operator, right } => {
				let left = self.evaluate(left)?;
				let right = self.evaluate(right)?;
				binary(&left, operator, &right)?
			}
			Logical { left, operator, right } => {
				let left = self.evaluate(left)?;
				let short_circuit = if operator.r#type == TokenType::Or { left.is_truthy() } else { !left.is_truthy() };
				if short_circuit { left } else { self.evaluate(right)? }
			}
			Variable(name) => self.environment.borrow().get(name)?,
			Assign { name, value } => {
				let value = self.evaluate(value)?;
				self.environment.borrow_mut().assign(name, value.clone())?;
				value
			}
		})
	}
}

fn binary(left: &Value, operator: &Token, right: &Value) -> Result<Value, InterpreterError> {
	use TokenType::*;

	let line = operator.line;
	let numbers = InterpreterError::OperandsMustBeNumbers { line };
	match operator.r#type {
		EqualEqual => Ok(Value::Bool(left == right)),
		BangEqual => Ok(Value::Bool(left != right)),
		Plus => left.plus(right).ok_or(InterpreterError::OperandsMustBeNumbersOrStrings { line }),
		Minus => left.arithmetic(right, |l, r| l - r).ok_or(numbers),
		Star => left.arithmetic(right, |l, r| l * r).ok_or(numbers),
		Slash => left.arithmetic(right, |l, r| l / r).ok_or(numbers),
		Greater => left.compare(right, f64::gt).ok_or(numbers),
		GreaterEqual => left.compare(right, f64::ge).ok_or(numbers),
		Less => left.compare(right, f64::lt).ok_or(numbers),
		LessEqual => left.compare(right, f64::le).ok_or(numbers),
		_ => Err(unsupported(operator)),
	}
}

/// Only reachable from trees built by hand, the parser sticks to the grammar.
fn unsupported(operator: &Token) -> InterpreterError {
	InterpreterError::UnsupportedOperator { operator: operator.lexeme.to_string(), line: operator.line }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{diagnostics::Diagnostics, parser::{Parser, expression::LiteralValue}, scanner::Scanner};

	fn run_in(interpreter: &mut Interpreter<Vec<u8>>, input: &str) -> Result<(), InterpreterError> {
		let mut diagnostics = Diagnostics::new();
		let tokens = Scanner::new(input, &mut diagnostics).scan_tokens();
		let statements = Parser::new(tokens, &mut diagnostics).parse();
		assert!(!diagnostics.had_error(), "{input:?}");
		interpreter.interpret(&statements)
	}

	fn run(input: &str) -> (Result<(), InterpreterError>, String) {
		let mut interpreter = Interpreter::with_output(Vec::new());
		let result = run_in(&mut interpreter, input);
		(result, String::from_utf8_lossy(interpreter.output()).into_owned())
	}

	fn prints(input: &str, expected: &str) {
		let (result, output) = run(input);
		assert!(result.is_ok(), "{input:?}: {result:?}");
		assert_eq!(output, expected, "{input:?}");
	}

	#[test]
	fn arithmetic() {
		prints("print 1 + 2 * 3;", "7\n");
		prints("print (1 + 2) * 3;", "9\n");
		prints("print 10 / 4;", "2.5\n");
		prints("print -(3 - 5);", "2\n");
		prints("print \"lox\" + \"er\";", "loxer\n");
	}

	#[test]
	fn comparison_and_equality() {
		prints("print 1 < 2;", "true\n");
		prints("print 2 <= 1;", "false\n");
		prints("print 1 == 1;", "true\n");
		prints("print nil == nil;", "true\n");
		prints("print nil == false;", "false\n");
		prints("print \"a\" != \"b\";", "true\n");
		prints("print 1 == \"1\";", "false\n");
		prints("print !nil;", "true\n");
	}

	#[test]
	fn logical_short_circuit() {
		prints("print nil or \"default\";", "default\n");
		prints("print \"first\" or undefined;", "first\n");
		prints("print false and undefined;", "false\n");
		prints("print 1 and 2;", "2\n");
	}

	#[test]
	fn variables_and_assignment() {
		prints("var a; print a;", "nil\n");
		prints("var a = 1; a = a + 1; print a;", "2\n");
		prints("var a; var b; a = b = 3; print a; print b;", "3\n3\n");
		prints("var a = 1; var a = 2; print a;", "2\n");
	}

	#[test]
	fn block_scope() {
		prints(
			"var a = \"global\"; { var a = \"local\"; print a; } print a;",
			"local\nglobal\n",
		);
		prints("var a = 1; { a = 2; } print a;", "2\n");
		let (result, _) = run("{ var hidden = 1; } print hidden;");
		assert!(matches!(result, Err(InterpreterError::UndefinedVariable { name, line: 1 }) if name == "hidden"));
	}

	#[test]
	fn if_else() {
		prints("if (1 < 2) print \"yes\"; else print \"no\";", "yes\n");
		prints("if (nil) print \"yes\"; else print \"no\";", "no\n");
		prints("if (false) print \"yes\";", "");
	}

	#[test]
	fn runtime_errors() {
		let (result, output) = run("print 1;\nprint -\"a\";\nprint 2;");
		assert!(matches!(result, Err(InterpreterError::OperandMustBeNumber { line: 2 })));
		assert_eq!(output, "1\n");

		let (result, _) = run("print 1 + nil;");
		assert!(matches!(result, Err(InterpreterError::OperandsMustBeNumbersOrStrings { line: 1 })));
		let (result, _) = run("print 1 < \"2\";");
		assert!(matches!(result, Err(InterpreterError::OperandsMustBeNumbers { line: 1 })));
		let (result, _) = run("undefined = 1;");
		assert!(matches!(result, Err(InterpreterError::UndefinedVariable { .. })));
	}

	#[test]
	fn hand_built_tree_with_foreign_operator() {
		let mut interpreter = Interpreter::with_output(Vec::new());
		let dot = Token::new(TokenType::Dot, ".", None, 4);
		let one = || Expression::Literal(LiteralValue::Number(1.0));

		let statement = Statement::Print(*Expression::unary(dot.clone(), Box::new(one())));
		let result = interpreter.interpret(&[statement]);
		assert!(matches!(result, Err(InterpreterError::UnsupportedOperator { operator, line: 4 }) if operator == "."));

		let statement = Statement::Print(*Expression::binary(Box::new(one()), dot, Box::new(one())));
		assert!(interpreter.interpret(&[statement]).is_err());
		assert_eq!(interpreter.output(), b"");
	}

	#[test]
	fn environment_restored_after_error() {
		let mut interpreter = Interpreter::with_output(Vec::new());
		let global = interpreter.environment().clone();
		assert!(run_in(&mut interpreter, "{ var a = 1; print missing; }").is_err());
		assert!(interpreter.environment().ptr_eq(&global));
		assert!(run_in(&mut interpreter, "var kept = 1; print kept;").is_ok());
		assert!(run_in(&mut interpreter, "print kept + 1;").is_ok());
		assert_eq!(String::from_utf8_lossy(interpreter.output()), "1\n2\n");
	}
}
