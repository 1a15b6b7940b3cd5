//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 *
//! (45.67)` as nested nodes. Every node owns its children, tokens are cheap
//! copies that still point into the source text.

use Expression::*;

use crate::scanner::{Literal as TokenLiteral, Token, TokenType};

#[allow(clippy::enum_variant_names)]
/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Grouping(Box<Expression<'a>>),
	/// `!` or `-` applied to one operand.
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	/// `and` / `or`, the right side is only evaluated when needed.
	Logical { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Variable(Token<'a>),
	Assign { name: Token<'a>, value: Box<Expression<'a>> },
}

impl<'a> Expression<'a> {
	pub fn unary(operator: Token<'a>, right: Box<Self>) -> Box<Self> { Box::new(Unary { operator, right }) }

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Binary { left, operator, right })
	}

	pub fn logical(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Logical { left, operator, right })
	}

	pub fn grouping(expr: Box<Self>) -> Box<Self> { Box::new(Grouping(expr)) }

	pub fn assign(name: Token<'a>, value: Box<Self>) -> Box<Self> { Box::new(Assign { name, value }) }
}

#[allow(clippy::enum_variant_names)]
/// Literal values in the AST
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
	Number(f64),
	StringLiteral(&'a str),
	Boolean(bool),
	Nil,
}

impl<'a> TryFrom<Token<'a>> for Expression<'a> {
	type Error = anyhow::Error;

	fn try_from(token: Token<'a>) -> Result<Self, Self::Error> {
		Ok(match (token.r#type, token.literal) {
			(TokenType::Number, Some(TokenLiteral::Number(n))) => Literal(LiteralValue::Number(n)),
			(TokenType::String, Some(TokenLiteral::String(s))) => Literal(LiteralValue::StringLiteral(s)),
			(TokenType::True, _) => Literal(LiteralValue::Boolean(true)),
			(TokenType::False, _) => Literal(LiteralValue::Boolean(false)),
			(TokenType::Nil, _) => Literal(LiteralValue::Nil),
			(TokenType::Identifier, _) => Variable(token),
			_ => anyhow::bail!("Cannot convert token {token} to Expression"),
		})
	}
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(lit) => write!(f, "{lit}"),
			Grouping(expression) => write!(f, "(group {expression})"),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Logical { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Variable(token) => write!(f, "{}", token.lexeme),
			Assign { name, value } => write!(f, "(= {} {value})", name.lexeme),
		}
	}
}

impl std::fmt::Display for LiteralValue<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Number(n) => write!(f, "{n}"),
			LiteralValue::StringLiteral(s) => write!(f, "\"{s}\""),
			LiteralValue::Boolean(b) => write!(f, "{b}"),
			LiteralValue::Nil => write!(f, "nil"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn literal_from_token() {
		let number = Token::new(TokenType::Number, "1.5", Some(TokenLiteral::Number(1.5)), 1);
		assert_eq!(Expression::try_from(number).ok(), Some(Literal(LiteralValue::Number(1.5))));

		let name = Token::new(TokenType::Identifier, "x", None, 1);
		assert!(matches!(Expression::try_from(name), Ok(Variable(token)) if token.lexeme == "x"));

		assert!(Expression::try_from(Token::new(TokenType::Plus, "+", None, 1)).is_err());
	}

	#[test]
	fn print_tree() {
		let minus = Token::new(TokenType::Minus, "-", None, 1);
		let star = Token::new(TokenType::Star, "*", None, 1);
		let tree = Expression::binary(
			Expression::unary(minus, Box::new(Literal(LiteralValue::Number(123.0)))),
			star,
			Expression::grouping(Box::new(Literal(LiteralValue::Number(45.67)))),
		);
		assert_eq!(tree.to_string(), "(* (- 123) (group 45.67))");

		let name = Token::new(TokenType::Identifier, "a", None, 1);
		let assign = Expression::assign(name, Box::new(Literal(LiteralValue::StringLiteral("hi"))));
		assert_eq!(assign.to_string(), "(= a \"hi\")");
	}
}
