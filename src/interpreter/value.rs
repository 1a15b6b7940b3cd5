use std::fmt::Display;

use Value::*;

use crate::parser::expression::LiteralValue;

/// Value represents a runtime value in Lox.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	#[default]
	Nil,
	Bool(bool),
	Number(f64),
	Str(String),
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Nil => write!(f, "nil"),
			Bool(b) => write!(f, "{b}"),
			Number(n) => write!(f, "{n}"),
			Str(s) => write!(f, "{s}"),
		}
	}
}

impl From<&LiteralValue<'_>> for Value {
	fn from(literal: &LiteralValue<'_>) -> Self {
		match literal {
			LiteralValue::Nil => Nil,
			LiteralValue::Boolean(b) => Bool(*b),
			LiteralValue::Number(n) => Number(*n),
			LiteralValue::StringLiteral(s) => Str(s.to_string()),
		}
	}
}

impl Value {
	/// `nil` and `false` are falsey, every other value is truthy.
	pub fn is_truthy(&self) -> bool { !matches!(self, Nil | Bool(false)) }

	/// Tries to add two values together.
	pub fn plus(&self, other: &Self) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(l + r)),
			(Str(l), Str(r)) => Some(Str(format!("{l}{r}"))),
			_ => None,
		}
	}

	/// Apply an arithmetic operator that only accepts numbers.
	pub fn arithmetic(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Number(op(*l, *r))),
			_ => None,
		}
	}

	/// Apply a comparison operator that only accepts numbers.
	pub fn compare(&self, other: &Self, op: impl Fn(&f64, &f64) -> bool) -> Option<Value> {
		match (self, other) {
			(Number(l), Number(r)) => Some(Bool(op(l, r))),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truthiness() {
		assert!(!Nil.is_truthy());
		assert!(!Bool(false).is_truthy());
		assert!(Bool(true).is_truthy());
		assert!(Number(0.0).is_truthy());
		assert!(Str(String::new()).is_truthy());
	}

	#[test]
	fn display() {
		assert_eq!(Number(3.0).to_string(), "3");
		assert_eq!(Number(2.5).to_string(), "2.5");
		assert_eq!(Str("hi".to_string()).to_string(), "hi");
		assert_eq!(Nil.to_string(), "nil");
		assert_eq!(Bool(true).to_string(), "true");
	}

	#[test]
	fn operators() {
		assert_eq!(Number(1.0).plus(&Number(2.0)), Some(Number(3.0)));
		assert_eq!(Str("a".into()).plus(&Str("b".into())), Some(Str("ab".into())));
		assert_eq!(Str("a".into()).plus(&Number(1.0)), None);
		assert_eq!(Number(6.0).arithmetic(&Number(3.0), |l, r| l / r), Some(Number(2.0)));
		assert_eq!(Number(1.0).compare(&Number(2.0), f64::lt), Some(Bool(true)));
		assert_eq!(Nil.compare(&Number(2.0), f64::lt), None);
	}
}
