use crate::diagnostics::Location;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line}: {type}")]
pub struct ParseError {
	pub line:     usize,
	/// Where on the line the parser gave up.
	pub location: Location,
	pub r#type:   ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, location: Location, r#type: ParseErrorType) -> Self { Self { line, location, r#type } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	ExpectedExpression,
	/// A required token was missing, carries the full message.
	Expected(&'static str),
	InvalidAssignmentTarget,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expect expression.")
			}
			Expected(message) => {
				write!(f, "{message}")
			}
			InvalidAssignmentTarget => {
				write!(f, "Invalid assignment target.")
			}
		}
	}
}
