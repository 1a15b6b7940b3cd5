//! Compile-time error reporting.
//!
//! The scanner and the parser don't stop at the first problem. They record
//! what they found here and keep going, so one pass shows as many independent
//! mistakes as possible. The caller looks at [`Diagnostics::had_error`] after
//! each stage to decide whether the next one should run.

use std::fmt::Display;

use crate::{error::{parser::ParseError, scanner::ScanError}, scanner::{Token, TokenType}};

/// Collected errors of one compilation unit.
#[derive(Debug, Default)]
pub struct Diagnostics {
	reports: Vec<Diagnostic>,
}

impl Diagnostics {
	pub fn new() -> Self { Self::default() }

	pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
		let diagnostic = diagnostic.into();
		log::warn!("{diagnostic}");
		self.reports.push(diagnostic);
	}

	pub fn had_error(&self) -> bool { !self.reports.is_empty() }

	pub fn len(&self) -> usize { self.reports.len() }

	pub fn is_empty(&self) -> bool { self.reports.is_empty() }

	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> { self.reports.iter() }

	/// Forget everything reported so far.
	pub fn clear(&mut self) { self.reports.clear() }
}

/// A single `(line, message)` report, optionally pinned to a token.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
	pub line:     usize,
	pub location: Location,
	pub message:  String,
}

impl Diagnostic {
	pub fn new(line: usize, location: Location, message: impl Into<String>) -> Self {
		Self { line, location, message: message.into() }
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
	}
}

/// Where on its line a diagnostic points.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
	/// Not tied to a token, e.g. a lexical error.
	None,
	AtEnd,
	At(String),
}

impl From<&Token<'_>> for Location {
	fn from(token: &Token<'_>) -> Self {
		if token.r#type == TokenType::Eof { Location::AtEnd } else { Location::At(token.lexeme.to_string()) }
	}
}

impl Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Location::None => Ok(()),
			Location::AtEnd => write!(f, " at end"),
			Location::At(lexeme) => write!(f, " at '{lexeme}'"),
		}
	}
}

impl From<ScanError> for Diagnostic {
	fn from(error: ScanError) -> Self { Diagnostic::new(error.line, Location::None, error.r#type.to_string()) }
}

impl From<ParseError> for Diagnostic {
	fn from(error: ParseError) -> Self { Diagnostic::new(error.line, error.location, error.r#type.to_string()) }
}
