//! Represents a lexical token in the Lox language.
//!
//! Keywords are part of the shape of the language’s grammar, so the parser
//! often has code like, “If the next token is `while` then do . . . ” That
//! means the parser wants to know not just that it has a lexeme for some
//! identifier, but that it has a reserved word, and which keyword it is.
//!
//! There are lexemes for literal values—numbers and strings and the like. Since
//! the scanner has to walk each character in the literal to correctly identify
//! it, it can also convert that textual representation of a value to the living
//! runtime object that will be used by the interpreter later.
//!
//! We can’t easily detect a `reserved word` until we’ve reached the end of what
//! might instead be an identifier, this is `maximal munch`.
//!
//! Scanning never fails as a whole. A character we can't make sense of is
//! reported to [`Diagnostics`] and skipped, the rest of the source is still
//! turned into tokens.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

use crate::{diagnostics::Diagnostics, error::scanner::{ScanError, ScanErrorType}};

/// A scanner for Lox source code
pub struct Scanner<'a, 'd> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
	/// Tracks what source line `current` is on so we can produce tokens that know
	/// their location.
	line:        usize,
	diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Scanner<'a, 'd> {
	pub fn new(source: &'a str, diagnostics: &'d mut Diagnostics) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, diagnostics }
	}

	/// Scan all tokens from the source code, the last one is always `Eof`.
	pub fn scan_tokens(mut self) -> Vec<Token<'a>> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			match self.scan_token() {
				Ok(Some(token)) => tokens.push(token),
				Ok(None) => {}
				Err(e) => self.diagnostics.report(e),
			}
		}
		tokens.push(Token::eof(self.line));
		log::debug!("scanned {} tokens over {} lines", tokens.len(), self.line);
		tokens
	}

	/// Scan a single lexeme, whitespace and comments produce no token.
	fn scan_token(&mut self) -> Result<Option<Token<'a>>, ScanError> {
		let Some(next_char) = self.advance() else { return Ok(None) };
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'.' => Dot,
			'-' => Minus,
			'+' => Plus,
			';' => Semicolon,
			'*' => Star,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				return Ok(None);
			} else if self.match_next('*') {
				self.block_comment()?;
				return Ok(None);
			} else { Slash },
			' ' | '\r' | '\t' => return Ok(None),
			'\n' => { self.line += 1; return Ok(None) }
			'"' => return self.string().map(Some),
			c if c.is_ascii_digit() => return Ok(Some(self.number())),
			c if c.is_ascii_alphabetic() || c == '_' => return Ok(Some(self.identifier())),
			_ => return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(next_char))),
		};

		Ok(Some(self.make_token(r#type, None)))
	}

	fn make_token(&self, r#type: TokenType, literal: Option<Literal<'a>>) -> Token<'a> {
		Token::new(r#type, &self.source[self.start..self.cursor], literal, self.line)
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Skip a `/* ... */` comment, the opening delimiter is already consumed.
	fn block_comment(&mut self) -> Result<(), ScanError> {
		while let Some(c) = self.peek() {
			if c == '*' && self.peek_second() == Some('/') {
				self.advance(); // consume '*'
				self.advance(); // consume '/'
				return Ok(());
			}
			if c == '\n' {
				self.line += 1;
			}
			self.advance();
		}
		Err(ScanError::new(self.line, ScanErrorType::UnterminatedBlockComment))
	}

	/// Scan a string literal
	fn string(&mut self) -> Result<Token<'a>, ScanError> {
		while let Some(c) = self.peek() {
			if c == '"' {
				break;
			}
			if c == '\n' {
				self.line += 1
			}
			self.advance();
		}

		self.peek().ok_or_else(|| ScanError::new(self.line, ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(self.make_token(String, Some(Literal::String(value))))
	}

	/// Scan a number literal
	fn number(&mut self) -> Token<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// Look for a fractional part.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		// Digits with an optional fraction always decode.
		let value = self.source[self.start..self.cursor].parse().unwrap_or_default();
		self.make_token(Number, Some(Literal::Number(value)))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> Token<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		self.make_token(TokenType::keyword_or_identifier(text), None)
	}
}
