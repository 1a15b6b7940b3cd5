//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression`
//!
//! A formal grammar’s job is to specify which strings are valid and which
//! aren’t. If we were defining a grammar for English sentences, “eggs are tasty
//! for breakfast” would be in the grammar, but “tasty breakfast for are eggs”
//! would probably not.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Assignment|=|Right
//! Or|or|Left
//! And|and|Left
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|! -|Right
//!
//! Statement grammar:
//!
//! ``` BNF
//! program        → declaration* EOF ;
//! declaration    → varDecl | statement ;
//! varDecl        → "var" IDENTIFIER ( "=" expression )? ";" ;
//! statement      → ifStmt | printStmt | block | exprStmt ;
//! ifStmt         → "if" "(" expression ")" statement ( "else" statement )? ;
//! printStmt      → "print" expression ";" ;
//! block          → "{" declaration* "}" ;
//! exprStmt       → expression ";" ;
//! ```
//!
//! Expression grammar:
//!
//! ``` BNF
//! expression     → assignment ;
//! assignment     → IDENTIFIER "=" assignment | logic_or ;
//! logic_or       → logic_and ( "or" logic_and )* ;
//! logic_and      → equality ( "and" equality )* ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "(" expression ")" ;
//! ```
//!
//! On a syntax error the parser records it, unwinds to the enclosing
//! declaration and skips tokens until a statement boundary. That declaration
//! produces nothing, parsing goes on from there.

pub mod expression;

use TokenType::*;

use crate::{diagnostics::{Diagnostics, Location}, error::parser::{ParseError, ParseErrorType}, parser::expression::Expression, scanner::{Token, TokenType}, statement::Statement};

/// Recursive descent parser over a scanned token sequence.
pub struct Parser<'a, 'd> {
	/// The tokens to parse, the last one is always `Eof`.
	tokens:      Vec<Token<'a>>,
	current:     usize,
	diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Parser<'a, 'd> {
	pub fn new(mut tokens: Vec<Token<'a>>, diagnostics: &'d mut Diagnostics) -> Self {
		if tokens.last().is_none_or(|token| token.r#type != Eof) {
			let line = tokens.last().map_or(1, |token| token.line);
			tokens.push(Token::eof(line));
		}
		Self { tokens, current: 0, diagnostics }
	}

	/// Parse every declaration, skipping the ones that fail.
	pub fn parse(mut self) -> Vec<Statement<'a>> {
		let mut statements = Vec::new();
		while !self.is_at_end() {
			if let Some(statement) = self.declaration() {
				statements.push(statement);
			}
		}
		log::debug!("parsed {} statements", statements.len());
		statements
	}

	/// The synchronization point, a failed declaration yields `None`.
	fn declaration(&mut self) -> Option<Statement<'a>> {
		let start = self.current;
		let result = if self.match_tokens(&[Var]) { self.var_declaration() } else { self.statement() };
		match result {
			Ok(statement) => Some(statement),
			Err(error) => {
				log::debug!("recovering from {error}");
				let keep_failing = error.r#type != ParseErrorType::ExpectedExpression;
				self.synchronize(start, keep_failing);
				None
			}
		}
	}

	fn var_declaration(&mut self) -> Result<Statement<'a>, ParseError> {
		let name_token = self.consume(Identifier, "Expect variable name.")?;
		let initializer = if self.match_tokens(&[Equal]) { Some(*self.expression()?) } else { None };
		self.consume(Semicolon, "Expect ';' after variable declaration.")?;
		Ok(Statement::VarDeclaration { name_token, initializer })
	}

	fn statement(&mut self) -> Result<Statement<'a>, ParseError> {
		if self.match_tokens(&[If]) {
			return self.if_statement();
		}
		if self.match_tokens(&[Print]) {
			return self.print_statement();
		}
		if self.match_tokens(&[LeftBrace]) {
			return Ok(Statement::Block(self.block()?));
		}
		self.expression_statement()
	}

	fn if_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume(LeftParen, "Expect '(' after 'if'.")?;
		let condition = *self.expression()?;
		self.consume(RightParen, "Expect ')' after if condition.")?;

		let then_branch = Box::new(self.statement()?);
		let else_branch = if self.match_tokens(&[Else]) { Some(Box::new(self.statement()?)) } else { None };
		Ok(Statement::If { condition, then_branch, else_branch })
	}

	fn print_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let value = *self.expression()?;
		self.consume(Semicolon, "Expect ';' after value.")?;
		Ok(Statement::Print(value))
	}

	/// Parse the rest of a block, the `{` is already consumed.
	fn block(&mut self) -> Result<Vec<Statement<'a>>, ParseError> {
		let mut statements = Vec::new();
		while !self.check(RightBrace) && !self.is_at_end() {
			if let Some(statement) = self.declaration() {
				statements.push(statement);
			}
		}
		self.consume(RightBrace, "Expect '}' after block.")?;
		Ok(statements)
	}

	fn expression_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let expression = *self.expression()?;
		self.consume(Semicolon, "Expect ';' after expression.")?;
		Ok(Statement::Expression(expression))
	}

	fn expression(&mut self) -> Result<Box<Expression<'a>>, ParseError> { self.assignment() }

	/// The target is parsed as an ordinary expression first, we only know it
	/// was an assignment once we hit the `=`.
	fn assignment(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let expression = self.or()?;

		if self.match_tokens(&[Equal]) {
			let equals = self.previous().clone();
			let value = self.assignment()?;

			if let Expression::Variable(name) = expression.as_ref() {
				return Ok(Expression::assign(name.clone(), value));
			}
			// Reported without unwinding, there's nothing to resynchronize.
			self.error(&equals, ParseErrorType::InvalidAssignmentTarget);
		}
		Ok(expression)
	}

	fn or(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.and()?;
		while self.match_tokens(&[Or]) {
			let operator = self.previous().clone();
			expression = Expression::logical(expression, operator, self.and()?);
		}
		Ok(expression)
	}

	fn and(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.equality()?;
		while self.match_tokens(&[And]) {
			let operator = self.previous().clone();
			expression = Expression::logical(expression, operator, self.equality()?);
		}
		Ok(expression)
	}

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.comparison()?;
		while self.match_tokens(&[BangEqual, EqualEqual]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.comparison()?);
		}
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.term()?;
		while self.match_tokens(&[Greater, GreaterEqual, Less, LessEqual]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.term()?);
		}
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.factor()?;
		while self.match_tokens(&[Minus, Plus]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.factor()?);
		}
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		let mut expression = self.unary()?;
		while self.match_tokens(&[Slash, Star]) {
			let operator = self.previous().clone();
			expression = Expression::binary(expression, operator, self.unary()?);
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		if self.match_tokens(&[Bang, Minus]) {
			let operator = self.previous().clone();
			return Ok(Expression::unary(operator, self.unary()?));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Box<Expression<'a>>, ParseError> {
		match self.peek().r#type {
			False | True | Nil | Number | String | Identifier => {
				let token = self.advance().clone();
				Expression::try_from(token).map(Box::new).map_err(|e| {
					log::error!("{e}");
					let token = self.previous().clone();
					self.error(&token, ParseErrorType::ExpectedExpression)
				})
			}
			LeftParen => {
				self.advance(); // consume '('
				let expression = self.expression()?;
				self.consume(RightParen, "Expect ')' after expression.")?;
				Ok(Expression::grouping(expression))
			}
			_ => {
				let token = self.peek().clone();
				Err(self.error(&token, ParseErrorType::ExpectedExpression))
			}
		}
	}

	/// Consume the next token if it is one of `types`.
	fn match_tokens(&mut self, types: &[TokenType]) -> bool {
		if types.iter().any(|&r#type| self.check(r#type)) {
			self.advance();
			return true;
		}
		false
	}

	/// Consume a token of the given type or fail at the current one.
	fn consume(&mut self, r#type: TokenType, message: &'static str) -> Result<Token<'a>, ParseError> {
		if self.check(r#type) {
			return Ok(self.advance().clone());
		}
		let token = self.peek().clone();
		Err(self.error(&token, ParseErrorType::Expected(message)))
	}

	fn check(&self, r#type: TokenType) -> bool { !self.is_at_end() && self.peek().r#type == r#type }

	/// Advance to the next token, `Eof` is never consumed.
	fn advance(&mut self) -> &Token<'a> {
		if !self.is_at_end() {
			self.current += 1;
		}
		self.previous()
	}

	fn is_at_end(&self) -> bool { self.peek().r#type == Eof }

	/// Peek at the current token.
	fn peek(&self) -> &Token<'a> { &self.tokens[self.current] }

	fn previous(&self) -> &Token<'a> { &self.tokens[self.current.saturating_sub(1)] }

	/// Record an error at `token` and hand it back for unwinding.
	fn error(&mut self, token: &Token<'a>, r#type: ParseErrorType) -> ParseError {
		let error = ParseError::new(token.line, Location::from(token), r#type);
		self.diagnostics.report(error.clone());
		error
	}

	/// Discard tokens until we are probably at the start of a new statement.
	///
	/// With `keep_failing` the token that failed is kept when it begins the
	/// next statement, e.g. `print` after a missing `;`. A keyword found where
	/// an operand was expected, as in `var x = var;`, is not a fresh start and
	/// is dropped, otherwise it would report a second error for one mistake.
	/// A declaration that failed on its very first token always gives that
	/// token up, so parsing keeps moving.
	fn synchronize(&mut self, start: usize, keep_failing: bool) {
		if self.current == start || !keep_failing {
			self.advance();
		}
		while !self.is_at_end() {
			if self.previous().r#type == Semicolon || self.peek().r#type.starts_statement() {
				return;
			}
			self.advance();
		}
	}
}
