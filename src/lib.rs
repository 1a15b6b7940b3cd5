//! # From bare text to a running program
//!
//! User's source code: `var average = (min + max) / 2;`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `,`, `.`, numbers `123`,
//! string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["var", "average", "=", "(", "min", "+", "max", ")", "/", "2", ";", EOF]`.

//! ## Parsing
//!
//! A `parser` builds a tree structure of tokens, the `abstract syntax tree` or
//! `AST`, following an explicit precedence grammar. The `parser` also reports
//! `syntax errors` and recovers from them, so one run can show several.
//!
//! ``` markdown
//! average (Stmt.Var)
//! └── / (Expr.Binary)
//!     ├── (group) (Expr.Grouping)
//!     │   └── + (Expr.Binary)
//!     │       ├── min (Expr.Variable)
//!     │       └── max (Expr.Variable)
//!     └── 2 (Expr.Literal)
//! ```

//! ## Environments
//!
//! Names are resolved at runtime through a chain of scope frames. A block
//! opens a frame nested in the current one, `var` defines in the innermost
//! frame, lookups and assignments walk outward until some frame knows the
//! name.

//! ## Errors
//!
//! Scanning and parsing never stop at the first mistake. Everything they find
//! goes into a [`Diagnostics`](diagnostics::Diagnostics) owned by the caller,
//! who decides whether to go on with the next stage.

pub mod cli;
pub mod diagnostics;
pub mod environment;
mod error;
pub mod interpreter;
mod loxer;
pub mod parser;
pub mod scanner;
pub mod statement;
mod utils;

pub use error::{LoxError, interpreter::InterpreterError, parser::{ParseError, ParseErrorType}, scanner::{ScanError, ScanErrorType}};
pub use loxer::{Loxer, compile, read_source, tokenize};
pub use utils::RcCell;

use crate::{diagnostics::Diagnostics, parser::Parser, scanner::{Scanner, Token}, statement::Statement};

/// Turn `source` into tokens, the last one is always `Eof`. Problems are
/// reported to `diagnostics` and skipped.
pub fn scan<'a>(source: &'a str, diagnostics: &mut Diagnostics) -> Vec<Token<'a>> {
	Scanner::new(source, diagnostics).scan_tokens()
}

/// Parse `tokens` into statements. A declaration that fails to parse is
/// reported to `diagnostics` and left out.
pub fn parse<'a>(tokens: Vec<Token<'a>>, diagnostics: &mut Diagnostics) -> Vec<Statement<'a>> {
	Parser::new(tokens, diagnostics).parse()
}
