use std::{fs::read_to_string, io::{Stdout, Write}, path::Path};

use crate::{LoxError, diagnostics::Diagnostics, interpreter::Interpreter, scanner::Token, statement::Statement};

/// Loxer is the main struct for the Lox compiler/interpreter.
///
/// The global scope lives as long as the `Loxer`, so REPL lines see the
/// variables earlier lines declared.
pub struct Loxer<W: Write = Stdout> {
	interpreter: Interpreter<W>,
	/// Reused by every run, cleared before each one.
	diagnostics: Diagnostics,
}

impl Loxer<Stdout> {
	pub fn new() -> Self { Self::with_output(std::io::stdout()) }
}

impl Default for Loxer<Stdout> {
	fn default() -> Self { Self::new() }
}

impl<W: Write> Loxer<W> {
	/// A loxer whose `print` statements write to `output`.
	pub fn with_output(output: W) -> Self {
		Self { interpreter: Interpreter::with_output(output), diagnostics: Diagnostics::new() }
	}

	pub fn output(&self) -> &W { self.interpreter.output() }

	/// What the latest run reported while scanning and parsing.
	pub fn diagnostics(&self) -> &Diagnostics { &self.diagnostics }

	/// Run the script at `path`.
	pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoxError> {
		let source = read_source(path)?;
		self.run(&source)
	}

	/// Run the REPL prompt.
	pub fn run_prompt(&mut self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited loxer repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			// Syntax errors were shown as they were found, the session goes on.
			match self.run(input.trim()) {
				Err(LoxError::RuntimeError(e)) => eprintln!("{e}"),
				Err(e) => log::debug!("{e}"),
				Ok(()) => {}
			}
		}
	}

	/// Scan, parse and execute `source`. Each stage only runs when the
	/// previous one reported nothing.
	///
	/// Diagnostics are shown on stderr as they are found, a runtime error is
	/// only returned and left to the caller to show.
	pub fn run(&mut self, source: &str) -> Result<(), LoxError> {
		self.diagnostics.clear();
		let statements = compile_with(source, &mut self.diagnostics)?;
		Ok(self.interpreter.interpret(&statements)?)
	}
}

/// Scan and parse `source`, reporting every diagnostic on stderr.
pub fn compile(source: &str) -> Result<Vec<Statement<'_>>, LoxError> { compile_with(source, &mut Diagnostics::new()) }

fn compile_with<'a>(source: &'a str, diagnostics: &mut Diagnostics) -> Result<Vec<Statement<'a>>, LoxError> {
	let tokens = tokenize(source, diagnostics)?;
	let statements = crate::parse(tokens, diagnostics);
	if diagnostics.had_error() {
		report(diagnostics);
		return Err(LoxError::ParserErrors(diagnostics.len()));
	}
	Ok(statements)
}

/// Scan `source`, failing when any lexical error was reported.
pub fn tokenize<'a>(source: &'a str, diagnostics: &mut Diagnostics) -> Result<Vec<Token<'a>>, LoxError> {
	let tokens = crate::scan(source, diagnostics);
	if diagnostics.had_error() {
		report(diagnostics);
		return Err(LoxError::ScannerErrors(diagnostics.len()));
	}
	Ok(tokens)
}

pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, LoxError> {
	let path = path.as_ref();
	read_to_string(path).map_err(|source| LoxError::ReadSource { path: path.to_path_buf(), source })
}

fn report(diagnostics: &Diagnostics) {
	for diagnostic in diagnostics.iter() {
		eprintln!("{diagnostic}");
	}
}
