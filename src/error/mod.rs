pub mod interpreter;
pub mod parser;
pub mod scanner;

use std::path::PathBuf;

/// Why a run of a Lox program stopped.
///
/// Scan and parse problems were already shown one by one as they were found,
/// these variants only count them.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// The script could not be read.
	#[error("Failed read source file {}: {source}", .path.display())]
	ReadSource { path: PathBuf, source: std::io::Error },
	#[error("Scanning reported {0} error{s}", s = plural(.0))]
	ScannerErrors(usize),
	#[error("Parsing reported {0} error{s}", s = plural(.0))]
	ParserErrors(usize),
	#[error("Runtime error:\n{0}")]
	RuntimeError(#[from] interpreter::InterpreterError),
}

fn plural(count: &usize) -> &'static str { if *count == 1 { "" } else { "s" } }

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_counts() {
		assert_eq!(LoxError::ParserErrors(1).to_string(), "Parsing reported 1 error");
		assert_eq!(LoxError::ParserErrors(3).to_string(), "Parsing reported 3 errors");
		assert_eq!(LoxError::ScannerErrors(2).to_string(), "Scanning reported 2 errors");
	}

	#[test]
	fn read_source_names_the_path() {
		let error = LoxError::ReadSource {
			path:   PathBuf::from("scripts/none.lox"),
			source: std::io::Error::from(std::io::ErrorKind::NotFound),
		};
		assert!(error.to_string().starts_with("Failed read source file scripts/none.lox: "));
	}
}
