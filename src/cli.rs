use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "loxer", after_long_help = "A scanner, parser and tree-walk interpreter for Lox.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a script
	File { path: PathBuf },
	/// Input prompt
	Repl,
	/// Print the tokens of a script, one per line
	Tokens { path: PathBuf },
	/// Print the syntax tree of every statement in a script
	Ast { path: PathBuf },
}
