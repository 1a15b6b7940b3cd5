use loxer::{Loxer, cli::*, diagnostics::Diagnostics};
use palc::Parser;

fn main() {
	env_logger::init();

	let result = match Cli::parse().mode {
		Mode::File { path } => Loxer::new().run_file(&path),
		Mode::Repl => {
			Loxer::new().run_prompt();
			Ok(())
		}
		Mode::Tokens { path } => loxer::read_source(&path).and_then(|source| {
			let tokens = loxer::tokenize(&source, &mut Diagnostics::new())?;
			tokens.iter().for_each(|token| println!("{token}"));
			Ok(())
		}),
		Mode::Ast { path } => loxer::read_source(&path).and_then(|source| {
			loxer::compile(&source)?.iter().for_each(|statement| println!("{statement}"));
			Ok(())
		}),
	};

	if let Err(e) = result {
		eprintln!("Failed run: {e}");
		std::process::exit(match e {
			loxer::LoxError::RuntimeError(_) => 70,
			loxer::LoxError::ReadSource { .. } => 66,
			_ => 65,
		});
	}
}
