use std::{fs, path::{Path, PathBuf}};

use loxer::{LoxError, Loxer, diagnostics::Diagnostics, scanner::TokenType};

fn tests_dir() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests") }

/// Run a script and collect what it printed.
fn run_script(path: &Path) -> (Result<(), LoxError>, String) {
	let mut loxer = Loxer::with_output(Vec::new());
	let result = loxer.run_file(path);
	(result, String::from_utf8_lossy(loxer.output()).trim().to_string())
}

#[test]
fn test_lox_file() {
	let (result, output) = run_script(&tests_dir().join("test.lox"));
	assert!(result.is_ok(), "{result:?}");
	assert_eq!(output, "hello world\n7\n9\n2\n20\n1\nouter unchanged");
}

/// Every directory under `tests/scenarios` holds an `input.lox` and the
/// `output` it is expected to print.
#[test]
fn test_scenarios() {
	let mut scenarios: Vec<_> = fs::read_dir(tests_dir().join("scenarios"))
		.expect("scenarios directory")
		.map(|entry| entry.expect("scenario entry").path())
		.filter(|path| path.is_dir())
		.collect();
	scenarios.sort();
	assert!(!scenarios.is_empty());

	for scenario in scenarios {
		let expected = fs::read_to_string(scenario.join("output")).expect("expected output");
		let (_, output) = run_script(&scenario.join("input.lox"));
		assert_eq!(output, expected.trim(), "{} has failed", scenario.display());
	}
}

#[test]
fn syntax_errors_stop_before_running() {
	let (result, output) = run_script(&tests_dir().join("scenarios").join("recover_and_report").join("input.lox"));
	assert!(matches!(result, Err(LoxError::ParserErrors(3))), "{result:?}");
	assert!(output.is_empty());
}

#[test]
fn scan_and_parse_share_diagnostics() {
	let mut diagnostics = Diagnostics::new();
	let tokens = loxer::scan("var a = 1\nprint a; @", &mut diagnostics);
	assert_eq!(tokens.last().map(|token| token.r#type), Some(TokenType::Eof));
	assert_eq!(diagnostics.len(), 1);

	let statements = loxer::parse(tokens, &mut diagnostics);
	let printed: Vec<_> = statements.iter().map(ToString::to_string).collect();
	assert_eq!(printed, vec!["(print a)"]);
	let messages: Vec<_> = diagnostics.iter().map(ToString::to_string).collect();
	assert_eq!(messages, vec![
		"[line 2] Error: Unexpected character.",
		"[line 2] Error at 'print': Expect ';' after variable declaration.",
	]);

	diagnostics.clear();
	let statements = loxer::parse(loxer::scan("print 1;", &mut diagnostics), &mut diagnostics);
	assert_eq!(statements.len(), 1);
	assert!(!diagnostics.had_error());
}
