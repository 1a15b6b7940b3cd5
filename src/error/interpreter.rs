#[derive(thiserror::Error, Debug)]
/// Errors that can occur during interpretation
pub enum InterpreterError {
	/// No frame in the environment chain binds the name
	#[error("Undefined variable '{name}'.\n[line {line}]")]
	UndefinedVariable { name: String, line: usize },
	/// Error for unary operations on a non number
	#[error("Operand must be a number.\n[line {line}]")]
	OperandMustBeNumber { line: usize },
	/// Error for arithmetic or comparison on non numbers
	#[error("Operands must be numbers.\n[line {line}]")]
	OperandsMustBeNumbers { line: usize },
	/// Error for `+` on mixed operands
	#[error("Operands must be two numbers or two strings.\n[line {line}]")]
	OperandsMustBeNumbersOrStrings { line: usize },
	/// An operator token the evaluator has no rule for, the parser never
	/// builds one, only trees put together by hand can carry it
	#[error("Unsupported operator '{operator}'.\n[line {line}]")]
	UnsupportedOperator { operator: String, line: usize },
	/// The print sink refused the write
	#[error("Failed write output: {0}")]
	Output(#[from] std::io::Error),
}
