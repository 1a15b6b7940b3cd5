//! Bindings that associate variables to values live in an environment.
//!
//! Every block gets a frame of its own whose `enclosing` handle points at
//! the frame it was opened in. Frames are shared rather than owned, so a
//! change made through any handle is seen by every scope chained to it.

use std::collections::HashMap;

use crate::{error::interpreter::InterpreterError, interpreter::value::Value, scanner::Token, utils::RcCell};

/// One scope frame, clone the `RcCell` around it to share it.
#[derive(Default, Debug)]
pub struct Environment {
	values:    HashMap<String, Value>,
	enclosing: Option<RcCell<Environment>>,
}

impl Environment {
	/// The outermost frame.
	pub fn new() -> Self { Self::default() }

	/// A frame nested inside `enclosing`.
	pub fn with_enclosing(enclosing: RcCell<Environment>) -> Self {
		Self { values: HashMap::new(), enclosing: Some(enclosing) }
	}

	pub fn enclosing(&self) -> Option<&RcCell<Environment>> { self.enclosing.as_ref() }

	/// A variable statement doesn’t just define a new variable, it can also be
	/// used to redefine an existing variable.
	pub fn define(&mut self, name: &str, value: Value) { self.values.insert(name.to_string(), value); }

	/// Look `name` up from this frame outward.
	pub fn get(&self, name: &Token) -> Result<Value, InterpreterError> {
		if let Some(value) = self.values.get(name.lexeme) {
			return Ok(value.clone());
		}
		match &self.enclosing {
			Some(enclosing) => enclosing.borrow().get(name),
			None => Err(undefined(name)),
		}
	}

	/// Assign a value to an existing variable, never creates one.
	pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), InterpreterError> {
		if let Some(slot) = self.values.get_mut(name.lexeme) {
			*slot = value;
			return Ok(());
		}
		match &self.enclosing {
			Some(enclosing) => enclosing.borrow_mut().assign(name, value),
			None => Err(undefined(name)),
		}
	}
}

fn undefined(name: &Token) -> InterpreterError {
	InterpreterError::UndefinedVariable { name: name.lexeme.to_string(), line: name.line }
}
