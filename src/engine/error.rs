use std::io;

use thiserror::Error;

use super::parser::KEYWORDS;

/// Everything that can go wrong while interpreting a command or reading the
/// task file. None of these end a session.
#[derive(Debug, Error)]
pub enum Error {
  #[error("I don't know what '{0}' means. You can use {}", KEYWORDS.join(", "))]
  UnknownCommand(String),

  #[error("that's not a valid task number")]
  InvalidNumber,

  /// Carries the 1-based position the user asked for.
  #[error("can't find task {0}")]
  IndexOutOfRange(usize),

  #[error("you have to provide a task name")]
  EmptyName,

  #[error("the {0} cannot be empty")]
  EmptyField(&'static str),

  #[error("task name '{0}' must not contain ' | '")]
  InvalidName(String),

  #[error("invalid date '{0}', please use dd-mm-yy (e.g. 25-12-24)")]
  InvalidDate(String),

  #[error("invalid event format, use: event <name> /from <dd-mm-yy> /to <dd-mm-yy>")]
  InvalidEventFormat,

  #[error("invalid deadline format, use: deadline <name> /by <dd-mm-yy>")]
  InvalidDeadlineFormat,

  #[error("corrupted data file at line {line}: {reason}")]
  CorruptFormat { line: usize, reason: String },

  #[error(transparent)]
  Io(#[from] io::Error),
}
