use std::fmt::{Display, Error as FmtError, Formatter};

use super::codec::SEPARATOR;
use super::{Error, TaskDate};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TaskKind {
  Todo,
  Deadline { due: TaskDate },
  Event { start: TaskDate, end: TaskDate },
}

impl TaskKind {
  #[must_use]
  pub const fn icon(&self) -> char {
    match self {
      Self::Todo => 'T',
      Self::Deadline { .. } => 'D',
      Self::Event { .. } => 'E',
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Task {
  name: String,
  done: bool,
  kind: TaskKind,
}

fn checked_name(name: &str) -> Result<String, Error> {
  let name = name.trim();
  if name.is_empty() {
    Err(Error::EmptyName)
  } else if name.contains(SEPARATOR) || name.ends_with(" |") || name.starts_with("| ") {
    Err(Error::InvalidName(name.to_owned()))
  } else {
    Ok(name.to_owned())
  }
}

impl Task {
  /// Builds a not yet done task. Fails if the name is blank or would break
  /// the task file.
  pub fn new(name: &str, kind: TaskKind) -> Result<Self, Error> {
    Ok(Self {
      name: checked_name(name)?,
      done: false,
      kind,
    })
  }

  pub fn todo(name: &str) -> Result<Self, Error> {
    Self::new(name, TaskKind::Todo)
  }

  /// `due` is date text in `dd-mm-yy` form.
  pub fn deadline(name: &str, due: &str) -> Result<Self, Error> {
    let due = due.parse()?;
    Self::new(name, TaskKind::Deadline { due })
  }

  /// `start` and `end` are date text in `dd-mm-yy` form.
  pub fn event(name: &str, start: &str, end: &str) -> Result<Self, Error> {
    let start = start.parse()?;
    let end = end.parse()?;
    Self::new(name, TaskKind::Event { start, end })
  }

  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[must_use]
  pub const fn kind(&self) -> &TaskKind {
    &self.kind
  }

  #[must_use]
  pub const fn is_done(&self) -> bool {
    self.done
  }

  pub fn mark_done(&mut self) {
    self.done = true;
  }

  pub fn mark_not_done(&mut self) {
    self.done = false;
  }

  #[must_use]
  pub const fn status_icon(&self) -> char {
    if self.done {
      'X'
    } else {
      ' '
    }
  }

  /// Whether a deadline is due, or an event starts or ends, on `date`.
  #[must_use]
  pub fn falls_on(&self, date: TaskDate) -> bool {
    match self.kind {
      TaskKind::Todo => false,
      TaskKind::Deadline { due } => due == date,
      TaskKind::Event { start, end } => start == date || end == date,
    }
  }
}

/// `[T][X] name`, with `(by: ...)` or `(from: ... to: ...)` appended.
impl Display for Task {
  fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
    write!(
      formatter,
      "[{}][{}] {}",
      self.kind.icon(),
      self.status_icon(),
      self.name
    )?;
    match self.kind {
      TaskKind::Todo => Ok(()),
      TaskKind::Deadline { due } => write!(formatter, " (by: {due})"),
      TaskKind::Event { start, end } => write!(formatter, " (from: {start} to: {end})"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{Task, TaskKind};
  use crate::engine::Error;

  #[test]
  fn renders_each_kind() {
    let mut todo = Task::todo("buy milk").unwrap();
    assert_eq!(todo.to_string(), "[T][ ] buy milk");
    todo.mark_done();
    assert_eq!(todo.to_string(), "[T][X] buy milk");

    let deadline = Task::deadline("report", "15-02-25").unwrap();
    assert_eq!(deadline.to_string(), "[D][ ] report (by: 15 Feb 2025)");

    let event = Task::event("trip", "01-06-25", "05-06-25").unwrap();
    assert_eq!(
      event.to_string(),
      "[E][ ] trip (from: 01 Jun 2025 to: 05 Jun 2025)"
    );
  }

  #[test]
  fn marking_is_idempotent() {
    let mut task = Task::todo("task").unwrap();
    task.mark_done();
    task.mark_done();
    assert!(task.is_done());
    task.mark_not_done();
    task.mark_not_done();
    assert!(!task.is_done());
  }

  #[test]
  fn rejects_invalid_dates_before_construction() {
    assert!(matches!(
      Task::deadline("report", "32-01-25"),
      Err(Error::InvalidDate(_))
    ));
    assert!(matches!(
      Task::event("trip", "01-06-25", "1-6-25"),
      Err(Error::InvalidDate(d)) if d == "1-6-25"
    ));
  }

  #[test]
  fn rejects_bad_names() {
    assert!(matches!(Task::todo("   "), Err(Error::EmptyName)));
    assert!(matches!(
      Task::todo("a | b"),
      Err(Error::InvalidName(_))
    ));
    // a separator would form with the one written after the name
    for name in ["x |", "| x", "x  | "] {
      assert!(matches!(Task::todo(name), Err(Error::InvalidName(_))), "{name}");
    }
    assert!(Task::todo("a|b").is_ok());
    assert!(Task::todo("x|").is_ok());
    assert!(Task::todo("|").is_ok());
  }

  #[test]
  fn only_dated_tasks_fall_on_a_date() {
    let day = "03-06-25".parse().unwrap();
    assert!(!Task::todo("x").unwrap().falls_on(day));
    let event = Task::event("trip", "01-06-25", "05-06-25").unwrap();
    assert!(!event.falls_on(day));
    assert!(event.falls_on("05-06-25".parse().unwrap()));
    assert_eq!(event.kind().icon(), 'E');
    assert!(matches!(event.kind(), TaskKind::Event { .. }));
  }
}
