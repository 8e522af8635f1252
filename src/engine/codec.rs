//! The task file format: one task per line,
//! `type | marked | name | start | end`, where `type` is `T`, `D` or `E`,
//! `marked` is `0` or `1` and the dates are `dd-mm-yy` or `null`.

use std::io::{BufRead, Write};

use super::{Error, Task, TaskDate, TaskKind, TaskList};

pub const SEPARATOR: &str = " | ";
const NULL: &str = "null";

fn corrupt(line: usize, reason: impl Into<String>) -> Error {
  Error::CorruptFormat {
    line,
    reason: reason.into(),
  }
}

fn date_field(line: usize, value: &str) -> Result<TaskDate, Error> {
  value
    .parse()
    .map_err(|_| corrupt(line, format!("invalid date '{value}', expected dd-mm-yy")))
}

fn decode_line(line: usize, text: &str) -> Result<Task, Error> {
  let fields: Vec<_> = text.split(SEPARATOR).map(str::trim).collect();
  let &[kind, marked, name, start, end] = fields.as_slice() else {
    return Err(corrupt(
      line,
      format!(
        "expected 5 fields separated by '{SEPARATOR}', found {}",
        fields.len()
      ),
    ));
  };
  if !matches!(kind, "T" | "D" | "E") {
    return Err(corrupt(
      line,
      format!("invalid task type '{kind}', expected T, D or E"),
    ));
  }
  let done = match marked {
    "0" => false,
    "1" => true,
    _ => {
      return Err(corrupt(
        line,
        format!("invalid marked status '{marked}', expected 0 or 1"),
      ))
    }
  };
  if name.is_empty() {
    return Err(corrupt(line, "task name cannot be empty"));
  }
  let absent = |value: &str| value.is_empty() || value == NULL;
  let kind = match (kind, absent(start), absent(end)) {
    ("T", true, true) => TaskKind::Todo,
    ("D", true, false) => TaskKind::Deadline {
      due: date_field(line, end)?,
    },
    ("E", false, false) => TaskKind::Event {
      start: date_field(line, start)?,
      end: date_field(line, end)?,
    },
    (kind, _, _) => {
      let expected = match kind {
        "T" => "a todo needs null start and end",
        "D" => "a deadline needs a null start and a date as end",
        _ => "an event needs both start and end dates",
      };
      return Err(corrupt(
        line,
        format!("{expected}, found start='{start}', end='{end}'"),
      ));
    }
  };
  let mut task = Task::new(name, kind).map_err(|err| corrupt(line, err.to_string()))?;
  if done {
    task.mark_done();
  }
  Ok(task)
}

/// Reads a whole task file. Blank lines are skipped; the first bad line fails
/// the whole read.
pub fn decode<R: BufRead>(source: R) -> Result<TaskList, Error> {
  let mut tasks = TaskList::new();
  for (index, line_result) in source.lines().enumerate() {
    let line = line_result?;
    if line.trim().is_empty() {
      continue;
    }
    tasks.push(decode_line(index + 1, &line)?);
  }
  Ok(tasks)
}

fn date_text(date: Option<TaskDate>) -> String {
  date.map_or_else(|| NULL.to_owned(), TaskDate::to_short_string)
}

pub fn encode<W: Write>(tasks: &TaskList, target: &mut W) -> Result<(), Error> {
  for task in tasks {
    let (start, end) = match *task.kind() {
      TaskKind::Todo => (None, None),
      TaskKind::Deadline { due } => (None, Some(due)),
      TaskKind::Event { start, end } => (Some(start), Some(end)),
    };
    writeln!(
      target,
      "{kind}{SEPARATOR}{marked}{SEPARATOR}{name}{SEPARATOR}{start}{SEPARATOR}{end}",
      kind = task.kind().icon(),
      marked = u8::from(task.is_done()),
      name = task.name(),
      start = date_text(start),
      end = date_text(end),
    )?;
  }
  Ok(())
}
