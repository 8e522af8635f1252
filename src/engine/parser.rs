use std::str::FromStr;

use super::{Error, TaskDate};

/// Every command keyword the parser accepts, in the order they are offered to
/// the user.
pub const KEYWORDS: [&str; 10] = [
  "todo", "event", "deadline", "mark", "unmark", "delete", "list", "find", "check", "bye",
];

/// A single line of user input, interpreted. Task indices are 0-based.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
  List,
  Mark(usize),
  Unmark(usize),
  Delete(usize),
  Check(TaskDate),
  Find(String),
  Todo(String),
  /// Raw remainder, split into name and dates when the event is added.
  Event(String),
  /// Raw remainder, split into name and due date when the deadline is added.
  Deadline(String),
  Bye,
}

impl Command {
  /// Whether applying this command changes the task list.
  #[must_use]
  pub const fn mutates(&self) -> bool {
    match self {
      Self::List | Self::Check(_) | Self::Find(_) | Self::Bye => false,
      Self::Mark(_)
      | Self::Unmark(_)
      | Self::Delete(_)
      | Self::Todo(_)
      | Self::Event(_)
      | Self::Deadline(_) => true,
    }
  }
}

/// Turns a user supplied, 1-based task number into a 0-based index.
fn task_index(arg: &str) -> Result<usize, Error> {
  let number: usize = arg
    .split(' ')
    .next()
    .and_then(|n| n.parse().ok())
    .ok_or(Error::InvalidNumber)?;
  number.checked_sub(1).ok_or(Error::InvalidNumber)
}

pub fn parse(line: &str) -> Result<Command, Error> {
  match line {
    "list" => return Ok(Command::List),
    "bye" => return Ok(Command::Bye),
    _ => {}
  }
  let (keyword, rest) = line
    .split_once(' ')
    .ok_or_else(|| Error::UnknownCommand(line.to_owned()))?;
  match keyword {
    "mark" => task_index(rest).map(Command::Mark),
    "unmark" => task_index(rest).map(Command::Unmark),
    "delete" => task_index(rest).map(Command::Delete),
    "check" => rest.trim().parse().map(Command::Check),
    "find" => match rest.trim() {
      "" => Err(Error::EmptyField("keyword")),
      keyword => Ok(Command::Find(keyword.to_owned())),
    },
    "todo" => Ok(Command::Todo(rest.trim().to_owned())),
    "event" => Ok(Command::Event(rest.to_owned())),
    "deadline" => Ok(Command::Deadline(rest.to_owned())),
    _ => Err(Error::UnknownCommand(line.to_owned())),
  }
}

impl FromStr for Command {
  type Err = Error;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse(s)
  }
}
