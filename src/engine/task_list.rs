use std::slice::Iter;

use super::{Error, Task, TaskDate};

const FROM: &str = " /from ";
const TO: &str = " /to ";
const BY: &str = " /by ";

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, Error> {
  match value.trim() {
    "" => Err(Error::EmptyField(field)),
    value => Ok(value),
  }
}

/// The user's tasks, in the order they were added.
///
/// Indices taken by the methods are 0-based; positions handed back from the
/// queries and carried in errors are 1-based. Every method validates before
/// it mutates, so a failed call leaves the list as it was.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TaskList {
  tasks: Vec<Task>,
}

impl TaskList {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  #[must_use]
  pub fn get(&self, index: usize) -> Option<&Task> {
    self.tasks.get(index)
  }

  pub fn iter(&self) -> Iter<'_, Task> {
    self.tasks.iter()
  }

  /// Appends an already built task.
  pub fn push(&mut self, task: Task) -> &Task {
    let index = self.tasks.len();
    self.tasks.push(task);
    &self.tasks[index]
  }

  pub fn add_todo(&mut self, name: &str) -> Result<&Task, Error> {
    let task = Task::todo(name)?;
    Ok(self.push(task))
  }

  /// `desc` looks like `<name> /from <dd-mm-yy> /to <dd-mm-yy>`.
  pub fn add_event(&mut self, desc: &str) -> Result<&Task, Error> {
    let (from, to) = match (desc.find(FROM), desc.find(TO)) {
      (Some(from), Some(to)) if from < to => (from, to),
      _ => return Err(Error::InvalidEventFormat),
    };
    let name = non_empty(&desc[..from], "event name")?;
    // `/to` may overlap the space that ends `/from`, leaving no start at all
    let start = non_empty(desc.get(from + FROM.len()..to).unwrap_or(""), "start date")?;
    let end = non_empty(&desc[to + TO.len()..], "end date")?;
    let task = Task::event(name, start, end)?;
    Ok(self.push(task))
  }

  /// `desc` looks like `<name> /by <dd-mm-yy>`.
  pub fn add_deadline(&mut self, desc: &str) -> Result<&Task, Error> {
    let by = desc.find(BY).ok_or(Error::InvalidDeadlineFormat)?;
    let name = non_empty(&desc[..by], "deadline name")?;
    let due = non_empty(&desc[by + BY.len()..], "due date")?;
    let task = Task::deadline(name, due)?;
    Ok(self.push(task))
  }

  fn get_mut(&mut self, index: usize) -> Result<&mut Task, Error> {
    self
      .tasks
      .get_mut(index)
      .ok_or(Error::IndexOutOfRange(index.saturating_add(1)))
  }

  pub fn mark_done(&mut self, index: usize) -> Result<&Task, Error> {
    let task = self.get_mut(index)?;
    task.mark_done();
    Ok(task)
  }

  pub fn mark_not_done(&mut self, index: usize) -> Result<&Task, Error> {
    let task = self.get_mut(index)?;
    task.mark_not_done();
    Ok(task)
  }

  /// Removes the task, moving every later task up by one.
  pub fn delete(&mut self, index: usize) -> Result<Task, Error> {
    if index >= self.tasks.len() {
      return Err(Error::IndexOutOfRange(index.saturating_add(1)));
    }
    Ok(self.tasks.remove(index))
  }

  fn positions<P>(&self, predicate: P) -> Vec<(usize, &Task)>
  where
    P: Fn(&Task) -> bool,
  {
    self
      .tasks
      .iter()
      .enumerate()
      .filter(|(_, task)| predicate(task))
      .map(|(index, task)| (index + 1, task))
      .collect()
  }

  /// Tasks whose name contains `keyword`, with their 1-based positions.
  #[must_use]
  pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
    self.positions(|task| task.name().contains(keyword))
  }

  /// Deadlines due on `date` and events starting or ending on it, with their
  /// 1-based positions.
  #[must_use]
  pub fn check_on_date(&self, date: TaskDate) -> Vec<(usize, &Task)> {
    self.positions(|task| task.falls_on(date))
  }
}

impl<'a> IntoIterator for &'a TaskList {
  type Item = &'a Task;
  type IntoIter = Iter<'a, Task>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::TaskList;
  use crate::engine::{Error, TaskKind};

  fn names(list: &TaskList) -> Vec<&str> {
    list.iter().map(|task| task.name()).collect()
  }

  #[test]
  fn adds_todos() {
    let mut list = TaskList::new();
    let task = list.add_todo("buy milk").unwrap();
    assert!(!task.is_done());
    assert_eq!(list.len(), 1);
    assert!(matches!(list.add_todo(""), Err(Error::EmptyName)));
    assert_eq!(list.len(), 1);
  }

  #[test]
  fn splits_events() {
    let mut list = TaskList::new();
    let task = list.add_event("trip /from 01-06-25 /to 05-06-25").unwrap();
    assert_eq!(task.name(), "trip");
    let TaskKind::Event { start, end } = *task.kind() else {
      panic!("not an event");
    };
    assert_eq!(start.to_short_string(), "01-06-25");
    assert_eq!(end.to_short_string(), "05-06-25");
  }

  #[test]
  fn rejects_malformed_events_without_changing_the_list() {
    let mut list = TaskList::new();
    let cases = [
      ("trip /from 01-06-25", "format"),
      ("trip /to 05-06-25 /from 01-06-25", "format"),
      ("trip 01-06-25 05-06-25", "format"),
      (" /from 01-06-25 /to 05-06-25", "event name"),
      ("trip /from   /to 05-06-25", "start date"),
      ("trip /from /to 05-06-25", "start date"),
      ("trip /from 01-06-25 /to  ", "end date"),
      ("trip /from 01-06-25 /to 5-6-25", "date"),
    ];
    for (desc, expected) in cases {
      let result = list.add_event(desc);
      match expected {
        "format" => assert!(matches!(result, Err(Error::InvalidEventFormat)), "{desc}"),
        "date" => assert!(matches!(result, Err(Error::InvalidDate(_))), "{desc}"),
        field => assert!(matches!(result, Err(Error::EmptyField(f)) if f == field), "{desc}"),
      }
    }
    assert!(list.is_empty());
  }

  #[test]
  fn splits_deadlines() {
    let mut list = TaskList::new();
    let task = list.add_deadline("submit report /by 15-02-25").unwrap();
    assert_eq!(task.to_string(), "[D][ ] submit report (by: 15 Feb 2025)");
    assert!(matches!(
      list.add_deadline("report 15-02-25"),
      Err(Error::InvalidDeadlineFormat)
    ));
    assert!(matches!(
      list.add_deadline("report /by  "),
      Err(Error::EmptyField("due date"))
    ));
    assert!(matches!(
      list.add_deadline("report /by 29-02-2025"),
      Err(Error::InvalidDate(_))
    ));
    assert_eq!(list.len(), 1);
  }

  #[test]
  fn marks_by_index() {
    let mut list = TaskList::new();
    list.add_todo("a").unwrap();
    assert!(list.mark_done(0).unwrap().is_done());
    assert!(list.mark_done(0).unwrap().is_done());
    assert!(!list.mark_not_done(0).unwrap().is_done());
    assert!(!list.mark_not_done(0).unwrap().is_done());
    assert!(matches!(list.mark_done(1), Err(Error::IndexOutOfRange(2))));
    assert!(matches!(list.mark_not_done(7), Err(Error::IndexOutOfRange(8))));
  }

  #[test]
  fn delete_shifts_later_tasks_down() {
    let mut list = TaskList::new();
    for name in ["a", "b", "c", "d"] {
      list.add_todo(name).unwrap();
    }
    let removed = list.delete(1).unwrap();
    assert_eq!(removed.name(), "b");
    assert_eq!(names(&list), ["a", "c", "d"]);
    assert_eq!(list.get(1).unwrap().name(), "c");
    assert!(matches!(list.delete(3), Err(Error::IndexOutOfRange(4))));
    assert_eq!(list.len(), 3);
  }

  #[test]
  fn checks_deadline_dates() {
    let mut list = TaskList::new();
    list.add_todo("unrelated").unwrap();
    list.add_deadline("report /by 15-02-25").unwrap();
    let found = list.check_on_date("15-02-25".parse().unwrap());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, 2);
    assert_eq!(found[0].1.name(), "report");
    assert!(list.check_on_date("16-02-25".parse().unwrap()).is_empty());
  }

  #[test]
  fn checks_only_event_endpoints() {
    let mut list = TaskList::new();
    list.add_event("trip /from 01-06-25 /to 05-06-25").unwrap();
    assert_eq!(list.check_on_date("01-06-25".parse().unwrap()).len(), 1);
    assert_eq!(list.check_on_date("05-06-25".parse().unwrap()).len(), 1);
    assert!(list.check_on_date("03-06-25".parse().unwrap()).is_empty());
  }

  #[test]
  fn finds_by_name() {
    let mut list = TaskList::new();
    for name in ["buy milk", "read book", "buy bread"] {
      list.add_todo(name).unwrap();
    }
    let found: Vec<_> = list
      .find("buy")
      .into_iter()
      .map(|(pos, task)| (pos, task.name()))
      .collect();
    assert_eq!(found, [(1, "buy milk"), (3, "buy bread")]);
    assert!(list.find("Buy").is_empty());
  }
}
