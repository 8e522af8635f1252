use super::{parse, Command, Error, Store, Task, TaskDate, TaskList};

/// What a command did, for the console to report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
  /// Every task, with its 1-based position.
  Listed(Vec<(usize, Task)>),
  Added { task: Task, count: usize },
  Marked(Task),
  Unmarked(Task),
  Deleted { task: Task, count: usize },
  Found {
    keyword: String,
    matches: Vec<(usize, Task)>,
  },
  Checked {
    date: TaskDate,
    matches: Vec<(usize, Task)>,
  },
  Exit,
}

fn owned(matches: Vec<(usize, &Task)>) -> Vec<(usize, Task)> {
  matches
    .into_iter()
    .map(|(position, task)| (position, task.clone()))
    .collect()
}

/// Owns the task list for as long as the user is talking to us, and writes
/// it back to its store after every change.
#[derive(Debug)]
pub struct Session<S: Store> {
  tasks: TaskList,
  store: S,
}

impl<S: Store> Session<S> {
  /// Loads the stored list. If that fails the session starts out empty and
  /// the error is handed back once, for the caller to show.
  pub fn open(mut store: S) -> (Self, Option<Error>) {
    let (tasks, load_error) = match store.load() {
      Ok(tasks) => (tasks, None),
      Err(err) => {
        log::info!("Could not load saved tasks, starting empty: {}", err);
        (TaskList::new(), Some(err))
      }
    };
    (Self { tasks, store }, load_error)
  }

  #[must_use]
  pub fn tasks(&self) -> &TaskList {
    &self.tasks
  }

  #[must_use]
  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn execute_line(&mut self, line: &str) -> Result<Outcome, Error> {
    self.execute(parse(line)?)
  }

  pub fn execute(&mut self, command: Command) -> Result<Outcome, Error> {
    let mutates = command.mutates();
    let outcome = self.apply(command)?;
    if mutates {
      self.persist();
    }
    Ok(outcome)
  }

  fn apply(&mut self, command: Command) -> Result<Outcome, Error> {
    let tasks = &mut self.tasks;
    Ok(match command {
      Command::List => Outcome::Listed(
        tasks
          .iter()
          .cloned()
          .enumerate()
          .map(|(index, task)| (index + 1, task))
          .collect(),
      ),
      Command::Mark(index) => Outcome::Marked(tasks.mark_done(index)?.clone()),
      Command::Unmark(index) => Outcome::Unmarked(tasks.mark_not_done(index)?.clone()),
      Command::Delete(index) => {
        let task = tasks.delete(index)?;
        Outcome::Deleted {
          task,
          count: tasks.len(),
        }
      }
      Command::Check(date) => Outcome::Checked {
        date,
        matches: owned(tasks.check_on_date(date)),
      },
      Command::Find(keyword) => Outcome::Found {
        matches: owned(tasks.find(&keyword)),
        keyword,
      },
      Command::Todo(name) => Self::added(tasks, |tasks| tasks.add_todo(&name))?,
      Command::Event(desc) => Self::added(tasks, |tasks| tasks.add_event(&desc))?,
      Command::Deadline(desc) => Self::added(tasks, |tasks| tasks.add_deadline(&desc))?,
      Command::Bye => Outcome::Exit,
    })
  }

  fn added<F>(tasks: &mut TaskList, add: F) -> Result<Outcome, Error>
  where
    F: FnOnce(&mut TaskList) -> Result<&Task, Error>,
  {
    let task = add(tasks)?.clone();
    Ok(Outcome::Added {
      task,
      count: tasks.len(),
    })
  }

  /// A failed save is logged and otherwise ignored; the list in memory stays
  /// the one that counts.
  fn persist(&mut self) {
    if let Err(err) = self.store.save(&self.tasks) {
      log::warn!("Unable to save tasks: {}", err);
    }
  }
}
