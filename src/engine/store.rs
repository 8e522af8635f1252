use super::{Error, TaskList};

/// Somewhere a task list lives between sessions.
pub trait Store {
  /// Reads the whole list. A store that was never saved to yields an empty list.
  fn load(&mut self) -> Result<TaskList, Error>;
  /// Replaces everything stored with `tasks`.
  fn save(&mut self, tasks: &TaskList) -> Result<(), Error>;
}
