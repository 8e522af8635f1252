use super::codec::{decode, encode};
use super::{Error, Store, TaskList};

/// Keeps the encoded task file in memory.
#[derive(Debug, Default)]
pub struct MemStore {
  contents: Vec<u8>,
}

impl MemStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// A store that already holds the given task file text.
  #[must_use]
  pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
    Self {
      contents: contents.into(),
    }
  }

  #[must_use]
  pub fn contents(&self) -> &[u8] {
    &self.contents
  }
}

impl Store for MemStore {
  fn load(&mut self) -> Result<TaskList, Error> {
    decode(self.contents.as_slice())
  }

  fn save(&mut self, tasks: &TaskList) -> Result<(), Error> {
    let mut contents = Vec::new();
    encode(tasks, &mut contents)?;
    self.contents = contents;
    Ok(())
  }
}
