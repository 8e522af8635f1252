use std::fs::{create_dir_all, rename, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::codec::{decode, encode};
use super::{Error, Store, TaskList};

/// The task file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
  path: PathBuf,
}

impl FileStore {
  #[must_use]
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl Store for FileStore {
  fn load(&mut self) -> Result<TaskList, Error> {
    let file = match File::open(&self.path) {
      Ok(file) => file,
      Err(err) if err.kind() == ErrorKind::NotFound => {
        log::info!("No task file at {:?} yet, starting empty", self.path);
        return Ok(TaskList::new());
      }
      Err(err) => return Err(err.into()),
    };
    let tasks = decode(BufReader::new(file))?;
    log::debug!("Loaded {} tasks from {:?}", tasks.len(), self.path);
    Ok(tasks)
  }

  fn save(&mut self, tasks: &TaskList) -> Result<(), Error> {
    if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
      create_dir_all(dir)?;
    }
    // the old file stays in place until the new one is complete
    let mut partial = self.path.clone().into_os_string();
    partial.push(".tmp");
    let partial = PathBuf::from(partial);
    let mut target = BufWriter::new(File::create(&partial)?);
    encode(tasks, &mut target)?;
    target.flush()?;
    rename(&partial, &self.path)?;
    log::debug!("Saved {} tasks to {:?}", tasks.len(), self.path);
    Ok(())
  }
}
