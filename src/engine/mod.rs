pub mod codec;
mod data;
mod date;
mod error;
mod file_store;
mod mem_store;
mod parser;
mod session;
mod store;
mod task_list;

pub use data::{Task, TaskKind};
pub use date::TaskDate;
pub use error::Error;
pub use file_store::FileStore;
pub use mem_store::MemStore;
pub use parser::{parse, Command, KEYWORDS};
pub use session::{Outcome, Session};
pub use store::Store;
pub use task_list::TaskList;
