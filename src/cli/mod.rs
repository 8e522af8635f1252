use clap::Parser;
use std::error::Error;
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use crate::engine::{Error as TaskError, FileStore, Outcome, Session, Store, Task};

#[derive(Debug, Parser)]
#[command(name = "taskline", author, version, about)]
struct Opts {
  #[arg(long, short, env = "TASKLINE_FILE", default_value = "data/tasks.dat")]
  /// File the task list is loaded from and saved to.
  file: PathBuf,

  #[arg(long, short)]
  /// Don't greet or prompt, even when reading from a terminal
  quiet: bool,
}

pub fn cli() -> Result<(), Box<dyn Error>> {
  let opts = Opts::parse();
  let interactive = !opts.quiet && atty::is(atty::Stream::Stdin);
  let (mut session, load_error) = Session::open(FileStore::new(opts.file));
  let mut output = stdout().lock();
  if let Some(err) = load_error {
    print_load_error(&mut output, &err)?;
  }
  if interactive {
    writeln!(output, "Hello! What can I do for you?")?;
  }
  run(&mut session, stdin().lock(), &mut output, interactive)?;
  Ok(())
}

fn print_load_error<W: Write>(output: &mut W, err: &TaskError) -> io::Result<()> {
  writeln!(output, "Error loading saved tasks: {err}")?;
  writeln!(output, "Starting with an empty task list.")
}

/// Reads commands until `bye` or the end of `input`, answering each one on
/// `output`. Bad commands are reported and the loop goes on.
pub fn run<S: Store, R: BufRead, W: Write>(
  session: &mut Session<S>,
  input: R,
  output: &mut W,
  prompt: bool,
) -> io::Result<()> {
  let mut lines = input.lines();
  loop {
    if prompt {
      write!(output, "> ")?;
      output.flush()?;
    }
    let Some(line) = lines.next() else {
      return Ok(());
    };
    match session.execute_line(&line?) {
      Ok(Outcome::Exit) => {
        print_outcome(output, &Outcome::Exit)?;
        return Ok(());
      }
      Ok(outcome) => print_outcome(output, &outcome)?,
      Err(err) => writeln!(output, "{err}")?,
    }
  }
}

fn print_numbered<W: Write>(output: &mut W, tasks: &[(usize, Task)]) -> io::Result<()> {
  for (position, task) in tasks {
    writeln!(output, "{position}.{task}")?;
  }
  Ok(())
}

fn print_count<W: Write>(output: &mut W, count: usize) -> io::Result<()> {
  let noun = if count == 1 { "task" } else { "tasks" };
  writeln!(output, "Now you have {count} {noun} in the list.")
}

fn print_outcome<W: Write>(output: &mut W, outcome: &Outcome) -> io::Result<()> {
  match outcome {
    Outcome::Listed(tasks) if tasks.is_empty() => writeln!(output, "Your list is empty."),
    Outcome::Listed(tasks) => {
      writeln!(output, "Here are the tasks in your list:")?;
      print_numbered(output, tasks)
    }
    Outcome::Added { task, count } => {
      writeln!(output, "Got it. I've added this task:\n  {task}")?;
      print_count(output, *count)
    }
    Outcome::Marked(task) => writeln!(output, "Nice! I've marked this task as done:\n  {task}"),
    Outcome::Unmarked(task) => writeln!(
      output,
      "OK, I've marked this task as not done yet:\n  {task}"
    ),
    Outcome::Deleted { task, count } => {
      writeln!(output, "Noted. I've removed this task:\n  {task}")?;
      print_count(output, *count)
    }
    Outcome::Found { keyword, matches } if matches.is_empty() => {
      writeln!(output, "No tasks match '{keyword}'.")
    }
    Outcome::Found { matches, .. } => {
      writeln!(output, "Here are the matching tasks in your list:")?;
      print_numbered(output, matches)
    }
    Outcome::Checked { date, matches } => {
      writeln!(output, "Tasks for {date}:")?;
      if matches.is_empty() {
        writeln!(output, "No tasks found for this date.")
      } else {
        print_numbered(output, matches)
      }
    }
    Outcome::Exit => writeln!(output, "Bye. Hope to see you again soon!"),
  }
}
