#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
use std::error::Error;

use taskline::cli::cli;

fn main() -> Result<(), Box<dyn Error>> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  cli()
}
