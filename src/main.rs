use {
  anyhow::Context,
  arguments::Arguments,
  boilerplate::{Classifier, ClassifierOptions, Document, Tier, Tree},
  clap::Parser,
  std::{fs, io::IsTerminal, path::PathBuf, process},
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
