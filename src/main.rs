//! CLI entry point for the snake board generator

use clap::Parser;
use snakeboard::io::cli::{BoardProcessor, Cli};

fn main() -> snakeboard::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
    let mut processor = BoardProcessor::new(cli);
    processor.process()?;
    Ok(())
}
