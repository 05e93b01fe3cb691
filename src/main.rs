use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold one Advent of Code puzzle day", long_about = None)]
struct Cli {
    /// Puzzle year (prompted with the current year as default if omitted)
    #[arg(long)]
    year: Option<i32>,

    /// Puzzle day, 1-31 (prompted with today's day as default if omitted)
    #[arg(long)]
    day: Option<u32>,

    /// Target language (only java is recognized)
    #[arg(long)]
    language: Option<String>,

    /// Class name for the generated source file
    #[arg(long)]
    name: Option<String>,

    /// Accept all defaults without prompting
    #[arg(short, long)]
    defaults: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::new::execute(cli.year, cli.day, cli.language, cli.name, cli.defaults)?;

    Ok(())
}
