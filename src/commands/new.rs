use anyhow::Result;
use std::io;

use aoc_scaffold::scaffold::{self, Overrides};
use aoc_scaffold::{paths, Config};

pub fn execute(
    year: Option<i32>,
    day: Option<u32>,
    language: Option<String>,
    name: Option<String>,
    defaults: bool,
) -> Result<()> {
    let config = Config::load()?;

    let overrides = Overrides {
        year,
        day,
        language,
        class_name: name,
        accept_defaults: defaults,
    };

    let outcome = scaffold::run(&config, io::stdin().lock(), io::stdout(), &overrides)?;

    let package = paths::package_path(outcome.params.year, outcome.params.day);
    println!(
        "\n✨ Day {} ready: {}",
        outcome.params.day,
        outcome.directory.display()
    );
    println!("\nNext steps:");
    println!("  1. Paste your puzzle input into {}/input.txt", package);
    println!("  2. bazel run //src/main/java/{}:{}", package, outcome.params.class_name);

    Ok(())
}
