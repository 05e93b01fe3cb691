//! Scaffold Generator - turns a few prompted parameters into a directory of
//! boilerplate files for one puzzle day.
//!
//! The flow is strictly linear: resolve parameters, branch on language,
//! create the directory, write BUILD, the source skeleton, and the empty
//! `input.txt` placeholder. All user-visible output goes through the
//! injected writer so the whole flow is testable without real stdin.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

mod generator;
mod params;

pub use generator::Generator;
pub use params::{Language, Overrides, SessionParams};

use crate::config::Config;
use crate::paths;
use crate::prompt::Prompter;

/// What a successful run produced
#[derive(Debug)]
pub struct Outcome {
    pub directory: PathBuf,
    pub params: SessionParams,
}

/// Run the full scaffold flow against an explicit config and I/O pair.
///
/// An unrecognized language prints a diagnostic naming it and fails the run
/// before anything is written. The original tool fell over on this path by
/// accident; here it is a deliberate hard error.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
    overrides: &Overrides,
) -> Result<Outcome> {
    let mut prompter = Prompter::new(input, output);
    let params = SessionParams::resolve(&mut prompter, config, overrides)?;

    if let Language::Other(name) = &params.language {
        prompter.say(&format!("⚠️  Unrecognized language: {}", name))?;
        anyhow::bail!("unsupported language: {}", name);
    }

    prompter.say(&format!(
        "🎄 Scaffolding {} ...",
        paths::package_path(params.year, params.day)
    ))?;

    let generator = Generator::new(&config.workspace_root);
    let directory = generator.generate(&params)?;

    prompter.say(&format!("  ✓ Created {}", directory.display()))?;
    prompter.say("  ✓ Wrote BUILD")?;
    prompter.say(&format!("  ✓ Wrote {}.java", params.class_name))?;
    prompter.say("  ✓ Wrote input.txt")?;

    Ok(Outcome { directory, params })
}
