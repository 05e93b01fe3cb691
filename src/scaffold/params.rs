//! Session parameters and the prompt sequence that resolves them.

use anyhow::Result;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Config;
use crate::paths;
use crate::prompt::Prompter;

/// Target language for the generated skeleton.
///
/// Only Java is recognized; anything else is carried along verbatim so the
/// diagnostic can echo what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    Java,
    Other(String),
}

impl Language {
    pub const DEFAULT: &'static str = "java";
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "java" => Ok(Language::Java),
            other => Ok(Language::Other(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Java => write!(f, "java"),
            Language::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Everything one run needs, fully resolved
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub year: i32,
    pub day: u32,
    pub language: Language,
    pub class_name: String,
}

/// Answers supplied up front (CLI flags); present values skip their prompt
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub year: Option<i32>,
    pub day: Option<u32>,
    pub language: Option<String>,
    pub class_name: Option<String>,
    /// Accept every default without prompting
    pub accept_defaults: bool,
}

impl SessionParams {
    /// Run the fixed prompt sequence: Year, Day, Language, then (for Java
    /// only) Filename. Overridden answers skip their prompt; with
    /// `accept_defaults` nothing is asked at all.
    pub fn resolve<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        config: &Config,
        overrides: &Overrides,
    ) -> Result<Self> {
        use chrono::Datelike;

        let year = match overrides.year {
            Some(year) => year,
            None if overrides.accept_defaults => config.today.year(),
            None => prompter.ask_parsed("Year", config.today.year())?,
        };

        let day = match overrides.day {
            Some(day) => day,
            None if overrides.accept_defaults => config.today.day(),
            None => prompter.ask_parsed("Day", config.today.day())?,
        };

        let language: Language = match &overrides.language {
            Some(language) => language.parse()?,
            None if overrides.accept_defaults => Language::Java,
            None => prompter.ask("Language", Language::DEFAULT)?.parse()?,
        };

        // Only the recognized language has a file to name.
        let default_name = paths::default_class_name(day);
        let class_name = match &overrides.class_name {
            Some(name) => name.clone(),
            None if overrides.accept_defaults || language != Language::Java => default_name,
            None => prompter.ask("Filename", &default_name)?,
        };

        Ok(Self {
            year,
            day,
            language,
            class_name,
        })
    }
}
