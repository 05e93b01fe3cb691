use anyhow::{Context, Result};
use chrono::{FixedOffset, NaiveDate, Utc};
use std::path::PathBuf;

/// Environment variable naming the workspace root. Bazel exports this for
/// `bazel run` targets, so the tool writes into the source tree rather than
/// the execroot sandbox.
pub const WORKSPACE_ENV_VAR: &str = "BUILD_WORKING_DIRECTORY";

/// Puzzles unlock at midnight US Eastern Standard Time.
const RELEASE_OFFSET_HOURS: i32 = -5;

/// Configuration for one scaffolding run
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace root under which all files are generated
    pub workspace_root: PathBuf,
    /// Current date, used for prompt defaults
    pub today: NaiveDate,
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        let workspace_root = std::env::var(WORKSPACE_ENV_VAR)
            .with_context(|| format!("{} is not set (run via bazel run)", WORKSPACE_ENV_VAR))?;

        Ok(Self::new(workspace_root, release_today()))
    }

    pub fn new(workspace_root: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            today,
        }
    }
}

/// Current date in the puzzle release timezone (UTC-5)
pub fn release_today() -> NaiveDate {
    let offset = FixedOffset::east_opt(RELEASE_OFFSET_HOURS * 3600)
        .expect("static UTC-5 offset is in range");
    Utc::now().with_timezone(&offset).date_naive()
}
