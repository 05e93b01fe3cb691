pub mod config;
pub mod paths;
pub mod prompt;
pub mod scaffold;
pub mod templates;

// Re-export commonly used types
pub use config::Config;
pub use prompt::Prompter;
pub use scaffold::{Generator, Language, Overrides, SessionParams};
