//! Generator - writes the per-day boilerplate files

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::params::SessionParams;
use crate::paths;
use crate::templates;

pub struct Generator {
    workspace_root: PathBuf,
}

impl Generator {
    pub fn new(workspace_root: impl AsRef<Path>) -> Self {
        Self {
            workspace_root: workspace_root.as_ref().to_path_buf(),
        }
    }

    /// Create the day directory and write all artifacts into it.
    ///
    /// Existing files at the same paths are overwritten; directory creation
    /// is idempotent. Returns the day directory.
    pub fn generate(&self, params: &SessionParams) -> Result<PathBuf> {
        let directory = paths::day_dir(&self.workspace_root, params.year, params.day);
        fs::create_dir_all(&directory)
            .with_context(|| format!("failed to create {}", directory.display()))?;

        let build = directory.join("BUILD");
        fs::write(&build, templates::build_manifest(&params.class_name))
            .with_context(|| format!("failed to write {}", build.display()))?;

        let source = directory.join(format!("{}.java", params.class_name));
        fs::write(
            &source,
            templates::source_skeleton(&params.class_name, params.year, params.day),
        )
        .with_context(|| format!("failed to write {}", source.display()))?;

        let input = directory.join("input.txt");
        fs::write(&input, "").with_context(|| format!("failed to write {}", input.display()))?;

        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::Language;
    use tempfile::TempDir;

    fn params() -> SessionParams {
        SessionParams {
            year: 2023,
            day: 5,
            language: Language::Java,
            class_name: "Day05".to_string(),
        }
    }

    #[test]
    fn test_generate_creates_directory_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let generator = Generator::new(temp_dir.path());

        let dir = generator.generate(&params()).unwrap();

        assert_eq!(dir, temp_dir.path().join("src/main/java/aoc2023/day05"));
        assert!(dir.join("BUILD").exists());
        assert!(dir.join("Day05.java").exists());
        assert!(dir.join("input.txt").exists());
    }

    #[test]
    fn test_input_placeholder_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Generator::new(temp_dir.path()).generate(&params()).unwrap();

        let input = fs::read_to_string(dir.join("input.txt")).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn test_generated_contents_match_templates() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Generator::new(temp_dir.path()).generate(&params()).unwrap();

        let build = fs::read_to_string(dir.join("BUILD")).unwrap();
        assert_eq!(build, templates::build_manifest("Day05"));

        let source = fs::read_to_string(dir.join("Day05.java")).unwrap();
        assert_eq!(source, templates::source_skeleton("Day05", 2023, 5));
    }

    #[test]
    fn test_rerun_overwrites_without_error() {
        let temp_dir = TempDir::new().unwrap();
        let generator = Generator::new(temp_dir.path());

        let dir = generator.generate(&params()).unwrap();
        fs::write(dir.join("Day05.java"), "// hand-edited").unwrap();

        // Second run regenerates from templates, no merge.
        generator.generate(&params()).unwrap();
        let source = fs::read_to_string(dir.join("Day05.java")).unwrap();
        assert!(!source.contains("hand-edited"));
        assert!(source.contains("public class Day05"));
    }

    #[test]
    fn test_custom_class_name_names_the_source_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut custom = params();
        custom.class_name = "SeedFertilizer".to_string();

        let dir = Generator::new(temp_dir.path()).generate(&custom).unwrap();
        assert!(dir.join("SeedFertilizer.java").exists());
        assert!(!dir.join("Day05.java").exists());
    }
}
