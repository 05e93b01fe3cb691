//! Filesystem layout for generated puzzle scaffolding.
//!
//! This module defines WHERE generated files live and how names derive from
//! year and day. It has no I/O and no business logic.
//!
//! ```text
//! {workspace_root}/
//! └── src/main/java/
//!     └── aoc{year}/day{day:02}/     # package path
//!         ├── BUILD
//!         ├── {ClassName}.java
//!         └── input.txt
//! ```

use std::path::{Path, PathBuf};

/// Fixed prefix for the recognized language's source tree
const JAVA_SOURCE_ROOT: &str = "src/main/java";

/// Package path segment: `aoc{year}/day{day:02}`
pub fn package_path(year: i32, day: u32) -> String {
    format!("aoc{}/day{:02}", year, day)
}

/// Java package name: `aoc{year}.day{day:02}`
pub fn package_name(year: i32, day: u32) -> String {
    format!("aoc{}.day{:02}", year, day)
}

/// Day directory: `{workspace}/src/main/java/aoc{year}/day{day:02}`
pub fn day_dir(workspace_root: &Path, year: i32, day: u32) -> PathBuf {
    workspace_root
        .join(JAVA_SOURCE_ROOT)
        .join(package_path(year, day))
}

/// Default class name for a day: `Day{day:02}`
pub fn default_class_name(day: u32) -> String {
    format!("Day{:02}", day)
}

/// Resource path of the day's puzzle input, relative to the source root
pub fn input_resource(year: i32, day: u32) -> String {
    format!("{}/input.txt", package_path(year, day))
}

/// Puzzle page for a day. Note: the day in the URL is not zero-padded.
pub fn puzzle_url(year: i32, day: u32) -> String {
    format!("https://adventofcode.com/{}/day/{}", year, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_path_zero_pads_day() {
        assert_eq!(package_path(2023, 3), "aoc2023/day03");
        assert_eq!(package_path(2023, 25), "aoc2023/day25");
    }

    #[test]
    fn test_package_name_matches_path_segments() {
        assert_eq!(package_name(2021, 9), "aoc2021.day09");
    }

    #[test]
    fn test_day_dir() {
        let dir = day_dir(Path::new("/ws"), 2023, 5);
        assert_eq!(dir, PathBuf::from("/ws/src/main/java/aoc2023/day05"));
    }

    #[test]
    fn test_default_class_name_zero_pads() {
        assert_eq!(default_class_name(3), "Day03");
        assert_eq!(default_class_name(17), "Day17");
    }

    #[test]
    fn test_input_resource() {
        assert_eq!(input_resource(2022, 1), "aoc2022/day01/input.txt");
    }

    #[test]
    fn test_puzzle_url_day_not_padded() {
        assert_eq!(puzzle_url(2023, 5), "https://adventofcode.com/2023/day/5");
    }
}
