//! Output file templates as pure string functions.
//!
//! Each generated artifact is a function from session parameters to its
//! full text, with no filesystem involvement, so template output is
//! testable without real I/O.

use crate::paths;

/// Bazel BUILD manifest for one puzzle day.
///
/// The target bundles the day's `input.txt` as a Java resource and depends
/// on the shared `aoccommon` helpers that `input()` in the skeleton uses.
pub fn build_manifest(class_name: &str) -> String {
    format!(
        r#"java_binary(
    name = "{class_name}",
    srcs = ["{class_name}.java"],
    resources = ["input.txt"],
    deps = ["//src/main/java/aoccommon"],
)
"#
    )
}

/// Java source skeleton for one puzzle day.
pub fn source_skeleton(class_name: &str, year: i32, day: u32) -> String {
    let package = paths::package_name(year, day);
    let input = paths::input_resource(year, day);
    let url = paths::puzzle_url(year, day);

    format!(
        r#"package {package};

import aoccommon.InputHelper;

import java.io.BufferedReader;
import java.io.IOException;

/**
 * Solution for {{@link {url}}}.
 */
public class {class_name} {{

  private static final String INPUT = "{input}";
  // private static final String EXAMPLE = "{package_path}/example.txt";

  private static BufferedReader input() throws IOException {{
    return InputHelper.newBufferedResourceReader(INPUT);
  }}

  public static void main(String[] args) throws Exception {{
  }}
}}
"#,
        package_path = paths::package_path(year, day),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_manifest_names_target_and_source() {
        let build = build_manifest("SeedFertilizer");
        assert!(build.contains("name = \"SeedFertilizer\""));
        assert!(build.contains("srcs = [\"SeedFertilizer.java\"]"));
        assert!(build.contains("resources = [\"input.txt\"]"));
        assert!(build.contains("deps = [\"//src/main/java/aoccommon\"]"));
    }

    #[test]
    fn test_skeleton_package_matches_directory_segment() {
        let src = source_skeleton("Day05", 2023, 5);
        assert!(src.starts_with("package aoc2023.day05;\n"));
        assert!(src.contains("private static final String INPUT = \"aoc2023/day05/input.txt\";"));
    }

    #[test]
    fn test_skeleton_links_puzzle_page_without_padding() {
        let src = source_skeleton("Day05", 2023, 5);
        assert!(src.contains("{@link https://adventofcode.com/2023/day/5}"));
    }

    #[test]
    fn test_skeleton_declares_class_and_entry_point() {
        let src = source_skeleton("CamelCards", 2023, 7);
        assert!(src.contains("public class CamelCards {"));
        assert!(src.contains("public static void main(String[] args)"));
        assert!(src.contains("InputHelper.newBufferedResourceReader(INPUT)"));
    }

    #[test]
    fn test_skeleton_day_is_zero_padded_in_package() {
        let src = source_skeleton("Day01", 2024, 1);
        assert!(src.contains("package aoc2024.day01;"));
        // The braces in the template are escaped format braces; make sure
        // the rendered Java is balanced.
        assert_eq!(src.matches('{').count(), src.matches('}').count());
    }
}
