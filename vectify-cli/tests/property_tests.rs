//! Property-based tests for vectify-cli.
//!
//! Properties tested:
//! - File discovery completeness and ordering
//! - Component names are identifiers wrapped in prefix and suffix
//! - Config override precedence
//! - Dry run safety
//! - Statistics account for every input file

use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use vectify_cli::{
    config::{CliArgs, Config, ConfigManager},
    generator::IconGenerator,
    naming::{NamingOptions, component_name, is_valid_component_name, to_pascal_case},
    scanner::SvgScanner,
    writer::FileWriter,
};

const SVG: &str = r##"<svg viewBox="0 0 24 24"><path stroke="#000" d="M3 12h18"/></svg>"##;

// =============================================================================
// Generators for property tests
// =============================================================================

/// Icon file stems as they appear in icon packs.
fn arb_stem() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}([-_][a-z0-9]{1,6}){0,3}"
}

// =============================================================================
// Scanner
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_discovery_completeness(stems in prop::collection::btree_set(arb_stem(), 1..8)) {
        let dir = TempDir::new().unwrap();
        for stem in &stems {
            fs::write(dir.path().join(format!("{stem}.svg")), SVG).unwrap();
        }
        fs::write(dir.path().join("README.md"), "# Icons").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/skip.svg"), SVG).unwrap();

        let files = SvgScanner::new(dir.path()).scan().unwrap();
        let found: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();

        let mut expected: Vec<String> = stems.iter().map(|s| format!("{s}.svg")).collect();
        expected.sort();
        prop_assert_eq!(found, expected);
    }
}

// =============================================================================
// Naming
// =============================================================================

proptest! {
    #[test]
    fn prop_pascal_case_is_identifier(stem in arb_stem()) {
        let name = to_pascal_case(&stem);

        prop_assert!(is_valid_component_name(&name), "{}", name);
        prop_assert!(name.starts_with(|c: char| c.is_ascii_uppercase()));
        prop_assert!(!name.contains(['-', '_']));
    }

    #[test]
    fn prop_affixes_wrap_name(
        stem in arb_stem(),
        prefix in "([A-Z][a-z]{0,4})?",
        suffix in "([A-Z][a-z]{0,4})?",
    ) {
        let options = NamingOptions::new(prefix.clone(), suffix.clone());
        let name = component_name(&format!("{stem}.svg"), &options);

        prop_assert_eq!(name, format!("{}{}{}", prefix, to_pascal_case(&stem), suffix));
    }
}

// =============================================================================
// Config
// =============================================================================

proptest! {
    #[test]
    fn prop_config_override_precedence(
        file_output in "[a-z]{3,8}",
        cli_output in "[a-z]{3,8}",
        framework in prop::sample::select(vec!["react", "vue", "svelte", "lit"]),
        keep_colors in any::<bool>(),
    ) {
        let file_config = Config {
            output: PathBuf::from(&file_output),
            ..Default::default()
        };

        let args = CliArgs {
            output: Some(PathBuf::from(&cli_output)),
            framework: Some(framework.to_string()),
            keep_colors: Some(keep_colors),
            ..Default::default()
        };

        let merged = ConfigManager::merge_cli_args(file_config, &args);

        prop_assert_eq!(merged.output, PathBuf::from(&cli_output));
        prop_assert_eq!(merged.framework, framework);
        prop_assert_eq!(merged.keep_colors, keep_colors);
        prop_assert_eq!(merged.input, Config::default().input);
    }
}

// =============================================================================
// Generator
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_dry_run_safety(
        stems in prop::collection::btree_set(arb_stem(), 1..5),
        framework in prop::sample::select(vec!["react", "vue", "svelte", "angular", "vanilla"]),
    ) {
        let src = TempDir::new().unwrap();
        for stem in &stems {
            fs::write(src.path().join(format!("{stem}.svg")), SVG).unwrap();
        }
        let out = TempDir::new().unwrap();

        let config = Config {
            framework: framework.to_string(),
            output: out.path().to_path_buf(),
            ..Default::default()
        };
        let files = SvgScanner::new(src.path()).scan().unwrap();
        let report = IconGenerator::new(config, FileWriter::new(true)).generate(&files).unwrap();

        prop_assert!(report.outputs.iter().all(|o| !o.was_written()));
        prop_assert!(fs::read_dir(out.path()).unwrap().next().is_none());
    }

    #[test]
    fn prop_stats_account_for_every_file(valid in 0usize..4, broken in 0usize..4) {
        prop_assume!(valid + broken > 0);

        let src = TempDir::new().unwrap();
        for i in 0..valid {
            fs::write(src.path().join(format!("good{i}.svg")), SVG).unwrap();
        }
        for i in 0..broken {
            fs::write(src.path().join(format!("bad{i}.svg")), "<div/>").unwrap();
        }

        let files = SvgScanner::new(src.path()).scan().unwrap();
        let report = IconGenerator::new(Config::default(), FileWriter::new(true))
            .generate(&files)
            .unwrap();

        prop_assert_eq!(report.stats.success, valid);
        prop_assert_eq!(report.stats.failed, broken);
        prop_assert_eq!(report.stats.total, valid + broken);
        prop_assert_eq!(report.stats.errors.len(), broken);
    }
}
