//! Integration tests for the configuration system.
//!
//! These tests cover discovery, layering of files, environment variables and
//! programmatic overrides, and feeding the merged result into a run.
//!
//! Tests that modify environment variables are marked with `#[serial]` since
//! the environment is process-global.

mod common;

use common::SourceTree;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use incpath::config::{Config, ConfigBuilder, CONFIG_FILE_NAME, LOCAL_CONFIG_FILE_NAME};
use incpath::error::Error;
use incpath::{resolve, OutputFormat};

const ENV_VARS: [&str; 5] = [
    "INCPATH_PARSE_FOLDERS",
    "INCPATH_INCLUDE_FOLDERS",
    "INCPATH_RESOLVE_FOLDERS",
    "INCPATH_OUTPUT_FORMAT",
    "INCPATH_FAIL_ON_ISSUES",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
#[serial]
fn test_discovery_from_subdirectory() {
    clear_env();
    let temp = TempDir::new().unwrap();
    create_temp_config(temp.path(), CONFIG_FILE_NAME, "parse_folders: [src]\n");
    let nested = temp.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    let config = ConfigBuilder::new().with_working_dir(&nested).build().unwrap();

    assert_eq!(config.parse_folders, Some(vec![temp.path().join("src")]));
}

#[test]
#[serial]
fn test_local_file_adds_to_project_file() {
    clear_env();
    let temp = TempDir::new().unwrap();
    create_temp_config(
        temp.path(),
        CONFIG_FILE_NAME,
        "parse_folders: [src]\nresolve_folders: [vendor]\noutput_format: human\n",
    );
    create_temp_config(
        temp.path(),
        LOCAL_CONFIG_FILE_NAME,
        "resolve_folders: [/opt/sdk]\noutput_format: flags\nfail_on_issues: true\n",
    );

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .build()
        .unwrap();

    assert_eq!(
        config.resolve_folders,
        Some(vec![temp.path().join("vendor"), PathBuf::from("/opt/sdk")])
    );
    assert_eq!(config.output_format, Some(OutputFormat::Flags));
    assert_eq!(config.fail_on_issues, Some(true));
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let path = create_temp_config(temp.path(), CONFIG_FILE_NAME, "parse_folders: [src\n");

    let result = ConfigBuilder::new().with_config_file(&path).skip_env().build();
    match result {
        Err(Error::Configuration { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_unknown_field_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = create_temp_config(
        temp.path(),
        CONFIG_FILE_NAME,
        "parse_folders: [src]\nsearch_folders: [x]\n",
    );

    let result = ConfigBuilder::new().with_config_file(&path).skip_env().build();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

// ============================================================================
// Environment and overrides
// ============================================================================

#[test]
#[serial]
fn test_env_sits_between_files_and_overrides() {
    clear_env();
    let temp = TempDir::new().unwrap();
    create_temp_config(
        temp.path(),
        CONFIG_FILE_NAME,
        "parse_folders: [src]\noutput_format: human\nfail_on_issues: false\n",
    );
    env::set_var("INCPATH_OUTPUT_FORMAT", "json");
    env::set_var("INCPATH_FAIL_ON_ISSUES", "1");
    env::set_var(
        "INCPATH_INCLUDE_FOLDERS",
        env::join_paths(["/env/include"]).unwrap(),
    );

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_config(Config {
            output_format: Some(OutputFormat::Flags),
            include_folders: Some(vec![PathBuf::from("/cli/include")]),
            ..Default::default()
        })
        .build();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.output_format, Some(OutputFormat::Flags));
    assert_eq!(config.fail_on_issues, Some(true));
    assert_eq!(
        config.include_folders,
        Some(vec![
            PathBuf::from("/env/include"),
            PathBuf::from("/cli/include")
        ])
    );
}

#[test]
#[serial]
fn test_env_alone_can_supply_parse_folders() {
    clear_env();
    env::set_var("INCPATH_PARSE_FOLDERS", env::join_paths(["/a", "/b"]).unwrap());

    let result = ConfigBuilder::new().skip_files().build();
    clear_env();

    assert_eq!(
        result.unwrap().parse_folders,
        Some(vec![PathBuf::from("/a"), PathBuf::from("/b")])
    );
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    clear_env();
    env::set_var("INCPATH_OUTPUT_FORMAT", "not-a-format");

    let result = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            parse_folders: Some(vec![PathBuf::from("src")]),
            ..Default::default()
        })
        .build();
    clear_env();

    assert!(result.is_ok());
}

// ============================================================================
// End to end
// ============================================================================

#[test]
#[serial]
fn test_config_file_drives_resolution() {
    clear_env();
    let tree = SourceTree::new()
        .file("src/main.cpp", &["#include <fmt/core.h>", "#include \"api.h\""])
        .file("vendor/fmt/include/fmt/core.h", &[])
        .file("include/api.h", &[]);
    create_temp_config(
        tree.root(),
        CONFIG_FILE_NAME,
        "parse_folders: [src]\ninclude_folders: [include]\nresolve_folders: [vendor]\n",
    );

    let config = ConfigBuilder::new()
        .with_working_dir(tree.root())
        .build()
        .unwrap();
    let result = resolve(&config.to_settings()).unwrap();

    assert!(result.is_clean());
    assert_eq!(
        result.search_folders.iter().collect::<Vec<_>>(),
        vec![
            &tree.canonical("include"),
            &tree.canonical("vendor/fmt/include")
        ]
    );
}

#[test]
#[serial]
fn test_missing_folder_from_file_is_reported_relative_to_file() {
    clear_env();
    let tree = SourceTree::new().file("src/main.cpp", &[]);
    create_temp_config(
        tree.root(),
        CONFIG_FILE_NAME,
        "parse_folders: [src]\nresolve_folders: [third_party]\n",
    );

    let config = ConfigBuilder::new()
        .with_working_dir(tree.root())
        .with_config(Config {
            include_folders: Some(vec![PathBuf::from("typed/by/hand")]),
            ..Config::default()
        })
        .build()
        .unwrap();
    let result = resolve(&config.to_settings()).unwrap();

    let invalid: Vec<_> = result.invalid_paths.iter().cloned().collect();
    let mut expected = vec![PathBuf::from("typed/by/hand"), tree.root().join("third_party")];
    expected.sort();
    assert_eq!(invalid, expected);
}
