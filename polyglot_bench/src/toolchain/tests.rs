//!
//! The toolchain flag overrides tests.
//!

use std::path::Path;

use super::ToolchainConfig;

#[test]
fn ok_basic() {
    let config = ToolchainConfig::parse("cpp: -O3 -march=native\njulia: -O3\n");
    assert_eq!(
        config.flags_for("cpp"),
        Some(["-O3".to_owned(), "-march=native".to_owned()].as_slice())
    );
    assert_eq!(config.flags_for("julia"), Some(["-O3".to_owned()].as_slice()));
    assert_eq!(config.flags_for("python"), None);
}

#[test]
fn ok_case_insensitive() {
    let config = ToolchainConfig::parse("CPP: -O1\n");
    assert_eq!(config.flags_for("cpp"), Some(["-O1".to_owned()].as_slice()));
    assert_eq!(config.flags_for("Cpp"), Some(["-O1".to_owned()].as_slice()));
}

#[test]
fn ok_comments_and_blank_lines_ignored() {
    let config = ToolchainConfig::parse("# build overrides\n\ncpp: -O0\n  # done\n");
    assert_eq!(config.flags_for("cpp"), Some(["-O0".to_owned()].as_slice()));
    assert_eq!(config.languages().count(), 1);
}

#[test]
fn ok_line_without_separator_skipped() {
    let config = ToolchainConfig::parse("not a mapping\ncpp: -O2\n");
    assert_eq!(config.languages().count(), 1);
}

#[test]
fn ok_empty_flag_list() {
    let config = ToolchainConfig::parse("python:\n");
    assert_eq!(config.flags_for("python"), Some([].as_slice()));
}

#[test]
fn ok_only_first_separator_splits() {
    let config = ToolchainConfig::parse("cpp: -DVERSION=1:2\n");
    assert_eq!(
        config.flags_for("cpp"),
        Some(["-DVERSION=1:2".to_owned()].as_slice())
    );
}

#[test]
fn ok_repeated_language_last_wins() {
    let config = ToolchainConfig::parse("cpp: -O1\ncpp: -O3\n");
    assert_eq!(config.flags_for("cpp"), Some(["-O3".to_owned()].as_slice()));
}

#[test]
fn ok_empty_text() {
    let config = ToolchainConfig::parse("");
    assert!(config.is_empty());
}

#[test]
fn error_missing_file() {
    let error = ToolchainConfig::load(Path::new("definitely/not/there.config"))
        .expect_err("Must be rejected");
    assert!(error.to_string().contains("Reading toolchain config file"));
}
