//!
//! The language adapter registry tests.
//!

use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use super::Registry;
use crate::adapters::Adapter;
use crate::adapters::Preparation;
use crate::toolchain::ToolchainConfig;

#[derive(Debug)]
struct FakeAdapter {
    name: &'static str,
    title: &'static str,
    extensions: &'static [&'static str],
}

impl Adapter for FakeAdapter {
    fn name(&self) -> &str {
        self.name
    }

    fn title(&self) -> &str {
        self.title
    }

    fn extensions(&self) -> &[&str] {
        self.extensions
    }

    fn requires_compilation(&self) -> bool {
        false
    }

    fn prepare(&self, source_file: &Path) -> anyhow::Result<Preparation> {
        Ok(Preparation::interpreted(source_file))
    }

    fn execution_command(&self, artifact: &Path) -> Command {
        let mut command = Command::new("true");
        command.arg(artifact);
        command
    }

    fn cleanup(&self, _artifact: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}

fn fortran_adapter(title: &'static str) -> Arc<dyn Adapter> {
    Arc::new(FakeAdapter {
        name: "fortran",
        title,
        extensions: &[".f90", "f95"],
    })
}

#[test]
fn ok_resolve_by_name_is_case_insensitive() {
    let mut registry = Registry::new();
    registry.register(fortran_adapter("Fortran"));

    let adapter = registry.by_name("FoRtRan").expect("Always exists");
    assert_eq!(adapter.name(), "fortran");
}

#[test]
fn ok_resolve_by_file_is_case_insensitive() {
    let mut registry = Registry::new();
    registry.register(fortran_adapter("Fortran"));

    let adapter = registry
        .by_file(Path::new("SOLVER.F90"))
        .expect("Always exists");
    assert_eq!(adapter.name(), "fortran");
}

#[test]
fn ok_extension_without_leading_dot_is_normalized() {
    let mut registry = Registry::new();
    registry.register(fortran_adapter("Fortran"));

    let adapter = registry
        .by_file(Path::new("solver.f95"))
        .expect("Always exists");
    assert_eq!(adapter.name(), "fortran");
}

#[test]
fn ok_register_fresh_name_returns_false() {
    let mut registry = Registry::new();

    assert!(!registry.register(fortran_adapter("Fortran")));
}

#[test]
fn ok_last_registration_wins() {
    let mut registry = Registry::new();
    registry.register(fortran_adapter("Fortran (old)"));

    let shadowed = registry.register(fortran_adapter("Fortran (new)"));

    assert!(shadowed);
    let adapter = registry.by_name("fortran").expect("Always exists");
    assert_eq!(adapter.title(), "Fortran (new)");
    let adapter = registry
        .by_file(Path::new("solver.f90"))
        .expect("Always exists");
    assert_eq!(adapter.title(), "Fortran (new)");
}

#[test]
fn ok_file_without_extension_resolves_to_none() {
    let mut registry = Registry::new();
    registry.register(fortran_adapter("Fortran"));

    assert!(registry.by_file(Path::new("Makefile")).is_none());
}

#[test]
fn ok_detect_language() {
    let mut registry = Registry::new();
    registry.register(fortran_adapter("Fortran"));

    assert_eq!(
        registry.detect_language(Path::new("solver.f90")),
        Some("fortran".to_owned())
    );
    assert_eq!(registry.detect_language(Path::new("solver.zz")), None);
}

#[test]
fn ok_unknown_name_resolves_to_none() {
    let registry = Registry::with_builtin_adapters(&ToolchainConfig::default());

    assert!(registry.by_name("cobol").is_none());
}

#[test]
fn ok_builtin_languages() {
    let registry = Registry::with_builtin_adapters(&ToolchainConfig::default());

    assert_eq!(
        registry.supported_languages(),
        vec!["cpp".to_owned(), "julia".to_owned(), "python".to_owned()]
    );
}

#[test]
fn ok_builtin_extensions() {
    let registry = Registry::with_builtin_adapters(&ToolchainConfig::default());

    assert_eq!(
        registry.supported_extensions(),
        vec![
            ".c++".to_owned(),
            ".cc".to_owned(),
            ".cpp".to_owned(),
            ".cxx".to_owned(),
            ".jl".to_owned(),
            ".py".to_owned()
        ]
    );
}

#[test]
fn ok_builtin_resolves_cpp_variants() {
    let registry = Registry::with_builtin_adapters(&ToolchainConfig::default());

    for file_name in ["solver.cpp", "solver.cc", "solver.cxx", "solver.c++"] {
        let adapter = registry
            .by_file(Path::new(file_name))
            .expect("Always exists");
        assert_eq!(adapter.name(), "cpp");
    }
}
