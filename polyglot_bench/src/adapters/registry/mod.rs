//!
//! The language adapter registry.
//!

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::adapters::cpp::CppAdapter;
use crate::adapters::julia::JuliaAdapter;
use crate::adapters::python::PythonAdapter;
use crate::adapters::Adapter;
use crate::toolchain::ToolchainConfig;

///
/// The language adapter registry.
///
/// Maps language names and source file extensions to adapters. Lookups are
/// case-insensitive. Registering an adapter under an already-taken name or
/// extension shadows the earlier entry.
///
#[derive(Default)]
pub struct Registry {
    /// The adapters keyed by lowercase language name.
    names: BTreeMap<String, Arc<dyn Adapter>>,
    /// The adapters keyed by lowercase dotted extension.
    extensions: BTreeMap<String, Arc<dyn Adapter>>,
}

impl Registry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// A registry pre-populated with the built-in adapters.
    ///
    /// Flag overrides come from the toolchain configuration; languages it
    /// does not mention keep their defaults.
    ///
    pub fn with_builtin_adapters(toolchain: &ToolchainConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PythonAdapter::new(
            toolchain
                .flags_for("python")
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        )));
        registry.register(Arc::new(CppAdapter::new(
            toolchain.flags_for("cpp").map(<[String]>::to_vec),
        )));
        registry.register(Arc::new(JuliaAdapter::new(
            toolchain
                .flags_for("julia")
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        )));
        registry
    }

    ///
    /// Registers an adapter under its name and every extension it claims.
    ///
    /// Returns whether any existing entry was shadowed.
    ///
    pub fn register(&mut self, adapter: Arc<dyn Adapter>) -> bool {
        let mut shadowed = self
            .names
            .insert(adapter.name().to_lowercase(), adapter.clone())
            .is_some();
        for extension in adapter.extensions() {
            shadowed |= self
                .extensions
                .insert(Self::normalize_extension(extension), adapter.clone())
                .is_some();
        }
        shadowed
    }

    ///
    /// Resolves an adapter by language name, case-insensitively.
    ///
    pub fn by_name(&self, name: &str) -> Option<Arc<dyn Adapter>> {
        self.names.get(name.to_lowercase().as_str()).cloned()
    }

    ///
    /// Resolves an adapter by source file extension, case-insensitively.
    ///
    /// A path without an extension resolves to nothing.
    ///
    pub fn by_file(&self, path: &Path) -> Option<Arc<dyn Adapter>> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        self.extensions.get(format!(".{extension}").as_str()).cloned()
    }

    ///
    /// Resolves a language name from a source file extension.
    ///
    pub fn detect_language(&self, path: &Path) -> Option<String> {
        self.by_file(path).map(|adapter| adapter.name().to_owned())
    }

    ///
    /// The registered language names in sorted order.
    ///
    pub fn supported_languages(&self) -> Vec<String> {
        self.names.keys().cloned().collect()
    }

    ///
    /// The registered extensions in sorted order.
    ///
    pub fn supported_extensions(&self) -> Vec<String> {
        self.extensions.keys().cloned().collect()
    }

    ///
    /// Lowercases an extension and ensures the leading dot.
    ///
    fn normalize_extension(extension: &str) -> String {
        let lowercase = extension.to_lowercase();
        if lowercase.starts_with('.') {
            lowercase
        } else {
            format!(".{lowercase}")
        }
    }
}
