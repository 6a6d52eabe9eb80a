//!
//! The per-language toolchain flag overrides.
//!

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::path::Path;

///
/// Per-language flag overrides parsed from a toolchain configuration file.
///
/// The file format is one `language: flags...` line per language; `#` comments
/// and blank lines are ignored, and lines without a `:` separator are skipped.
/// Only the first `:` splits, so flags themselves may contain colons. Language
/// names are matched case-insensitively; a repeated language keeps the last
/// line's flags.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// The flag lists keyed by lowercase language name.
    flags: BTreeMap<String, Vec<String>>,
}

impl ToolchainConfig {
    ///
    /// Reads the overrides from a toolchain configuration file.
    ///
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Reading toolchain config file {path:?}: {error}"))?;
        Ok(Self::parse(text.as_str()))
    }

    ///
    /// Parses the overrides from toolchain configuration text.
    ///
    pub fn parse(text: &str) -> Self {
        let mut flags = BTreeMap::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((language, values)) = trimmed.split_once(':') else {
                continue;
            };
            let language = language.trim().to_lowercase();
            if language.is_empty() {
                continue;
            }
            flags.insert(
                language,
                values
                    .split_whitespace()
                    .map(|flag| flag.to_owned())
                    .collect(),
            );
        }
        Self { flags }
    }

    ///
    /// The override flags for a language, if any were configured.
    ///
    pub fn flags_for(&self, language: &str) -> Option<&[String]> {
        self.flags
            .get(language.to_lowercase().as_str())
            .map(|flags| flags.as_slice())
    }

    ///
    /// The configured language names, for reporting unknown keys.
    ///
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(|language| language.as_str())
    }

    ///
    /// Whether no overrides were configured.
    ///
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
