//!
//! The benchmark configuration reader.
//!


use std::path::Path;

///
/// One trial's parameter block, isolated by blank-line separation in the
/// configuration file.
///
/// The text is opaque to the harness: it is written verbatim to the input
/// files the candidate programs read, and kept in the report for traceability.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBlock {
    /// The block text, without a trailing newline.
    pub text: String,
}

impl ConfigBlock {
    /// The number of characters shown when previewing a block in progress output.
    pub const PREVIEW_LENGTH: usize = 100;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(text: String) -> Self {
        Self { text }
    }

    ///
    /// The first characters of the block for progress reporting.
    ///
    pub fn preview(&self) -> String {
        match self
            .text
            .char_indices()
            .nth(Self::PREVIEW_LENGTH)
            .map(|(offset, _)| offset)
        {
            Some(offset) => format!("{}...", &self.text[..offset]),
            None => self.text.clone(),
        }
    }
}

///
/// Reads the configuration file and splits it into blocks.
///
pub fn read_config_blocks(path: &Path) -> anyhow::Result<Vec<ConfigBlock>> {
    let text = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Reading config file {path:?}: {error}"))?;
    Ok(split_blocks(text.as_str()))
}

///
/// Splits configuration text into blocks.
///
/// Consecutive non-blank lines form one block; blocks are separated by one or
/// more blank lines. A line whose first non-whitespace character is `#` is a
/// comment and is dropped before block assembly, so a comment inside a block
/// does not split it and a block reduced to nothing is dropped entirely.
///
pub fn split_blocks(text: &str) -> Vec<ConfigBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if trimmed.is_empty() {
            if !current.is_empty() {
                blocks.push(ConfigBlock::new(current.join("\n")));
                current.clear();
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(ConfigBlock::new(current.join("\n")));
    }

    blocks
}
