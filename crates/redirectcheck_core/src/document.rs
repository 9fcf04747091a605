use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    Base,
    Head,
}

impl InputRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Head => "Head",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInput {
    pub role: InputRole,
    pub path: PathBuf,
}

impl MissingInput {
    pub fn message(&self) -> String {
        format!(
            "Error: {} docs.json not found at {}",
            self.role.as_str(),
            self.path.display()
        )
    }
}

/// Report every input path that does not exist, base before head.
pub fn missing_inputs(base_path: &Path, head_path: &Path) -> Vec<MissingInput> {
    [(InputRole::Base, base_path), (InputRole::Head, head_path)]
        .into_iter()
        .filter(|(_, path)| !path.exists())
        .map(|(role, path)| MissingInput {
            role,
            path: path.to_path_buf(),
        })
        .collect()
}

pub fn load_document(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
