use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_EXTENSION: &str = ".mdx";
pub const DEFAULT_ROOT_PAGE: &str = "index";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CheckConfig {
    #[serde(default)]
    pub pages: PagesSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct PagesSection {
    pub extension: Option<String>,
    pub root_page: Option<String>,
}

impl CheckConfig {
    /// Page file extension stripped during normalization: config > DEFAULT_PAGE_EXTENSION.
    pub fn extension(&self) -> &str {
        self.pages
            .extension
            .as_deref()
            .unwrap_or(DEFAULT_PAGE_EXTENSION)
    }

    /// Identifier that an empty normalized path maps to: config > DEFAULT_ROOT_PAGE.
    pub fn root_page(&self) -> &str {
        self.pages.root_page.as_deref().unwrap_or(DEFAULT_ROOT_PAGE)
    }
}

/// Load and parse a CheckConfig from a TOML file. Returns default if file doesn't exist.
pub fn load_config(config_path: &Path) -> Result<CheckConfig> {
    if !config_path.exists() {
        return Ok(CheckConfig::default());
    }
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let parsed: CheckConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    if parsed.root_page().trim().is_empty() {
        bail!(
            "[pages].root_page cannot be empty in {}",
            config_path.display()
        );
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_mdx_and_index() {
        let config = CheckConfig::default();
        assert_eq!(config.extension(), ".mdx");
        assert_eq!(config.root_page(), "index");
    }

    #[test]
    fn load_config_returns_default_for_missing_file() {
        let config = load_config(Path::new("/nonexistent/redirectcheck.toml")).expect("load");
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn load_config_parses_pages_section() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("redirectcheck.toml");
        fs::write(
            &config_path,
            r#"
[pages]
extension = ".md"
root_page = "home"
"#,
        )
        .expect("write config");

        let config = load_config(&config_path).expect("load config");
        assert_eq!(config.extension(), ".md");
        assert_eq!(config.root_page(), "home");
    }

    #[test]
    fn load_config_tolerates_unrelated_sections() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("redirectcheck.toml");
        fs::write(&config_path, "[ci]\nbase_ref = \"main\"\n").expect("write config");

        let config = load_config(&config_path).expect("load config");
        assert_eq!(config.extension(), ".mdx");
    }

    #[test]
    fn load_config_returns_error_for_invalid_toml() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("redirectcheck.toml");
        fs::write(&config_path, "[pages\nextension = \".md\"").expect("write config");
        let error = load_config(&config_path).expect_err("must fail");
        assert!(error.to_string().contains("failed to parse"));
    }

    #[test]
    fn load_config_rejects_blank_root_page() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("redirectcheck.toml");
        fs::write(&config_path, "[pages]\nroot_page = \"  \"\n").expect("write config");
        let error = load_config(&config_path).expect_err("must fail");
        assert!(error.to_string().contains("root_page cannot be empty"));
    }
}
