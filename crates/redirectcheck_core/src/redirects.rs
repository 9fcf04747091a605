use serde_json::Value;

use crate::config::{CheckConfig, DEFAULT_PAGE_EXTENSION, DEFAULT_ROOT_PAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub source: String,
}

/// Comparison form for page paths: one leading `/` and the page extension
/// are stripped, and an empty result becomes the root page identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNormalizer {
    extension: String,
    root_page: String,
}

impl Default for PageNormalizer {
    fn default() -> Self {
        Self {
            extension: DEFAULT_PAGE_EXTENSION.to_string(),
            root_page: DEFAULT_ROOT_PAGE.to_string(),
        }
    }
}

impl PageNormalizer {
    pub fn new(extension: impl Into<String>, root_page: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            root_page: root_page.into(),
        }
    }

    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(config.extension(), config.root_page())
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn root_page(&self) -> &str {
        &self.root_page
    }

    pub fn normalize(&self, path: &str) -> String {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let trimmed = if self.extension.is_empty() {
            trimmed
        } else {
            trimmed.strip_suffix(&self.extension).unwrap_or(trimmed)
        };
        if trimmed.is_empty() {
            self.root_page.clone()
        } else {
            trimmed.to_string()
        }
    }

    pub fn has_redirect_for_page(&self, page_path: &str, redirects: &[RedirectRule]) -> bool {
        let page = self.normalize(page_path);
        redirects
            .iter()
            .any(|redirect| self.normalize(&redirect.source) == page)
    }
}

pub fn normalize_page_path(path: &str) -> String {
    PageNormalizer::default().normalize(path)
}

pub fn has_redirect_for_page(page_path: &str, redirects: &[RedirectRule]) -> bool {
    PageNormalizer::default().has_redirect_for_page(page_path, redirects)
}

/// Redirect entries that move a page: objects carrying both `source` and
/// `destination`. OpenAPI spec mappings and other table entries are dropped.
pub fn page_redirects(docs: &Value) -> Vec<RedirectRule> {
    let Some(entries) = docs.get("redirects").and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(Value::as_object)
        .filter(|entry| entry.contains_key("destination"))
        .filter_map(|entry| entry.get("source")?.as_str())
        .map(|source| RedirectRule {
            source: source.to_string(),
        })
        .collect()
}
