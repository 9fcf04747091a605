use serde::Serialize;
use serde_json::Value;

use crate::navigation::extract_all_pages;
use crate::redirects::{PageNormalizer, page_redirects};

pub const REDIRECT_EXAMPLE: &str =
    r#"{"source": "/path/to/removed-page", "destination": "/path/to/new-location"}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    NoRemovals,
    AllCovered,
    Uncovered,
}

impl CheckOutcome {
    pub fn passed(self) -> bool {
        !matches!(self, Self::Uncovered)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub normalizer: PageNormalizer,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub outcome: CheckOutcome,
    pub base_pages: usize,
    pub head_pages: usize,
    pub page_redirects: usize,
    pub removed_pages: Vec<String>,
    pub covered_pages: Vec<String>,
    pub uncovered_pages: Vec<String>,
}

/// Compare two docs.json documents and verify that every page dropped from
/// the head navigation is the source of one of head's page redirects.
///
/// All page lists in the report are sorted.
pub fn check_removed_pages(base: &Value, head: &Value, options: &CheckOptions) -> CheckReport {
    let base_pages = extract_all_pages(base);
    let head_pages = extract_all_pages(head);
    let redirects = page_redirects(head);

    let removed_pages = base_pages
        .difference(&head_pages)
        .cloned()
        .collect::<Vec<_>>();

    let (covered_pages, uncovered_pages): (Vec<_>, Vec<_>) = removed_pages
        .iter()
        .cloned()
        .partition(|page| options.normalizer.has_redirect_for_page(page, &redirects));

    let outcome = if removed_pages.is_empty() {
        CheckOutcome::NoRemovals
    } else if uncovered_pages.is_empty() {
        CheckOutcome::AllCovered
    } else {
        CheckOutcome::Uncovered
    };

    CheckReport {
        outcome,
        base_pages: base_pages.len(),
        head_pages: head_pages.len(),
        page_redirects: redirects.len(),
        removed_pages,
        covered_pages,
        uncovered_pages,
    }
}
