use std::collections::BTreeSet;

use serde_json::Value;

/// One element of a `pages` array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEntry<'a> {
    Page(&'a str),
    /// Group wrapper; contributes only its nested pages.
    Group(&'a [Value]),
}

impl<'a> PageEntry<'a> {
    pub fn classify(item: &'a Value) -> Option<Self> {
        match item {
            Value::String(page) => Some(Self::Page(page)),
            Value::Object(_) => pages_of(item).map(Self::Group),
            _ => None,
        }
    }
}

/// Recursively collect page paths from a `pages` array.
pub fn extract_pages_from_pages_array(items: &[Value]) -> BTreeSet<String> {
    let mut pages = BTreeSet::new();
    collect_pages(items, &mut pages);
    pages
}

/// Collect every page path referenced by a docs.json navigation tree.
///
/// Products may use any mix of `pages`, `tabs`, `dropdowns` and `groups`.
/// Entries with an unexpected shape are skipped. Paths are returned exactly as
/// written; see [`crate::redirects::normalize_page_path`] for comparison.
pub fn extract_all_pages(docs: &Value) -> BTreeSet<String> {
    let mut pages = BTreeSet::new();
    let products = docs
        .get("navigation")
        .and_then(|navigation| navigation.get("products"))
        .and_then(Value::as_array);
    let Some(products) = products else {
        return pages;
    };

    for product in products.iter().filter(|product| product.is_object()) {
        if let Some(items) = pages_of(product) {
            collect_pages(items, &mut pages);
        }

        for tab in objects_in(product, "tabs") {
            if let Some(items) = pages_of(tab) {
                collect_pages(items, &mut pages);
            } else {
                // Tabs without their own pages list fall back to groups.
                for group in objects_in(tab, "groups") {
                    if let Some(items) = pages_of(group) {
                        collect_pages(items, &mut pages);
                    }
                }
            }
        }

        for dropdown in objects_in(product, "dropdowns") {
            for tab in objects_in(dropdown, "tabs") {
                if let Some(items) = pages_of(tab) {
                    collect_pages(items, &mut pages);
                }
            }
        }

        for group in objects_in(product, "groups") {
            if let Some(items) = pages_of(group) {
                collect_pages(items, &mut pages);
            }
        }
    }

    pages
}

fn collect_pages(items: &[Value], pages: &mut BTreeSet<String>) {
    for entry in items.iter().filter_map(PageEntry::classify) {
        match entry {
            PageEntry::Page(page) => {
                pages.insert(page.to_string());
            }
            PageEntry::Group(children) => collect_pages(children, pages),
        }
    }
}

fn pages_of(container: &Value) -> Option<&[Value]> {
    container
        .get("pages")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

fn objects_in<'a>(container: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    container
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|item| item.is_object())
}
