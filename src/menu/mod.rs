//! Internal site navigation.
//!
//! `Menu` owns the table of registered pages and resolves internal paths to
//! anchor markup. Pages ask for links through the [`MenuProvider`] trait so
//! tests can substitute a stub resolver.

use crate::core::{XswebError, XswebResult};
use crate::di::MenuProvider;
use crate::html;
use std::collections::HashMap;

/// Resolves internal page paths to navigation links.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    pages: HashMap<String, String>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a menu pre-populated with the site's page table.
    pub fn with_default_pages() -> Self {
        let mut menu = Self::new();
        menu.register("/projects/xsfoundation", "XSFoundation");
        menu.register("/projects/xsfoundation/documentation", "Documentation");
        menu.register("/projects/xsfoundation/download", "Download");
        menu
    }

    /// Register a page under a normalized path.
    pub fn register(&mut self, path: &str, title: impl Into<String>) {
        self.pages.insert(Self::normalize(path), title.into());
    }

    /// Whether a page is registered for the given path.
    pub fn has_page(&self, path: &str) -> bool {
        self.pages.contains_key(&Self::normalize(path))
    }

    /// Build an anchor linking to a registered page.
    ///
    /// Fails when no page is registered for the path. There is no fallback
    /// link; callers decide what a missing page means for them.
    pub fn page_link(&self, path: &str, label: &str) -> XswebResult<String> {
        let normalized = Self::normalize(path);
        if !self.pages.contains_key(&normalized) {
            return Err(XswebError::Menu(format!(
                "no page registered for path '{}'",
                path
            )));
        }

        Ok(format!(
            r#"<a href="{}">{}</a>"#,
            html::escape_attr(&normalized),
            html::escape_text(label)
        ))
    }

    /// Leading slash required, trailing slash dropped.
    fn normalize(path: &str) -> String {
        let trimmed = path.trim_end_matches('/');
        if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }
}

impl MenuProvider for Menu {
    fn page_link(&self, path: &str, label: &str) -> XswebResult<String> {
        self.page_link(path, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_link_registered() {
        let menu = Menu::with_default_pages();
        let link = menu
            .page_link("/projects/xsfoundation/documentation", "documentation")
            .unwrap();
        assert_eq!(
            link,
            r#"<a href="/projects/xsfoundation/documentation">documentation</a>"#
        );
    }

    #[test]
    fn test_page_link_trailing_slash() {
        let menu = Menu::with_default_pages();
        let link = menu
            .page_link("/projects/xsfoundation/documentation/", "docs")
            .unwrap();
        assert!(link.contains(r#"href="/projects/xsfoundation/documentation""#));
    }

    #[test]
    fn test_page_link_unregistered_fails() {
        let menu = Menu::with_default_pages();
        let err = menu.page_link("/projects/unknown", "nope").unwrap_err();
        assert!(matches!(err, XswebError::Menu(_)));
    }

    #[test]
    fn test_page_link_escapes_label() {
        let mut menu = Menu::new();
        menu.register("/about", "About");
        let link = menu.page_link("/about", "<b>about</b>").unwrap();
        assert_eq!(link, r#"<a href="/about">&lt;b&gt;about&lt;/b&gt;</a>"#);
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        let mut menu = Menu::new();
        menu.register("about", "About");
        assert!(menu.has_page("/about"));
        assert!(menu.has_page("about"));
    }
}
