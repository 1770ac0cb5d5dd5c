//! Telegraph page types.

use serde::{Deserialize, Serialize};
use tgraph_html::Node;

/// A page on Telegraph.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    /// Path to the page.
    pub path: String,
    /// URL of the page.
    pub url: String,
    /// Title of the page.
    pub title: String,
    /// Short description of the page content.
    #[serde(default)]
    pub description: String,
    /// Name of the author, displayed below the title.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Profile link, opened when readers click the author name.
    #[serde(default)]
    pub author_url: Option<String>,
    /// Image URL of the page.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Content of the page as nodes; present when content was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Node>>,
    /// Number of page views.
    #[serde(default)]
    pub views: u64,
    /// True if the caller's access token can edit the page.
    #[serde(default)]
    pub can_edit: Option<bool>,
}

/// A list of pages belonging to an account.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageList {
    /// Total number of pages on the account.
    pub total_count: u64,
    /// Requested slice, most recently created first.
    pub pages: Vec<Page>,
}

/// View counter of a page.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PageViews {
    /// Number of views.
    pub views: u64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tgraph_html::nodes_to_html;

    use super::*;

    #[test]
    fn test_deserialize_page_with_content() {
        let json = r#"{
            "path": "Sample-Page-12-15",
            "url": "https://telegra.ph/Sample-Page-12-15",
            "title": "Sample Page",
            "description": "",
            "content": [{"tag":"p","children":["Hello, world!"]}],
            "views": 40,
            "can_edit": true
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.path, "Sample-Page-12-15");
        assert_eq!(page.views, 40);
        assert_eq!(page.can_edit, Some(true));
        assert_eq!(
            nodes_to_html(page.content.as_deref().unwrap()),
            "<p>Hello, world!</p>"
        );
    }

    #[test]
    fn test_deserialize_page_without_content() {
        let json = r#"{
            "path": "p",
            "url": "https://telegra.ph/p",
            "title": "t"
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, None);
        assert_eq!(page.views, 0);
    }

    #[test]
    fn test_deserialize_page_list() {
        let json = r#"{
            "total_count": 2,
            "pages": [
                {"path": "a", "url": "u", "title": "A", "views": 1},
                {"path": "b", "url": "u", "title": "B", "views": 2}
            ]
        }"#;
        let list: PageList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total_count, 2);
        assert_eq!(list.pages.len(), 2);
        assert_eq!(list.pages[1].title, "B");
    }
}
