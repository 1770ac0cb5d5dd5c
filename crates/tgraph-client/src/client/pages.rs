//! Page operations for the Telegraph API.

use tracing::info;

use tgraph_html::{Node, html_to_nodes};

use super::Telegraph;
use crate::error::TelegraphError;
use crate::types::{Page, PageList, PageViews};

impl Telegraph {
    /// Create a new page from content nodes.
    pub fn create_page(
        &self,
        title: &str,
        content: &[Node],
        author_name: Option<&str>,
        author_url: Option<&str>,
        return_content: bool,
    ) -> Result<Page, TelegraphError> {
        let content_json = serde_json::to_string(content)?;
        let page: Page = self.method(
            "createPage",
            "",
            &[
                ("title", Some(title.to_owned())),
                ("author_name", author_name.map(str::to_owned)),
                ("author_url", author_url.map(str::to_owned)),
                ("content", Some(content_json)),
                ("return_content", Some(return_content.to_string())),
            ],
        )?;
        info!("created page {}", page.path);
        Ok(page)
    }

    /// Create a new page from restricted HTML markup.
    ///
    /// The markup is converted with [`html_to_nodes`] before upload, so
    /// invalid content fails locally instead of at the API.
    pub fn create_page_html(
        &self,
        title: &str,
        html: &str,
        author_name: Option<&str>,
        author_url: Option<&str>,
        return_content: bool,
    ) -> Result<Page, TelegraphError> {
        let content = html_to_nodes(html)?;
        self.create_page(title, &content, author_name, author_url, return_content)
    }

    /// Edit an existing page.
    pub fn edit_page(
        &self,
        path: &str,
        title: &str,
        content: &[Node],
        author_name: Option<&str>,
        author_url: Option<&str>,
        return_content: bool,
    ) -> Result<Page, TelegraphError> {
        let content_json = serde_json::to_string(content)?;
        let page: Page = self.method(
            "editPage",
            path,
            &[
                ("title", Some(title.to_owned())),
                ("author_name", author_name.map(str::to_owned)),
                ("author_url", author_url.map(str::to_owned)),
                ("content", Some(content_json)),
                ("return_content", Some(return_content.to_string())),
            ],
        )?;
        info!("edited page {}", page.path);
        Ok(page)
    }

    /// Edit an existing page from restricted HTML markup.
    pub fn edit_page_html(
        &self,
        path: &str,
        title: &str,
        html: &str,
        author_name: Option<&str>,
        author_url: Option<&str>,
        return_content: bool,
    ) -> Result<Page, TelegraphError> {
        let content = html_to_nodes(html)?;
        self.edit_page(path, title, &content, author_name, author_url, return_content)
    }

    /// Get a page.
    ///
    /// `path` is everything after `https://telegra.ph/`, in the format
    /// `Title-12-31`. Content nodes are included when `return_content` is
    /// true; convert them with [`tgraph_html::nodes_to_html`] if markup is
    /// needed.
    pub fn get_page(&self, path: &str, return_content: bool) -> Result<Page, TelegraphError> {
        self.method(
            "getPage",
            path,
            &[("return_content", Some(return_content.to_string()))],
        )
    }

    /// List pages belonging to the account, most recently created first.
    ///
    /// `offset` is the sequential number of the first page returned;
    /// `limit` caps the slice at 0-200 entries.
    pub fn get_page_list(&self, offset: u32, limit: u32) -> Result<PageList, TelegraphError> {
        self.method(
            "getPageList",
            "",
            &[
                ("offset", Some(offset.to_string())),
                ("limit", Some(limit.to_string())),
            ],
        )
    }

    /// Get the view counter of a page.
    ///
    /// Filters narrow the counter: `year` is required if `month` is passed,
    /// `month` if `day` is passed, `day` if `hour` is passed. The API
    /// rejects inconsistent combinations.
    pub fn get_views(
        &self,
        path: &str,
        year: Option<u16>,
        month: Option<u8>,
        day: Option<u8>,
        hour: Option<u8>,
    ) -> Result<PageViews, TelegraphError> {
        self.method(
            "getViews",
            path,
            &[
                ("year", year.map(|v| v.to_string())),
                ("month", month.map(|v| v.to_string())),
                ("day", day.map(|v| v.to_string())),
                ("hour", hour.map(|v| v.to_string())),
            ],
        )
    }
}
