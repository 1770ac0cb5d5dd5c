//! Synchronous client for the Telegraph publishing API.
//!
//! Telegraph (`https://telegra.ph`) is an anonymous publishing service;
//! its API takes form POSTs and answers JSON. This crate wraps the API
//! methods with typed requests and responses, and leans on [`tgraph_html`]
//! for converting between restricted HTML markup and the node tree the
//! service stores.
//!
//! ```no_run
//! use tgraph_client::Telegraph;
//!
//! # fn main() -> Result<(), tgraph_client::TelegraphError> {
//! let mut client = Telegraph::new();
//! client.create_account("sandbox", Some("Anonymous"), None, true)?;
//! let page = client.create_page_html(
//!     "Hello",
//!     "<p>Hello, world!</p>",
//!     None,
//!     None,
//!     false,
//! )?;
//! println!("published at {}", page.url);
//! # Ok(())
//! # }
//! ```
//!
//! Rate limiting surfaces as [`TelegraphError::RetryAfter`]; retry and
//! backoff policy is left to the caller.

mod client;
mod error;
mod types;

pub use client::{AccountField, Telegraph};
pub use error::TelegraphError;
pub use types::{Account, Page, PageList, PageViews};
