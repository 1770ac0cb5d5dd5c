//! Response types for the Telegraph API.

mod account;
mod page;

pub use account::Account;
pub use page::{Page, PageList, PageViews};
