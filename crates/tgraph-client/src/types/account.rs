//! Telegraph account type.

use serde::{Deserialize, Serialize};

/// A Telegraph account.
///
/// Which fields are present depends on the call: `createAccount` and
/// `revokeAccessToken` return the token, `getAccountInfo` returns only the
/// requested fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Account {
    /// Account name, shown above the Edit/Publish button on Telegra.ph.
    #[serde(default)]
    pub short_name: Option<String>,
    /// Default author name used when creating new pages.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Default profile link, opened when readers click the author name.
    #[serde(default)]
    pub author_url: Option<String>,
    /// Access token of the account.
    #[serde(default)]
    pub access_token: Option<String>,
    /// URL to authorize a browser session; valid once, for 5 minutes.
    #[serde(default)]
    pub auth_url: Option<String>,
    /// Number of pages belonging to the account.
    #[serde(default)]
    pub page_count: Option<u64>,
}
