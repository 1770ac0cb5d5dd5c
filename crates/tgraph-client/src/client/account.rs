//! Account operations for the Telegraph API.

use tracing::info;

use super::Telegraph;
use crate::error::TelegraphError;
use crate::types::Account;

/// Account fields selectable in [`Telegraph::get_account_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    /// Account name.
    ShortName,
    /// Default author name.
    AuthorName,
    /// Default profile link.
    AuthorUrl,
    /// One-time browser authorization URL.
    AuthUrl,
    /// Number of pages on the account.
    PageCount,
}

impl AccountField {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::ShortName => "short_name",
            Self::AuthorName => "author_name",
            Self::AuthorUrl => "author_url",
            Self::AuthUrl => "auth_url",
            Self::PageCount => "page_count",
        }
    }
}

impl Telegraph {
    /// Create a new Telegraph account.
    ///
    /// `short_name` helps users with several accounts remember which one is
    /// active; readers never see it. When `replace_token` is true the client
    /// adopts the new account's access token for subsequent calls.
    pub fn create_account(
        &mut self,
        short_name: &str,
        author_name: Option<&str>,
        author_url: Option<&str>,
        replace_token: bool,
    ) -> Result<Account, TelegraphError> {
        let account: Account = self.method(
            "createAccount",
            "",
            &[
                ("short_name", Some(short_name.to_owned())),
                ("author_name", author_name.map(str::to_owned)),
                ("author_url", author_url.map(str::to_owned)),
            ],
        )?;
        if replace_token {
            self.access_token.clone_from(&account.access_token);
        }
        info!("created account {short_name}");
        Ok(account)
    }

    /// Update information about the current account.
    ///
    /// Pass only the fields to change; `None` fields are left untouched.
    pub fn edit_account_info(
        &self,
        short_name: Option<&str>,
        author_name: Option<&str>,
        author_url: Option<&str>,
    ) -> Result<Account, TelegraphError> {
        self.method(
            "editAccountInfo",
            "",
            &[
                ("short_name", short_name.map(str::to_owned)),
                ("author_name", author_name.map(str::to_owned)),
                ("author_url", author_url.map(str::to_owned)),
            ],
        )
    }

    /// Get information about the current account.
    ///
    /// An empty `fields` slice requests the server default (short name,
    /// author name, author URL).
    pub fn get_account_info(&self, fields: &[AccountField]) -> Result<Account, TelegraphError> {
        let fields_json = if fields.is_empty() {
            None
        } else {
            let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
            Some(serde_json::to_string(&names)?)
        };
        self.method("getAccountInfo", "", &[("fields", fields_json)])
    }

    /// Revoke the current access token and adopt the newly issued one.
    ///
    /// Use when a token may be compromised or to reset all connected
    /// sessions. The returned account carries the new token and a one-time
    /// `auth_url`.
    pub fn revoke_access_token(&mut self) -> Result<Account, TelegraphError> {
        let account: Account = self.method("revokeAccessToken", "", &[])?;
        self.access_token.clone_from(&account.access_token);
        info!("access token revoked and replaced");
        Ok(account)
    }
}
