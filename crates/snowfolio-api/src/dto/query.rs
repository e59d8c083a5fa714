use serde::Deserialize;

/// Query parameters for endpoints addressing one wallet.
#[derive(Debug, Deserialize)]
pub struct AccountQuery {
    #[serde(rename = "accountPubKey")]
    pub account_pub_key: String,
}

impl AccountQuery {
    /// Tracked addresses are stored lower-cased; normalize at the boundary.
    pub fn address(&self) -> String {
        self.account_pub_key.to_lowercase()
    }
}

/// Query parameters for the delete endpoint, where the wallet is optional
/// (absent means "everything").
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(rename = "accountPubKey")]
    pub account_pub_key: Option<String>,
}
