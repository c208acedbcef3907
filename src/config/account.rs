//! Account identities, grouped by service

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One identity on a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `accounts` block: service name (e.g. `github`) to identities
pub type Accounts = BTreeMap<String, Vec<Account>>;

/// `service:username` key for an account
pub fn identity(service: &str, account: &Account) -> String {
    format!("{service}:{}", account.username)
}
