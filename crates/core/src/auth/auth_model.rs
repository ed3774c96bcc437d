//! Signed-in user models.

use serde::{Deserialize, Serialize};

/// User record as persisted by the login flow.
///
/// Both fields are optional because the store may hold a partial record
/// (for example after an interrupted login). Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl StoredUser {
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            id: Some(id.into()),
        }
    }

    /// Promote to an [`AuthenticatedUser`] when both the token and the id are
    /// present and non-empty.
    pub fn authenticate(self) -> Option<AuthenticatedUser> {
        let token = self.token.filter(|t| !t.is_empty())?;
        let id = self.id.filter(|i| !i.is_empty())?;
        Some(AuthenticatedUser { id, token })
    }
}

/// A user with a usable bearer token and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub token: String,
}
