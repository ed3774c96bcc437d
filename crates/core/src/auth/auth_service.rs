use log::debug;
use std::sync::Arc;

use crate::auth::auth_model::StoredUser;
use crate::auth::auth_traits::CredentialProviderTrait;
use crate::constants::USER_SECRET_KEY;
use crate::errors::Result;
use crate::secrets::SecretStore;

/// Reads the signed-in user from a [`SecretStore`], where the login flow
/// keeps it as a JSON document under the `user` key.
pub struct SecretStoreCredentialProvider {
    secret_store: Arc<dyn SecretStore>,
}

impl SecretStoreCredentialProvider {
    pub fn new(secret_store: Arc<dyn SecretStore>) -> Self {
        Self { secret_store }
    }

    /// Persist the user record, replacing any previous one.
    pub fn save_user(&self, user: &StoredUser) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.secret_store.set_secret(USER_SECRET_KEY, &json)
    }

    /// Forget the signed-in user. A no-op when nobody is signed in.
    pub fn clear_user(&self) -> Result<()> {
        self.secret_store.delete_secret(USER_SECRET_KEY)
    }
}

impl CredentialProviderTrait for SecretStoreCredentialProvider {
    fn current_user(&self) -> Result<Option<StoredUser>> {
        let Some(raw) = self.secret_store.get_secret(USER_SECRET_KEY)? else {
            debug!("[Credentials] No stored user");
            return Ok(None);
        };
        let user: StoredUser = serde_json::from_str(&raw)?;
        Ok(Some(user))
    }
}

/// Credential provider over a fixed, optional user.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    user: Option<StoredUser>,
}

impl StaticCredentialProvider {
    pub fn new(user: Option<StoredUser>) -> Self {
        Self { user }
    }
}

impl CredentialProviderTrait for StaticCredentialProvider {
    fn current_user(&self) -> Result<Option<StoredUser>> {
        Ok(self.user.clone())
    }
}
