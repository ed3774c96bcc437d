use crate::auth::auth_model::StoredUser;
use crate::errors::Result;

/// Resolves the currently signed-in user.
///
/// Implementations must not touch the network. `Ok(None)` means nobody is
/// signed in.
pub trait CredentialProviderTrait: Send + Sync {
    fn current_user(&self) -> Result<Option<StoredUser>>;
}
