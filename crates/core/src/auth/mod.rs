//! Auth module - signed-in user models and credential providers.

mod auth_model;
mod auth_service;
mod auth_traits;

pub use auth_model::{AuthenticatedUser, StoredUser};
pub use auth_service::{SecretStoreCredentialProvider, StaticCredentialProvider};
pub use auth_traits::CredentialProviderTrait;
