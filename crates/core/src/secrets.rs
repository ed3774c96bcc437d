//! Secret storage abstraction.
//!
//! Platform front ends provide the backing store (an encrypted file for the
//! CLI, an in-memory map in tests). Core services only see this trait.

use crate::errors::Result;

const SERVICE_PREFIX: &str = "goalsaver";

/// Key/value store for sensitive values such as the signed-in user record.
pub trait SecretStore: Send + Sync {
    fn set_secret(&self, service: &str, secret: &str) -> Result<()>;
    fn get_secret(&self, service: &str) -> Result<Option<String>>;
    fn delete_secret(&self, service: &str) -> Result<()>;
}

/// Namespaces a service key so entries never collide with other applications
/// sharing the same backing store.
pub fn format_service_id(service: &str) -> String {
    format!("{}_{}", SERVICE_PREFIX, service.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_service_id() {
        assert_eq!(format_service_id("user"), "goalsaver_user");
        assert_eq!(format_service_id("USER"), "goalsaver_user");
    }
}
