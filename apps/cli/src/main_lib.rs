use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use goalsaver_connect::GoalApiClient;
use goalsaver_core::{
    auth::SecretStoreCredentialProvider,
    goals::{GoalCreationService, GoalCreationServiceTrait},
    secrets::SecretStore,
};

use crate::{config::Config, secrets::FileSecretStore};

pub struct AppState {
    pub credentials: Arc<SecretStoreCredentialProvider>,
    pub goal_service: Arc<dyn GoalCreationServiceTrait>,
}

/// Log to stderr so stdout only carries command output.
pub fn init_tracing() {
    let log_format = std::env::var("GOALSAVER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let secret_store: Arc<dyn SecretStore> = Arc::new(FileSecretStore::new(
        config.secrets_path.clone(),
        config.secret_key.as_deref(),
    )?);
    tracing::debug!("Secrets file: {}", config.secrets_path.display());

    let credentials = Arc::new(SecretStoreCredentialProvider::new(secret_store));
    let api_client = Arc::new(GoalApiClient::new(&config.api_url, config.request_timeout)?);
    tracing::debug!("Goals API: {}", api_client.base_url());

    let goal_service: Arc<dyn GoalCreationServiceTrait> =
        Arc::new(GoalCreationService::new(credentials.clone(), api_client));

    Ok(Arc::new(AppState {
        credentials,
        goal_service,
    }))
}
