//! Configuration loading: one fetch, then validation.

use linkbio_core::config::{parse_configuration, ConfigError, Configuration, ValidationPolicy};

use crate::fetch::Fetcher;

/// Fetches the configuration document and validates it under `policy`.
///
/// Transport failures and non-success statuses become fetch errors; bodies
/// that are not acceptable documents become validation errors.
pub async fn load_configuration(
    fetcher: &dyn Fetcher,
    path: &str,
    policy: ValidationPolicy,
) -> Result<Configuration, ConfigError> {
    tracing::debug!(path, %policy, "Loading configuration");

    let response = fetcher
        .fetch(path)
        .await
        .map_err(|e| ConfigError::Transport(e.to_string()))?;

    if !response.is_success() {
        return Err(ConfigError::Fetch {
            status: response.status,
            reason: response.reason,
        });
    }

    let config = parse_configuration(&response.body, policy)?;
    tracing::debug!(
        links = config.links.as_ref().map_or(0, Vec::len),
        theme = config.theme.as_deref().unwrap_or_default(),
        "Configuration loaded"
    );
    Ok(config)
}
