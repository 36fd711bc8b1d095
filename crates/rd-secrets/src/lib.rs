//! # rd-secrets
//!
//! External secret provider integration for RepairDesk.
//!
//! Mail relay credentials must never be compiled in. When
//! `REPAIRDESK_SECRETS__BACKEND=infisical` is set, every `REPAIRDESK_*` secret in
//! the configured Infisical project is returned as a config override
//! (e.g. `REPAIRDESK_MAIL__PASSWORD`), which `rd-config` layers beneath the
//! process environment.

use infisical::{AuthMethod, Client, secrets::ListSecretsRequest};
use thiserror::Error;

const ENV_BACKEND: &str = "REPAIRDESK_SECRETS__BACKEND";
const ENV_INFISICAL_BASE_URL: &str = "REPAIRDESK_INFISICAL__BASE_URL";
const ENV_INFISICAL_CLIENT_ID: &str = "REPAIRDESK_INFISICAL__CLIENT_ID";
const ENV_INFISICAL_CLIENT_SECRET: &str = "REPAIRDESK_INFISICAL__CLIENT_SECRET";
const ENV_INFISICAL_PROJECT_ID: &str = "REPAIRDESK_INFISICAL__PROJECT_ID";
const ENV_INFISICAL_ENVIRONMENT: &str = "REPAIRDESK_INFISICAL__ENVIRONMENT";
const ENV_INFISICAL_PATH: &str = "REPAIRDESK_INFISICAL__PATH";

/// Only secrets carrying this prefix become config overrides.
const SECRET_KEY_PREFIX: &str = "REPAIRDESK_";

/// Result of resolving external secrets.
#[derive(Debug, Clone)]
pub enum SecretOverrides {
    Disabled,
    Values(Vec<(String, String)>),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Backend {
    None,
    Infisical,
}

impl Backend {
    fn from_env() -> Result<Self, SecretError> {
        let raw = std::env::var(ENV_BACKEND).unwrap_or_default();
        let normalized = raw.trim().to_ascii_lowercase();

        match normalized.as_str() {
            "" | "none" | "off" | "disabled" => Ok(Self::None),
            "infisical" => Ok(Self::Infisical),
            value => Err(SecretError::UnsupportedBackend(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
struct InfisicalSettings {
    base_url: String,
    client_id: String,
    client_secret: String,
    project_id: String,
    environment: String,
    path: String,
}

impl InfisicalSettings {
    fn from_env() -> Result<Self, SecretError> {
        Ok(Self {
            base_url: std::env::var(ENV_INFISICAL_BASE_URL)
                .unwrap_or_else(|_| "https://app.infisical.com".to_string()),
            client_id: required_env(ENV_INFISICAL_CLIENT_ID)?,
            client_secret: required_env(ENV_INFISICAL_CLIENT_SECRET)?,
            project_id: required_env(ENV_INFISICAL_PROJECT_ID)?,
            environment: required_env(ENV_INFISICAL_ENVIRONMENT)?,
            path: std::env::var(ENV_INFISICAL_PATH).unwrap_or_else(|_| "/".to_string()),
        })
    }
}

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("unsupported secrets backend '{0}'")]
    UnsupportedBackend(String),
    #[error("required environment variable '{name}' is missing")]
    MissingEnvVar { name: &'static str },
    #[error("infisical error: {0}")]
    Infisical(#[from] infisical::InfisicalError),
}

fn required_env(name: &'static str) -> Result<String, SecretError> {
    std::env::var(name).map_err(|_| SecretError::MissingEnvVar { name })
}

/// Load secret key/value overrides from the configured external backend.
///
/// Secrets are named exactly like the environment variables they replace
/// (e.g., `REPAIRDESK_MAIL__PASSWORD`).
pub async fn load_env_overrides() -> Result<SecretOverrides, SecretError> {
    match Backend::from_env()? {
        Backend::None => Ok(SecretOverrides::Disabled),
        Backend::Infisical => {
            let settings = InfisicalSettings::from_env()?;
            let values = load_from_infisical(&settings).await?;
            Ok(SecretOverrides::Values(values))
        }
    }
}

async fn load_from_infisical(
    settings: &InfisicalSettings,
) -> Result<Vec<(String, String)>, SecretError> {
    let mut client = Client::builder()
        .base_url(&settings.base_url)
        .build()
        .await?;

    client
        .login(AuthMethod::new_universal_auth(
            &settings.client_id,
            &settings.client_secret,
        ))
        .await?;

    let request = ListSecretsRequest::builder(&settings.project_id, &settings.environment)
        .path(&settings.path)
        .recursive(true)
        .expand_secret_references(true)
        .build();

    let secrets = client
        .secrets()
        .list(request)
        .await?
        .into_iter()
        .map(|secret| (secret.secret_key, secret.secret_value));

    Ok(keep_repairdesk_keys(secrets))
}

fn keep_repairdesk_keys(
    secrets: impl IntoIterator<Item = (String, String)>,
) -> Vec<(String, String)> {
    let mut values = secrets
        .into_iter()
        .filter(|(key, _)| key.starts_with(SECRET_KEY_PREFIX))
        .collect::<Vec<_>>();
    values.sort_by(|a, b| a.0.cmp(&b.0));
    values
}
