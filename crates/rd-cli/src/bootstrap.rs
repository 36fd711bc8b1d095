use anyhow::Context;
use rd_config::RepairDeskConfig;
use rd_secrets::SecretOverrides;

/// Load `.env`, external secrets, and layered configuration, in that order.
///
/// A failing secrets backend is a warning on a workstation and fatal in CI.
pub async fn load_config() -> anyhow::Result<RepairDeskConfig> {
    load_dotenv()?;

    let env_overrides = match rd_secrets::load_env_overrides().await {
        Ok(SecretOverrides::Disabled) => Vec::new(),
        Ok(SecretOverrides::Values(values)) => {
            tracing::debug!(count = values.len(), "loaded external secret overrides");
            values
        }
        Err(error) => {
            if is_ci() {
                return Err(anyhow::anyhow!(
                    "failed to load configured secret backend in CI: {error}"
                ));
            }

            tracing::warn!(%error, "failed to load external secrets; continuing with local config");
            Vec::new()
        }
    };

    RepairDeskConfig::load_with_env_overrides(&env_overrides)
        .context("failed to load repairdesk configuration")
}

fn is_ci() -> bool {
    std::env::var("CI")
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
