use rd_config::RepairDeskConfig;

/// Emit warnings for settings that will make notifications fail or look wrong.
pub fn warn_unconfigured(config: &RepairDeskConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RepairDeskConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.mail.is_configured() {
        if has_single_underscore_key(&env_keys, "REPAIRDESK_MAIL") {
            warnings.push(
                "Mail config appears default while REPAIRDESK_MAIL_* env vars exist. Use double underscores (example: REPAIRDESK_MAIL__PASSWORD)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "Mail relay credentials are not set; status emails will not be delivered."
                    .to_string(),
            );
        }
    }

    if has_single_underscore_key(&env_keys, "REPAIRDESK_MESSAGING") {
        warnings.push(
            "REPAIRDESK_MESSAGING_* env vars are ignored. Use double underscores (example: REPAIRDESK_MESSAGING__COUNTRY_CODE)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{section}_");
    let double = format!("{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
