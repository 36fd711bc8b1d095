//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use rd_config::RepairDeskConfig;

#[test]
fn loads_mail_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[mail]
host = "mail.example.com"
port = 2465
username = "desk@example.com"
password = "app-password"
sender_name = "Example Repairs"
timeout_secs = 5
"#,
        )?;

        let config: RepairDeskConfig = Figment::from(Serialized::defaults(RepairDeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.mail.host, "mail.example.com");
        assert_eq!(config.mail.port, 2465);
        assert_eq!(config.mail.username, "desk@example.com");
        assert_eq!(config.mail.password, "app-password");
        assert_eq!(config.mail.sender(), "desk@example.com");
        assert_eq!(config.mail.sender_name, "Example Repairs");
        assert_eq!(config.mail.timeout_secs, 5);
        assert!(config.mail.is_configured());
        Ok(())
    });
}

#[test]
fn loads_messaging_and_notify_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[messaging]
company_name = "EXAMPLE REPAIRS"
country_code = "44"
trunk_prefix = "0"

[notify]
template_path = "/srv/templates/status.html"
"#,
        )?;

        let config: RepairDeskConfig = Figment::from(Serialized::defaults(RepairDeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.messaging.company_name, "EXAMPLE REPAIRS");
        assert_eq!(config.messaging.country_code, "44");
        assert_eq!(config.messaging.trunk_prefix, "0");
        assert_eq!(config.notify.template_path, "/srv/templates/status.html");
        // Untouched field keeps its default.
        assert_eq!(
            config.notify.default_remarks,
            "Laboratory analysis in progress."
        );
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[mail]
username = "only-user@example.com"
"#,
        )?;

        let config: RepairDeskConfig = Figment::from(Serialized::defaults(RepairDeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.mail.username, "only-user@example.com");
        assert_eq!(config.mail.host, "smtp.gmail.com");
        assert_eq!(config.mail.port, 465);
        assert!(!config.mail.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "repairdesk.toml",
            r#"
[general]
database_path = "from-toml.db"

[mail]
port = 2465
"#,
        )?;
        jail.set_env("REPAIRDESK_GENERAL__DATABASE_PATH", "from-env.db");
        jail.set_env("REPAIRDESK_MAIL__PORT", "587");

        let config = RepairDeskConfig::load().expect("config loads");

        assert_eq!(config.general.database_path, "from-env.db");
        assert_eq!(config.mail.port, 587);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "repairdesk.toml",
            r#"
[general]
database_path = "shop.db"
case_prefix = "SHOP"
"#,
        )?;

        let config = RepairDeskConfig::load().expect("config loads");
        assert_eq!(config.general.database_path, "shop.db");
        assert_eq!(config.general.case_prefix, "SHOP");
        Ok(())
    });
}

#[test]
fn invalid_case_prefix_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("REPAIRDESK_GENERAL__CASE_PREFIX", "cmt");
        let result = RepairDeskConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
