//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [webhook]
            url = "https://hooks.slack.com/services/T000/B000/XXXX"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.slack.com/services/T000/B000/XXXX")
        );
        assert!(config.message.username.is_none());
    }

    #[test]
    fn parse_message_section() {
        let toml = r##"
            [message]
            username = "deploy-bot"
            channel = "#releases"
            icon_emoji = ":rocket:"
            icon_url = "https://example.com/a.png"
        "##;

        let config = TomlConfig::parse(toml).unwrap();
        let message = &config.message;

        assert_eq!(message.username.as_deref(), Some("deploy-bot"));
        assert_eq!(message.channel.as_deref(), Some("#releases"));
        assert_eq!(message.icon_emoji.as_deref(), Some(":rocket:"));
        assert_eq!(message.icon_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.webhook.url.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [webhook]
            url = "https://example.com"
            retries = 3
        "#;

        assert!(matches!(
            TomlConfig::parse(toml),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let toml = r"
            [retry]
            max_attempts = 3
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn invalid_syntax_is_rejected() {
        assert!(TomlConfig::parse("[webhook\nurl = ").is_err());
    }
}

mod loading {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nurl = \"https://example.com/hook\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://example.com/hook")
        );
    }

    #[test]
    fn load_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let result = TomlConfig::load(&path);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.webhook.url.is_none());
        assert!(config.message.username.is_none());
    }

    #[test]
    fn default_template_documents_sections() {
        let template = default_config_template();

        assert!(template.contains("[webhook]"));
        assert!(template.contains("[message]"));
        assert!(template.contains("# url = "));
    }

    #[test]
    fn uncommented_template_sets_every_field() {
        let enabled: String = default_config_template()
            .lines()
            .map(|line| match line.strip_prefix("# ") {
                Some(setting) if setting.contains(" = ") => setting,
                _ => line,
            })
            .collect::<Vec<_>>()
            .join("\n");

        let config = TomlConfig::parse(&enabled).unwrap();

        assert!(config.webhook.url.is_some());
        assert_eq!(config.message.username.as_deref(), Some("deploy-bot"));
        assert_eq!(config.message.channel.as_deref(), Some("#alerts"));
        assert_eq!(config.message.icon_emoji.as_deref(), Some(":rocket:"));
        assert!(config.message.icon_url.is_some());
    }
}
