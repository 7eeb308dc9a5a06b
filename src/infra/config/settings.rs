use serde::Deserialize;

/// Fully merged application settings, immutable after load.
///
/// Missing keys fall back to zero values; only type mismatches fail the
/// decode.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WalletyConfig {
    pub app_name: String,
    pub logging: LoggingSettings,
    pub service: ServiceSettings,
    pub db: DbSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LoggingSettings {
    /// Parsed for schema compatibility; output is always structured.
    #[serde(rename = "structured-logging")]
    pub structured_logging: bool,
    #[serde(rename = "debuglevel")]
    pub debug_level: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ServiceSettings {
    pub port: u16,
    pub debug: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DbSettings {
    pub variant: String,
    pub username: String,
    pub dbname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_renamed_logging_keys() {
        let config: WalletyConfig = serde_yaml::from_str(
            r#"logging:
  structured-logging: true
  debuglevel: info
"#,
        )
        .expect("logging section must decode");

        assert!(config.logging.structured_logging);
        assert_eq!(config.logging.debug_level, "info");
    }

    #[test]
    fn missing_sections_decode_to_zero_values() {
        let config: WalletyConfig =
            serde_yaml::from_str("app_name: Wallety\n").expect("partial config must decode");

        assert_eq!(config.app_name, "Wallety");
        assert_eq!(config.service.port, 0);
        assert_eq!(config.db.variant, "");
        assert!(!config.logging.structured_logging);
    }

    #[test]
    fn rejects_type_mismatch() {
        let result = serde_yaml::from_str::<WalletyConfig>(
            r#"service:
  port: "not-a-port"
"#,
        );

        assert!(result.is_err());
    }
}
