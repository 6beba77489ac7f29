use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{
    Config, DashboardSettings, LoggingSettings, OutputFormat, OutputSettings, SourceSettings,
};

/// Prefix for environment overrides, e.g. `PULSE_DASHBOARD__DEFAULT_RANGE=7d`.
pub const ENV_PREFIX: &str = "PULSE";

/// Loads the application configuration from an optional `config.toml` in the
/// working directory, layered under `PULSE_*` environment variables.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(None)
}

/// Loads the configuration from `path` (which must exist) or, when `None`, from an
/// optional `config.toml`. Environment variables override file values, and the
/// result is validated before it is returned.
pub fn load_config_from(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_layered(path, ENV_PREFIX)
}

fn load_layered(path: Option<&Path>, env_prefix: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder();
    let builder = match path {
        Some(path) => builder.add_source(config::File::from(path)),
        None => builder.add_source(config::File::with_name("config").required(false)),
    };

    let settings = builder
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("dashboard.channels"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = settings.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Channel, RangeSelector};
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_toml("");
        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dashboard.channels.len(), 4);
        assert_eq!(config.dashboard.sparkline_len, 14);
        assert_eq!(config.source.demo_days, 120);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_toml(
            r#"
            [dashboard]
            channels = ["shopify", "amazon"]
            default_range = "7d"
            sparkline_len = 7

            [source]
            path = "data/rows.csv"

            [logging]
            level = "debug"

            [output]
            format = "json"
            "#,
        );
        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(
            config.dashboard.channels,
            vec![Channel::from("shopify"), Channel::from("amazon")]
        );
        assert_eq!(config.dashboard.default_range, RangeSelector::Last7Days);
        assert_eq!(config.dashboard.sparkline_len, 7);
        assert_eq!(config.dashboard.currency_symbol, "₹");
        assert_eq!(config.source.path.as_deref(), Some(Path::new("data/rows.csv")));
        assert_eq!(config.source.demo_seed, 123456);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_range_falls_back_instead_of_failing() {
        let file = write_toml("[dashboard]\ndefault_range = \"quarter\"\n");
        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(config.dashboard.default_range, RangeSelector::Last30Days);
    }

    #[test]
    fn duplicate_channels_are_rejected() {
        let file = write_toml("[dashboard]\nchannels = [\"shopify\", \"shopify\"]\n");
        let err = load_config_from(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(msg) if msg.contains("shopify")));
    }

    #[test]
    fn zero_sparkline_is_rejected() {
        let file = write_toml("[dashboard]\nsparkline_len = 0\n");
        assert!(matches!(
            load_config_from(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn environment_overrides_file_values() {
        // A prefix of its own, not matched by `PULSE_`, so the other tests never see these.
        const PREFIX: &str = "PULSETEST";
        let vars = [
            ("PULSETEST_DASHBOARD__DEFAULT_RANGE", "7d"),
            ("PULSETEST_DASHBOARD__CHANNELS", "shopify,myntra"),
            ("PULSETEST_DASHBOARD__SPARKLINE_LEN", "7"),
        ];
        for (key, value) in vars {
            // SAFETY: no other test reads variables under this prefix.
            unsafe { std::env::set_var(key, value) };
        }

        let file = write_toml(
            r#"
            [dashboard]
            channels = ["nykaa"]
            default_range = "today"
            sparkline_len = 30
            "#,
        );
        let result = load_layered(Some(file.path()), PREFIX);

        for (key, _) in vars {
            // SAFETY: as above.
            unsafe { std::env::remove_var(key) };
        }

        let config = result.unwrap();
        assert_eq!(config.dashboard.default_range, RangeSelector::Last7Days);
        assert_eq!(
            config.dashboard.channels,
            vec![Channel::from("shopify"), Channel::from("myntra")]
        );
        assert_eq!(config.dashboard.sparkline_len, 7);
        assert_eq!(config.source.demo_days, 120);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_config_from(Some(Path::new("/nonexistent/pulse.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
