#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tempi::libs::config::{Config, LocalSettings, ACTIVITY_CODES_FILE, DEFAULT_JIRA_URL, LOCAL_SETTINGS_FILE};
    use tempi::libs::error::TempiError;
    use test_context::{test_context, TestContext};

    /// A scratch directory standing in for the working directory and tempi home.
    struct ConfigTestContext {
        dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[("TEMPI_HOME", "/tmp/tempi")]));

        assert_eq!(config.jira.api_url, DEFAULT_JIRA_URL);
        assert_eq!(config.jira.token, None);
        assert_eq!(config.worker, None);
        assert_eq!(config.home, PathBuf::from("/tmp/tempi"));
        assert_eq!(config.config_dir(), Path::new("/tmp/tempi").join("config"));
        assert_eq!(config.jira.activity_codes.get("Development").map(String::as_str), Some("Design"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_home_defaults_to_platform_data_dir() {
        let config = Config::from_lookup(lookup(&[("HOME", "/home/jdoe")]));
        assert_eq!(config.home, PathBuf::from("/home/jdoe/.local/share/lacodda/tempi"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("JIRA_ADDR", "https://jira.example.org/"),
            ("JIRA_TOKEN", "abc123"),
            ("TEMPI_WORKER", "jdoe"),
            ("LOGNAME", "someone-else"),
        ]));

        assert_eq!(config.jira.api_url, "https://jira.example.org");
        assert_eq!(config.jira.require_token().unwrap(), "abc123");
        assert_eq!(config.require_worker().unwrap(), "jdoe");
    }

    #[test]
    fn test_worker_falls_back_to_login_name() {
        let from_logname = Config::from_lookup(lookup(&[("LOGNAME", "jdoe"), ("USER", "root")]));
        assert_eq!(from_logname.worker.as_deref(), Some("jdoe"));

        let from_user = Config::from_lookup(lookup(&[("TEMPI_WORKER", ""), ("USER", "root")]));
        assert_eq!(from_user.worker.as_deref(), Some("root"));
    }

    #[test]
    fn test_missing_token_and_worker_are_config_errors() {
        let config = Config::from_lookup(lookup(&[("JIRA_TOKEN", "  ")]));

        assert!(matches!(config.jira.require_token().unwrap_err(), TempiError::Config(_)));
        assert!(matches!(config.require_worker().unwrap_err(), TempiError::Config(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_activity_codes_override(ctx: &mut ConfigTestContext) {
        let home = ctx.dir.path().to_string_lossy().to_string();
        let config = Config::from_lookup(lookup(&[("TEMPI_HOME", home.as_str())]));
        fs::create_dir_all(config.config_dir()).unwrap();
        fs::write(config.config_dir().join(ACTIVITY_CODES_FILE), r#"{"Support": "Support-Code"}"#).unwrap();

        let config = config.load_activity_codes().unwrap();
        assert_eq!(config.jira.activity_codes.len(), 1);
        assert_eq!(config.jira.activity_codes["Support"], "Support-Code");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_activity_codes_default_when_file_absent(ctx: &mut ConfigTestContext) {
        let home = ctx.dir.path().to_string_lossy().to_string();
        let config = Config::from_lookup(lookup(&[("TEMPI_HOME", home.as_str())])).load_activity_codes().unwrap();
        assert_eq!(config.jira.activity_codes.len(), 4);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_local_settings_missing_file(ctx: &mut ConfigTestContext) {
        let settings = LocalSettings::read(ctx.dir.path()).unwrap();
        assert_eq!(settings, LocalSettings::default());
        assert!(matches!(settings.require_default_file().unwrap_err(), TempiError::Config(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_local_settings_save_and_read(ctx: &mut ConfigTestContext) {
        let settings = LocalSettings {
            default_file: Some(PathBuf::from("2023-02-20.json")),
        };
        settings.save(ctx.dir.path()).unwrap();
        assert!(ctx.dir.path().join(LOCAL_SETTINGS_FILE).exists());

        let read = LocalSettings::read(ctx.dir.path()).unwrap();
        assert_eq!(read.require_default_file().unwrap(), Path::new("2023-02-20.json"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_local_settings_corrupt_file(ctx: &mut ConfigTestContext) {
        fs::write(ctx.dir.path().join(LOCAL_SETTINGS_FILE), "not json").unwrap();

        let err = LocalSettings::read(ctx.dir.path()).unwrap_err();
        assert!(err.to_string().contains(LOCAL_SETTINGS_FILE));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_activity_codes_must_be_distinct(ctx: &mut ConfigTestContext) {
        let home = ctx.dir.path().to_string_lossy().to_string();
        let config = Config::from_lookup(lookup(&[("TEMPI_HOME", home.as_str())]));
        fs::create_dir_all(config.config_dir()).unwrap();
        fs::write(
            config.config_dir().join(ACTIVITY_CODES_FILE),
            r#"{"Development": "Design", "Design": "Design", "Support": "Support"}"#,
        )
        .unwrap();

        let err = config.load_activity_codes().unwrap_err();
        assert!(matches!(err, TempiError::Config(_)));
        assert!(err.to_string().contains(ACTIVITY_CODES_FILE));
        assert!(err.to_string().contains("'Design'"));
    }
}
