#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;
    use taskboard::libs::config::{Config, ServerConfig, CONFIG_FILE_NAME, ENV_DB, ENV_HOST, ENV_PAGE_SIZE, ENV_PORT};
    use taskboard::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ConfigTestContext {
                storage: DataStorage::with_base(temp_dir.path().join("taskboard")),
                _temp_dir: temp_dir,
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.storage.get_path(CONFIG_FILE_NAME).unwrap()
        }
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
        assert_eq!(config.client.page_size, 10);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        config.client.api_url = "http://tasks.local:8080".to_string();
        config.database = Some(PathBuf::from("/var/lib/taskboard/tasks.db"));

        let path = ctx.config_path();
        config.save_to(&path).unwrap();

        let loaded = Config::read_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.database_path().unwrap(), PathBuf::from("/var/lib/taskboard/tasks.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::write(&path, r#"{ "server": { "host": "localhost", "port": 4000 } }"#).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.server_addr(), "localhost:4000");
        assert_eq!(config.client, Default::default());
        assert_eq!(config.database, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_file(ctx: &mut ConfigTestContext) {
        let path = ctx.config_path();
        fs::write(&path, "{ invalid").unwrap();

        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_overrides(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            (ENV_HOST, "0.0.0.0"),
            (ENV_PORT, "9000"),
            (ENV_DB, "/tmp/override.db"),
            (ENV_PAGE_SIZE, "500"),
        ]));

        assert_eq!(config.server_addr(), "0.0.0.0:9000");
        assert_eq!(config.database, Some(PathBuf::from("/tmp/override.db")));
        assert_eq!(config.client.page_size, 100);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_overrides_are_ignored(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[(ENV_PORT, "not-a-port"), (ENV_PAGE_SIZE, "-3")]));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.client.page_size, 10);
    }
}
