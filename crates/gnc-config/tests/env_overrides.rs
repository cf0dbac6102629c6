use figment::Jail;
use gnc_config::GncConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("GNC_STORE__DEFAULT_LIMIT", "7");
        jail.set_env("GNC_INSPECTOR__MAX_DEPTH", "1");

        let config = GncConfig::load().expect("config loads");
        assert_eq!(config.store.default_limit, 7);
        assert_eq!(config.inspector.max_depth, 1);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gnc")?;
        jail.create_file(
            ".gnc/config.toml",
            r#"
[store]
default_limit = 20
seed_defaults = false
"#,
        )?;
        jail.set_env("GNC_STORE__DEFAULT_LIMIT", "5");

        let config = GncConfig::load().expect("config loads");
        assert_eq!(config.store.default_limit, 5);
        assert!(!config.store.seed_defaults, "file value survives when env is silent");
        Ok(())
    });
}
