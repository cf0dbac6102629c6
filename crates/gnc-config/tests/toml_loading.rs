//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gnc_config::GncConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_store_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
default_limit = 10
seed_defaults = false
"#,
        )?;

        let config: GncConfig = Figment::from(Serialized::defaults(GncConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.default_limit, 10);
        assert!(!config.store.seed_defaults);
        assert_eq!(config.inspector.max_depth, 3, "untouched sections keep defaults");
        Ok(())
    });
}

#[test]
fn loads_inspector_lists_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[inspector]
root = "/srv/game-night"
max_depth = 5
extra_read_only_dirs = ["vendor/", "public/fonts/"]
extra_read_only_files = ["Cargo.lock"]
required_files = []
"#,
        )?;

        let config: GncConfig = Figment::from(Serialized::defaults(GncConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.inspector.root, "/srv/game-night");
        assert_eq!(config.inspector.max_depth, 5);
        assert_eq!(config.inspector.auto_expand_depth, 2);
        assert_eq!(
            config.inspector.extra_read_only_dirs,
            vec!["vendor/".to_string(), "public/fonts/".to_string()]
        );
        assert_eq!(config.inspector.extra_read_only_files, vec!["Cargo.lock".to_string()]);
        assert!(config.inspector.required_files.is_empty());
        assert!(!config.inspector.required_directories.is_empty());
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gnc")?;
        jail.create_file(
            ".gnc/config.toml",
            r#"
[general]
pretty = false
"#,
        )?;

        let config = GncConfig::load().expect("config loads");
        assert!(!config.general.pretty);
        Ok(())
    });
}

#[test]
fn invalid_value_in_project_file_fails_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gnc")?;
        jail.create_file(
            ".gnc/config.toml",
            r#"
[inspector]
max_depth = 0
"#,
        )?;

        assert!(GncConfig::load().is_err());
        Ok(())
    });
}
