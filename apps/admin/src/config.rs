use std::{
    fs,
    path::{Path, PathBuf},
};

use catalog_core::Locale;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub seed_path: Option<PathBuf>,
    pub locale: Locale,
    pub log_filter: String,
    /// Entries that could not be applied; logged once tracing is up.
    pub ignored: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_path: None,
            locale: Locale::En,
            log_filter: "warn".into(),
            ignored: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    seed_path: Option<PathBuf>,
    locale: Option<String>,
    log_filter: Option<String>,
}

impl Settings {
    pub fn set_locale(&mut self, raw: &str) {
        match raw.parse::<Locale>() {
            Ok(locale) => self.locale = locale,
            Err(err) => self
                .ignored
                .push(format!("{}; keeping locale '{}'", err.message, self.locale)),
        }
    }

    /// Command-line flags take precedence over the file and the environment.
    pub fn apply_cli(&mut self, seed: Option<PathBuf>, locale: Option<&str>) {
        if let Some(seed) = seed {
            self.seed_path = Some(seed);
        }
        if let Some(locale) = locale {
            self.set_locale(locale);
        }
    }
}

/// Loads settings from the config file (if present) and the process environment.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let file_contents = fs::read_to_string(path).ok();
    let mut settings = resolve_settings(file_contents.as_deref(), |key| std::env::var(key).ok());
    if config_path.is_some() && file_contents.is_none() {
        settings
            .ignored
            .push(format!("config file '{}' could not be read", path.display()));
    }
    settings
}

pub fn resolve_settings(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<FileConfig>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.seed_path {
                    settings.seed_path = Some(v);
                }
                if let Some(v) = file_cfg.locale {
                    settings.set_locale(&v);
                }
                if let Some(v) = file_cfg.log_filter {
                    settings.log_filter = v;
                }
            }
            Err(err) => settings.ignored.push(format!("invalid config file: {err}")),
        }
    }

    if let Some(v) = env("CATALOG_SEED_PATH") {
        settings.seed_path = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__SEED_PATH") {
        settings.seed_path = Some(PathBuf::from(v));
    }

    if let Some(v) = env("CATALOG_LOCALE") {
        settings.set_locale(&v);
    }
    if let Some(v) = env("APP__LOCALE") {
        settings.set_locale(&v);
    }

    if let Some(v) = env("CATALOG_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let settings = resolve_settings(None, env_of(&[]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_values_apply() {
        let raw = r#"
            seed_path = "./data/listings.json"
            locale = "ar"
            log_filter = "debug"
        "#;
        let settings = resolve_settings(Some(raw), env_of(&[]));
        assert_eq!(settings.seed_path, Some(PathBuf::from("./data/listings.json")));
        assert_eq!(settings.locale, Locale::Ar);
        assert_eq!(settings.log_filter, "debug");
        assert!(settings.ignored.is_empty());
    }

    #[test]
    fn env_overrides_file_and_app_prefix_wins() {
        let raw = r#"locale = "ar""#;
        let settings = resolve_settings(
            Some(raw),
            env_of(&[
                ("CATALOG_LOCALE", "en"),
                ("CATALOG_SEED_PATH", "a.json"),
                ("APP__SEED_PATH", "b.json"),
            ]),
        );
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.seed_path, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn unknown_locale_falls_back_and_is_reported() {
        let settings = resolve_settings(None, env_of(&[("APP__LOCALE", "fr")]));
        assert_eq!(settings.locale, Locale::En);
        assert_eq!(settings.ignored.len(), 1);
        assert!(settings.ignored[0].contains("unsupported locale 'fr'"));
    }

    #[test]
    fn cli_flags_override_app_env() {
        let mut settings = resolve_settings(
            Some(r#"seed_path = "file.json""#),
            env_of(&[("APP__SEED_PATH", "env.json"), ("APP__LOCALE", "en")]),
        );
        settings.apply_cli(Some(PathBuf::from("cli.json")), Some("ar"));
        assert_eq!(settings.seed_path, Some(PathBuf::from("cli.json")));
        assert_eq!(settings.locale, Locale::Ar);
    }

    #[test]
    fn absent_cli_flags_keep_env_values() {
        let mut settings = resolve_settings(
            None,
            env_of(&[("APP__SEED_PATH", "env.json"), ("APP__LOCALE", "ar")]),
        );
        settings.apply_cli(None, None);
        assert_eq!(settings.seed_path, Some(PathBuf::from("env.json")));
        assert_eq!(settings.locale, Locale::Ar);
        assert!(settings.ignored.is_empty());
    }

    #[test]
    fn malformed_file_is_reported_not_fatal() {
        let settings = resolve_settings(Some("locale = ["), env_of(&[]));
        assert_eq!(settings.locale, Locale::En);
        assert!(settings.ignored[0].starts_with("invalid config file"));
    }

    #[test]
    fn explicit_config_path_is_read() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("admin.toml");
        fs::write(&path, "log_filter = \"info\"\n").expect("write config");

        let settings = load_settings(Some(&path));
        assert_eq!(settings.log_filter, "info");
    }
}
