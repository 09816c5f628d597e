use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::propagation::FlowTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "tokenflow";
const APP_CONFIG_FILE: &str = "config.json";

/// Millisecond overrides for the flow phases; unset fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FlowTimingOverrides {
    #[serde(default)]
    pub primary_clear_ms: Option<u64>,
    #[serde(default)]
    pub reverse_echo_ms: Option<u64>,
    #[serde(default)]
    pub echo_clear_ms: Option<u64>,
    #[serde(default)]
    pub sync_flash_ms: Option<u64>,
}

impl FlowTimingOverrides {
    pub fn apply_to(&self, defaults: FlowTimings) -> FlowTimings {
        let pick = |value: Option<u64>, fallback: Duration| {
            value.map_or(fallback, Duration::from_millis)
        };
        FlowTimings {
            primary_clear: pick(self.primary_clear_ms, defaults.primary_clear),
            reverse_echo: pick(self.reverse_echo_ms, defaults.reverse_echo),
            echo_clear: pick(self.echo_clear_ms, defaults.echo_clear),
            sync_flash: pick(self.sync_flash_ms, defaults.sync_flash),
        }
    }
}

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub flow_timings: FlowTimingOverrides,
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn timings(&self) -> FlowTimings {
        self.flow_timings.apply_to(FlowTimings::default())
    }
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(?err, "cannot locate config directory; using defaults");
            return AppConfig::default();
        }
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("tokenflow-config-{pid}-{nanos}"));
        path
    }

    fn with_config_file<F: FnOnce(&Path)>(contents: &str, f: F) {
        let root = fixture_root();
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(APP_CONFIG_FILE), contents).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "tokenflow",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/tokenflow/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path(
            "tokenflow",
            "config.json",
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/tokenflow/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("tokenflow", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_directories_fall_back_to_default_timings() {
        let config = load_app_config_with(None, None);
        assert_eq!(config.timings(), FlowTimings::default());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn partial_timing_overrides_keep_other_defaults() {
        with_config_file(
            r#"{
                "flow_timings": { "primary_clear_ms": 300, "sync_flash_ms": 2000 },
                "log_filter": "tokenflow=debug"
            }"#,
            |root| {
                let config = load_app_config_with(Some(root), None);
                let timings = config.timings();
                assert_eq!(timings.primary_clear, Duration::from_millis(300));
                assert_eq!(timings.sync_flash, Duration::from_millis(2_000));
                assert_eq!(timings.reverse_echo, FlowTimings::default().reverse_echo);
                assert_eq!(config.log_filter.as_deref(), Some("tokenflow=debug"));
            },
        );
    }

    #[test]
    fn invalid_payload_falls_back_to_defaults() {
        with_config_file("{ invalid ", |root| {
            let config = load_app_config_with(Some(root), None);
            assert_eq!(config.timings(), FlowTimings::default());
        });
    }
}
