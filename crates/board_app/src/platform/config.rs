use std::fs;
use std::path::Path;
use std::time::Duration;

use board_core::{BoardConfig, SearchMode};
use board_engine::{FetchSettings, ResponseShape};
use board_logging::board_info;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;
use super::ui::constants;

pub const DEFAULT_CONFIG_FILE: &str = "board.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {message}")]
    Parse { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Re-query the backend instead of filtering fetched items.
    pub remote: bool,
    pub debounce_ms: u64,
    pub min_len: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            remote: false,
            debounce_ms: 300,
            min_len: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::File,
            level: "info".to_string(),
        }
    }
}

/// Texts shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub header_title: String,
    pub search_placeholder: String,
    pub tab_open: String,
    pub tab_all: String,
    pub sort_new_first: String,
    pub sort_title: String,
    pub load_more: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            header_title: constants::HEADER_TITLE.to_string(),
            search_placeholder: constants::SEARCH_PLACEHOLDER.to_string(),
            tab_open: constants::TAB_OPEN.to_string(),
            tab_all: constants::TAB_ALL.to_string(),
            sort_new_first: constants::SORT_NEW_FIRST.to_string(),
            sort_title: constants::SORT_TITLE.to_string(),
            load_more: constants::LOAD_MORE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub endpoint: String,
    pub page_size: u32,
    /// Endpoint returns a bare array instead of `content`/`meta`.
    pub plain_response: bool,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub detail_kind: String,
    pub search: SearchSettings,
    pub log: LogSettings,
    pub labels: Labels,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        let board = BoardConfig::default();
        Self {
            base_url: fetch.base_url,
            endpoint: fetch.endpoint,
            page_size: fetch.page_size,
            plain_response: false,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            detail_kind: board.detail_kind,
            search: SearchSettings::default(),
            log: LogSettings::default(),
            labels: Labels::default(),
        }
    }
}

impl AppConfig {
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            search_mode: if self.search.remote {
                SearchMode::Remote
            } else {
                SearchMode::Local
            },
            debounce_window: Duration::from_millis(self.search.debounce_ms),
            min_search_len: self.search.min_len,
            detail_kind: self.detail_kind.clone(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            page_size: self.page_size,
            shape: if self.plain_response {
                ResponseShape::Plain
            } else {
                ResponseShape::Paged
            },
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        board_logging::level_from_name(&self.log.level).unwrap_or(LevelFilter::Info)
    }
}

/// Loads the RON config at `path`; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            board_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source: err,
            })
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.board_config(), BoardConfig::default());
    }

    #[test]
    fn partial_file_overrides_selected_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"(
                base_url: "https://portal.example",
                endpoint: "api/services/servicerelease/inReview",
                detail_kind: "serviceadminboarddetail",
                search: (remote: true, debounce_ms: 500, min_len: Some(3)),
                log: (destination: Both, level: "debug"),
            )"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.page_size, 15);
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.log.destination, LogDestination::Both);
        assert_eq!(config.labels, Labels::default());

        let board = config.board_config();
        assert_eq!(board.search_mode, SearchMode::Remote);
        assert_eq!(board.debounce_window, Duration::from_millis(500));
        assert_eq!(board.min_search_len, Some(3));
        assert_eq!(board.detail_kind, "serviceadminboarddetail");

        let fetch = config.fetch_settings();
        assert_eq!(fetch.base_url, "https://portal.example");
        assert_eq!(fetch.shape, ResponseShape::Paged);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "(page_size: \"many\")").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
