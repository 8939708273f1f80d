//! docnav: a Zellij plugin for browsing a docserver's document index.
//!
//! The plugin fetches the index of published documents once, shows it grouped
//! by category, and narrows it as you type. Enter opens the first remaining
//! document in an external viewer.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host events, host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state, events, actions
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Loader        │   │ Domain        │
//! │ (ui/)         │   │ (loader/)     │   │ (domain/)     │
//! │ - Rendering   │   │ - Index fetch │   │ - Index model │
//! │ - Theming     │   │ - Correlation │   │ - Filtering   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//! ```
//!
//! The domain, loader and app layers never call Zellij, so the whole flow
//! from a keystroke to the resulting actions runs in host tests.
//!
//! # Configuration
//!
//! ```kdl
//! plugin location="file:/path/to/docnav.wasm" {
//!     server_url "http://localhost:5000"
//!     open_command "xdg-open"
//!     match_mode "substring"
//!     theme "catppuccin-mocha"
//!     trace_level "info"
//! }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod loader;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, LoadStatus};
pub use domain::{DocnavError, MatchMode, Result};
pub use ui::Theme;

use crate::infrastructure::url::{has_scheme, normalize_base};
use crate::loader::IndexLoader;
use std::collections::BTreeMap;

/// Default docserver address.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Default program receiving document URLs.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Default tracing directive.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from the Zellij plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the docserver, without trailing slashes.
    pub server_url: String,

    /// Program that receives the document URL on Enter.
    pub open_command: String,

    /// Matching strategy for the filter.
    pub match_mode: MatchMode,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the host home mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing, e.g. `debug` or `docnav=trace`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            match_mode: MatchMode::default(),
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses the configuration map, falling back to the default for every
    /// missing or invalid value.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use docnav::{Config, MatchMode};
    ///
    /// let map = BTreeMap::from([
    ///     ("server_url".to_string(), "http://docs.internal:8080/".to_string()),
    ///     ("match_mode".to_string(), "telepathic".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.server_url, "http://docs.internal:8080");
    /// assert_eq!(config.match_mode, MatchMode::Substring);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            server_url: parse_value(config, "server_url", parse_server_url)
                .unwrap_or(defaults.server_url),
            open_command: parse_value(config, "open_command", parse_open_command)
                .unwrap_or(defaults.open_command),
            match_mode: parse_value(config, "match_mode", parse_match_mode)
                .unwrap_or(defaults.match_mode),
            theme_name: non_empty(config, "theme"),
            theme_file: non_empty(config, "theme_file"),
            trace_level: non_empty(config, "trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Lists every value in the map that `from_zellij` had to replace.
    ///
    /// Called after tracing is up so the problems can be logged.
    #[must_use]
    pub fn validate(config: &BTreeMap<String, String>) -> Vec<DocnavError> {
        let checks: [(&str, fn(&str) -> Result<()>); 3] = [
            ("server_url", |v| parse_server_url(v).map(drop)),
            ("open_command", |v| parse_open_command(v).map(drop)),
            ("match_mode", |v| parse_match_mode(v).map(drop)),
        ];

        checks
            .iter()
            .filter_map(|(key, check)| config.get(*key).and_then(|v| check(v).err()))
            .collect()
    }
}

fn parse_value<T>(
    config: &BTreeMap<String, String>,
    key: &str,
    parse: fn(&str) -> Result<T>,
) -> Option<T> {
    config.get(key).and_then(|value| parse(value).ok())
}

fn non_empty(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(String::from)
}

fn parse_server_url(value: &str) -> Result<String> {
    let url = normalize_base(value);
    if !has_scheme(&url) {
        return Err(DocnavError::Config(format!(
            "server_url must be an absolute URL, got {value:?}"
        )));
    }
    Ok(url)
}

fn parse_open_command(value: &str) -> Result<String> {
    let command = value.trim();
    if command.is_empty() {
        return Err(DocnavError::Config("open_command is empty".to_string()));
    }
    Ok(command.to_string())
}

fn parse_match_mode(value: &str) -> Result<MatchMode> {
    MatchMode::parse(value).ok_or_else(|| {
        DocnavError::Config(format!(
            "match_mode must be \"substring\" or \"fuzzy\", got {value:?}"
        ))
    })
}

/// Loads the configured theme: `theme_file` first, then `theme`, then the
/// default. Failures are logged and fall through to the next choice.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default"),
        }
    }

    config
        .theme_name
        .as_ref()
        .and_then(|name| {
            let theme = Theme::from_name(name);
            if theme.is_none() {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
            }
            theme
        })
        .unwrap_or_default()
}

/// Builds the initial application state from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(server_url = %config.server_url, match_mode = ?config.match_mode, "initializing docnav");

    AppState::new(
        IndexLoader::new(&config.server_url),
        config.match_mode,
        load_theme(config),
    )
}
