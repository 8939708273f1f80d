//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the docnav library and Zellij: it turns
//! host events into library [`Event`]s and carries out the [`Action`]s the
//! library returns. All decisions live in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: request `WebAccess`, `RunCommands`, `FullHdAccess`
//! 3. **Fetch**: on the first grant, `GET {server_url}/available`
//! 4. **Update**: keys and host results go through `handle_event`
//! 5. **Render**: call the library renderer
//!
//! # Event Mapping
//!
//! - `Key(Char)` → `Event::Char`, `Key(Backspace)` → `Event::Backspace`
//! - `Key(Enter)` → `Event::Submit`, `Key(Esc)` → `Event::Escape`
//! - `Key(Up/Down)`, `Ctrl+p/n` → `Event::ScrollUp/ScrollDown`
//! - `WebRequestResult` tagged as the index request → `Event::IndexResponse`
//! - `RunCommandResult` tagged as an opener → `Event::OpenerFinished`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use docnav::loader::{opener_context, RequestKind, URL_KEY};
use docnav::{handle_event, Action, Config, Event};

register_plugin!(State);

struct State {
    app: docnav::AppState,

    /// Program receiving document URLs.
    open_command: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: docnav::initialize(&default_config),
            open_command: default_config.open_command,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        docnav::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        for problem in Config::validate(&configuration) {
            tracing::warn!(error = %problem, "invalid configuration value, using default");
        }
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = docnav::initialize(&config);
        self.open_command.clone_from(&config.open_command);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::RunCommands,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match RequestKind::from_context(&context) {
                    Some(RequestKind::Index) => Event::IndexResponse { status, body },
                    _ => {
                        tracing::debug!(status, "ignoring untagged web request result");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                match RequestKind::from_context(&context) {
                    Some(RequestKind::OpenDocument) => Event::OpenerFinished {
                        url: context.get(URL_KEY).cloned().unwrap_or_default(),
                        exit_code,
                        stderr: String::from_utf8_lossy(&stderr).into_owned(),
                    },
                    _ => {
                        tracing::debug!(exit_code = ?exit_code, "ignoring untagged command result");
                        return false;
                    }
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        docnav::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::ScrollDown),
                BareKey::Char('p') => Some(Event::ScrollUp),
                BareKey::Char('c') => Some(Event::CloseFocus),
                _ => None,
            };
        }
        if key.key_modifiers.contains(&KeyModifier::Alt) {
            return None;
        }

        Some(match key.bare_key {
            BareKey::Down => Event::ScrollDown,
            BareKey::Up => Event::ScrollUp,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchIndex(request) => {
                tracing::debug!(url = %request.url, "requesting document index");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context.clone(),
                );
            }
            Action::OpenDocument { url } => {
                tracing::debug!(command = %self.open_command, url = %url, "launching opener");
                run_command(&[self.open_command.as_str(), url.as_str()], opener_context(url));
            }
        }
    }
}
