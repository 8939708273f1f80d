//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain and loader
//! layers. Data flows one way:
//!
//! ```text
//! Host event → Event → handle_event → AppState mutation → Actions → host calls
//! ```
//!
//! - [`actions`]: side effects emitted by the event handler
//! - [`handler`]: event processing and state transitions
//! - [`state`]: state container and view model computation
//! - [`status`]: index load status

pub mod actions;
pub mod handler;
pub mod state;
pub mod status;

#[cfg(test)]
mod flow_tests;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use status::LoadStatus;
