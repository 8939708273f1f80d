//! Terminal user interface.
//!
//! Rendering is declarative: `AppState` computes a [`UIViewModel`] for the
//! current pane size and the components print it with ANSI escapes.
//!
//! - [`viewmodel`]: display-ready types
//! - [`renderer`]: entry point
//! - [`components`]: per-section renderers
//! - [`helpers`]: cursor positioning and match highlighting
//! - [`theme`]: color schemes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{EmptyState, FooterInfo, HeaderInfo, ListLine, SearchBarInfo, UIViewModel};
