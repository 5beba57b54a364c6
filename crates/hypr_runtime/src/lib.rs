//! Hyprland-skin desktop runtime for the portfolio site.
//!
//! The crate splits into a pure layer and a view layer. `model`, `reducer`,
//! `theme`, `notifications`, `shell`, and `ranger` are plain state machines
//! with no UI dependencies; `components` renders them with Leptos and owns
//! every timer and input listener (including their teardown).

pub mod components;
pub mod model;
pub mod notifications;
pub mod ranger;
pub mod reducer;
pub mod shell;
pub mod theme;

mod effect_executor;
mod runtime_context;

pub use components::{BootLoader, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
