//! Window session manager and desktop shell for the portfolio site.
//!
//! [`reduce_desktop`] is the pure state machine behind every window operation. [`DesktopProvider`]
//! owns the reactive copy of that state and executes the [`RuntimeEffect`] values it emits;
//! [`DesktopShell`] renders the desktop, windows, and taskbar on top of it.

pub mod apps;
pub mod components;
pub mod deep_link;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod title_bar;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use deep_link::{current_deep_link, project_deep_link_query};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
