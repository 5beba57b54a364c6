//! Reducer actions, side-effect intents, and transition logic for the
//! desktop session.

use crate::{
    model::{DesktopState, WindowKind, MIN_RANK, RAISE_RANK, WORKSPACE_COUNT},
    notifications::{self, NotificationRequest},
    theme::{self, ThemePalette},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, raise it, and make it active.
    OpenWindow {
        /// Window to open.
        kind: WindowKind,
    },
    /// Close a window. Rank and the active-window pointer are untouched.
    CloseWindow {
        /// Window to close.
        kind: WindowKind,
    },
    /// Close the window when it is open and active; otherwise open it.
    ToggleWindow {
        /// Window to toggle.
        kind: WindowKind,
    },
    /// Raise a window and make it active without changing its open flag.
    FocusWindow {
        /// Window to focus.
        kind: WindowKind,
    },
    /// Switch directly to a workspace. Callers supply values from `1..=5`.
    SetWorkspace {
        /// Target workspace index.
        workspace: u8,
    },
    /// Step to an adjacent workspace, wrapping at both ends.
    CycleWorkspace {
        /// `+1` or `-1`.
        delta: i8,
    },
    /// Show or hide the app-launcher search dialog.
    SetSearchOpen {
        /// Whether the dialog is visible.
        open: bool,
    },
    /// Apply a theme by name, falling back to `default` when unrecognized.
    SetTheme {
        /// Requested theme name.
        name: String,
    },
    /// Append a toast notification.
    PushNotification {
        /// Toast payload.
        request: NotificationRequest,
        /// Creation timestamp in unix milliseconds; becomes the toast id.
        timestamp_ms: u64,
    },
    /// Remove a toast, whether dismissed by the user or expired.
    DismissNotification {
        /// Toast id to remove.
        id: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime
/// to execute. The reducer itself never touches the DOM or a timer.
pub enum RuntimeEffect {
    /// Write the palette's four CSS custom properties on the document root.
    ApplyThemeVariables(&'static ThemePalette),
    /// Arm the self-expiry timer for a newly pushed toast.
    ScheduleNotificationExpiry {
        /// Toast id to dismiss when the timer fires.
        id: u64,
        /// Expiry delay in milliseconds.
        duration_ms: u64,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting
/// side effects.
///
/// Every action is total: a window action whose target is not in the window
/// list is a silent no-op, never an error.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { kind } => {
            open_window(state, kind);
        }
        DesktopAction::CloseWindow { kind } => {
            if let Some(window) = state.windows.iter_mut().find(|w| w.kind == kind) {
                window.is_open = false;
            }
        }
        DesktopAction::ToggleWindow { kind } => {
            let open_and_active = state
                .window(kind)
                .map(|w| w.is_open && state.active_window == kind)
                .unwrap_or(false);
            if open_and_active {
                if let Some(window) = state.windows.iter_mut().find(|w| w.kind == kind) {
                    window.is_open = false;
                }
            } else {
                open_window(state, kind);
            }
        }
        DesktopAction::FocusWindow { kind } => {
            if state.window(kind).is_some() {
                raise_window(state, kind);
                state.active_window = kind;
            }
        }
        DesktopAction::SetWorkspace { workspace } => {
            state.workspace = workspace;
        }
        DesktopAction::CycleWorkspace { delta } => {
            let mut next = state.workspace as i8 + delta;
            if next < 1 {
                next = WORKSPACE_COUNT as i8;
            }
            if next > WORKSPACE_COUNT as i8 {
                next = 1;
            }
            state.workspace = next as u8;
        }
        DesktopAction::SetSearchOpen { open } => {
            state.search_open = open;
        }
        DesktopAction::SetTheme { name } => {
            let (canonical, palette) = theme::resolve(&name);
            state.current_theme = canonical.to_string();
            effects.push(RuntimeEffect::ApplyThemeVariables(palette));
        }
        DesktopAction::PushNotification {
            request,
            timestamp_ms,
        } => {
            let (id, duration_ms) =
                notifications::push(&mut state.notifications, request, timestamp_ms);
            effects.push(RuntimeEffect::ScheduleNotificationExpiry { id, duration_ms });
        }
        DesktopAction::DismissNotification { id } => {
            notifications::dismiss(&mut state.notifications, id);
        }
    }
    effects
}

fn open_window(state: &mut DesktopState, kind: WindowKind) {
    if state.window(kind).is_none() {
        return;
    }
    for window in &mut state.windows {
        if window.kind == kind {
            window.is_open = true;
        }
    }
    raise_window(state, kind);
    state.active_window = kind;
}

// Raising is the only rank mutation: the target takes the sentinel and
// everyone else slides down one, floored at MIN_RANK. Recency order among
// the rest is preserved without ranks ever growing unbounded.
fn raise_window(state: &mut DesktopState, kind: WindowKind) {
    for window in &mut state.windows {
        if window.kind == kind {
            window.rank = RAISE_RANK;
        } else {
            window.rank = (window.rank - 1).max(MIN_RANK);
        }
    }
}
