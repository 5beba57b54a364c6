use serde::{Deserialize, Serialize};

use crate::notifications::Notification;

/// Rank sentinel assigned to a window when it is raised; every other window
/// slides down one step, floored at [`MIN_RANK`].
pub const RAISE_RANK: i32 = 100;
/// Lowest rank a window can sink to.
pub const MIN_RANK: i32 = 1;
/// Number of workspaces; selection cycles within `1..=WORKSPACE_COUNT`.
pub const WORKSPACE_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// The fixed set of managed windows.
pub enum WindowKind {
    Terminal,
    Music,
    Ranger,
}

impl WindowKind {
    /// Stable string id, used for DOM hooks and debugging.
    pub fn id(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Music => "music",
            Self::Ranger => "ranger",
        }
    }

    /// Title shown in the window chrome.
    pub fn title(self) -> &'static str {
        match self {
            Self::Terminal => "zariel-terminal",
            Self::Music => "Z radio",
            Self::Ranger => "ranger-fm",
        }
    }

    /// Glyph shown in the top bar toggles.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Terminal => "\u{2318}",
            Self::Music => "\u{266a}",
            Self::Ranger => "\u{1f4c1}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One managed window: open flag plus stacking rank (higher is frontmost).
pub struct WindowRecord {
    pub kind: WindowKind,
    pub is_open: bool,
    pub rank: i32,
}

#[derive(Debug, Clone, PartialEq)]
/// Memory-resident desktop session state. Nothing here is persisted; the
/// whole record lives and dies with the page.
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    /// The window considered focused. Closing the active window does not
    /// move this pointer, so it may reference a closed window; renderers
    /// gate on `is_open` instead.
    pub active_window: WindowKind,
    /// Current workspace in `1..=WORKSPACE_COUNT`. Only workspace 1 renders
    /// the window set.
    pub workspace: u8,
    pub search_open: bool,
    /// Canonical name of the applied theme.
    pub current_theme: String,
    pub notifications: Vec<Notification>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: vec![
                WindowRecord {
                    kind: WindowKind::Terminal,
                    is_open: true,
                    rank: 100,
                },
                WindowRecord {
                    kind: WindowKind::Music,
                    is_open: true,
                    rank: 99,
                },
                WindowRecord {
                    kind: WindowKind::Ranger,
                    is_open: false,
                    rank: 98,
                },
            ],
            active_window: WindowKind::Terminal,
            workspace: 1,
            search_open: false,
            current_theme: crate::theme::DEFAULT_THEME_NAME.to_string(),
            notifications: Vec::new(),
        }
    }
}

impl DesktopState {
    /// Looks up a window record by kind.
    pub fn window(&self, kind: WindowKind) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.kind == kind)
    }

    /// Whether `kind` is both open and the active window.
    pub fn is_active(&self, kind: WindowKind) -> bool {
        self.active_window == kind
    }
}
