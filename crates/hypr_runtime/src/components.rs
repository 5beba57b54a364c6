//! Desktop shell UI composition and interaction surfaces.
//!
//! Every timer and global input listener in the crate is created here and
//! torn down through `on_cleanup`, so unmounting any view (or the whole
//! shell) cancels its loops unconditionally.

mod boot;
mod games;
mod music;
mod notifications;
mod ranger_view;
mod search;
mod shortcuts;
mod terminal;
mod topbar;
mod window;

use leptos::*;

use crate::{
    model::WindowKind,
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

use self::{
    music::MusicWidget, notifications::NotificationCenter, ranger_view::RangerView,
    search::SearchDialog, shortcuts::KeyboardShortcuts, terminal::TerminalView, topbar::TopBar,
    window::HyprWindow,
};

pub use boot::BootLoader;

/// True while a text entry element owns the keyboard, in which case global
/// single-letter shortcuts must stay inert.
fn is_text_input_focused() -> bool {
    document()
        .active_element()
        .map(|element| {
            let tag = element.tag_name();
            tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
        })
        .unwrap_or(false)
}

#[component]
/// Full desktop surface: top bar, workspace canvas, and global overlays.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let workspace = move || runtime.state.get().workspace;

    view! {
        <div class="desktop-root" data-workspace=move || workspace().to_string()>
            <SearchDialog />
            <NotificationCenter />
            <KeyboardShortcuts />
            <TopBar />
            <Show when=move || workspace() == 1 fallback=WorkspaceCanvas>
                <div class="workspace-grid">
                    <HyprWindow kind=WindowKind::Terminal>
                        <TerminalView />
                    </HyprWindow>
                    <HyprWindow kind=WindowKind::Music>
                        <MusicWidget />
                    </HyprWindow>
                    <HyprWindow kind=WindowKind::Ranger>
                        <RangerView />
                    </HyprWindow>
                </div>
            </Show>
        </div>
    }
}

#[component]
// Workspaces 2-5 are deliberately blank canvases.
fn WorkspaceCanvas() -> impl IntoView {
    let runtime = use_desktop_runtime();
    view! {
        <div class="workspace-empty">
            <span class="workspace-empty-label">
                {move || format!("WORKSPACE {} // EMPTY", runtime.state.get().workspace)}
            </span>
        </div>
    }
}
