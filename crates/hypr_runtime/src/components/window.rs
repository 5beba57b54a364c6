use super::*;
use crate::model::MIN_RANK;

#[component]
/// Hyprland-style window chrome. Renders nothing while the window is
/// closed; a mousedown anywhere on the frame focuses and raises it.
pub(super) fn HyprWindow(kind: WindowKind, children: ChildrenFn) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let record = Signal::derive(move || runtime.state.get().window(kind).copied());
    let is_open = move || record.get().map(|w| w.is_open).unwrap_or(false);
    let is_active = move || runtime.state.get().is_active(kind);

    let focus = move |_| {
        runtime.dispatch_action(DesktopAction::FocusWindow { kind });
    };
    let close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::CloseWindow { kind });
    };

    view! {
        <Show when=is_open fallback=|| ()>
            <section
                class=move || {
                    if is_active() {
                        "hypr-window active"
                    } else {
                        "hypr-window"
                    }
                }
                style=move || {
                    format!("z-index:{};", record.get().map(|w| w.rank).unwrap_or(MIN_RANK))
                }
                data-window-id=kind.id()
                on:mousedown=focus
            >
                <header class="hypr-titlebar">
                    <div class="hypr-titlebar-label">
                        <span class="hypr-titlebar-dot" aria-hidden="true"></span>
                        {kind.title()}
                    </div>
                    <div class="hypr-titlebar-controls">
                        <button class="hypr-control-placeholder" aria-hidden="true">
                            "\u{25a1}"
                        </button>
                        <button aria-label="Close window" on:click=close>
                            "\u{2715}"
                        </button>
                    </div>
                </header>
                <div class="hypr-window-body">{children()}</div>
            </section>
        </Show>
    }
}
