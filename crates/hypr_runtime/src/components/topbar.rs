use std::time::Duration;

use super::*;
use crate::model::WORKSPACE_COUNT;

#[cfg(target_arch = "wasm32")]
fn clock_text() -> String {
    js_sys::Date::new_0().to_locale_time_string("en-US").into()
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_text() -> String {
    String::new()
}

#[component]
/// Fixed bar: workspace pager (wheel cycles), active-window label, window
/// toggles, and a once-a-second clock.
pub(super) fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let clock = create_rw_signal(clock_text());
    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(clock_text()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let cycle = move |ev: web_sys::WheelEvent| {
        let delta = if ev.delta_y() > 0.0 { 1 } else { -1 };
        runtime.dispatch_action(DesktopAction::CycleWorkspace { delta });
    };

    let active_label = move || {
        let state = runtime.state.get();
        format!("BLACKARCH // {}", state.active_window.id().to_uppercase())
    };

    view! {
        <div class="topbar">
            <div class="topbar-left">
                <div class="topbar-pager" on:wheel=cycle>
                    <button
                        class="topbar-search"
                        aria-label="Open app launcher"
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::SetSearchOpen { open: true });
                        }
                    >
                        "\u{2315}"
                    </button>
                    {(1..=WORKSPACE_COUNT)
                        .map(|workspace| {
                            view! {
                                <button
                                    class=move || {
                                        if runtime.state.get().workspace == workspace {
                                            "workspace-button current"
                                        } else {
                                            "workspace-button"
                                        }
                                    }
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::SetWorkspace {
                                                workspace,
                                            });
                                    }
                                >
                                    {workspace}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="topbar-center">
                <span class="topbar-pulse" aria-hidden="true"></span>
                {active_label}
            </div>

            <div class="topbar-right">
                <div class="topbar-toggles">
                    {[WindowKind::Terminal, WindowKind::Music]
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class=move || {
                                        if runtime.state.get().is_active(kind) {
                                            "window-toggle current"
                                        } else {
                                            "window-toggle"
                                        }
                                    }
                                    aria-label=format!("Toggle {}", kind.id())
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::ToggleWindow { kind });
                                    }
                                >
                                    {kind.icon()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="topbar-stats">
                    <span>"CPU 12%"</span>
                    <span>"MEM 4.2GB"</span>
                </div>
                <div class="topbar-clock">{move || clock.get()}</div>
            </div>
        </div>
    }
}
