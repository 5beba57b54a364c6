use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;

use super::*;

/// Delay between revealed boot lines.
const BOOT_LINE_INTERVAL_MS: u64 = 40;

const BOOT_MESSAGES: &[&str] = &[
    "Starting Arch Linux...",
    "[OK] Reached target Basic System.",
    "[OK] Reached target Graphical Interface.",
    "[OK] Started Network Manager.",
    "[OK] Started WPA Supplicant.",
    "[OK] Started Login Service.",
    "[OK] Started D-Bus System Message Bus.",
    "[OK] Reached target Multi-User System.",
    "Starting BlackArch Main Repository...",
    "[OK] Mounted /boot.",
    "[OK] Mounted /home.",
    "Loading Hyprland Compositor...",
    "Initializing ZADE Engine...",
    "Loading H4D35-401 Config...",
    "Accessing Neural Interface...",
    "WELCOME TO BLACKARCH // HYPRLAND",
];

#[component]
/// Simulated boot transcript. Reveals one message per interval step and
/// invokes `on_complete` once, after the last line is on screen. Unmounting
/// early cancels the interval.
pub fn BootLoader(on_complete: Callback<()>) -> impl IntoView {
    let revealed = create_rw_signal(0usize);
    let interval = store_value(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
    };

    if let Ok(handle) = set_interval_with_handle(
        move || {
            let shown = revealed.get_untracked();
            if shown < BOOT_MESSAGES.len() {
                revealed.set(shown + 1);
            } else {
                stop();
                on_complete.call(());
            }
        },
        Duration::from_millis(BOOT_LINE_INTERVAL_MS),
    ) {
        interval.set_value(Some(handle));
    }
    on_cleanup(stop);

    view! {
        <div class="boot-screen">
            <div class="boot-transcript">
                {move || {
                    BOOT_MESSAGES[..revealed.get()]
                        .iter()
                        .map(|line| match line.strip_prefix("[OK] ") {
                            Some(rest) => view! {
                                <div class="boot-line">
                                    <span class="boot-ok">"[ OK ]"</span>
                                    {rest}
                                </div>
                            }
                            .into_view(),
                            None => view! { <div class="boot-line">{*line}</div> }.into_view(),
                        })
                        .collect_view()
                }}
                <div class="boot-cursor">"_"</div>
            </div>
        </div>
    }
}
