use super::*;

// Reference card content only; the live bindings stay with their owners
// (top bar pager, terminal commands, game key capture).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("1-5", "Switch workspace (top bar buttons)"),
            ("Scroll", "Cycle workspaces (on top bar)"),
        ],
    ),
    (
        "Applications",
        &[
            ("\u{2315}", "App launcher (top bar)"),
            ("ranger", "Open the file manager"),
        ],
    ),
    (
        "Terminal",
        &[
            ("snake", "Play Snake (WASD/Arrows)"),
            ("tron", "Play Tron (WASD/Arrows)"),
            ("wal --theme=X", "Change color theme"),
            ("Esc", "Exit games"),
        ],
    ),
    (
        "Themes",
        &[
            ("default", "BlackArch red (default)"),
            ("matrix", "Matrix green"),
            ("tokyo-night", "Tokyo Night blue"),
            ("dracula", "Dracula purple"),
            ("cyberpunk", "Cyberpunk neon"),
            ("nord", "Nord frosty blue"),
        ],
    ),
    (
        "Help",
        &[("?", "Toggle this help menu"), ("help", "Terminal help command")],
    ),
];

#[component]
/// Help overlay listing the desktop's bindings. `?` toggles it unless a text
/// input owns the keyboard; Escape or a backdrop click closes it.
pub(super) fn KeyboardShortcuts() -> impl IntoView {
    let open = create_rw_signal(false);

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "?" && !ev.ctrl_key() && !ev.alt_key() && !ev.meta_key() {
            if !is_text_input_focused() {
                ev.prevent_default();
                open.update(|flag| *flag = !*flag);
            }
        } else if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || key_listener.remove());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="shortcuts-backdrop" on:click=move |_| open.set(false)></div>
            <div class="shortcuts-modal" role="dialog" aria-label="Keyboard shortcuts">
                <header class="shortcuts-header">
                    <h2>"KEYBOARD SHORTCUTS"</h2>
                    <button
                        class="shortcuts-close"
                        aria-label="Close shortcuts"
                        on:click=move |_| open.set(false)
                    >
                        "\u{2715}"
                    </button>
                </header>
                <div class="shortcuts-grid">
                    {SECTIONS
                        .iter()
                        .map(|(category, entries)| {
                            view! {
                                <section class="shortcuts-section">
                                    <h3>{*category}</h3>
                                    {entries
                                        .iter()
                                        .map(|(keys, description)| {
                                            view! {
                                                <div class="shortcuts-row">
                                                    <kbd>{*keys}</kbd>
                                                    <span>{*description}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </section>
                            }
                        })
                        .collect_view()}
                </div>
                <footer class="shortcuts-footer">"Press ? or Esc to close"</footer>
            </div>
        </Show>
    }
}
