use super::*;

struct LauncherEntry {
    name: &'static str,
    desc: &'static str,
    target: LauncherTarget,
}

enum LauncherTarget {
    Window(WindowKind),
    Link(&'static str),
}

fn entries() -> [LauncherEntry; 4] {
    [
        LauncherEntry {
            name: "Terminal",
            desc: "Arch Linux Shell (zsh)",
            target: LauncherTarget::Window(WindowKind::Terminal),
        },
        LauncherEntry {
            name: "Music Player",
            desc: "Spotify-lite Client",
            target: LauncherTarget::Window(WindowKind::Music),
        },
        LauncherEntry {
            name: "Ranger",
            desc: "Terminal File Manager",
            target: LauncherTarget::Window(WindowKind::Ranger),
        },
        LauncherEntry {
            name: "GitHub",
            desc: "@H4D35-401",
            target: LauncherTarget::Link("https://github.com"),
        },
    ]
}

#[component]
/// App launcher overlay. Escape or a backdrop click closes it; picking an
/// app toggles the matching window.
pub(super) fn SearchDialog() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = create_rw_signal(String::new());

    let esc_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && runtime.state.with_untracked(|state| state.search_open) {
            runtime.dispatch_action(DesktopAction::SetSearchOpen { open: false });
        }
    });
    on_cleanup(move || esc_listener.remove());

    let close = move || {
        query.set(String::new());
        runtime.dispatch_action(DesktopAction::SetSearchOpen { open: false });
    };

    view! {
        <Show when=move || runtime.state.get().search_open fallback=|| ()>
            <div class="search-backdrop" on:click=move |_| close()>
                <div class="search-dialog" on:click=|ev| ev.stop_propagation()>
                    <input
                        class="search-input"
                        placeholder="Search applications..."
                        autofocus=true
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <p class="search-section-label">"Applications"</p>
                    <div class="search-results">
                        {move || {
                            let needle = query.get().to_lowercase();
                            entries()
                                .into_iter()
                                .filter(|entry| {
                                    entry.name.to_lowercase().contains(&needle)
                                        || entry.desc.to_lowercase().contains(&needle)
                                })
                                .map(|entry| match entry.target {
                                    LauncherTarget::Window(kind) => view! {
                                        <button
                                            class="search-result"
                                            on:click=move |_| {
                                                runtime
                                                    .dispatch_action(DesktopAction::ToggleWindow {
                                                        kind,
                                                    });
                                                close();
                                            }
                                        >
                                            <span class="search-result-name">{entry.name}</span>
                                            <span class="search-result-desc">{entry.desc}</span>
                                        </button>
                                    }
                                    .into_view(),
                                    LauncherTarget::Link(url) => view! {
                                        <a
                                            class="search-result"
                                            href=url
                                            target="_blank"
                                            rel="noreferrer"
                                            on:click=move |_| close()
                                        >
                                            <span class="search-result-name">{entry.name}</span>
                                            <span class="search-result-desc">{entry.desc}</span>
                                        </a>
                                    }
                                    .into_view(),
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
