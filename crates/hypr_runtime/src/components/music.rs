use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use platform_host::{MusicSearchService, NoopMusicSearchService, TrackHit};

use super::*;

const SEARCH_DEBOUNCE_MS: u64 = 300;
const SUGGESTION_LIMIT: usize = 5;

#[component]
/// Music widget: debounced catalogue search plus a static "now playing"
/// deck. The search transport is injected at the host boundary; this build
/// wires the no-op adapter, so the deck mostly reports SYSTEM OFFLINE.
pub(super) fn MusicWidget() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let suggestions = create_rw_signal(Vec::<TrackHit>::new());
    let now_playing = create_rw_signal(None::<TrackHit>);
    let debounce = store_value(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = debounce.get_value() {
            handle.clear();
        }
    });

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        query.set(value.clone());

        if let Some(handle) = debounce.get_value() {
            handle.clear();
        }
        if value.trim().len() < 2 {
            suggestions.set(Vec::new());
            return;
        }

        let scheduled = set_timeout_with_handle(
            move || {
                let term = value.clone();
                spawn_local(async move {
                    match NoopMusicSearchService.search(&term, SUGGESTION_LIMIT).await {
                        Ok(hits) => suggestions.set(hits),
                        Err(err) => logging::warn!("music search failed: {err}"),
                    }
                });
            },
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        );
        if let Ok(handle) = scheduled {
            debounce.set_value(Some(handle));
        }
    };

    let pick = move |hit: TrackHit| {
        now_playing.set(Some(hit));
        suggestions.set(Vec::new());
        query.set(String::new());
    };

    view! {
        <div class="music-widget">
            <div class="music-deck">
                <div class=move || {
                    if now_playing.get().is_some() { "music-disc spinning" } else { "music-disc" }
                }></div>
                <div class="music-meta">
                    <p class="music-track">
                        {move || {
                            now_playing
                                .get()
                                .map(|hit| hit.track_name.to_uppercase())
                                .unwrap_or_else(|| "SYSTEM OFFLINE".to_string())
                        }}
                    </p>
                    <p class="music-artist">
                        {move || {
                            now_playing
                                .get()
                                .map(|hit| hit.artist_name.to_uppercase())
                                .unwrap_or_else(|| "STANDING BY".to_string())
                        }}
                    </p>
                </div>
            </div>

            <input
                class="music-search"
                placeholder="Search the catalogue..."
                prop:value=move || query.get()
                on:input=on_input
            />

            <div class="music-suggestions">
                {move || {
                    suggestions
                        .get()
                        .into_iter()
                        .map(|hit| {
                            let label = format!("{} - {}", hit.artist_name, hit.track_name);
                            view! {
                                <button
                                    class="music-suggestion"
                                    on:click=move |_| pick(hit.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
