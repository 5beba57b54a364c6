use super::*;
use crate::ranger::{EntryKind, RangerState};

#[component]
/// Three-column ranger clone: parent path, current directory, preview pane.
pub(super) fn RangerView() -> impl IntoView {
    let ranger = create_rw_signal(RangerState::default());

    let can_go_back = move || ranger.get().path.len() > 2;

    view! {
        <div class="ranger">
            <div class="ranger-parents">
                <div class="ranger-root-label">"/home/zariel"</div>
                <Show when=can_go_back fallback=|| ()>
                    <button
                        class="ranger-back"
                        on:click=move |_| ranger.update(RangerState::back)
                    >
                        "../"
                    </button>
                </Show>
                {move || {
                    let state = ranger.get();
                    state.path[..state.path.len() - 1]
                        .iter()
                        .map(|segment| view! { <div class="ranger-parent">{format!("{segment}/")}</div> })
                        .collect_view()
                }}
            </div>

            <div class="ranger-entries">
                {move || {
                    let state = ranger.get();
                    state
                        .current_dir()
                        .children
                        .iter()
                        .map(|entry| {
                            let name = entry.name;
                            let selected = state.selected == name;
                            let glyph = match entry.kind {
                                EntryKind::Dir => "\u{1f4c1}",
                                EntryKind::File => "\u{1f4c4}",
                            };
                            view! {
                                <button
                                    class=if selected { "ranger-entry selected" } else { "ranger-entry" }
                                    on:click=move |_| ranger.update(|state| state.navigate(name))
                                >
                                    <span class="ranger-entry-glyph" aria-hidden="true">{glyph}</span>
                                    <span>{name}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="ranger-preview">
                {move || {
                    let state = ranger.get();
                    let selected = state.selected;
                    let is_file = selected.contains('.');
                    view! {
                        <div class="ranger-preview-card">
                            <div class="ranger-preview-title">{selected}</div>
                            <dl class="ranger-preview-facts">
                                <dt>"Type:"</dt>
                                <dd>{if is_file { "File" } else { "Directory" }}</dd>
                                <dt>"Permissions:"</dt>
                                <dd>"drwxr-xr-x"</dd>
                                <dt>"Owner:"</dt>
                                <dd>"zariel:users"</dd>
                            </dl>
                            <p class="ranger-preview-note">
                                {if is_file {
                                    "[File Preview Unavailable in TTY]"
                                } else {
                                    "[Directory Content]"
                                }}
                            </p>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
