use super::*;

#[component]
/// Toast stack. Expiry timers are armed by the effect executor when a toast
/// is pushed; this layer only renders and forwards explicit dismissals.
pub(super) fn NotificationCenter() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="notification-center" role="status">
            {move || {
                runtime
                    .state
                    .get()
                    .notifications
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind = toast.kind.token();
                        let title = toast.title.clone();
                        let message = toast.message.clone();
                        view! {
                            <div class=format!("toast {kind}")>
                                <div class="toast-body">
                                    {title
                                        .map(|title| {
                                            view! { <div class="toast-title">{title}</div> }
                                        })}
                                    <div class="toast-message">{message}</div>
                                </div>
                                <button
                                    class="toast-dismiss"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::DismissNotification {
                                                id,
                                            });
                                    }
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
