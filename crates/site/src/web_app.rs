use hypr_runtime::{BootLoader, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let booted = create_rw_signal(false);
    let on_boot_complete = Callback::new(move |_| booted.set(true));

    view! {
        <Title text="Zariel // BlackArch Portfolio" />
        <Meta name="description" content="A Hyprland-style desktop portfolio in the browser." />

        <main class="site-root">
            <Show
                when=move || booted.get()
                fallback=move || view! { <BootLoader on_complete=on_boot_complete /> }
            >
                <DesktopEntry />
            </Show>
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
