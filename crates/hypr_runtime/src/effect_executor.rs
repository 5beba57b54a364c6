//! Explicit executor for reducer-emitted runtime effects.

use std::time::Duration;

use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
    theme::ThemePalette,
};

/// Installs the executor that drains reducer-emitted effects in order.
pub(crate) fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh
    // batch instead of being swallowed by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_effect(runtime, effect);
        }
    });
}

fn run_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::ApplyThemeVariables(palette) => apply_theme_variables(palette),
        RuntimeEffect::ScheduleNotificationExpiry { id, duration_ms } => {
            // Expiry is a delayed dismiss; an earlier explicit dismiss makes
            // the fired action a no-op on the absent id.
            set_timeout(
                move || runtime.dispatch_action(DesktopAction::DismissNotification { id }),
                Duration::from_millis(duration_ms),
            );
        }
    }
}

fn apply_theme_variables(palette: &ThemePalette) {
    let Some(root) = document().document_element() else {
        return;
    };
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let style = root.style();
    let _ = style.set_property("--color-primary", palette.primary);
    let _ = style.set_property("--color-bg", palette.background);
    let _ = style.set_property("--color-panel", palette.panel);
    let _ = style.set_property("--color-text", palette.text);
}
