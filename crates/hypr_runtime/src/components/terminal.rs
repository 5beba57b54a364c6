use std::time::Duration;

use super::*;
use crate::shell::{self, ShellEffect, TerminalLine, GLITCH_RESET_MS, PROMPT};

use super::games::{SnakeView, TronView};

#[component]
/// The fake terminal: transcript plus prompt, replaced wholesale by the vim
/// joke or a running game while the matching mode flag is set.
pub(super) fn TerminalView() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let snake_mode = move || runtime.terminal.get().snake_mode;
    let tron_mode = move || runtime.terminal.get().tron_mode;
    let vim_mode = move || runtime.terminal.get().vim_mode;

    let exit_snake = Callback::new(move |_| {
        runtime.terminal.update(|terminal| terminal.snake_mode = false);
    });
    let exit_tron = Callback::new(move |_| {
        runtime.terminal.update(|terminal| terminal.tron_mode = false);
    });

    view! {
        <div class=move || {
            if runtime.terminal.get().glitched {
                "terminal glitched"
            } else {
                "terminal"
            }
        }>
            {move || {
                if snake_mode() {
                    view! { <SnakeView on_exit=exit_snake /> }.into_view()
                } else if tron_mode() {
                    view! { <TronView on_exit=exit_tron /> }.into_view()
                } else if vim_mode() {
                    view! { <VimJoke /> }.into_view()
                } else {
                    view! { <TerminalPrompt /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn TerminalPrompt() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let input = create_rw_signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let submitted = input.get_untracked();
        input.set(String::new());

        let mut effects = Vec::new();
        runtime.terminal.update(|terminal| {
            effects = shell::run_command(terminal, &submitted);
        });
        for effect in effects {
            apply_shell_effect(runtime, effect);
        }
    };

    view! {
        <div class="terminal-transcript">
            {move || {
                runtime
                    .terminal
                    .get()
                    .lines
                    .iter()
                    .map(|line| match line {
                        TerminalLine::Input(text) => {
                            view! { <div class="terminal-line input">{text.clone()}</div> }
                        }
                        TerminalLine::Output(text) => {
                            view! { <div class="terminal-line output">{text.clone()}</div> }
                        }
                    })
                    .collect_view()
            }}
            <div class="terminal-prompt-row">
                <span class="terminal-prompt">{PROMPT}</span>
                <input
                    class="terminal-input"
                    autofocus=true
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </div>
    }
}

fn apply_shell_effect(runtime: DesktopRuntimeContext, effect: ShellEffect) {
    match effect {
        ShellEffect::OpenRanger => {
            runtime.dispatch_action(DesktopAction::OpenWindow {
                kind: WindowKind::Ranger,
            });
        }
        ShellEffect::SetTheme(name) => {
            runtime.dispatch_action(DesktopAction::SetTheme { name });
        }
        ShellEffect::Notify(request) => {
            runtime.dispatch_action(DesktopAction::PushNotification {
                request,
                timestamp_ms: platform_host::unix_time_ms_now(),
            });
        }
        ShellEffect::ScheduleGlitchReset => {
            set_timeout(
                move || runtime.terminal.update(|terminal| terminal.glitched = false),
                Duration::from_millis(GLITCH_RESET_MS),
            );
        }
    }
}

#[component]
fn VimJoke() -> impl IntoView {
    let runtime = use_desktop_runtime();
    view! {
        <div class="vim-joke">
            <p class="vim-joke-title">"VIM v9.0"</p>
            <p class="vim-joke-status">"Recording @r..."</p>
            <button
                class="vim-joke-exit"
                on:click=move |_| {
                    runtime.terminal.update(|terminal| terminal.vim_mode = false);
                }
            >
                ":q! (click to exit the joke)"
            </button>
        </div>
    }
}
