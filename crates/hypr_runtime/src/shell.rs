//! Fake terminal: a pure command interpreter over an in-memory transcript.
//!
//! [`run_command`] mutates the transcript and mode flags and returns effect
//! intents for anything that reaches past the terminal (opening windows,
//! theming, toasts, the glitch reset timer). The view layer owns the input
//! element and executes the effects.

use serde::{Deserialize, Serialize};

use crate::notifications::{NotificationKind, NotificationRequest};
use crate::theme;

/// Prompt prefix echoed in front of every submitted command.
pub const PROMPT: &str = "[zariel@archlinux ~]$";
/// How long the `rm -rf /` glitch overlay stays up.
pub const GLITCH_RESET_MS: u64 = 3000;

const ARCH_LOGO: &str = r"
       /\
      /  \
     /    \
    /      \
   /   ,,   \
  /   |  |   \
 /   -|  |-   \
/    __\/__    \
\___/      \___/
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One transcript line; inputs carry the prompt-echoed command text.
pub enum TerminalLine {
    Input(String),
    Output(String),
}

#[derive(Debug, Clone, PartialEq)]
/// Terminal session state: transcript plus the mutually cosmetic mode flags
/// (glitch, vim joke) and the two game modes that replace the prompt view.
pub struct TerminalState {
    pub lines: Vec<TerminalLine>,
    pub glitched: bool,
    pub vim_mode: bool,
    pub snake_mode: bool,
    pub tron_mode: bool,
}

impl Default for TerminalState {
    fn default() -> Self {
        let login = [
            "Arch Linux 6.1.0-zen1-1-zen (tty1)",
            "zariel-pc login: zariel",
            "Password: ************",
            "Welcome to Zariel's Portfolio OS.",
            "Type 'help' to see available commands.",
            "",
        ];
        Self {
            lines: login
                .iter()
                .map(|text| TerminalLine::Output(text.to_string()))
                .collect(),
            glitched: false,
            vim_mode: false,
            snake_mode: false,
            tron_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side effects a command requests from the desktop around the terminal.
pub enum ShellEffect {
    /// Open (and focus) the ranger window.
    OpenRanger,
    /// Apply a theme by canonical name.
    SetTheme(String),
    /// Push a toast notification.
    Notify(NotificationRequest),
    /// Arm the timer that clears the glitch overlay.
    ScheduleGlitchReset,
}

/// Executes one submitted line: echoes it, runs the matching command, and
/// returns the effects it requested. Unknown commands report through the
/// transcript; nothing here fails.
pub fn run_command(state: &mut TerminalState, input: &str) -> Vec<ShellEffect> {
    let mut effects = Vec::new();
    let trimmed = input.trim();
    let mut parts = trimmed.split_whitespace();
    let cmd = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    state
        .lines
        .push(TerminalLine::Input(format!("{PROMPT} {input}")));

    match cmd {
        "clear" => state.lines.clear(),
        "rm" if args.contains(&"-rf") && args.contains(&"/") => {
            state.glitched = true;
            push_output(state, "CRITICAL SYSTEM ERROR: ROOT PARTITION DELETED");
            effects.push(ShellEffect::ScheduleGlitchReset);
        }
        "vim" => state.vim_mode = true,
        "ranger" => {
            effects.push(ShellEffect::OpenRanger);
            push_output(state, "Launching Ranger File Manager...");
        }
        "snake" => state.snake_mode = true,
        "tron" => state.tron_mode = true,
        "wal" => {
            let requested = args
                .iter()
                .find_map(|arg| arg.strip_prefix("--theme="))
                .unwrap_or("");
            let (name, _) = theme::resolve(requested);
            push_output(
                state,
                &format!("[wal] generating colorscheme: {name}... done."),
            );
            effects.push(ShellEffect::SetTheme(name.to_string()));
            effects.push(ShellEffect::Notify(NotificationRequest {
                kind: NotificationKind::Success,
                title: Some("Theme Changed".to_string()),
                message: format!("Applied {name} colorscheme"),
                duration_ms: Some(2000),
            }));
        }
        "sudo" => push_outputs(state, sudo_lines()),
        "help" => push_outputs(state, help_lines()),
        "about" => push_outputs(state, about_lines()),
        "projects" => push_outputs(state, projects_lines()),
        "contact" => push_outputs(state, contact_lines()),
        "gh" => push_outputs(state, gh_lines(&args)),
        "whoami" => push_outputs(state, whoami_lines()),
        "neofetch" => push_outputs(state, neofetch_lines()),
        "history" => {
            let listing = history_lines(state);
            push_outputs(state, listing);
        }
        "ls" => push_outputs(state, ls_lines(&args)),
        "cat" => push_outputs(state, cat_lines(&args)),
        "pacman" => push_outputs(state, pacman_lines(&args)),
        "" => {}
        other => push_output(state, &format!("zsh: command not found: {other}")),
    }

    effects
}

fn push_output(state: &mut TerminalState, text: &str) {
    state.lines.push(TerminalLine::Output(text.to_string()));
}

fn push_outputs(state: &mut TerminalState, lines: Vec<String>) {
    for line in lines {
        state.lines.push(TerminalLine::Output(line));
    }
}

fn strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

fn help_lines() -> Vec<String> {
    strings(&[
        "Available commands:",
        "  about     - Learn about me",
        "  projects  - View my work",
        "  contact   - Get in touch",
        "  neofetch  - System summary",
        "  ls        - List files",
        "  cat       - Read a file",
        "  pacman    - System manager",
        "  clear     - Clear terminal",
        "  snake     - Play Snake game",
        "  tron      - Play Tron light cycles",
        "  help      - Show this help",
    ])
}

fn about_lines() -> Vec<String> {
    strings(&[
        "User: Aditya Nakhate (H4D35-401)",
        "Role: Creative Developer & Engineer",
        "Stack: React, 3D Web, Systems Engineering",
        "Bio: Building vintage aesthetics and modern web engines. Creator of ZADE.",
    ])
}

fn projects_lines() -> Vec<String> {
    strings(&[
        "Repository Highlights (GitHub: @H4D35-401)",
        "-----------------------------------------",
        "1. zade-release        - [Current Release]",
        "2. cassette-player     - [Portfolio Template]",
        "3. vintage-web         - [Retro Aesthetics]",
        "4. MorphoMyst          - [Generative Art]",
        "-----------------------------------------",
        "Total Public Repos: 9",
    ])
}

fn contact_lines() -> Vec<String> {
    strings(&[
        "GitHub: @H4D35-401",
        "Signal: reachable through the repo profile",
        "Status: open to interesting work",
    ])
}

fn gh_lines(args: &[&str]) -> Vec<String> {
    match args.first().copied() {
        Some("profile") => strings(&[
            "GitHub Profile: Aditya Nakhate (H4D35-401)",
            "-------------------------------------------",
            "Location: Earth",
            "Languages: JavaScript, CSS, HTML, Shell",
            "Focus: Portfolio Templates, Vintage Web, 3D Art",
            "Stats: 9 Public Repositories",
            "Status: Building the Metaverse",
        ]),
        Some("list") => strings(&[
            "H4D35-401 Public Repositories:",
            "  - zade-release",
            "  - cassette-player-portfolio",
            "  - H4D35-401",
            "  - vintage-web",
            "  - Happy-birthday-special",
            "  - webie",
            "  - MorphoMyst",
            "  - Vin",
            "  - Wc",
        ]),
        _ => strings(&["usage: gh [profile|list]"]),
    }
}

fn whoami_lines() -> Vec<String> {
    strings(&["Aditya Nakhate", "H4D35-401 // System Architect"])
}

fn neofetch_lines() -> Vec<String> {
    let mut lines = vec![ARCH_LOGO.to_string()];
    lines.extend(strings(&[
        "zariel@archlinux",
        "----------------",
        "OS: BlackArch Linux x86_64",
        "Host: Portfolio v4.0 (Hyprland Rice)",
        "Kernel: 6.1.0-zen1-1-zen",
        "Uptime: 3 hours, 12 mins",
        "Shell: zsh 5.9",
        "DE: Leptos CSR",
        "WM: Hyprland (Illogical Impulse)",
        "CPU: Human Intelligence @ 5.0GHz",
        "Memory: Unlimited / Dedication",
        "GitHub: @H4D35-401 (9 Repos)",
    ]));
    lines
}

// Lists prior inputs with the prompt stripped. The echo for the `history`
// invocation itself is already in the transcript and is skipped.
fn history_lines(state: &TerminalState) -> Vec<String> {
    let inputs: Vec<&str> = state
        .lines
        .iter()
        .filter_map(|line| match line {
            TerminalLine::Input(text) => Some(text.as_str()),
            TerminalLine::Output(_) => None,
        })
        .collect();
    inputs[..inputs.len().saturating_sub(1)]
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let command = line
                .strip_prefix(PROMPT)
                .map(str::trim_start)
                .unwrap_or(line);
            format!("{}  {}", index + 1, command)
        })
        .collect()
}

fn ls_lines(args: &[&str]) -> Vec<String> {
    if args.contains(&"-a") {
        strings(&[
            "about.md",
            "projects.md",
            "contact.md",
            ".secret_easter_egg",
            ".git",
        ])
    } else {
        strings(&["about.md", "projects.md", "contact.md"])
    }
}

fn cat_lines(args: &[&str]) -> Vec<String> {
    let file = args.first().copied().unwrap_or("");
    match file {
        "about.md" => about_lines(),
        "projects.md" => projects_lines(),
        "contact.md" => contact_lines(),
        ".secret_easter_egg" => strings(&["Wait... how did you find this?", "The cake is a lie."]),
        ".git" => strings(&["Don't touch my configs! Try 'gh profile' instead."]),
        other => vec![format!("cat: {other}: No such file or directory")],
    }
}

fn pacman_lines(args: &[&str]) -> Vec<String> {
    if args.first().copied() == Some("-S") {
        let skill = args.get(1).copied().unwrap_or("nothing");
        return match skill {
            "snake" => strings(&["INSTALLING SNAKE GAME...", "Type 'snake' to play!"]),
            "gh" => strings(&[
                "RESOLVING DEPENDENCIES...",
                "gh-cli installed. Type 'gh profile' to see my stats!",
            ]),
            _ => vec![
                "resolving dependencies...".to_string(),
                format!("Packages (1) {skill}-1.0-1"),
                format!("(1/1) installing {skill} [####################] 100%"),
            ],
        };
    }
    strings(&["error: no operation specified (use -h for help)"])
}

fn sudo_lines() -> Vec<String> {
    strings(&[
        "[sudo] password for zariel: ",
        "zariel is not in the sudoers file. This incident will be reported.",
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn outputs(state: &TerminalState) -> Vec<&str> {
        state
            .lines
            .iter()
            .filter_map(|line| match line {
                TerminalLine::Output(text) => Some(text.as_str()),
                TerminalLine::Input(_) => None,
            })
            .collect()
    }

    fn last_output(state: &TerminalState) -> &str {
        outputs(state).last().copied().unwrap_or("")
    }

    #[test]
    fn login_banner_is_present_by_default() {
        let state = TerminalState::default();
        assert_eq!(state.lines.len(), 6);
        assert_eq!(
            state.lines[0],
            TerminalLine::Output("Arch Linux 6.1.0-zen1-1-zen (tty1)".to_string())
        );
    }

    #[test]
    fn submitted_input_is_echoed_with_the_prompt() {
        let mut state = TerminalState::default();
        run_command(&mut state, "whoami");
        assert!(state
            .lines
            .iter()
            .any(|line| *line == TerminalLine::Input(format!("{PROMPT} whoami"))));
    }

    #[test]
    fn empty_input_echoes_the_prompt_and_nothing_else() {
        let mut state = TerminalState::default();
        let before_outputs = outputs(&state).len();
        let effects = run_command(&mut state, "");
        assert!(effects.is_empty());
        assert_eq!(outputs(&state).len(), before_outputs);
    }

    #[test]
    fn unknown_commands_report_through_zsh() {
        let mut state = TerminalState::default();
        run_command(&mut state, "cowsay moo");
        assert_eq!(last_output(&state), "zsh: command not found: cowsay");
    }

    #[test]
    fn clear_empties_the_transcript_including_the_echo() {
        let mut state = TerminalState::default();
        run_command(&mut state, "help");
        run_command(&mut state, "clear");
        assert!(state.lines.is_empty());
    }

    #[test]
    fn wal_applies_a_known_theme_and_raises_a_toast() {
        let mut state = TerminalState::default();
        let effects = run_command(&mut state, "wal --theme=matrix");

        assert_eq!(
            last_output(&state),
            "[wal] generating colorscheme: matrix... done."
        );
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], ShellEffect::SetTheme("matrix".to_string()));
        match &effects[1] {
            ShellEffect::Notify(request) => {
                assert_eq!(request.kind, NotificationKind::Success);
                assert_eq!(request.title.as_deref(), Some("Theme Changed"));
                assert_eq!(request.message, "Applied matrix colorscheme");
                assert_eq!(request.duration_ms, Some(2000));
            }
            other => panic!("expected a notify effect, got {other:?}"),
        }
    }

    #[test]
    fn wal_with_an_unknown_theme_falls_back_to_default() {
        let mut state = TerminalState::default();
        let effects = run_command(&mut state, "wal --theme=vaporwave");
        assert_eq!(effects[0], ShellEffect::SetTheme("default".to_string()));
        assert_eq!(
            last_output(&state),
            "[wal] generating colorscheme: default... done."
        );
    }

    #[test]
    fn game_commands_flip_the_matching_mode_flag() {
        let mut state = TerminalState::default();
        run_command(&mut state, "snake");
        assert!(state.snake_mode);
        run_command(&mut state, "tron");
        assert!(state.tron_mode);
        run_command(&mut state, "vim");
        assert!(state.vim_mode);
    }

    #[test]
    fn ranger_requests_the_window_and_logs_the_launch() {
        let mut state = TerminalState::default();
        let effects = run_command(&mut state, "ranger");
        assert_eq!(effects, vec![ShellEffect::OpenRanger]);
        assert_eq!(last_output(&state), "Launching Ranger File Manager...");
    }

    #[test]
    fn rm_rf_root_glitches_and_schedules_the_reset() {
        let mut state = TerminalState::default();
        let effects = run_command(&mut state, "rm -rf /");
        assert!(state.glitched);
        assert_eq!(effects, vec![ShellEffect::ScheduleGlitchReset]);
        assert_eq!(
            last_output(&state),
            "CRITICAL SYSTEM ERROR: ROOT PARTITION DELETED"
        );

        // Plain rm is not special-cased.
        let mut state = TerminalState::default();
        run_command(&mut state, "rm notes.txt");
        assert!(!state.glitched);
        assert_eq!(last_output(&state), "zsh: command not found: rm");
    }

    #[test]
    fn history_numbers_prior_commands_and_skips_its_own_invocation() {
        let mut state = TerminalState::default();
        run_command(&mut state, "whoami");
        run_command(&mut state, "ls");
        run_command(&mut state, "history");

        let listing = outputs(&state);
        let tail = &listing[listing.len() - 2..];
        assert_eq!(tail, &["1  whoami", "2  ls"]);
    }

    #[test]
    fn ls_hides_dotfiles_unless_asked() {
        let mut state = TerminalState::default();
        run_command(&mut state, "ls");
        assert_eq!(last_output(&state), "contact.md");

        run_command(&mut state, "ls -a");
        assert_eq!(last_output(&state), ".git");
    }

    #[test]
    fn cat_routes_known_files_and_rejects_the_rest() {
        let mut state = TerminalState::default();
        run_command(&mut state, "cat about.md");
        assert!(outputs(&state)
            .iter()
            .any(|line| line.starts_with("User: Aditya Nakhate")));

        run_command(&mut state, "cat missing.txt");
        assert_eq!(
            last_output(&state),
            "cat: missing.txt: No such file or directory"
        );
    }

    #[test]
    fn pacman_installs_anything_with_a_progress_bar() {
        let mut state = TerminalState::default();
        run_command(&mut state, "pacman -S rust");
        assert_eq!(
            last_output(&state),
            "(1/1) installing rust [####################] 100%"
        );

        run_command(&mut state, "pacman");
        assert_eq!(
            last_output(&state),
            "error: no operation specified (use -h for help)"
        );
    }
}
