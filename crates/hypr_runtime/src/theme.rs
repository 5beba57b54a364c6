//! Fixed theme registry: name to four-color palette, applied as CSS custom
//! properties on the document element.

/// Canonical fallback theme name.
pub const DEFAULT_THEME_NAME: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Four color values driving the whole skin.
pub struct ThemePalette {
    pub primary: &'static str,
    pub background: &'static str,
    pub panel: &'static str,
    pub text: &'static str,
}

const fn palette(
    primary: &'static str,
    background: &'static str,
    panel: &'static str,
    text: &'static str,
) -> ThemePalette {
    ThemePalette {
        primary,
        background,
        panel,
        text,
    }
}

/// Immutable registry; the `default` entry doubles as the fallback.
static THEMES: &[(&str, ThemePalette)] = &[
    ("default", palette("#ef4444", "#0a0a0a", "#1a1a1a", "#ffffff")),
    ("matrix", palette("#00ff41", "#000000", "#001a00", "#00ff41")),
    ("cyan", palette("#06b6d4", "#0a0a0a", "#0f1419", "#ffffff")),
    ("gold", palette("#f59e0b", "#0a0a0a", "#1a1410", "#ffffff")),
    ("tokyo-night", palette("#7aa2f7", "#1a1b26", "#24283b", "#a9b1d6")),
    ("dracula", palette("#bd93f9", "#282a36", "#44475a", "#f8f8f2")),
    ("nord", palette("#88c0d0", "#2e3440", "#3b4252", "#eceff4")),
    ("gruvbox", palette("#fe8019", "#282828", "#3c3836", "#ebdbb2")),
    ("cyberpunk", palette("#ff00ff", "#0a0014", "#1a0028", "#00ffff")),
    ("monokai", palette("#a6e22e", "#272822", "#3e3d32", "#f8f8f2")),
    ("solarized", palette("#268bd2", "#002b36", "#073642", "#fdf6e3")),
    ("catppuccin", palette("#f5c2e7", "#1e1e2e", "#313244", "#cdd6f4")),
    ("one-dark", palette("#61afef", "#282c34", "#3e4451", "#abb2bf")),
    ("rose-pine", palette("#c4a7e7", "#191724", "#1f1d2e", "#e0def4")),
];

/// Resolves a requested theme name to `(canonical_name, palette)`.
///
/// Unrecognized names fall back to the `default` entry and report
/// [`DEFAULT_THEME_NAME`] as the canonical name; this never fails.
pub fn resolve(name: &str) -> (&'static str, &'static ThemePalette) {
    THEMES
        .iter()
        .find(|(key, _)| *key == name)
        .or_else(|| THEMES.iter().find(|(key, _)| *key == DEFAULT_THEME_NAME))
        .map(|(key, palette)| (*key, palette))
        .expect("theme registry contains a default entry")
}

/// All registered theme names, in registry order.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|(key, _)| *key)
}
