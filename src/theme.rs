//! Theme Toggling
//!
//! Dark/light switch persisted in localStorage. Storage failures (e.g.
//! private browsing) are ignored; the toggle still works for the
//! session.

use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "knockitout-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

fn stored_theme() -> Option<ThemeMode> {
    let storage = window()?.local_storage().ok()??;
    let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
    ThemeMode::parse(&value)
}

fn persist_theme(mode: ThemeMode) {
    if let Some(Ok(Some(storage))) = window().map(|w| w.local_storage()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
    }
}

fn system_prefers_light() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Stored choice first, then the system preference, then dark.
pub fn resolve_initial_theme() -> ThemeMode {
    if let Some(stored) = stored_theme() {
        return stored;
    }
    if system_prefers_light() {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

/// Light mode is expressed as a `theme-light` class on `<body>`.
fn apply_theme(mode: ThemeMode) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let class_list = body.class_list();
    let _ = match mode {
        ThemeMode::Light => class_list.add_1("theme-light"),
        ThemeMode::Dark => class_list.remove_1("theme-light"),
    };
}

/// Checkbox toggle controlling the theme; checked means dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (mode, set_mode) = signal(resolve_initial_theme());

    Effect::new(move |_| {
        let current = mode.get();
        apply_theme(current);
        persist_theme(current);
    });

    view! {
        <label class="theme-toggle" title="Toggle dark mode">
            <input
                type="checkbox"
                prop:checked=move || mode.get() == ThemeMode::Dark
                on:change=move |ev| {
                    let dark = event_target_checked(&ev);
                    set_mode.set(if dark { ThemeMode::Dark } else { ThemeMode::Light });
                }
            />
            <span class="theme-toggle__label">
                {move || if mode.get() == ThemeMode::Dark { "Dark" } else { "Light" }}
            </span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_round_trips_through_strings() {
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
