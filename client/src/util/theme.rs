//! Light/dark theme: persisted preference, body class and indicator styling.
//!
//! The preference is one string (`"light"` or `"dark"`) in `localStorage`.
//! A stored value always wins; otherwise the OS `prefers-color-scheme` hint
//! decides, and light is the fallback when neither is available.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so the
//! server render is always the light theme and hydration applies the rest.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the theme preference.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Class toggled on `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Any stored value other than `"dark"` reads as light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Font Awesome class for the toggle icon: the sun offers a way out of dark mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// WhatsApp button glow, stronger on the dark background.
    #[must_use]
    pub fn cta_shadow(self) -> &'static str {
        match self {
            Self::Light => "0 4px 15px rgba(37, 211, 102, 0.3)",
            Self::Dark => "0 4px 15px rgba(37, 211, 102, 0.5)",
        }
    }
}

/// Key-value slot the theme preference is persisted in.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// Browser `localStorage`; reads nothing and drops writes outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}

/// Theme to start with, given the stored value and the OS hint.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some(value) if !value.is_empty() => Theme::from_stored(value),
        _ if prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Whether the OS asks for a dark color scheme.
pub fn prefers_dark_scheme() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Read the saved preference (or OS hint) for the first paint.
pub fn load_initial(store: &impl PreferenceStore) -> Theme {
    let stored = store.load();
    resolve_initial(stored.as_deref(), prefers_dark_scheme())
}

/// Set or clear the dark class on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it and persist the new value.
pub fn toggle(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    store.save(next.as_str());
    if next.is_dark() {
        log::info!("Dark mode activated");
    } else {
        log::info!("Light mode activated");
    }
    next
}
