use dioxus::prelude::*;

/// Class placed on the document root while dark mode is active.
pub const DARK_MARKER: &str = "dark";

/// Light or dark presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The opposite mode.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Root-element marker class for this mode, if any.
    ///
    /// Tailwind's class strategy keys every `dark:` variant off this marker.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            ThemeMode::Dark => Some(DARK_MARKER),
            ThemeMode::Light => None,
        }
    }
}

/// Shared dark-mode state provided as context.
///
/// The header toggle writes it and [`DarkModeSync`] mirrors it onto the
/// document. Readers subscribe through the signal.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Create the state. Must run inside a Dioxus runtime.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            is_dark: Signal::new(mode.is_dark()),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(*self.is_dark.read())
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.is_dark.set(mode.is_dark());
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = ThemeMode::from_dark(*self.is_dark.peek()).toggled();
        self.is_dark.set(next.is_dark());
        tracing::debug!(mode = ?next, "theme toggled");
        next
    }

    /// Marker class currently expected on the document root.
    pub fn marker(&self) -> Option<&'static str> {
        self.mode().marker()
    }
}

/// Provide a [`ThemeState`] to the component tree, seeded with `initial`.
pub fn use_theme_provider(initial: ThemeMode) -> ThemeState {
    use_context_provider(|| ThemeState::new(initial))
}

/// Read the [`ThemeState`] provided by an ancestor.
pub fn use_theme() -> ThemeState {
    use_context()
}

/// Switch callback that flips the [`ThemeState`] in context.
///
/// The checked value reported by the switch is ignored; every call toggles.
pub fn use_theme_toggle() -> Callback<bool> {
    let mut state = use_theme();
    use_callback(move |_checked: bool| {
        state.toggle();
    })
}

/// Script that sets the dark marker on the document root to match `mode`.
pub fn dark_mode_script(mode: ThemeMode) -> String {
    format!(
        "document.documentElement.classList.toggle('{DARK_MARKER}', {});",
        mode.is_dark()
    )
}

/// Add or remove the dark marker on the document root.
pub fn apply_theme(mode: ThemeMode) {
    document::eval(&dark_mode_script(mode));
}

/// Keep the document root in sync with the provided [`ThemeState`].
///
/// Renders nothing. Mount once below the provider.
#[component]
pub fn DarkModeSync() -> Element {
    let state = use_theme();

    use_effect(move || {
        apply_theme(state.mode());
    });

    rsx! {}
}
