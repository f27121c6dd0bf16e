use crate::dom;

/// Class on `<html>` that switches the CSS variables to the dark palette.
pub const DARK_CLASS: &str = "dark";
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme for the system `prefers-color-scheme` answer. An unknown
    /// preference (no window, no `matchMedia`) falls back to light.
    pub fn from_system(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => Theme::Dark,
            Some(false) | None => Theme::Light,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Ativar modo escuro",
            Theme::Dark => "Ativar modo claro",
        }
    }

    pub fn apply(self) {
        dom::set_root_class(DARK_CLASS, self.is_dark());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggle().toggle(), theme);
            assert_ne!(theme.toggle(), theme);
        }
    }

    #[test]
    fn follows_system_preference() {
        assert_eq!(Theme::from_system(Some(true)), Theme::Dark);
        assert_eq!(Theme::from_system(Some(false)), Theme::Light);
    }

    #[test]
    fn unknown_preference_is_light() {
        assert_eq!(Theme::from_system(None), Theme::Light);
        assert_eq!(Theme::from_system(None), Theme::default());
    }
}
