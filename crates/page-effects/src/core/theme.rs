//! Persisted light/dark preference.

use crate::core::element::ElementLike;

/// Local storage key holding the preference.
pub const THEME_KEY: &str = "theme";
/// Class toggled on the document root.
pub const DARK_CLASS: &str = "dark";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// Interpret a stored value. Only the exact string `dark` selects dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// String identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Add or remove the root `dark` class.
    pub fn apply<E: ElementLike + ?Sized>(self, root: &E) {
        root.set_class(DARK_CLASS, self == Self::Dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::fake::FakeElement;

    #[test]
    fn only_exact_dark_selects_dark() {
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("Dark")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    }

    #[test]
    fn light_clears_a_server_rendered_dark_class() {
        let root = FakeElement::with_classes(&["dark"]);
        ThemeMode::Light.apply(&root);
        assert!(!root.has_class(DARK_CLASS));
        ThemeMode::Dark.apply(&root);
        assert!(root.has_class(DARK_CLASS));
    }

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
