//! Responsive breakpoint shared with the page's utility CSS.

/// Breakpoint with an inclusive minimum width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Utility prefix (`md`).
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u32,
}

/// Tablets; the sidebar becomes a permanent column from here up.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
};

/// Convert a `window.innerWidth` reading to whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn width_from_js(width: f64) -> u32 {
    if width.is_finite() && width > 0.0 {
        width.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md_matches_utility_css() {
        assert_eq!(MD.name, "md");
        assert_eq!(MD.min_width, 768);
    }

    #[test]
    fn js_width_is_clamped() {
        assert_eq!(width_from_js(767.9), 767);
        assert_eq!(width_from_js(-3.0), 0);
        assert_eq!(width_from_js(f64::NAN), 0);
    }
}
