//! Summary of which behaviors found their elements.

use std::fmt;

/// Outcome of wiring, one entry per behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureSet {
    /// Login/signup buttons found (0 to 4).
    pub auth_buttons: usize,
    /// Hamburger menu wired.
    pub mobile_menu: bool,
    /// Sidebar open/close triggers wired.
    pub sidebar_triggers: usize,
    /// Sidebar navigation links found.
    pub nav_links: usize,
    /// Typing animation running.
    pub typing: bool,
    /// Cursor follower wired.
    pub cursor: bool,
    /// Particle containers spawning.
    pub particle_containers: usize,
}

impl FeatureSet {
    /// Whether nothing at all was wired.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.auth_buttons == 0
            && !self.mobile_menu
            && self.sidebar_triggers == 0
            && self.nav_links == 0
            && !self.typing
            && !self.cursor
            && self.particle_containers == 0
    }
}

/// Whether wiring must wait for `DOMContentLoaded`, given `document.readyState`.
#[must_use]
pub fn awaits_content_loaded(ready_state: &str) -> bool {
    ready_state == "loading"
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool| if on { "on" } else { "off" };
        write!(
            f,
            "buttons={} menu={} sidebar_triggers={} nav_links={} typing={} cursor={} particles={}",
            self.auth_buttons,
            flag(self.mobile_menu),
            self.sidebar_triggers,
            self.nav_links,
            flag(self.typing),
            flag(self.cursor),
            self.particle_containers,
        )
    }
}
