//! Hamburger menu toggle.

use crate::core::element::ElementLike;

/// Toggle control id.
pub const TOGGLE_ID: &str = "btn-mobile-toggle";
/// Menu panel id.
pub const MENU_ID: &str = "mobile-menu";
/// "Open" glyph id, shown while the menu is closed.
pub const ICON_OPEN_ID: &str = "icon-open";
/// "Close" glyph id, shown while the menu is open.
pub const ICON_CLOSE_ID: &str = "icon-close";

const HIDDEN: &str = "hidden";
const BLOCK: &str = "block";

/// All four elements the menu needs. Built only when every one is present.
#[derive(Debug)]
pub struct MobileMenu<E> {
    /// Hamburger button.
    pub toggle: E,
    /// Collapsible panel.
    pub menu: E,
    /// Glyph visible while closed.
    pub icon_open: E,
    /// Glyph visible while open.
    pub icon_close: E,
}

impl<E: ElementLike> MobileMenu<E> {
    /// Assemble the menu, or `None` when any element is missing.
    #[must_use]
    pub fn from_parts(
        toggle: Option<E>,
        menu: Option<E>,
        icon_open: Option<E>,
        icon_close: Option<E>,
    ) -> Option<Self> {
        Some(Self {
            toggle: toggle?,
            menu: menu?,
            icon_open: icon_open?,
            icon_close: icon_close?,
        })
    }

    /// Whether the panel is currently visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.menu.has_class(HIDDEN)
    }

    /// Flip visibility once and return the new open state.
    pub fn toggle(&self) -> bool {
        let open = !self.is_open();
        self.render(open);
        open
    }

    fn render(&self, open: bool) {
        self.menu.set_class(HIDDEN, !open);
        show(&self.icon_open, !open);
        show(&self.icon_close, open);
        self.toggle
            .set_attr("aria-expanded", if open { "true" } else { "false" });
    }
}

fn show<E: ElementLike>(el: &E, visible: bool) {
    el.set_class(HIDDEN, !visible);
    el.set_class(BLOCK, visible);
}
