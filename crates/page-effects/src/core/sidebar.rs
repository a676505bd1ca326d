//! Slide-in sidebar with an overlay and active-link tracking.
//!
//! # Design
//! - The sidebar and overlay are always toggled together; either may be
//!   absent, in which case only the present one changes.
//! - Active link matching is an exact string comparison against the
//!   current path. No prefix or normalisation; every matching link is
//!   marked.
//! - The auto-close decision reads the viewport width at click time.

use crate::core::breakpoints;
use crate::core::element::ElementLike;

/// Sidebar panel id.
pub const SIDEBAR_ID: &str = "sidebar";
/// Open trigger id.
pub const TOGGLE_ID: &str = "sidebar-toggle";
/// Close trigger id.
pub const CLOSE_ID: &str = "sidebar-close";
/// Backdrop id.
pub const OVERLAY_ID: &str = "sidebar-overlay";
/// Selector for navigation links.
pub const LINK_SELECTOR: &str = ".sidebar-link";
/// Marker class on the link for the current page.
pub const ACTIVE_CLASS: &str = "active";

const OFFSCREEN: &str = "-translate-x-full";
const OVERLAY_HIDDEN: [&str; 2] = ["hidden", "opacity-0"];

/// Default width below which a link click closes the sidebar.
pub const AUTO_CLOSE_BELOW: u32 = breakpoints::MD.min_width;

/// Sidebar panel and its backdrop.
#[derive(Debug)]
pub struct Sidebar<E> {
    /// Sliding panel.
    pub panel: Option<E>,
    /// Dimmed backdrop.
    pub overlay: Option<E>,
}

impl<E: ElementLike> Sidebar<E> {
    /// Slide the panel in and reveal the overlay.
    pub fn open(&self) {
        if let Some(panel) = &self.panel {
            panel.remove_class(OFFSCREEN);
        }
        if let Some(overlay) = &self.overlay {
            overlay.remove_classes(&OVERLAY_HIDDEN);
        }
    }

    /// Slide the panel out and hide the overlay.
    pub fn close(&self) {
        if let Some(panel) = &self.panel {
            panel.add_class(OFFSCREEN);
        }
        if let Some(overlay) = &self.overlay {
            overlay.add_classes(&OVERLAY_HIDDEN);
        }
    }

    /// Whether the panel is on screen.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel
            .as_ref()
            .is_some_and(|panel| !panel.has_class(OFFSCREEN))
    }
}

/// A navigation link and the path it points at.
#[derive(Debug)]
pub struct NavLink<E> {
    /// Link element.
    pub element: E,
    /// Raw `href` attribute value.
    pub href: Option<String>,
}

/// Indices of every link whose target equals `current_path`.
#[must_use]
pub fn matching_links<E>(links: &[NavLink<E>], current_path: &str) -> Vec<usize> {
    links
        .iter()
        .enumerate()
        .filter(|(_, link)| link.href.as_deref() == Some(current_path))
        .map(|(index, _)| index)
        .collect()
}

/// Mark every link matching `current_path`; returns the marked indices.
pub fn mark_current<E: ElementLike>(links: &[NavLink<E>], current_path: &str) -> Vec<usize> {
    let matched = matching_links(links, current_path);
    for &index in &matched {
        links[index].element.add_class(ACTIVE_CLASS);
    }
    matched
}

/// Move the active marker to `clicked`.
pub fn activate<E: ElementLike>(links: &[NavLink<E>], clicked: usize) {
    for link in links {
        link.element.remove_class(ACTIVE_CLASS);
    }
    if let Some(link) = links.get(clicked) {
        link.element.add_class(ACTIVE_CLASS);
    }
}

/// Whether a link click at this viewport width should close the sidebar.
#[must_use]
pub const fn should_auto_close(viewport_width: u32, threshold: u32) -> bool {
    viewport_width < threshold
}

/// Full link-click reaction: move the marker, then close on narrow screens.
pub fn on_link_click<E: ElementLike>(
    sidebar: &Sidebar<E>,
    links: &[NavLink<E>],
    clicked: usize,
    viewport_width: u32,
    threshold: u32,
) {
    activate(links, clicked);
    if should_auto_close(viewport_width, threshold) {
        sidebar.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::fake::FakeElement;

    fn closed_sidebar() -> Sidebar<FakeElement> {
        Sidebar {
            panel: Some(FakeElement::with_classes(&["fixed", "-translate-x-full"])),
            overlay: Some(FakeElement::with_classes(&["fixed", "hidden", "opacity-0"])),
        }
    }

    fn links(paths: &[&str]) -> Vec<NavLink<FakeElement>> {
        paths
            .iter()
            .map(|path| NavLink {
                element: FakeElement::default(),
                href: Some((*path).to_string()),
            })
            .collect()
    }

    fn active_indices(links: &[NavLink<FakeElement>]) -> Vec<usize> {
        links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.element.has_class(ACTIVE_CLASS))
            .map(|(idx, _)| idx)
            .collect()
    }

    #[test]
    fn open_then_close_restores_exact_state() {
        let sidebar = closed_sidebar();
        let before = (
            sidebar.panel.as_ref().map(FakeElement::classes),
            sidebar.overlay.as_ref().map(FakeElement::classes),
        );
        sidebar.open();
        assert!(sidebar.is_open());
        assert!(
            sidebar
                .overlay
                .as_ref()
                .is_some_and(|o| !o.has_class("hidden") && !o.has_class("opacity-0"))
        );
        sidebar.close();
        let after = (
            sidebar.panel.as_ref().map(FakeElement::classes),
            sidebar.overlay.as_ref().map(FakeElement::classes),
        );
        assert_eq!(before, after);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn missing_overlay_still_moves_panel() {
        let sidebar = Sidebar {
            panel: Some(FakeElement::with_classes(&["-translate-x-full"])),
            overlay: None,
        };
        sidebar.open();
        assert!(sidebar.is_open());
    }

    #[test]
    fn exact_path_match_marks_single_link() {
        let links = links(&["/owner", "/dashboard", "/settings"]);
        assert_eq!(mark_current(&links, "/dashboard"), vec![1]);
        assert_eq!(active_indices(&links), vec![1]);
    }

    #[test]
    fn every_link_to_the_current_page_is_marked() {
        let links = links(&["/dashboard", "/settings", "/dashboard"]);
        assert_eq!(mark_current(&links, "/dashboard"), vec![0, 2]);
        assert_eq!(active_indices(&links), vec![0, 2]);
    }

    #[test]
    fn near_misses_do_not_match() {
        let links = links(&["/dashboard/", "/dashboard?tab=1", "/dash"]);
        assert!(mark_current(&links, "/dashboard").is_empty());
        assert!(active_indices(&links).is_empty());
    }

    #[test]
    fn link_without_href_never_matches() {
        let links = vec![NavLink {
            element: FakeElement::default(),
            href: None,
        }];
        assert!(matching_links(&links, "").is_empty());
    }

    #[test]
    fn click_moves_marker_and_closes_on_narrow_viewport() {
        let sidebar = closed_sidebar();
        sidebar.open();
        let links = links(&["/a", "/b", "/c"]);
        mark_current(&links, "/a");
        on_link_click(&sidebar, &links, 2, 375, AUTO_CLOSE_BELOW);
        assert_eq!(active_indices(&links), vec![2]);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn click_on_wide_viewport_keeps_sidebar_open() {
        let sidebar = closed_sidebar();
        sidebar.open();
        let links = links(&["/a", "/b"]);
        on_link_click(&sidebar, &links, 1, 768, AUTO_CLOSE_BELOW);
        assert_eq!(active_indices(&links), vec![1]);
        assert!(sidebar.is_open());
    }
}
