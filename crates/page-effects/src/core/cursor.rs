//! Custom cursor follower.

use crate::core::element::ElementLike;

/// Selector for the main cursor ring.
pub const CURSOR_SELECTOR: &str = ".cursor";
/// Selector for the cursor dot.
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
/// Class present on the ring while a button is held.
pub const CLICK_CLASS: &str = "click";

/// Both cursor visuals; wired only when both exist.
#[derive(Debug)]
pub struct CursorFollower<E> {
    /// Ring that also shows the click marker.
    pub ring: E,
    /// Dot.
    pub dot: E,
}

impl<E: ElementLike> CursorFollower<E> {
    /// Assemble the follower, or `None` when either visual is missing.
    #[must_use]
    pub fn from_parts(ring: Option<E>, dot: Option<E>) -> Option<Self> {
        Some(Self {
            ring: ring?,
            dot: dot?,
        })
    }

    /// Move both visuals to the pointer position.
    pub fn move_to(&self, x: i32, y: i32) {
        let left = format!("{x}px");
        let top = format!("{y}px");
        for el in [&self.ring, &self.dot] {
            el.set_style("left", &left);
            el.set_style("top", &top);
        }
    }

    /// Show or clear the pressed marker.
    pub fn set_pressed(&self, pressed: bool) {
        self.ring.set_class(CLICK_CLASS, pressed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::fake::FakeElement;

    fn follower() -> CursorFollower<FakeElement> {
        CursorFollower {
            ring: FakeElement::default(),
            dot: FakeElement::default(),
        }
    }

    #[test]
    fn both_visuals_track_the_pointer() {
        let cursor = follower();
        cursor.move_to(120, -4);
        for el in [&cursor.ring, &cursor.dot] {
            assert_eq!(el.style("left").as_deref(), Some("120px"));
            assert_eq!(el.style("top").as_deref(), Some("-4px"));
        }
    }

    #[test]
    fn press_marks_only_the_ring() {
        let cursor = follower();
        cursor.set_pressed(true);
        assert!(cursor.ring.has_class(CLICK_CLASS));
        assert!(!cursor.dot.has_class(CLICK_CLASS));
        cursor.set_pressed(false);
        assert!(!cursor.ring.has_class(CLICK_CLASS));
    }

    #[test]
    fn missing_dot_disables_follower() {
        assert!(CursorFollower::from_parts(Some(FakeElement::default()), None).is_none());
    }
}
