//! Minimal element surface the effects operate on.
//!
//! # Design
//! - Behaviors are written against [`ElementLike`] so they run unchanged on
//!   live DOM nodes and on in-memory fakes.
//! - Every operation is infallible from the caller's point of view; DOM
//!   implementations swallow the rare exceptions the browser can raise.

/// Class, attribute, style and text access for a single element.
pub trait ElementLike {
    /// Add a class token.
    fn add_class(&self, class: &str);
    /// Remove a class token. Removing an absent token is a no-op.
    fn remove_class(&self, class: &str);
    /// Whether the class token is present.
    fn has_class(&self, class: &str) -> bool;
    /// Set an attribute value.
    fn set_attr(&self, name: &str, value: &str);
    /// Set an inline style property.
    fn set_style(&self, property: &str, value: &str);
    /// Replace the text content.
    fn set_text(&self, text: &str);

    /// Add or remove `class` depending on `on`.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Add every class in `classes`.
    fn add_classes(&self, classes: &[&str]) {
        for class in classes {
            self.add_class(class);
        }
    }

    /// Remove every class in `classes`.
    fn remove_classes(&self, classes: &[&str]) {
        for class in classes {
            self.remove_class(class);
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::ElementLike;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    /// In-memory element used by unit tests.
    #[derive(Debug, Default)]
    pub(crate) struct FakeElement {
        classes: RefCell<BTreeSet<String>>,
        attrs: RefCell<BTreeMap<String, String>>,
        styles: RefCell<BTreeMap<String, String>>,
        text: RefCell<String>,
    }

    impl FakeElement {
        pub(crate) fn with_classes(classes: &[&str]) -> Self {
            let element = Self::default();
            element.add_classes(classes);
            element
        }

        pub(crate) fn classes(&self) -> Vec<String> {
            self.classes.borrow().iter().cloned().collect()
        }

        pub(crate) fn attr(&self, name: &str) -> Option<String> {
            self.attrs.borrow().get(name).cloned()
        }

        pub(crate) fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }

        pub(crate) fn text(&self) -> String {
            self.text.borrow().clone()
        }
    }

    impl ElementLike for FakeElement {
        fn add_class(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().remove(class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        fn set_attr(&self, name: &str, value: &str) {
            self.attrs
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }

        fn set_style(&self, property: &str, value: &str) {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }

        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ElementLike;
    use super::fake::FakeElement;

    #[test]
    fn set_class_adds_and_removes() {
        let el = FakeElement::default();
        el.set_class("hidden", true);
        assert!(el.has_class("hidden"));
        el.set_class("hidden", false);
        assert!(!el.has_class("hidden"));
    }

    #[test]
    fn set_text_replaces_content() {
        let el = FakeElement::default();
        el.set_text("Made");
        el.set_text("Made Easy");
        assert_eq!(el.text(), "Made Easy");
    }

    #[test]
    fn removing_absent_class_is_noop() {
        let el = FakeElement::with_classes(&["block"]);
        el.remove_classes(&["hidden", "opacity-0"]);
        assert_eq!(el.classes(), vec!["block".to_string()]);
    }
}
