//! Login/signup button pair styling.
//!
//! Exactly one button of each pair carries the filled treatment; the other
//! carries the outlined treatment. Classes are replaced wholesale so no
//! mixed state survives a click.

use crate::core::element::ElementLike;

/// Desktop login button id.
pub const LOGIN_DESKTOP_ID: &str = "btn-login-desktop";
/// Desktop signup button id.
pub const SIGNUP_DESKTOP_ID: &str = "btn-signup-desktop";
/// Mobile login button id.
pub const LOGIN_MOBILE_ID: &str = "btn-login-mobile";
/// Mobile signup button id.
pub const SIGNUP_MOBILE_ID: &str = "btn-signup-mobile";

/// Filled (selected) treatment.
pub const ACTIVE_CLASSES: [&str; 7] = [
    "bg-blue-600",
    "text-white",
    "border",
    "border-transparent",
    "hover:bg-blue-700",
    "focus:bg-blue-700",
    "rounded-md",
];

/// Outlined (neutral) treatment.
pub const INACTIVE_CLASSES: [&str; 7] = [
    "bg-white",
    "text-black",
    "border",
    "border-gray-200",
    "hover:bg-gray-50",
    "focus:bg-gray-50",
    "rounded-md",
];

/// Every class either treatment may leave behind, plus legacy rounding.
pub const STATE_CLASSES: [&str; 13] = [
    "bg-blue-600",
    "text-white",
    "border",
    "border-transparent",
    "hover:bg-blue-700",
    "focus:bg-blue-700",
    "bg-white",
    "text-black",
    "border-gray-200",
    "hover:bg-gray-50",
    "focus:bg-gray-50",
    "rounded-full",
    "rounded-md",
];

/// Which side of the pair a button represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthRole {
    /// Login control.
    Login,
    /// Signup control.
    Signup,
}

impl AuthRole {
    /// Whether a button of this role is the active one.
    #[must_use]
    pub const fn is_active(self, login_active: bool) -> bool {
        match self {
            Self::Login => login_active,
            Self::Signup => !login_active,
        }
    }

    /// Value passed to [`ButtonPairs::set_active`] when this role is clicked.
    #[must_use]
    pub const fn selects_login(self) -> bool {
        matches!(self, Self::Login)
    }
}

/// Replace the state classes on `el` with the active or inactive set.
pub fn apply_state<E: ElementLike + ?Sized>(el: &E, active: bool) {
    el.remove_classes(&STATE_CLASSES);
    if active {
        el.add_classes(&ACTIVE_CLASSES);
    } else {
        el.add_classes(&INACTIVE_CLASSES);
    }
}

/// One login/signup pair; either side may be missing from the page.
#[derive(Debug)]
pub struct ButtonPair<E> {
    /// Login-role button.
    pub login: Option<E>,
    /// Signup-role button.
    pub signup: Option<E>,
}

impl<E: ElementLike> ButtonPair<E> {
    /// Style both sides for the given selection.
    pub fn apply(&self, login_active: bool) {
        if let Some(login) = &self.login {
            apply_state(login, AuthRole::Login.is_active(login_active));
        }
        if let Some(signup) = &self.signup {
            apply_state(signup, AuthRole::Signup.is_active(login_active));
        }
    }

    fn present(&self) -> usize {
        usize::from(self.login.is_some()) + usize::from(self.signup.is_some())
    }
}

/// Desktop and mobile pairs, updated together on every click.
#[derive(Debug)]
pub struct ButtonPairs<E> {
    /// Navbar pair.
    pub desktop: ButtonPair<E>,
    /// Mobile menu pair.
    pub mobile: ButtonPair<E>,
}

impl<E: ElementLike> ButtonPairs<E> {
    /// Mark login (or signup) as the active control on both pairs.
    pub fn set_active(&self, login_active: bool) {
        self.desktop.apply(login_active);
        self.mobile.apply(login_active);
    }

    /// Number of buttons found on the page.
    #[must_use]
    pub fn present(&self) -> usize {
        self.desktop.present() + self.mobile.present()
    }
}
