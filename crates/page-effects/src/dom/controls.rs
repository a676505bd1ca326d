//! Click wiring for the auth buttons, hamburger menu and sidebar.

use crate::core::breakpoints::width_from_js;
use crate::core::buttons::{
    AuthRole, ButtonPair, ButtonPairs, LOGIN_DESKTOP_ID, LOGIN_MOBILE_ID, SIGNUP_DESKTOP_ID,
    SIGNUP_MOBILE_ID,
};
use crate::core::menu::{self, MobileMenu};
use crate::core::sidebar::{self, NavLink, Sidebar};
use crate::dom::element::{by_id, query_all};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::{Document, Element, Window};

/// Attach click handlers to every auth button present; returns how many.
pub(crate) fn wire_buttons(document: &Document, listeners: &mut Vec<EventListener>) -> usize {
    let pairs = Rc::new(ButtonPairs {
        desktop: ButtonPair {
            login: by_id(document, LOGIN_DESKTOP_ID),
            signup: by_id(document, SIGNUP_DESKTOP_ID),
        },
        mobile: ButtonPair {
            login: by_id(document, LOGIN_MOBILE_ID),
            signup: by_id(document, SIGNUP_MOBILE_ID),
        },
    });
    let buttons = [
        (pairs.desktop.login.clone(), AuthRole::Login),
        (pairs.desktop.signup.clone(), AuthRole::Signup),
        (pairs.mobile.login.clone(), AuthRole::Login),
        (pairs.mobile.signup.clone(), AuthRole::Signup),
    ];
    for (button, role) in buttons {
        let Some(button) = button else { continue };
        let pairs = Rc::clone(&pairs);
        listeners.push(EventListener::new(&button, "click", move |_event| {
            pairs.set_active(role.selects_login());
        }));
    }
    pairs.present()
}

/// Attach the hamburger toggle when all four parts exist.
pub(crate) fn wire_mobile_menu(document: &Document, listeners: &mut Vec<EventListener>) -> bool {
    let Some(mobile_menu) = MobileMenu::from_parts(
        by_id(document, menu::TOGGLE_ID),
        by_id(document, menu::MENU_ID),
        by_id(document, menu::ICON_OPEN_ID),
        by_id(document, menu::ICON_CLOSE_ID),
    ) else {
        return false;
    };
    let toggle = mobile_menu.toggle.clone();
    listeners.push(EventListener::new(&toggle, "click", move |_event| {
        mobile_menu.toggle();
    }));
    true
}

/// What the sidebar wiring found.
pub(crate) struct SidebarWiring {
    pub(crate) triggers: usize,
    pub(crate) links: usize,
}

/// Attach open/close triggers and navigation links, marking the link for
/// the current page.
pub(crate) fn wire_sidebar(
    window: &Window,
    document: &Document,
    auto_close_below: u32,
    listeners: &mut Vec<EventListener>,
) -> SidebarWiring {
    let panel = Rc::new(Sidebar {
        panel: by_id(document, sidebar::SIDEBAR_ID),
        overlay: by_id(document, sidebar::OVERLAY_ID),
    });

    let triggers: [(Option<Element>, bool); 3] = [
        (by_id(document, sidebar::TOGGLE_ID), true),
        (by_id(document, sidebar::CLOSE_ID), false),
        (panel.overlay.clone(), false),
    ];
    let mut wired = 0;
    for (trigger, opens) in triggers {
        let Some(trigger) = trigger else { continue };
        let panel = Rc::clone(&panel);
        listeners.push(EventListener::new(&trigger, "click", move |_event| {
            if opens {
                panel.open();
            } else {
                panel.close();
            }
        }));
        wired += 1;
    }

    let links: Rc<Vec<NavLink<Element>>> = Rc::new(
        query_all(document, sidebar::LINK_SELECTOR)
            .into_iter()
            .map(|element| {
                let href = element.get_attribute("href");
                NavLink { element, href }
            })
            .collect(),
    );
    let current_path = window.location().pathname().unwrap_or_default();
    sidebar::mark_current(&links, &current_path);

    for (index, link) in links.iter().enumerate() {
        let links = Rc::clone(&links);
        let panel = Rc::clone(&panel);
        let window = window.clone();
        listeners.push(EventListener::new(&link.element, "click", move |_event| {
            sidebar::on_link_click(
                &panel,
                &links,
                index,
                viewport_width(&window),
                auto_close_below,
            );
        }));
    }

    SidebarWiring {
        triggers: wired,
        links: links.len(),
    }
}

fn viewport_width(window: &Window) -> u32 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map_or(u32::MAX, width_from_js)
}
