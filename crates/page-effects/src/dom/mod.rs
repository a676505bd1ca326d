//! Browser wiring for the page effects.
//!
//! # Design
//! - Elements are resolved once at start-up; behaviors whose elements are
//!   missing are simply not wired.
//! - [`PageEffects`] owns every listener, timer and async loop. Dropping
//!   it detaches listeners, stops timers and clears live particles.

mod animate;
mod controls;
mod element;
mod preferences;

use crate::core::error::EffectsError;
use crate::core::features::{FeatureSet, awaits_content_loaded};
use crate::core::typing::TYPING_TEXT_ID;
use animate::{CancelFlag, ParticleSpawner};
use gloo::console;
use gloo::events::EventListener;
use std::cell::RefCell;

/// Handle to the running effects.
pub struct PageEffects {
    features: FeatureSet,
    listeners: Vec<EventListener>,
    spawners: Vec<ParticleSpawner>,
    typing: CancelFlag,
}

impl PageEffects {
    /// Which behaviors found their elements.
    #[must_use]
    pub const fn features(&self) -> FeatureSet {
        self.features
    }

    /// Stop everything. Equivalent to dropping the handle.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        self.typing.cancel();
        self.spawners.clear();
        self.listeners.clear();
    }
}

/// Resolve elements and start every behavior the page supports.
///
/// # Errors
///
/// Returns [`EffectsError::NoWindow`] or [`EffectsError::NoDocument`] when
/// there is no page to attach to.
pub fn start() -> Result<PageEffects, EffectsError> {
    let window = web_sys::window().ok_or(EffectsError::NoWindow)?;
    let document = window.document().ok_or(EffectsError::NoDocument)?;

    preferences::apply_theme(&document, preferences::load_theme(&window));
    let config = preferences::load_config(&document);

    let mut effects = PageEffects {
        features: FeatureSet::default(),
        listeners: Vec::new(),
        spawners: Vec::new(),
        typing: CancelFlag::default(),
    };

    effects.features.auth_buttons = controls::wire_buttons(&document, &mut effects.listeners);
    effects.features.mobile_menu = controls::wire_mobile_menu(&document, &mut effects.listeners);
    let sidebar = controls::wire_sidebar(
        &window,
        &document,
        config.sidebar.auto_close_below_px,
        &mut effects.listeners,
    );
    effects.features.sidebar_triggers = sidebar.triggers;
    effects.features.nav_links = sidebar.links;

    if let Some(target) = document.get_element_by_id(TYPING_TEXT_ID) {
        animate::start_typing(target, &config.typing, effects.typing.clone());
        effects.features.typing = true;
    }
    effects.features.cursor = animate::wire_cursor(&document, &mut effects.listeners);

    let plan = config.particles.plan();
    for id in &config.particles.containers {
        if let Some(container) = document.get_element_by_id(id) {
            effects
                .spawners
                .push(ParticleSpawner::start(&document, container, plan));
        }
    }
    effects.features.particle_containers = effects.spawners.len();

    Ok(effects)
}

thread_local! {
    static ACTIVE: RefCell<Option<PageEffects>> = const { RefCell::new(None) };
}

/// Start the effects once the document is parsed and keep them alive for
/// the page lifetime.
pub fn run_effects() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        console::error!("page-effects: no document to attach to");
        return;
    };
    if awaits_content_loaded(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_event| mount()).forget();
    } else {
        mount();
    }
}

/// Stop the running effects, if any.
pub fn teardown() {
    let running = ACTIVE.with(|slot| slot.borrow_mut().take());
    drop(running);
}

fn mount() {
    match start() {
        Ok(effects) => {
            let features = effects.features();
            if features.is_empty() {
                console::log!("page-effects: nothing to wire on this page");
            } else {
                console::log!("page-effects wired", features.to_string());
            }
            let previous = ACTIVE.with(|slot| slot.borrow_mut().replace(effects));
            drop(previous);
        }
        Err(err) => console::error!("page-effects failed to start", err.to_string()),
    }
}
