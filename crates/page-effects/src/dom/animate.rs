//! Timer- and pointer-driven effects: typing text, cursor follower and
//! floating particles.
//!
//! # Design
//! - Every loop is owned by a handle; dropping the handle stops it.
//! - The typing loop re-arms itself with a fresh delay per step, so it
//!   runs as an async task checking a shared cancel flag between steps.
//! - Particle removal is tracked per container so teardown can clear
//!   particles whose removal timer has not fired yet.

use crate::core::config::TypingConfig;
use crate::core::cursor::{CURSOR_DOT_SELECTOR, CURSOR_SELECTOR, CursorFollower};
use crate::core::element::ElementLike;
use crate::core::particles::{PARTICLE_CLASS, ParticleSpec, RandomSource, SpawnPlan};
use crate::core::typing::TypingAnimator;
use crate::dom::element::{JsRandom, query};
use gloo::events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, MouseEvent};

/// Shared stop flag checked by async loops between steps.
#[derive(Clone, Debug, Default)]
pub(crate) struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub(crate) fn cancel(&self) {
        self.0.set(true);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Run the type/delete loop against `target` until `cancel` is raised.
pub(crate) fn start_typing(target: Element, config: &TypingConfig, cancel: CancelFlag) {
    let mut animator = TypingAnimator::new(config.phrases.clone(), config.timings());
    let start_delay = config.start_delay_ms;
    spawn_local(async move {
        TimeoutFuture::new(start_delay).await;
        while !cancel.is_cancelled() {
            let frame = animator.tick();
            target.set_text(&frame.text);
            TimeoutFuture::new(frame.delay_ms).await;
        }
    });
}

/// Move both cursor visuals with the pointer and mark presses.
pub(crate) fn wire_cursor(document: &Document, listeners: &mut Vec<EventListener>) -> bool {
    let Some(cursor) = CursorFollower::from_parts(
        query(document, CURSOR_SELECTOR),
        query(document, CURSOR_DOT_SELECTOR),
    ) else {
        return false;
    };
    let cursor = Rc::new(cursor);
    {
        let cursor = Rc::clone(&cursor);
        listeners.push(EventListener::new(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                cursor.move_to(event.client_x(), event.client_y());
            }
        }));
    }
    for (kind, pressed) in [("mousedown", true), ("mouseup", false)] {
        let cursor = Rc::clone(&cursor);
        listeners.push(EventListener::new(document, kind, move |_event| {
            cursor.set_pressed(pressed);
        }));
    }
    true
}

/// Live particles of one container.
struct ParticleField {
    document: Document,
    container: Element,
    live: Rc<RefCell<HashMap<u64, Element>>>,
    next_id: Cell<u64>,
}

impl ParticleField {
    fn spawn<R: RandomSource + ?Sized>(&self, rng: &mut R) {
        let Ok(particle) = self.document.create_element("div") else {
            return;
        };
        let spec = ParticleSpec::sample(rng);
        particle.add_class(PARTICLE_CLASS);
        for (property, value) in spec.style_declarations() {
            particle.set_style(property, &value);
        }
        if self.container.append_child(&particle).is_err() {
            return;
        }

        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.live.borrow_mut().insert(id, particle);

        let live = Rc::clone(&self.live);
        spawn_local(async move {
            TimeoutFuture::new(spec.removal_delay_ms()).await;
            let removed = live.borrow_mut().remove(&id);
            if let Some(particle) = removed {
                particle.remove();
            }
        });
    }

    fn clear(&self) {
        let drained: Vec<Element> = self.live.borrow_mut().drain().map(|(_, el)| el).collect();
        for particle in drained {
            particle.remove();
        }
    }
}

/// Burst plus continuous spawning for one container.
pub(crate) struct ParticleSpawner {
    field: Rc<ParticleField>,
    burst: Vec<Timeout>,
    interval: Option<Interval>,
}

impl ParticleSpawner {
    pub(crate) fn start(document: &Document, container: Element, plan: SpawnPlan) -> Self {
        let field = Rc::new(ParticleField {
            document: document.clone(),
            container,
            live: Rc::new(RefCell::new(HashMap::new())),
            next_id: Cell::new(0),
        });
        let burst = plan
            .burst_offsets()
            .map(|offset| {
                let field = Rc::clone(&field);
                Timeout::new(offset, move || field.spawn(&mut JsRandom))
            })
            .collect();
        let interval = {
            let field = Rc::clone(&field);
            Interval::new(plan.interval_ms, move || field.spawn(&mut JsRandom))
        };
        Self {
            field,
            burst,
            interval: Some(interval),
        }
    }
}

impl Drop for ParticleSpawner {
    fn drop(&mut self) {
        self.interval.take();
        self.burst.clear();
        self.field.clear();
    }
}
