// Pan/zoom controller for a world element nested in a fixed viewport.
// Mouse drag pans, wheel zooms toward the cursor, two-finger pinch zooms
// toward the touch midpoint. All gesture math lives in state::PanZoomEngine;
// this module only wires DOM events and writes the CSS transform back.
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{DomRect, Event, EventTarget, HtmlElement, PointerEvent, TouchEvent, TouchList, WheelEvent};

use crate::state::{PanZoomEngine, PanZoomOptions, PanZoomState, PanZoomUpdate};

const HINT_TEXT: &str = "Scroll to zoom \u{b7} Drag to pan";
const HINT_FADE_MS: i32 = 500;
const HINT_CSS: &str = "position:absolute;bottom:12px;left:50%;transform:translateX(-50%);\
    font-size:0.75rem;color:#8b949e;opacity:0.7;pointer-events:none;\
    font-family:monospace;transition:opacity 0.5s;z-index:5;";
const TRANSITION_CSS: &str = "transform 0.5s cubic-bezier(0.4, 0, 0.2, 1)";

/// A registered DOM listener; detached symmetrically on cleanup.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    cb: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        cb: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            cb,
        })
    }

    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.cb.as_ref().unchecked_ref());
    }
}

struct Inner {
    engine: PanZoomEngine,
    viewport: HtmlElement,
    world: HtmlElement,
    hint: Option<HtmlElement>,
}

impl Inner {
    fn apply_transform(&self) {
        let st = self.engine.state();
        let _ = self.world.style().set_property(
            "transform",
            &format!("translate({}px, {}px) scale({})", st.x, st.y, st.scale),
        );
    }

    // Idempotent: fades the overlay, detaches it after the fade.
    fn dismiss_hint(&mut self) {
        let Some(hint) = self.hint.take() else { return };
        let _ = hint.style().set_property("opacity", "0");
        let Some(win) = web_sys::window() else {
            hint.remove();
            return;
        };
        let el = hint.clone();
        let remove_cb = Closure::once_into_js(move || hint.remove());
        if win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                remove_cb.unchecked_ref(),
                HINT_FADE_MS,
            )
            .is_err()
        {
            el.remove();
        }
    }
}

/// The controller instance returned by [`PanZoom::new`]. Owns the transform
/// state and every listener it registered; [`PanZoom::cleanup`] releases
/// them all and leaves the instance inert (state stays readable).
pub struct PanZoom {
    inner: Rc<RefCell<Inner>>,
    listeners: RefCell<Vec<Listener>>,
    // One-shot transitionend guard for the current animated set_state, if any.
    transition: Rc<RefCell<Option<Listener>>>,
}

impl PanZoom {
    pub fn new(
        viewport: HtmlElement,
        world: HtmlElement,
        opts: PanZoomOptions,
    ) -> Result<Self, JsValue> {
        let hint = if opts.hint {
            let document = viewport
                .owner_document()
                .ok_or_else(|| JsValue::from_str("viewport is not attached to a document"))?;
            let el: HtmlElement = document.create_element("div")?.dyn_into()?;
            el.set_text_content(Some(HINT_TEXT));
            el.style().set_css_text(HINT_CSS);
            // the overlay is positioned against the viewport
            if viewport
                .style()
                .get_property_value("position")
                .unwrap_or_default()
                .is_empty()
            {
                let _ = viewport.style().set_property("position", "relative");
            }
            viewport.append_child(&el)?;
            Some(el)
        } else {
            None
        };

        let _ = viewport.style().set_property("cursor", "grab");
        let _ = viewport.style().set_property("overflow", "hidden");
        let _ = world.style().set_property("transform-origin", "0 0");

        let inner = Rc::new(RefCell::new(Inner {
            engine: PanZoomEngine::new(opts),
            viewport: viewport.clone(),
            world,
            hint,
        }));
        inner.borrow().apply_transform();

        let mut listeners = Vec::new();

        let pointerdown = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: Event| {
                let e: PointerEvent = e.unchecked_into();
                if e.button() != 0 {
                    return;
                }
                let mut s = inner.borrow_mut();
                if s.engine
                    .pointer_down(e.pointer_id(), e.client_x() as f64, e.client_y() as f64)
                {
                    let _ = s.viewport.style().set_property("cursor", "grabbing");
                    let _ = s.viewport.set_pointer_capture(e.pointer_id());
                    s.dismiss_hint();
                }
            }) as Box<dyn FnMut(Event)>)
        };
        listeners.push(Listener::attach(&viewport, "pointerdown", pointerdown)?);

        let pointermove = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: Event| {
                let e: PointerEvent = e.unchecked_into();
                let mut s = inner.borrow_mut();
                if s.engine
                    .pointer_move(e.pointer_id(), e.client_x() as f64, e.client_y() as f64)
                {
                    s.apply_transform();
                }
            }) as Box<dyn FnMut(Event)>)
        };
        listeners.push(Listener::attach(&viewport, "pointermove", pointermove)?);

        // pointerup and pointercancel end the drag the same way
        for kind in ["pointerup", "pointercancel"] {
            let inner = inner.clone();
            let cb = Closure::wrap(Box::new(move |e: Event| {
                let e: PointerEvent = e.unchecked_into();
                let mut s = inner.borrow_mut();
                if s.engine.pointer_up(e.pointer_id()) {
                    let _ = s.viewport.style().set_property("cursor", "grab");
                    let _ = s.viewport.release_pointer_capture(e.pointer_id());
                }
            }) as Box<dyn FnMut(Event)>);
            listeners.push(Listener::attach(&viewport, kind, cb)?);
        }

        let wheel = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: Event| {
                let e: WheelEvent = e.unchecked_into();
                e.prevent_default();
                let mut s = inner.borrow_mut();
                s.dismiss_hint();
                let rect = s.viewport.get_bounding_client_rect();
                let cx = e.client_x() as f64 - rect.left();
                let cy = e.client_y() as f64 - rect.top();
                if s.engine.wheel(e.delta_y(), cx, cy) {
                    s.apply_transform();
                }
            }) as Box<dyn FnMut(Event)>)
        };
        listeners.push(Listener::attach(&viewport, "wheel", wheel)?);

        let touchstart = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: Event| {
                let e: TouchEvent = e.unchecked_into();
                let touches = e.touches();
                if touches.length() == 2 {
                    if let Some(dist) = touch_distance(&touches) {
                        let mut s = inner.borrow_mut();
                        s.engine.pinch_start(dist);
                        s.dismiss_hint();
                    }
                }
            }) as Box<dyn FnMut(Event)>)
        };
        listeners.push(Listener::attach(&viewport, "touchstart", touchstart)?);

        let touchmove = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: Event| {
                let e: TouchEvent = e.unchecked_into();
                let touches = e.touches();
                if touches.length() != 2 {
                    return;
                }
                e.prevent_default();
                let mut s = inner.borrow_mut();
                let rect = s.viewport.get_bounding_client_rect();
                if let (Some(dist), Some((mx, my))) =
                    (touch_distance(&touches), touch_midpoint(&touches, &rect))
                {
                    if s.engine.pinch_move(dist, mx, my) {
                        s.apply_transform();
                    }
                }
            }) as Box<dyn FnMut(Event)>)
        };
        listeners.push(Listener::attach(&viewport, "touchmove", touchmove)?);

        // dropping below two touches discards the pinch session
        for kind in ["touchend", "touchcancel"] {
            let inner = inner.clone();
            let cb = Closure::wrap(Box::new(move |e: Event| {
                let e: TouchEvent = e.unchecked_into();
                if e.touches().length() < 2 {
                    inner.borrow_mut().engine.pinch_end();
                }
            }) as Box<dyn FnMut(Event)>);
            listeners.push(Listener::attach(&viewport, kind, cb)?);
        }

        Ok(Self {
            inner,
            listeners: RefCell::new(listeners),
            transition: Rc::new(RefCell::new(None)),
        })
    }

    /// Snapshot copy of the current transform.
    pub fn state(&self) -> PanZoomState {
        self.inner.borrow().engine.state()
    }

    /// Apply a partial update, clamping scale. With `animate` the commit is
    /// eased over a short CSS transition; a new call supersedes any
    /// transition still in flight.
    pub fn set_state(&self, update: PanZoomUpdate, animate: bool) {
        let mut s = self.inner.borrow_mut();
        if !s.engine.set_state(update) {
            return;
        }
        if animate {
            let _ = s.world.style().set_property("transition", TRANSITION_CSS);
            s.apply_transform();
            let world = s.world.clone();
            drop(s);
            self.arm_transition_teardown(world);
        } else {
            s.apply_transform();
        }
    }

    /// Back to `(0, 0, initial_scale)`, instantaneously.
    pub fn reset(&self) {
        let mut s = self.inner.borrow_mut();
        if s.engine.reset() {
            s.apply_transform();
        }
    }

    /// Remove every registered listener and the hint if still present.
    /// Safe to call repeatedly; afterwards the instance no longer reacts to
    /// input or programmatic updates, but `state()` stays readable.
    pub fn cleanup(&self) {
        for l in self.listeners.borrow_mut().drain(..) {
            l.detach();
        }
        if let Some(l) = self.transition.borrow_mut().take() {
            l.detach();
        }
        let mut s = self.inner.borrow_mut();
        s.engine.disable();
        // a detached guard can no longer clear an in-flight easing
        let _ = s.world.style().set_property("transition", "");
        if let Some(hint) = s.hint.take() {
            hint.remove();
        }
    }

    // One-shot transitionend listener that clears the easing so later
    // instantaneous commits don't animate. Replaces any pending guard from
    // a superseded transition.
    fn arm_transition_teardown(&self, world: HtmlElement) {
        if let Some(old) = self.transition.borrow_mut().take() {
            old.detach();
        }
        let slot = self.transition.clone();
        let cb = {
            let world = world.clone();
            let slot = slot.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                let _ = world.style().set_property("transition", "");
                if let Some(l) = slot.borrow_mut().take() {
                    l.detach();
                }
            }) as Box<dyn FnMut(Event)>)
        };
        if let Ok(l) = Listener::attach(&world, "transitionend", cb) {
            *slot.borrow_mut() = Some(l);
        }
    }
}

fn touch_distance(touches: &TouchList) -> Option<f64> {
    let (a, b) = (touches.item(0)?, touches.item(1)?);
    let dx = (b.client_x() - a.client_x()) as f64;
    let dy = (b.client_y() - a.client_y()) as f64;
    Some(dx.hypot(dy))
}

fn touch_midpoint(touches: &TouchList, rect: &DomRect) -> Option<(f64, f64)> {
    let (a, b) = (touches.item(0)?, touches.item(1)?);
    let mx = (a.client_x() + b.client_x()) as f64 / 2.0 - rect.left();
    let my = (a.client_y() + b.client_y()) as f64 / 2.0 - rect.top();
    Some((mx, my))
}
