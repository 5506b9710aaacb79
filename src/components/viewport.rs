// Yew host for the pan-zoom controller: owns the viewport/world node refs,
// constructs the controller on mount, and tears it down when unmounted.
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::view_controls::ViewControls;
use crate::panzoom::PanZoom;
use crate::state::{PanZoomOptions, PanZoomState, PanZoomUpdate};
use crate::util::{clog, format_percent};

const SAVED_VIEW_KEY: &str = "pz_saved_view";
const BUTTON_ZOOM_STEP: f64 = 1.25;
const SCALE_POLL_MS: i32 = 200;

#[derive(Properties, PartialEq)]
pub struct PanZoomViewProps {
    #[prop_or_default]
    pub options: PanZoomOptions,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PanZoomView)]
pub fn pan_zoom_view(props: &PanZoomViewProps) -> Html {
    let viewport_ref = use_node_ref();
    let world_ref = use_node_ref();
    let controller = use_mut_ref(|| None::<Rc<PanZoom>>);
    let scale_label = use_state_eq(|| format_percent(props.options.scale));

    {
        let viewport_ref = viewport_ref.clone();
        let world_ref = world_ref.clone();
        let controller = controller.clone();
        let options = props.options.clone();
        let scale_label = scale_label.clone();
        use_effect_with((), move |_| {
            let viewport: HtmlElement = viewport_ref
                .cast::<HtmlElement>()
                .expect("viewport_ref not attached to an element");
            let world: HtmlElement = world_ref
                .cast::<HtmlElement>()
                .expect("world_ref not attached to an element");
            let pz = Rc::new(
                PanZoom::new(viewport, world, options).expect("pan-zoom listener setup failed"),
            );
            *controller.borrow_mut() = Some(pz.clone());

            // Wheel/drag/pinch mutate outside yew, so poll for the readout.
            let window = web_sys::window().expect("no global `window` exists");
            let tick = {
                let pz = pz.clone();
                let scale_label = scale_label.clone();
                Closure::wrap(Box::new(move || {
                    scale_label.set(format_percent(pz.state().scale));
                }) as Box<dyn FnMut()>)
            };
            let tick_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    SCALE_POLL_MS,
                )
                .unwrap();

            let window_clone = window.clone();
            move || {
                window_clone.clear_interval_with_handle(tick_id);
                if let Some(pz) = controller.borrow_mut().take() {
                    pz.cleanup();
                }
                let _keep_alive = &tick;
            }
        });
    }

    let zoom_by = {
        let controller = controller.clone();
        Callback::from(move |factor: f64| {
            if let Some(pz) = &*controller.borrow() {
                let scale = pz.state().scale * factor;
                pz.set_state(
                    PanZoomUpdate {
                        scale: Some(scale),
                        ..Default::default()
                    },
                    false,
                );
            }
        })
    };
    let on_zoom_in = {
        let cb = zoom_by.clone();
        Callback::from(move |_| cb.emit(BUTTON_ZOOM_STEP))
    };
    let on_zoom_out = {
        let cb = zoom_by.clone();
        Callback::from(move |_| cb.emit(1.0 / BUTTON_ZOOM_STEP))
    };
    let on_reset = {
        let controller = controller.clone();
        Callback::from(move |_| {
            if let Some(pz) = &*controller.borrow() {
                pz.reset();
            }
        })
    };
    let on_save = {
        let controller = controller.clone();
        Callback::from(move |_| {
            if let Some(pz) = &*controller.borrow() {
                if let Some(win) = web_sys::window() {
                    if let Ok(Some(store)) = win.local_storage() {
                        if let Ok(s) = serde_json::to_string(&pz.state()) {
                            let _ = store.set_item(SAVED_VIEW_KEY, &s);
                        }
                    }
                }
            }
        })
    };
    let on_restore = {
        let controller = controller.clone();
        Callback::from(move |_| {
            if let Some(pz) = &*controller.borrow() {
                if let Some(win) = web_sys::window() {
                    if let Ok(Some(store)) = win.local_storage() {
                        if let Ok(Some(raw)) = store.get_item(SAVED_VIEW_KEY) {
                            match serde_json::from_str::<PanZoomState>(&raw) {
                                Ok(st) => pz.set_state(st.into(), true),
                                Err(_) => clog("saved view is unreadable; ignoring"),
                            }
                        }
                    }
                }
            }
        })
    };

    // Controls sit beside the viewport, not inside it, so their clicks
    // never start a drag session.
    html! {
        <div style="position:relative; width:100%; height:100%;">
            <div ref={viewport_ref} style="position:absolute; inset:0; background:#0d1117;">
                <div ref={world_ref} style="width:max-content;">
                    { for props.children.iter() }
                </div>
            </div>
            <ViewControls
                scale_label={(*scale_label).clone()}
                on_zoom_in={on_zoom_in}
                on_zoom_out={on_zoom_out}
                on_reset={on_reset}
                on_save={on_save}
                on_restore={on_restore}
            />
        </div>
    }
}
