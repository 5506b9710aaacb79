use yew::prelude::*;

use super::viewport::PanZoomView;
use crate::state::PanZoomOptions;

#[function_component(App)]
pub fn app() -> Html {
    // A small grid of cards standing in for a diagram surface.
    let cards: Html = (0..16)
        .map(|i| {
            let col = i % 4;
            let row = i / 4;
            html! {
                <div style={format!(
                    "position:absolute; left:{}px; top:{}px; width:160px; height:110px; \
                     background:#161b22; border:1px solid #30363d; border-radius:8px; \
                     padding:10px;",
                    40 + col * 200,
                    40 + row * 150
                )}>
                    <div style="font-size:13px; color:#58a6ff;">{ format!("node-{:02}", i) }</div>
                    <div style="font-size:11px; opacity:0.7; margin-top:6px;">
                        {"Scroll to zoom, drag to pan, pinch on touch."}
                    </div>
                </div>
            }
        })
        .collect();

    html! {
        <div style="position:relative; width:100vw; height:100vh; display:flex; flex-direction:column; background:#010409; color:#c9d1d9; font-family:sans-serif;">
            <div id="top-bar" style="padding:10px 16px; border-bottom:1px solid #30363d;">
                <strong>{"Pan-zoom playground"}</strong>
            </div>
            <div style="position:relative; flex:1;">
                <PanZoomView options={PanZoomOptions::default()}>
                    <div style="position:relative; width:900px; height:640px;">{ cards }</div>
                </PanZoomView>
            </div>
        </div>
    }
}
