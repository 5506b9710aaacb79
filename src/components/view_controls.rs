use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewControlsProps {
    pub scale_label: String,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_save: Callback<()>,
    pub on_restore: Callback<()>,
}

#[function_component(ViewControls)]
pub fn view_controls(props: &ViewControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let sv = {
        let cb = props.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let re = {
        let cb = props.on_restore.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center; color:#c9d1d9;">
        <button onclick={zo}> {"-"} </button>
        <span style="min-width:44px; text-align:center; font-size:12px;">{ props.scale_label.clone() }</span>
        <button onclick={zi}> {"+"} </button>
        <span style="width:8px;"></span>
        <button onclick={rs}> {"Reset"} </button>
        <span style="width:8px;"></span>
        <button onclick={sv}> {"Save view"} </button>
        <button onclick={re}> {"Restore"} </button>
    </div>}
}
