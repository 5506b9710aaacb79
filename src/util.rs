// Shared helpers for the demo components.
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Scale readout for the controls overlay, e.g. 1.25 -> "125%".
pub fn format_percent(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_readout_rounds() {
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(1.1), "110%");
        assert_eq!(format_percent(0.3), "30%");
        assert_eq!(format_percent(1.2544), "125%");
    }
}
