/// Plugin Frame - embeddable iframe plugin UI with parent-URL route sync
/// Built with Rust + WASM + Yew

pub mod parent;
pub mod route_sync;
pub mod ui;

use wasm_bindgen::prelude::*;

use route_sync::SyncOptions;
use ui::app::{App, AppProps};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the plugin with the built-in sync configuration
#[wasm_bindgen]
pub fn start_plugin() {
    yew::Renderer::<App>::new().render();
}

// Start the plugin with a host-supplied options object:
// { mode: "hash" | "query", queryParamKey?: string }
// A malformed object is logged and the defaults are used; a bad config
// never prevents the plugin from rendering.
#[wasm_bindgen]
pub fn start_plugin_with_options(options: JsValue) {
    let props = match serde_wasm_bindgen::from_value::<SyncOptions>(options) {
        Ok(sync_options) => AppProps { sync_options },
        Err(e) => {
            log::warn!("invalid sync options, using defaults: {e}");
            AppProps::default()
        }
    };
    yew::Renderer::<App>::with_props(props).render();
}
