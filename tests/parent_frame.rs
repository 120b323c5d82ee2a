//! Browser checks for the real hosting-frame adapter. The test runner page
//! is its own top-level window, so the adapter must report "not embedded"
//! and both sync paths must degrade to their defaults.
#![cfg(target_arch = "wasm32")]

use plugin_frame::parent::BrowserParent;
use plugin_frame::route_sync::{
    ParentFrame, SyncOptions, derive_initial_route, sync_route_to_parent,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn top_level_window_is_not_embedded() {
    assert!(!BrowserParent.is_embedded());
    assert_eq!(BrowserParent.read_parent_url(), None);
}

#[wasm_bindgen_test]
fn top_level_window_derives_default_route() {
    assert_eq!(derive_initial_route(&BrowserParent, &SyncOptions::hash()), "/");
    assert_eq!(
        derive_initial_route(&BrowserParent, &SyncOptions::query("pluginRoute")),
        "/"
    );
}

#[wasm_bindgen_test]
fn top_level_window_sync_is_noop() {
    let result = sync_route_to_parent(&BrowserParent, "/page1", &SyncOptions::hash());
    assert_eq!(result, Ok(()));
}
