/// Browser-backed implementation of the hosting-frame interface
use crate::route_sync::{ParentFrame, SyncError};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// `ParentFrame` over the real `window.parent`
///
/// Every browser call that can throw on a cross-origin parent is kept
/// behind a fallible `web-sys` binding, so denial shows up as `None` or
/// `SyncError` instead of an exception.
pub struct BrowserParent;

impl BrowserParent {
    /// The parent window, when it is a window other than our own
    fn parent_window() -> Option<Window> {
        let window = web_sys::window()?;
        let parent = window.parent().ok().flatten()?;

        // A top-level window is its own parent
        if AsRef::<JsValue>::as_ref(&parent) == AsRef::<JsValue>::as_ref(&window) {
            None
        } else {
            Some(parent)
        }
    }
}

impl ParentFrame for BrowserParent {
    fn is_embedded(&self) -> bool {
        Self::parent_window().is_some()
    }

    fn read_parent_url(&self) -> Option<String> {
        // href reads throw on a cross-origin parent
        Self::parent_window()?.location().href().ok()
    }

    fn write_parent_url(&self, url: &str) -> Result<(), SyncError> {
        let parent = Self::parent_window()
            .ok_or_else(|| SyncError::ParentAccess("no parent window".to_string()))?;

        let history = parent
            .history()
            .map_err(|e| SyncError::ParentAccess(format!("{e:?}")))?;

        history
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|e| SyncError::ParentAccess(format!("{e:?}")))
    }
}
