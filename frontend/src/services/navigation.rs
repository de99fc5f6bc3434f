//! Location and history helpers.

use wasm_bindgen::JsValue;
use workout_planner::Route;

pub fn current_route() -> Route {
    Route::parse(&pathname())
}

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// A query string parameter of the current location
pub fn query_value(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Load another page
pub fn navigate(route: &Route) {
    let path = route.to_path();
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(&path) {
        log::error!("Failed to navigate to {}: {:?}", path, e);
    }
}

/// Swap the current URL without loading anything
pub fn replace_url(route: &Route) {
    let path = route.to_path();
    let result = web_sys::window()
        .ok_or(JsValue::NULL)
        .and_then(|window| window.history())
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&path)));
    if let Err(e) = result {
        log::warn!("Failed to replace URL with {}: {:?}", path, e);
    }
}
