use wasm_bindgen::JsValue;
use web_sys::Storage;
use workout_planner::{ClientError, SessionStorage};

/// The page's `localStorage`, so day identifiers survive reloads
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn area(&self) -> Result<Storage, ClientError> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| ClientError::Storage("localStorage is unavailable".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        self.area()?.get_item(key).map_err(storage_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.area()?.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        self.area()?.remove_item(key).map_err(storage_error)
    }
}

fn storage_error(value: JsValue) -> ClientError {
    ClientError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
