//! # Storage Traits
//!
//! Key/value storage with the semantics of the browser's Web Storage API.
//! The domain layer only sees this trait so the day identifier cache can be
//! backed by `localStorage` in the browser and by memory elsewhere.

use crate::error::ClientError;

pub trait SessionStorage {
    /// Value stored under `key`, or `None` if there is none
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), ClientError>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        (**self).remove_item(key)
    }
}
