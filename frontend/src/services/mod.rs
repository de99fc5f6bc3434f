pub mod api;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod notifier;
pub mod storage;
