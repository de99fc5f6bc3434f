//! Client-side logic of the workout planner.
//!
//! Everything here is plain Rust with no browser dependency: the schedule
//! calendar and its per-day identifiers, the HTTP client over an injectable
//! transport, optimistic association toggles, and a model for every page.
//! The `frontend` crate renders these models with Yew and supplies the
//! browser implementations of the [`HttpTransport`], [`SessionStorage`] and
//! [`Notifier`] seams.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod pages;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{ApiClient, ApiRequest, ApiResponse, HttpTransport, Method};
pub use config::PlannerConfig;
pub use domain::{
    Association, AssociationAction, AssociationService, CalendarService, DayDetailService,
    DayIdList, DayIdStore, DaySchedulePanel, Notification, Notifier, Route, Severity,
    ToggleControl, ToggleResolution,
};
pub use error::{ClientError, IdKind};
pub use storage::{MemoryStorage, SessionStorage};
