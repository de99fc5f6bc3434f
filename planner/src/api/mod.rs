//! HTTP contract with the workout planner server.

mod client;
pub mod endpoints;
mod transport;

pub use client::ApiClient;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};
