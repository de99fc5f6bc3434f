//! Test doubles for the transport and notifier seams.
//!
//! `ScriptedTransport` answers requests from a queue of canned responses and
//! records every request it was given. Clones share the queue and the log, so
//! a test can keep one handle while the client under test owns another.
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiRequest, ApiResponse, HttpTransport};
use crate::domain::notifications::{Notification, Notifier};
use crate::error::ClientError;

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, ClientError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    /// Queue a transport failure
    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ClientError::Network(message.to_string())));
    }

    /// Every request sent so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {}", url))
    }
}

/// Collects notifications instead of showing them
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}
