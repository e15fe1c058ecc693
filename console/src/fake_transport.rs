//! Scripted transport for unit tests.
//!
//! Replies are consumed in request order. A gated reply stays pending until
//! the test fires its sender, which lets a test choose resolution order
//! independently of issue order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use crate::api::ApiClient;
use crate::config::ConsoleConfig;
use crate::session::Session;
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

pub const TEST_BASE: &str = "http://api.test/api/v1";

enum Reply {
    Ready(Result<HttpResponse, TransportError>),
    Gated(oneshot::Receiver<HttpResponse>),
}

#[derive(Default)]
pub struct FakeTransport {
    requests: RefCell<Vec<HttpRequest>>,
    replies: RefCell<VecDeque<Reply>>,
}

impl FakeTransport {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: impl Into<String>) {
        self.replies
            .borrow_mut()
            .push_back(Reply::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub fn reply_json(&self, value: Value) {
        self.reply(200, value.to_string());
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Reply::Ready(Err(TransportError(message.to_owned()))));
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub fn gate(&self) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// `"METHOD url"` for each request, in issue order.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|req| format!("{} {}", req.method, req.url))
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => rx.await.map_err(|_| TransportError("gate dropped".to_owned())),
            None => Err(TransportError("no scripted reply".to_owned())),
        }
    }
}

pub fn client(transport: &Rc<FakeTransport>, session: Session) -> ApiClient {
    let transport: Rc<dyn Transport> = transport.clone();
    ApiClient::new(&ConsoleConfig::from_api_base(Some(TEST_BASE)), session, transport)
}

pub fn url(path: &str) -> String {
    format!("{TEST_BASE}{path}")
}
