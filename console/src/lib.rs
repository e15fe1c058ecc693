//! # console
//!
//! Session-and-request core for the job-monitor operator console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both front ends (`client` in the browser, `cli` in a terminal) sit on top
//! of this crate. They supply a [`session::SessionStore`] backed by their own
//! durable storage and a [`transport::Transport`] backed by their own HTTP
//! stack; everything else (bearer-header rule, error surfacing, guard
//! decisions, navigation, and the per-view load/mutate/reload loops) lives
//! here so the two surfaces behave identically.
//!
//! The crate is single-threaded by construction: handles are `Rc`, futures
//! are `?Send`, and view state is reached through [`views::StateCell`].

pub mod api;
pub mod auth;
pub mod config;
pub mod guard;
pub mod nav;
pub mod session;
pub mod transport;
pub mod views;

#[cfg(test)]
mod fake_transport;

pub use api::{ApiClient, RequestError};
pub use config::ConsoleConfig;
pub use nav::Route;
pub use session::{MemorySession, Session, SessionStore};
pub use transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
