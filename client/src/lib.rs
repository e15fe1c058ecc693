//! # client
//!
//! Leptos browser front end for the jobwatch operator console.
//!
//! The session-and-request core lives in the `console` crate; this crate
//! supplies the browser halves of its seams (a `localStorage` session store
//! and a `gloo-net` transport), the auth guard and navigation components,
//! and one page per resource view.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
