//! `gloo-net` transport for the console API client.
//!
//! Client-side (csr): real `fetch` calls through `gloo-net`.
//! Native builds: every send fails, since there is no browser to talk to.

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use console::{HttpRequest, HttpResponse, Transport, TransportError};

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method as GlooMethod, RequestBuilder};

            let method = match request.method {
                console::Method::Get => GlooMethod::GET,
                console::Method::Post => GlooMethod::POST,
                console::Method::Put => GlooMethod::PUT,
                console::Method::Patch => GlooMethod::PATCH,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let response = built.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError(format!("no browser transport for {} {}", request.method, request.url)))
        }
    }
}
