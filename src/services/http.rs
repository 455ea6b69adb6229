// ============================================================================
// HTTP TRANSPORT - SOLO comunicación HTTP (stateless)
// ============================================================================
// El gateway y el checkout dependen del trait; en wasm se usa gloo-net
// ============================================================================

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use crate::error::{StoreError, StoreResult};

/// Respuesta cruda: status + body. La interpretación queda al llamador
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, StoreResult<HttpResponse>>;

    /// POST con `Content-Type: application/json`; `body` ya serializado
    fn post_json<'a>(&'a self, url: &'a str, body: String) -> LocalBoxFuture<'a, StoreResult<HttpResponse>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

async fn read_response(response: gloo_net::http::Response) -> StoreResult<HttpResponse> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| StoreError::Network(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

impl HttpTransport for GlooTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, StoreResult<HttpResponse>> {
        Box::pin(async move {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            read_response(response).await
        })
    }

    fn post_json<'a>(&'a self, url: &'a str, body: String) -> LocalBoxFuture<'a, StoreResult<HttpResponse>> {
        Box::pin(async move {
            let response = Request::post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| StoreError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            read_response(response).await
        })
    }
}
