//! Request-scoped logging middleware.
//!
//! Attaches a per-request `tracing` span (method, path, remote address,
//! user agent, correlation id) to the request extensions and emits exactly
//! one "request completed" record per request, carrying the final status
//! code, the number of body bytes written, and the elapsed duration.
//!
//! The completion record is bound to a [`Drop`] guard, so it is emitted even
//! when the downstream handler unwinds. Byte counts are observed by wrapping
//! the response body, since the body is produced by code this middleware does
//! not control.

use axum::{
    body::{Body, Bytes},
    extract::{ConnectInfo, Request},
    http::{Extensions, header},
    middleware::Next,
    response::Response,
};
use http_body::{Body as HttpBody, Frame, SizeHint};
use std::{
    net::SocketAddr,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};
use tracing::Span;

/// Request-scoped logger handle, stored in the request extensions.
///
/// Everything downstream of the middleware can retrieve it to emit log
/// entries correlated with the surrounding request.
#[derive(Clone)]
pub struct RequestLog {
    span: Span,
    request_id: String,
}

impl RequestLog {
    /// The span carrying the per-request fields.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The correlation id attached to this request.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Retrieves the request-scoped logger, if one was attached upstream.
    ///
    /// Absence is a fallback case, not an error: callers should log at the
    /// root scope when `None` is returned.
    pub fn from_extensions(extensions: &Extensions) -> Option<&RequestLog> {
        extensions.get::<RequestLog>()
    }
}

pub async fn layer(mut req: Request, next: Next) -> Response {
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    // Correlation id set by the request-id layer upstream, when present.
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let span = tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        remote_addr = %remote_addr,
        user_agent = %user_agent,
        request_id = %request_id,
    );

    req.extensions_mut().insert(RequestLog {
        span: span.clone(),
        request_id,
    });

    // Created before the handler runs: if the handler unwinds, the guard
    // drops here and the completion record is still emitted.
    let mut completion = CompletionLog {
        span,
        started: Instant::now(),
        status: 0,
        bytes: 0,
    };

    let response = next.run(req).await;

    completion.status = response.status().as_u16();

    let (parts, body) = response.into_parts();
    let counted = CountedBody {
        inner: body,
        completion,
    };

    Response::from_parts(parts, Body::new(counted))
}

/// Emits the completion record when dropped, which happens once the response
/// body has been fully written (or abandoned), or during unwind.
struct CompletionLog {
    span: Span,
    started: Instant,
    status: u16,
    bytes: u64,
}

impl Drop for CompletionLog {
    fn drop(&mut self) {
        tracing::info!(
            parent: &self.span,
            status = self.status,
            bytes = self.bytes,
            duration_ms = self.started.elapsed().as_millis() as u64,
            "request completed"
        );
    }
}

/// Response body wrapper keeping a running count of data bytes.
struct CountedBody {
    inner: Body,
    completion: CompletionLog,
}

impl HttpBody for CountedBody {
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();

        match Pin::new(&mut this.inner).poll_frame(cx) {
            Poll::Ready(Some(Ok(frame))) => {
                if let Some(data) = frame.data_ref() {
                    this.completion.bytes += data.len() as u64;
                }
                Poll::Ready(Some(Ok(frame)))
            }
            other => other,
        }
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}
