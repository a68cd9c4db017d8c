//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::{extract::MatchedPath, http::Request, response::Response};
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{MakeSpan, OnFailure, OnResponse, TraceLayer};
use tracing::{Level, Span};

/// Span per request, named after the matched route so that
/// `/person/anna` and `/person/boris` group together.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteSpan;

impl<B> MakeSpan<B> for RouteSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or("<unmatched>");

        tracing::span!(
            Level::INFO,
            "request",
            method = %request.method(),
            route,
            uri = %request.uri(),
        )
    }
}

/// Logs status and latency once the response is ready.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        let latency_ms = latency.as_millis() as u64;

        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), latency_ms, "response");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "response");
        }
    }
}

/// Logs 5xx responses and I/O failures.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFailure;

impl OnFailure<ServerErrorsFailureClass> for LogFailure {
    fn on_failure(&mut self, failure: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
        tracing::error!(
            failure = %failure,
            latency_ms = latency.as_millis() as u64,
            "request failed"
        );
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET route=/person/{slug} uri=/person/anna}: response status=200 latency_ms=4
/// WARN request{method=POST route=/add uri=/add}: response status=422 latency_ms=7
/// ```
pub fn layer()
-> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RouteSpan, (), LogResponse, (), (), LogFailure>
{
    TraceLayer::new_for_http()
        .make_span_with(RouteSpan)
        .on_request(())
        .on_response(LogResponse)
        .on_body_chunk(())
        .on_eos(())
        .on_failure(LogFailure)
}
