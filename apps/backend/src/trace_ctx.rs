//! Task-local trace context for web requests.
//!
//! `RequestTrace` scopes each request's handler future with its trace id so
//! that error responses rendered deep inside a handler can echo it without
//! threading the request through every call.

use tokio::task_local;

/// Returned when no request scope is active (startup, background tasks).
pub const NO_TRACE: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// The trace id of the request currently being served.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| NO_TRACE.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
