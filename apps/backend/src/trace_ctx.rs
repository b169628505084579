//! Task-local trace context for web requests.
//!
//! Exposes the current request's trace id to anywhere in the request
//! processing pipeline, most notably to `AppError::error_response`, which
//! stamps it into problem-details bodies. The scope is established by the
//! `RequestTrace` middleware.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Get the trace id for the current task.
/// Returns "unknown" outside of a request context.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future with the given trace id in scope.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
