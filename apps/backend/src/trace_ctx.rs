//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` scopes every request future with its trace id, so error
//! responses and log lines deep in the call stack can report it without
//! threading the id through every signature.

use std::cell::RefCell;

use tokio::task_local;

/// Reported when no request scope is active.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id of the current task, or [`UNKNOWN_TRACE_ID`] outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Drive `future` with `trace_id` installed as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
