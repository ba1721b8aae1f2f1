//! Per-request metadata context.
//!
//! Transport layers construct one of these per incoming request so the
//! store sees the request's cause, the client process behind it, and the
//! priority its fetches should run at. Completion notifications keep the
//! no-op default; pair with a counting or traced context when those are
//! wanted too.

use crate::context::types::Cause;
use crate::context::FetchContext;
use crate::priority::ImportPriority;

/// Fetch context carrying fixed request metadata.
#[derive(Debug, Clone)]
pub struct RequestFetchContext {
    cause: Cause,
    priority: ImportPriority,
    client_pid: Option<u32>,
}

impl RequestFetchContext {
    pub fn new(cause: Cause) -> Self {
        Self {
            cause,
            priority: ImportPriority::normal(),
            client_pid: None,
        }
    }

    pub fn with_priority(mut self, priority: ImportPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_client_pid(mut self, pid: u32) -> Self {
        self.client_pid = Some(pid);
        self
    }
}

impl FetchContext for RequestFetchContext {
    fn client_pid(&self) -> Option<u32> {
        self.client_pid
    }

    fn cause(&self) -> Cause {
        self.cause
    }

    fn priority(&self) -> ImportPriority {
        self.priority
    }
}
