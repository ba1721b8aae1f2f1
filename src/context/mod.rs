//! Fetch contexts: the observation surface an object store calls into
//! while serving fetches.
//!
//! The store receives a borrowed [`FetchContext`] handle with every
//! fetch-triggering call. When the fetch is satisfied it reports the
//! serving tier through [`FetchContext::did_fetch`]; before or during the
//! fetch it may query the context for the request's cause, requesting
//! process, and scheduling priority. Every operation has a harmless
//! default, so implementers override only what they track.

pub mod counting;
pub mod recording;
pub mod request;
pub mod traced;
pub mod types;

pub use counting::{CountingFetchContext, FetchCounts};
pub use recording::{FetchRecord, RecordingFetchContext};
pub use request::RequestFetchContext;
pub use traced::TracedFetchContext;
pub use types::{Cause, ObjectType, Origin};

use std::sync::Arc;
use std::sync::OnceLock;

use crate::priority::ImportPriority;
use crate::types::Hash;

/// A context shared across every fetch in one logical session.
pub type SharedFetchContext = Arc<dyn FetchContext>;

/// Per-fetch (or per-session) tracking capability consumed by the object
/// store.
///
/// All methods take `&self` and may be called concurrently from any number
/// of fetch paths sharing one instance; implementations that accumulate
/// state must use concurrency-safe accumulation internally. The queries are
/// side-effect-free and may be repeated; `priority` must answer
/// consistently for the duration of a single fetch.
///
/// `did_fetch` runs inline on the fetch completion path. Implementations
/// must be fast, must not block, and must swallow their own internal
/// failures: a tracking problem never fails a data fetch. The store calls
/// it at most once per fetch and may skip it entirely when a fetch is
/// abandoned. Whether the notification lands before or after the fetched
/// data reaches the original requester is up to the store; implementations
/// must be correct under both orderings.
pub trait FetchContext: Send + Sync {
    /// A fetch for `hash` of kind `object_type` was satisfied by `origin`.
    fn did_fetch(&self, object_type: ObjectType, hash: &Hash, origin: Origin) {
        let _ = (object_type, hash, origin);
    }

    /// Process that originated the fetch, when known. Diagnostic only;
    /// the answer may be stale and must never gate access.
    fn client_pid(&self) -> Option<u32> {
        None
    }

    /// External interface that triggered the fetch.
    fn cause(&self) -> Cause {
        Cause::Unknown
    }

    /// Urgency the store's scheduler should assign this fetch.
    fn priority(&self) -> ImportPriority {
        ImportPriority::normal()
    }
}

/// The no-tracking context: every operation is the trait default.
struct NullFetchContext;

impl FetchContext for NullFetchContext {}

static NULL_CONTEXT: OnceLock<NullFetchContext> = OnceLock::new();

/// Process-wide no-op context for call sites with no tracking needs.
///
/// Lazily initialized on first access and shared for the life of the
/// process; every call returns the same instance. Stateless and immutable,
/// so unlimited concurrent fetches can hold it without synchronization.
pub fn null_fetch_context() -> &'static dyn FetchContext {
    NULL_CONTEXT.get_or_init(|| NullFetchContext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_context_is_a_singleton() {
        let a = null_fetch_context();
        let b = null_fetch_context();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn null_context_reports_defaults() {
        let ctx = null_fetch_context();
        assert_eq!(ctx.client_pid(), None);
        assert_eq!(ctx.cause(), Cause::Unknown);
        assert_eq!(ctx.priority(), ImportPriority::normal());
    }

    #[test]
    fn null_context_notify_is_a_no_op() {
        let ctx = null_fetch_context();
        let hash: Hash = [7u8; 32];
        for origin in Origin::ALL {
            for object_type in ObjectType::ALL {
                ctx.did_fetch(object_type, &hash, origin);
            }
        }
        // Still the same stateless instance with default answers.
        assert_eq!(ctx.cause(), Cause::Unknown);
    }
}
