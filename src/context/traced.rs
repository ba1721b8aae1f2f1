//! Tracing wrapper context.
//!
//! Wraps any fetch context and emits a structured trace event per
//! completed fetch, then forwards the notification to the inner context.
//! Queries delegate unchanged. Event emission goes through the installed
//! tracing subscriber and cannot fail into the fetch path.

use tracing::trace;

use crate::context::types::{Cause, ObjectType, Origin};
use crate::context::FetchContext;
use crate::priority::ImportPriority;
use crate::types::{short_hash, Hash};

/// Fetch context that traces completions on behalf of an inner context.
#[derive(Debug)]
pub struct TracedFetchContext<C> {
    inner: C,
}

impl<C: FetchContext> TracedFetchContext<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: FetchContext> FetchContext for TracedFetchContext<C> {
    fn did_fetch(&self, object_type: ObjectType, hash: &Hash, origin: Origin) {
        trace!(
            object_type = object_type.as_str(),
            hash = %short_hash(hash),
            origin = origin.as_str(),
            cause = self.inner.cause().as_str(),
            "object fetch complete"
        );
        self.inner.did_fetch(object_type, hash, origin);
    }

    fn client_pid(&self) -> Option<u32> {
        self.inner.client_pid()
    }

    fn cause(&self) -> Cause {
        self.inner.cause()
    }

    fn priority(&self) -> ImportPriority {
        self.inner.priority()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::counting::CountingFetchContext;
    use crate::context::request::RequestFetchContext;

    #[test]
    fn forwards_notifications_to_inner() {
        let ctx = TracedFetchContext::new(CountingFetchContext::new());
        let hash: Hash = [5u8; 32];
        ctx.did_fetch(ObjectType::Blob, &hash, Origin::FromDiskCache);

        assert_eq!(ctx.inner().count(ObjectType::Blob, Origin::FromDiskCache), 1);
        assert_eq!(ctx.inner().total(), 1);
    }

    #[test]
    fn delegates_queries_to_inner() {
        let inner = RequestFetchContext::new(Cause::Fuse)
            .with_priority(ImportPriority::high())
            .with_client_pid(77);
        let ctx = TracedFetchContext::new(inner);

        assert_eq!(ctx.cause(), Cause::Fuse);
        assert_eq!(ctx.priority(), ImportPriority::high());
        assert_eq!(ctx.client_pid(), Some(77));
    }
}
