//! Notification log context.
//!
//! Captures every completion notification verbatim, in arrival order.
//! Useful for diagnostics dumps and for asserting exactly which fetches a
//! code path performed.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::context::types::{ObjectType, Origin};
use crate::context::FetchContext;
use crate::types::Hash;

/// One completed fetch as reported to [`FetchContext::did_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRecord {
    pub object_type: ObjectType,
    pub hash: Hash,
    pub origin: Origin,
}

/// Fetch context that appends one [`FetchRecord`] per notification.
///
/// Safe to share across concurrent fetches: the log is mutex-guarded and
/// each notification lands exactly once.
#[derive(Debug, Default)]
pub struct RecordingFetchContext {
    records: Mutex<Vec<FetchRecord>>,
}

impl RecordingFetchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the log, in notification order.
    pub fn records(&self) -> Vec<FetchRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl FetchContext for RecordingFetchContext {
    fn did_fetch(&self, object_type: ObjectType, hash: &Hash, origin: Origin) {
        self.records.lock().push(FetchRecord {
            object_type,
            hash: *hash,
            origin,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_preserve_arguments_and_order() {
        let ctx = RecordingFetchContext::new();
        assert!(ctx.is_empty());

        let first: Hash = [1u8; 32];
        let second: Hash = [2u8; 32];
        ctx.did_fetch(ObjectType::Blob, &first, Origin::FromMemoryCache);
        ctx.did_fetch(ObjectType::Tree, &second, Origin::FromBackingStore);

        let records = ctx.records();
        assert_eq!(ctx.len(), 2);
        assert_eq!(
            records[0],
            FetchRecord {
                object_type: ObjectType::Blob,
                hash: first,
                origin: Origin::FromMemoryCache,
            }
        );
        assert_eq!(records[1].object_type, ObjectType::Tree);
        assert_eq!(records[1].origin, Origin::FromBackingStore);
    }
}
