//! Per-tier fetch counters.
//!
//! [`CountingFetchContext`] accumulates one counter per
//! (object kind, serving tier) pair in a dense grid, so a session can
//! answer "how many trees came off disk" in O(1) without an associative
//! map. The grid is relaxed atomics: sharing one instance across any
//! number of concurrent fetches loses no counts.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::context::types::{ObjectType, Origin};
use crate::context::FetchContext;
use crate::error::ExportError;
use crate::types::Hash;

/// Fetch context that counts completed fetches per (kind, tier) cell.
#[derive(Debug, Default)]
pub struct CountingFetchContext {
    counts: [[AtomicU64; Origin::COUNT]; ObjectType::COUNT],
}

impl CountingFetchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed fetches of `object_type` satisfied by `origin`.
    pub fn count(&self, object_type: ObjectType, origin: Origin) -> u64 {
        self.counts[object_type.index()][origin.index()].load(Ordering::Relaxed)
    }

    /// Completed fetches across all kinds and tiers.
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .flatten()
            .map(|cell| cell.load(Ordering::Relaxed))
            .sum()
    }

    /// Point-in-time copy of the grid.
    ///
    /// Cells are read individually, so a snapshot taken while fetches are
    /// still completing is internally approximate; once completions stop it
    /// is exact.
    pub fn snapshot(&self) -> FetchCounts {
        let mut counts = [[0u64; Origin::COUNT]; ObjectType::COUNT];
        for object_type in ObjectType::ALL {
            for origin in Origin::ALL {
                counts[object_type.index()][origin.index()] = self.count(object_type, origin);
            }
        }
        FetchCounts { counts }
    }
}

impl FetchContext for CountingFetchContext {
    fn did_fetch(&self, object_type: ObjectType, _hash: &Hash, origin: Origin) {
        self.counts[object_type.index()][origin.index()].fetch_add(1, Ordering::Relaxed);
    }
}

/// Plain snapshot of a counting context, row-major by object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchCounts {
    counts: [[u64; Origin::COUNT]; ObjectType::COUNT],
}

impl FetchCounts {
    pub fn get(&self, object_type: ObjectType, origin: Origin) -> u64 {
        self.counts[object_type.index()][origin.index()]
    }

    /// Fetches of one kind, summed across tiers.
    pub fn by_object_type(&self, object_type: ObjectType) -> u64 {
        self.counts[object_type.index()].iter().sum()
    }

    /// Fetches satisfied by one tier, summed across kinds.
    pub fn by_origin(&self, origin: Origin) -> u64 {
        self.counts.iter().map(|row| row[origin.index()]).sum()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Write the snapshot as JSON for diagnostics tooling.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        let encoded = serde_json::to_vec_pretty(self)?;
        writer.write_all(&encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_start_at_zero() {
        let ctx = CountingFetchContext::new();
        assert_eq!(ctx.total(), 0);
        for object_type in ObjectType::ALL {
            for origin in Origin::ALL {
                assert_eq!(ctx.count(object_type, origin), 0);
            }
        }
    }

    #[test]
    fn did_fetch_increments_one_cell() {
        let ctx = CountingFetchContext::new();
        let hash: Hash = [3u8; 32];
        ctx.did_fetch(ObjectType::Tree, &hash, Origin::FromDiskCache);

        assert_eq!(ctx.count(ObjectType::Tree, Origin::FromDiskCache), 1);
        assert_eq!(ctx.total(), 1);
        for object_type in ObjectType::ALL {
            for origin in Origin::ALL {
                if object_type != ObjectType::Tree || origin != Origin::FromDiskCache {
                    assert_eq!(ctx.count(object_type, origin), 0);
                }
            }
        }
    }

    #[test]
    fn snapshot_sums_agree() {
        let ctx = CountingFetchContext::new();
        let hash: Hash = [9u8; 32];
        ctx.did_fetch(ObjectType::Blob, &hash, Origin::FromMemoryCache);
        ctx.did_fetch(ObjectType::Blob, &hash, Origin::FromBackingStore);
        ctx.did_fetch(ObjectType::BlobMetadata, &hash, Origin::FromMemoryCache);

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.by_object_type(ObjectType::Blob), 2);
        assert_eq!(snapshot.by_origin(Origin::FromMemoryCache), 2);
        assert_eq!(snapshot.total(), 3);
        assert_eq!(snapshot.get(ObjectType::Blob, Origin::FromBackingStore), 1);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let ctx = CountingFetchContext::new();
        let hash: Hash = [1u8; 32];
        ctx.did_fetch(ObjectType::Tree, &hash, Origin::FromBackingStore);

        let snapshot = ctx.snapshot();
        let mut buf = Vec::new();
        snapshot.write_json(&mut buf).unwrap();
        let parsed: FetchCounts = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
