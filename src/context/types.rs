//! Fetch classification types shared by contexts and count-tracking consumers.

use serde::{Deserialize, Serialize};

/// Which kind of object a fetch retrieved.
///
/// Variants are dense and zero-based: `index()` is suitable as a direct
/// index into an array of size [`ObjectType::COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Blob,
    BlobMetadata,
    Tree,
}

impl ObjectType {
    /// Number of object kinds; fixed bound for count-tracking tables.
    pub const COUNT: usize = 3;

    /// Every variant, in index order.
    pub const ALL: [ObjectType; Self::COUNT] =
        [ObjectType::Blob, ObjectType::BlobMetadata, ObjectType::Tree];

    /// Zero-based position of this variant.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::BlobMetadata => "blob_metadata",
            ObjectType::Tree => "tree",
        }
    }
}

/// Which cache tier satisfied a fetch.
///
/// Every fetch is satisfied by exactly one tier, so there is no unknown
/// variant. Same dense-indexing contract as [`ObjectType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    FromMemoryCache,
    FromDiskCache,
    FromBackingStore,
}

impl Origin {
    /// Number of tiers; fixed bound for count-tracking tables.
    pub const COUNT: usize = 3;

    /// Every variant, in index order.
    pub const ALL: [Origin; Self::COUNT] = [
        Origin::FromMemoryCache,
        Origin::FromDiskCache,
        Origin::FromBackingStore,
    ];

    /// Zero-based position of this variant.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Origin::FromMemoryCache => "memory_cache",
            Origin::FromDiskCache => "disk_cache",
            Origin::FromBackingStore => "backing_store",
        }
    }
}

/// Which external interface triggered a fetch.
///
/// New transports add variants here as they are integrated; a context that
/// cannot attribute its fetches reports [`Cause::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cause {
    #[default]
    Unknown,
    Fuse,
    Thrift,
}

impl Cause {
    pub fn as_str(self) -> &'static str {
        match self {
            Cause::Unknown => "unknown",
            Cause::Fuse => "fuse",
            Cause::Thrift => "thrift",
        }
    }
}
