//! Fetchtrack: Fetch Attribution for Content-Addressed Object Stores
//!
//! An object store serving versioned objects (blobs, blob metadata, trees)
//! out of layered caches calls into a caller-supplied [`context::FetchContext`]
//! to report which tier satisfied each fetch and to learn the fetch's cause,
//! requesting process, and scheduling priority. Callers that do not care
//! about tracking pass [`context::null_fetch_context`] and pay nothing.

pub mod context;
pub mod error;
pub mod priority;
pub mod types;
