//! Import priority: an ordered value guiding which pending fetch a store
//! services first when concurrent fetches contend for limited bandwidth.

use serde::{Deserialize, Serialize};

/// Broad urgency band of a fetch.
///
/// Ordering is `Low < Normal < High`; the band always dominates the
/// fine-grained offset when two priorities are compared.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    Low,
    Normal,
    High,
}

impl PriorityClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityClass::Low => "low",
            PriorityClass::Normal => "normal",
            PriorityClass::High => "high",
        }
    }
}

/// Scheduling priority of one fetch: a class plus a fine-grained offset.
///
/// Total order is class-major, offset-minor, so a scheduler can nudge
/// ordering within a band (e.g. favor the request that arrived first)
/// without ever promoting it past a higher band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ImportPriority {
    class: PriorityClass,
    offset: u64,
}

impl ImportPriority {
    pub const fn new(class: PriorityClass, offset: u64) -> Self {
        Self { class, offset }
    }

    pub const fn low() -> Self {
        Self::new(PriorityClass::Low, 0)
    }

    pub const fn normal() -> Self {
        Self::new(PriorityClass::Normal, 0)
    }

    pub const fn high() -> Self {
        Self::new(PriorityClass::High, 0)
    }

    pub const fn class(self) -> PriorityClass {
        self.class
    }

    pub const fn offset(self) -> u64 {
        self.offset
    }

    /// Raise the offset within the same class, saturating on overflow.
    pub fn offset_by(self, delta: u64) -> Self {
        Self {
            class: self.class,
            offset: self.offset.saturating_add(delta),
        }
    }
}

impl Default for ImportPriority {
    fn default() -> Self {
        Self::normal()
    }
}
