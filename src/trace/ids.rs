//! Identifier newtypes for the event model.

use serde::Serialize;

/// Identifies a participant (process/locale) in the traced parallel run.
///
/// No range invariant is enforced here; the trace reader owns validation of
/// decoded node ids against the run's node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Identifies a unit of concurrent execution within or across nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(id: u64) -> Self {
        TaskId(id)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Number of a named execution phase (tag).
///
/// Signed: the visualizer reserves negative values as grouping sentinels
/// ("all tags", "before the first tag"), so decoded tag numbers must not be
/// forced unsigned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct TagId(i32);

impl TagId {
    pub const fn new(id: i32) -> Self {
        TagId(id)
    }

    pub const fn as_i32(self) -> i32 {
        self.0
    }
}
