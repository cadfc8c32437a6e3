pub mod events;
pub mod format;
pub mod ids;
pub mod timestamp;

pub use events::{
    BeginTaskEvent, CommEvent, EndEvent, EndTaskEvent, EventKind, ForkEvent, PauseEvent,
    StartEvent, TagEvent, TaskEvent, TraceEvent,
};
pub use format::{write_event, NO_SRC_FILE};
pub use ids::{NodeId, TagId, TaskId};
pub use timestamp::{CpuUsage, Timestamp};
