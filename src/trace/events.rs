//! The event taxonomy emitted by the traced runtime.
//!
//! The trace reader decodes raw records into [`TraceEvent`] values; the
//! timeline builder and renderer only ever read them. Nothing here is mutated
//! after construction, so concurrent reads are safe without locking.

use crate::trace::ids::{NodeId, TagId, TaskId};
use crate::trace::timestamp::{CpuUsage, Timestamp};
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

/// Discriminants for the nine event kinds.
///
/// The numeric codes match the raw trace-record encoding, but consumers must
/// classify through [`EventKind::is_header`] / [`EventKind::is_timeline`],
/// never by comparing codes: the header/timeline split is a contract of its
/// own, not a property of numeric adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum EventKind {
    Start = 0,
    Tag = 1,
    Pause = 2,
    End = 3,
    Task = 4,
    Comm = 5,
    Fork = 6,
    BeginTask = 7,
    EndTask = 8,
}

impl EventKind {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(code: u8) -> Option<EventKind> {
        match code {
            0 => Some(EventKind::Start),
            1 => Some(EventKind::Tag),
            2 => Some(EventKind::Pause),
            3 => Some(EventKind::End),
            4 => Some(EventKind::Task),
            5 => Some(EventKind::Comm),
            6 => Some(EventKind::Fork),
            7 => Some(EventKind::BeginTask),
            8 => Some(EventKind::EndTask),
            _ => None,
        }
    }

    /// True for the per-run metadata kinds (`Start`, `Tag`, `Pause`, `End`).
    ///
    /// The timeline builder groups header events by run/tagged phase instead
    /// of interleaving them into the time-ordered stream.
    pub const fn is_header(self) -> bool {
        matches!(
            self,
            EventKind::Start | EventKind::Tag | EventKind::Pause | EventKind::End
        )
    }

    /// True for concrete execution kinds, merged into the display timeline
    /// strictly by timestamp across nodes.
    pub const fn is_timeline(self) -> bool {
        !self.is_header()
    }
}

/// Process start marker, one per node, carrying the initial CPU-time sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartEvent {
    time: Timestamp,
    node: NodeId,
    cpu: CpuUsage,
}

impl StartEvent {
    pub const fn new(time: Timestamp, node: NodeId, cpu: CpuUsage) -> Self {
        StartEvent { time, node, cpu }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn cpu(&self) -> CpuUsage {
        self.cpu
    }
}

/// Marks entry into a named execution phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagEvent {
    time: Timestamp,
    node: NodeId,
    cpu: CpuUsage,
    tag: TagId,
    tag_name: Arc<str>,
    vdb_task: TaskId,
}

impl TagEvent {
    pub const fn new(
        time: Timestamp,
        node: NodeId,
        cpu: CpuUsage,
        tag: TagId,
        tag_name: Arc<str>,
        vdb_task: TaskId,
    ) -> Self {
        TagEvent {
            time,
            node,
            cpu,
            tag,
            tag_name,
            vdb_task,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn cpu(&self) -> CpuUsage {
        self.cpu
    }

    pub const fn tag_no(&self) -> TagId {
        self.tag
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Task running the instrumentation call that emitted this tag.
    pub const fn vdb_task(&self) -> TaskId {
        self.vdb_task
    }
}

/// Suspends the current tagged phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PauseEvent {
    time: Timestamp,
    node: NodeId,
    cpu: CpuUsage,
    tag: TagId,
    vdb_task: TaskId,
}

impl PauseEvent {
    pub const fn new(
        time: Timestamp,
        node: NodeId,
        cpu: CpuUsage,
        tag: TagId,
        vdb_task: TaskId,
    ) -> Self {
        PauseEvent {
            time,
            node,
            cpu,
            tag,
            vdb_task,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn cpu(&self) -> CpuUsage {
        self.cpu
    }

    /// The tagged phase being suspended.
    pub const fn tag_id(&self) -> TagId {
        self.tag
    }

    pub const fn vdb_task(&self) -> TaskId {
        self.vdb_task
    }
}

/// Terminates the current tagged phase / run segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndEvent {
    time: Timestamp,
    node: NodeId,
    cpu: CpuUsage,
    vdb_task: TaskId,
}

impl EndEvent {
    pub const fn new(time: Timestamp, node: NodeId, cpu: CpuUsage, vdb_task: TaskId) -> Self {
        EndEvent {
            time,
            node,
            cpu,
            vdb_task,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn cpu(&self) -> CpuUsage {
        self.cpu
    }

    pub const fn vdb_task(&self) -> TaskId {
        self.vdb_task
    }
}

/// A task spawned on a node, either locally or via remote execution ("on").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskEvent {
    time: Timestamp,
    node: NodeId,
    task: TaskId,
    is_remote: bool,
    line: u32,
    src_file: Option<Arc<str>>,
}

impl TaskEvent {
    pub const fn new(
        time: Timestamp,
        node: NodeId,
        task: TaskId,
        is_remote: bool,
        line: u32,
        src_file: Option<Arc<str>>,
    ) -> Self {
        TaskEvent {
            time,
            node,
            task,
            is_remote,
            line,
            src_file,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn task_id(&self) -> TaskId {
        self.task
    }

    pub const fn is_remote(&self) -> bool {
        self.is_remote
    }

    pub const fn is_local(&self) -> bool {
        !self.is_remote
    }

    /// Source line of the spawning statement.
    pub const fn src_line(&self) -> u32 {
        self.line
    }

    /// Source file of the spawning statement, if the trace recorded one.
    pub fn src_file(&self) -> Option<&str> {
        self.src_file.as_deref()
    }
}

/// One communication operation (get or put) between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommEvent {
    time: Timestamp,
    node: NodeId,
    dst: NodeId,
    elem_size: u32,
    elem_count: u32,
    is_get: bool,
    by_task: TaskId,
    line: u32,
    src_file: Option<Arc<str>>,
}

impl CommEvent {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        time: Timestamp,
        node: NodeId,
        dst: NodeId,
        elem_size: u32,
        elem_count: u32,
        is_get: bool,
        by_task: TaskId,
        line: u32,
        src_file: Option<Arc<str>>,
    ) -> Self {
        CommEvent {
            time,
            node,
            dst,
            elem_size,
            elem_count,
            is_get,
            by_task,
            line,
            src_file,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    /// Originating node (alias for the event's node id).
    pub const fn src_id(&self) -> NodeId {
        self.node
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn dst_id(&self) -> NodeId {
        self.dst
    }

    pub const fn elem_size(&self) -> u32 {
        self.elem_size
    }

    pub const fn elem_count(&self) -> u32 {
        self.elem_count
    }

    /// Total bytes moved: `elem_size * elem_count`.
    pub const fn total_bytes(&self) -> u64 {
        self.elem_size as u64 * self.elem_count as u64
    }

    pub const fn is_get(&self) -> bool {
        self.is_get
    }

    /// Task that issued the communication.
    pub const fn in_task(&self) -> TaskId {
        self.by_task
    }

    pub const fn src_line(&self) -> u32 {
        self.line
    }

    pub fn src_file(&self) -> Option<&str> {
        self.src_file.as_deref()
    }
}

/// Remote procedure dispatch from one node to another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForkEvent {
    time: Timestamp,
    node: NodeId,
    dst: NodeId,
    arg_size: u32,
    is_fast: bool,
    by_task: TaskId,
}

impl ForkEvent {
    pub const fn new(
        time: Timestamp,
        node: NodeId,
        dst: NodeId,
        arg_size: u32,
        is_fast: bool,
        by_task: TaskId,
    ) -> Self {
        ForkEvent {
            time,
            node,
            dst,
            arg_size,
            is_fast,
            by_task,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn src_id(&self) -> NodeId {
        self.node
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn dst_id(&self) -> NodeId {
        self.dst
    }

    /// Size in bytes of the marshalled argument block.
    pub const fn arg_size(&self) -> u32 {
        self.arg_size
    }

    /// Fast forks run inline on the target's progress thread.
    pub const fn is_fast(&self) -> bool {
        self.is_fast
    }

    pub const fn in_task(&self) -> TaskId {
        self.by_task
    }
}

/// Marks the start of a task's execution window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeginTaskEvent {
    time: Timestamp,
    node: NodeId,
    task: TaskId,
}

impl BeginTaskEvent {
    pub const fn new(time: Timestamp, node: NodeId, task: TaskId) -> Self {
        BeginTaskEvent { time, node, task }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn task_id(&self) -> TaskId {
        self.task
    }
}

/// Marks the end of a task's execution window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndTaskEvent {
    time: Timestamp,
    node: NodeId,
    task: TaskId,
}

impl EndTaskEvent {
    pub const fn new(time: Timestamp, node: NodeId, task: TaskId) -> Self {
        EndTaskEvent { time, node, task }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.time
    }

    pub const fn node_id(&self) -> NodeId {
        self.node
    }

    pub const fn task_id(&self) -> TaskId {
        self.task
    }
}

/// A decoded trace event, one variant per [`EventKind`].
///
/// NOTE: the `Serialize` impl is for the convenience of JSON dumps. It does
/// NOT reflect the raw trace-record format, which is decoded by the reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    Start(StartEvent),
    Tag(TagEvent),
    Pause(PauseEvent),
    End(EndEvent),
    Task(TaskEvent),
    Comm(CommEvent),
    Fork(ForkEvent),
    BeginTask(BeginTaskEvent),
    EndTask(EndTaskEvent),
}

impl TraceEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            TraceEvent::Start(_) => EventKind::Start,
            TraceEvent::Tag(_) => EventKind::Tag,
            TraceEvent::Pause(_) => EventKind::Pause,
            TraceEvent::End(_) => EventKind::End,
            TraceEvent::Task(_) => EventKind::Task,
            TraceEvent::Comm(_) => EventKind::Comm,
            TraceEvent::Fork(_) => EventKind::Fork,
            TraceEvent::BeginTask(_) => EventKind::BeginTask,
            TraceEvent::EndTask(_) => EventKind::EndTask,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        match self {
            TraceEvent::Start(e) => e.timestamp(),
            TraceEvent::Tag(e) => e.timestamp(),
            TraceEvent::Pause(e) => e.timestamp(),
            TraceEvent::End(e) => e.timestamp(),
            TraceEvent::Task(e) => e.timestamp(),
            TraceEvent::Comm(e) => e.timestamp(),
            TraceEvent::Fork(e) => e.timestamp(),
            TraceEvent::BeginTask(e) => e.timestamp(),
            TraceEvent::EndTask(e) => e.timestamp(),
        }
    }

    pub const fn node_id(&self) -> NodeId {
        match self {
            TraceEvent::Start(e) => e.node_id(),
            TraceEvent::Tag(e) => e.node_id(),
            TraceEvent::Pause(e) => e.node_id(),
            TraceEvent::End(e) => e.node_id(),
            TraceEvent::Task(e) => e.node_id(),
            TraceEvent::Comm(e) => e.node_id(),
            TraceEvent::Fork(e) => e.node_id(),
            TraceEvent::BeginTask(e) => e.node_id(),
            TraceEvent::EndTask(e) => e.node_id(),
        }
    }

    /// Event time as floating-point seconds.
    pub fn clock_time(&self) -> f64 {
        self.timestamp().as_secs_f64()
    }

    /// The owning/originating task, if this event kind carries one.
    ///
    /// `Start` is the only kind without an associated task.
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            TraceEvent::Start(_) => None,
            TraceEvent::Tag(e) => Some(e.vdb_task()),
            TraceEvent::Pause(e) => Some(e.vdb_task()),
            TraceEvent::End(e) => Some(e.vdb_task()),
            TraceEvent::Task(e) => Some(e.task_id()),
            TraceEvent::Comm(e) => Some(e.in_task()),
            TraceEvent::Fork(e) => Some(e.in_task()),
            TraceEvent::BeginTask(e) => Some(e.task_id()),
            TraceEvent::EndTask(e) => Some(e.task_id()),
        }
    }

    /// Destination node for the kinds that address one (`Comm`, `Fork`).
    pub const fn dst_node(&self) -> Option<NodeId> {
        match self {
            TraceEvent::Comm(e) => Some(e.dst_id()),
            TraceEvent::Fork(e) => Some(e.dst_id()),
            _ => None,
        }
    }

    /// True if this event belongs to the header class (run metadata), as
    /// opposed to the time-merged display timeline.
    pub const fn is_header_event(&self) -> bool {
        self.kind().is_header()
    }

    /// Compares by `(sec, usec)` only.
    ///
    /// Node id and kind are deliberately excluded: this ordering exists to
    /// time-merge heterogeneous per-node streams, so events from different
    /// nodes with equal timestamps tie. That is also why `TraceEvent` does
    /// not implement `PartialOrd`/`Ord` itself.
    pub fn time_cmp(&self, other: &TraceEvent) -> Ordering {
        self.timestamp().cmp(&other.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(sec: i64, usec: i64, node: u32) -> TraceEvent {
        TraceEvent::Start(StartEvent::new(
            Timestamp::new(sec, usec),
            NodeId::new(node),
            CpuUsage::new(0, 0, 0, 0),
        ))
    }

    #[test]
    fn test_kind_codes_roundtrip() {
        let kinds = [
            EventKind::Start,
            EventKind::Tag,
            EventKind::Pause,
            EventKind::End,
            EventKind::Task,
            EventKind::Comm,
            EventKind::Fork,
            EventKind::BeginTask,
            EventKind::EndTask,
        ];
        for (code, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.as_u8(), code as u8);
            assert_eq!(EventKind::from_u8(code as u8), Some(*kind));
        }
        assert_eq!(EventKind::from_u8(9), None);
        assert_eq!(EventKind::from_u8(255), None);
    }

    #[test]
    fn test_header_partition() {
        let header = [
            EventKind::Start,
            EventKind::Tag,
            EventKind::Pause,
            EventKind::End,
        ];
        let timeline = [
            EventKind::Task,
            EventKind::Comm,
            EventKind::Fork,
            EventKind::BeginTask,
            EventKind::EndTask,
        ];
        for kind in header {
            assert!(kind.is_header(), "{kind:?} should be header class");
            assert!(!kind.is_timeline());
        }
        for kind in timeline {
            assert!(kind.is_timeline(), "{kind:?} should be timeline class");
            assert!(!kind.is_header());
        }
    }

    #[test]
    fn test_time_cmp_ignores_node_and_kind() {
        let fork = TraceEvent::Fork(ForkEvent::new(
            Timestamp::new(5, 0),
            NodeId::new(1),
            NodeId::new(3),
            64,
            false,
            TaskId::new(9),
        ));
        let task = TraceEvent::Task(TaskEvent::new(
            Timestamp::new(5, 0),
            NodeId::new(2),
            TaskId::new(10),
            true,
            42,
            None,
        ));
        assert_eq!(fork.time_cmp(&task), Ordering::Equal);
        assert_eq!(task.time_cmp(&fork), Ordering::Equal);
    }

    #[test]
    fn test_time_cmp_lexicographic() {
        let a = start(5, 999_999, 0);
        let b = start(6, 0, 1);
        assert_eq!(a.time_cmp(&b), Ordering::Less);
        assert_eq!(b.time_cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_comm_total_bytes() {
        let comm = CommEvent::new(
            Timestamp::new(10, 500_000),
            NodeId::new(0),
            NodeId::new(3),
            8,
            100,
            true,
            TaskId::new(7),
            117,
            None,
        );
        assert_eq!(comm.total_bytes(), 800);
        assert_eq!(comm.timestamp().as_secs_f64(), 10.5);
        assert_eq!(comm.src_id(), NodeId::new(0));
        assert_eq!(comm.dst_id(), NodeId::new(3));
    }

    #[test]
    fn test_task_locality() {
        let local = TaskEvent::new(
            Timestamp::new(1, 0),
            NodeId::new(0),
            TaskId::new(1),
            false,
            10,
            None,
        );
        let remote = TaskEvent::new(
            Timestamp::new(1, 0),
            NodeId::new(0),
            TaskId::new(2),
            true,
            10,
            None,
        );
        assert!(local.is_local());
        assert!(!local.is_remote());
        assert!(remote.is_remote());
        assert!(!remote.is_local());
    }

    #[test]
    fn test_task_id_accessor_per_kind() {
        assert_eq!(start(0, 0, 0).task_id(), None);

        let begin = TraceEvent::BeginTask(BeginTaskEvent::new(
            Timestamp::new(1, 0),
            NodeId::new(0),
            TaskId::new(42),
        ));
        assert_eq!(begin.task_id(), Some(TaskId::new(42)));
        assert_eq!(begin.kind(), EventKind::BeginTask);

        let end = TraceEvent::End(EndEvent::new(
            Timestamp::new(2, 0),
            NodeId::new(0),
            CpuUsage::new(0, 0, 0, 0),
            TaskId::new(1),
        ));
        assert_eq!(end.task_id(), Some(TaskId::new(1)));
    }

    #[test]
    fn test_dst_node_accessor() {
        let fork = TraceEvent::Fork(ForkEvent::new(
            Timestamp::new(1, 0),
            NodeId::new(0),
            NodeId::new(5),
            16,
            true,
            TaskId::new(1),
        ));
        assert_eq!(fork.dst_node(), Some(NodeId::new(5)));
        assert_eq!(start(1, 0, 0).dst_node(), None);
    }

    #[test]
    fn test_event_clone_eq() {
        let tag = TraceEvent::Tag(TagEvent::new(
            Timestamp::new(3, 1),
            NodeId::new(2),
            CpuUsage::new(1, 0, 0, 500_000),
            TagId::new(4),
            Arc::from("phase-2"),
            TaskId::new(11),
        ));
        let cloned = tag.clone();
        assert_eq!(tag, cloned);
        assert!(tag.is_header_event());
    }
}
