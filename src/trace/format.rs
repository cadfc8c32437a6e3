//! Single-line text rendering of events, consumed by the CLI dump mode.
//!
//! Field order and labels are stable per variant; tooling that greps dump
//! output may rely on them. There is no cross-variant layout invariant.

use crate::trace::events::TraceEvent;
use std::fmt;
use std::io::{Result, Write};

/// Placeholder printed when an event carries no source-file reference.
pub const NO_SRC_FILE: &str = "<none>";

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Start(e) => write!(
                f,
                "Start: node {} time {} user {} sys {}",
                e.node_id().as_u32(),
                e.timestamp(),
                e.cpu().user(),
                e.cpu().sys(),
            ),
            TraceEvent::Tag(e) => write!(
                f,
                "Tag: node {} time {} user {} sys {} tagNo {} tag='{}'",
                e.node_id().as_u32(),
                e.timestamp(),
                e.cpu().user(),
                e.cpu().sys(),
                e.tag_no().as_i32(),
                e.tag_name(),
            ),
            TraceEvent::Pause(e) => write!(
                f,
                "Pause: node {} time {} user {} sys {} tagNo {}",
                e.node_id().as_u32(),
                e.timestamp(),
                e.cpu().user(),
                e.cpu().sys(),
                e.tag_id().as_i32(),
            ),
            TraceEvent::End(e) => write!(
                f,
                "End: node {} time {} user {} sys {}",
                e.node_id().as_u32(),
                e.timestamp(),
                e.cpu().user(),
                e.cpu().sys(),
            ),
            TraceEvent::Task(e) => write!(
                f,
                "Task: node {} time {} taskId {} {} line {} file {}",
                e.node_id().as_u32(),
                e.timestamp(),
                e.task_id().as_u64(),
                if e.is_remote() { "remote" } else { "local" },
                e.src_line(),
                e.src_file().unwrap_or(NO_SRC_FILE),
            ),
            TraceEvent::Comm(e) => write!(
                f,
                "Comm: node {} time {} to {} size {}",
                e.node_id().as_u32(),
                e.timestamp(),
                e.dst_id().as_u32(),
                e.total_bytes(),
            ),
            TraceEvent::Fork(e) => write!(
                f,
                "Fork{}: node {} time {} to {} argSize {}",
                if e.is_fast() { "(fast)" } else { "" },
                e.node_id().as_u32(),
                e.timestamp(),
                e.dst_id().as_u32(),
                e.arg_size(),
            ),
            TraceEvent::BeginTask(e) => write!(
                f,
                "Btask: node {} time {} taskId {}",
                e.node_id().as_u32(),
                e.timestamp(),
                e.task_id().as_u64(),
            ),
            TraceEvent::EndTask(e) => write!(
                f,
                "Etask: node {} time {} taskId {}",
                e.node_id().as_u32(),
                e.timestamp(),
                e.task_id().as_u64(),
            ),
        }
    }
}

/// Write one formatted event line (newline-terminated) to a sink.
pub fn write_event(w: &mut impl Write, event: &TraceEvent) -> Result<()> {
    writeln!(w, "{event}")
}

impl TraceEvent {
    /// Dump this event to stdout, one line.
    pub fn print(&self) {
        println!("{self}");
    }
}
