//! Time values carried by trace events.

use serde::Serialize;
use std::fmt;

/// Wall-clock time of an event: whole seconds plus microseconds.
///
/// Precondition (owned by the trace reader, not checked here):
/// `0 <= usec < 1_000_000`.
///
/// The derived `Ord` compares `(sec, usec)` lexicographically, which is the
/// entire ordering contract events rely on for cross-node time merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp {
    sec: i64,
    usec: i64,
}

impl Timestamp {
    pub const fn new(sec: i64, usec: i64) -> Self {
        Timestamp { sec, usec }
    }

    pub const fn sec(self) -> i64 {
        self.sec
    }

    pub const fn usec(self) -> i64 {
        self.usec
    }

    /// Time as floating-point seconds: `sec + usec / 1_000_000`.
    pub fn as_secs_f64(self) -> f64 {
        self.sec as f64 + self.usec as f64 / 1_000_000.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.sec, self.usec)
    }
}

/// User/system CPU-time split (getrusage style) sampled at a header-class
/// event: process start, tag, pause, end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CpuUsage {
    user_sec: i64,
    user_usec: i64,
    sys_sec: i64,
    sys_usec: i64,
}

impl CpuUsage {
    pub const fn new(user_sec: i64, user_usec: i64, sys_sec: i64, sys_usec: i64) -> Self {
        CpuUsage {
            user_sec,
            user_usec,
            sys_sec,
            sys_usec,
        }
    }

    /// Combined user + system CPU seconds.
    pub fn cpu_time(self) -> f64 {
        (self.user_sec + self.sys_sec) as f64
            + (self.user_usec + self.sys_usec) as f64 / 1_000_000.0
    }

    pub fn user_time(self) -> f64 {
        self.user_sec as f64 + self.user_usec as f64 / 1_000_000.0
    }

    pub fn sys_time(self) -> f64 {
        self.sys_sec as f64 + self.sys_usec as f64 / 1_000_000.0
    }

    pub const fn user(self) -> Timestamp {
        Timestamp::new(self.user_sec, self.user_usec)
    }

    pub const fn sys(self) -> Timestamp {
        Timestamp::new(self.sys_sec, self.sys_usec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_ordering_is_lexicographic() {
        let a = Timestamp::new(5, 999_999);
        let b = Timestamp::new(6, 0);
        let c = Timestamp::new(6, 1);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(Timestamp::new(5, 0), Timestamp::new(5, 0));
    }

    #[test]
    fn test_timestamp_as_secs_f64() {
        assert_eq!(Timestamp::new(10, 500_000).as_secs_f64(), 10.5);
        assert_eq!(Timestamp::new(0, 0).as_secs_f64(), 0.0);
        let t = Timestamp::new(3, 999_999);
        assert_eq!(t.as_secs_f64(), 3.0 + 999_999.0 / 1_000_000.0);
    }

    #[test]
    fn test_timestamp_display_pads_usec() {
        assert_eq!(Timestamp::new(12, 42).to_string(), "12.000042");
        assert_eq!(Timestamp::new(0, 500_000).to_string(), "0.500000");
    }

    #[test]
    fn test_cpu_usage_derived_times() {
        let cpu = CpuUsage::new(2, 250_000, 1, 750_000);
        assert_eq!(cpu.user_time(), 2.25);
        assert_eq!(cpu.sys_time(), 1.75);
        assert_eq!(cpu.cpu_time(), 4.0);
    }

    #[test]
    fn test_cpu_usage_components() {
        let cpu = CpuUsage::new(1, 2, 3, 4);
        assert_eq!(cpu.user(), Timestamp::new(1, 2));
        assert_eq!(cpu.sys(), Timestamp::new(3, 4));
    }
}
