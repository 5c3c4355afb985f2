//! Injectable time source
//!
//! Lockout evaluation goes through a single [`Clock`] so that every call on
//! one transport observes a consistent view of "now", and so tests can drive
//! the rate-limit window deterministically.

use chrono::{DateTime, Utc};
use std::fmt;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock; the default for real transports.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
