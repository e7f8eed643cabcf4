// adc-poll/src/stats.rs
//
// Copyright (c) 2026, the adc-poll authors
//
// Licensed under the MIT license:
//   <LICENSE or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according
// to those terms.
//
//! Wall-clock timestamps and the end-of-run throughput summary.
//!

use crate::Result;
use nix::time::{clock_gettime, ClockId};
use std::fmt;

const USEC_PER_SEC: i64 = 1_000_000;

/// A wall-clock timestamp split into seconds and microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeval {
    /// Whole seconds since the Unix Epoch
    pub sec: i64,
    /// Microseconds within the current second
    pub usec: i64,
}

impl Timeval {
    /// Captures the current wall-clock time.
    pub fn now() -> Result<Self> {
        let ts = clock_gettime(ClockId::CLOCK_REALTIME)?;
        Ok(Self {
            sec: ts.tv_sec() as i64,
            usec: ts.tv_nsec() as i64 / 1000,
        })
    }

    /// The elapsed time in seconds from `start` to this timestamp.
    ///
    /// When the microsecond component has rolled over, a second is
    /// borrowed from the whole-seconds difference.
    pub fn elapsed_since(&self, start: Self) -> f64 {
        let (sec, usec) = if self.usec >= start.usec {
            (self.sec - start.sec, self.usec - start.usec)
        }
        else {
            (self.sec - start.sec - 1, USEC_PER_SEC + self.usec - start.usec)
        };
        sec as f64 + usec as f64 / USEC_PER_SEC as f64
    }
}

// --------------------------------------------------------------------------

/// The throughput summary printed when polling stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollSummary {
    /// Wall-clock seconds spent polling
    pub elapsed: f64,
    /// Total completed read iterations
    pub count: u64,
    /// Average iterations per second
    pub rate: f64,
}

impl PollSummary {
    /// Builds the summary from the timestamps around the poll loop and its
    /// final iteration count. The rate is zero when no time elapsed.
    pub fn new(start: Timeval, end: Timeval, count: u64) -> Self {
        let elapsed = end.elapsed_since(start);
        let rate = if elapsed > 0.0 {
            count as f64 / elapsed
        }
        else {
            0.0
        };
        Self {
            elapsed,
            count,
            rate,
        }
    }
}

impl fmt::Display for PollSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary")?;
        writeln!(f, "  Elapsed: {:.2} seconds", self.elapsed)?;
        writeln!(f, "    Reads: {}", self.count)?;
        writeln!(f, "     Rate: {:.2} Hz", self.rate)
    }
}

// --------------------------------------------------------------------------
