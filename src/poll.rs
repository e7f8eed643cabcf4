// adc-poll/src/poll.rs
//
// Copyright (c) 2026, the adc-poll authors
//
// Licensed under the MIT license:
//   <LICENSE or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according
// to those terms.
//
//! The channel read loop and its display throttling.
//!

use crate::{ChannelReader, ChannelSelection, Result, CHANNEL_COUNT, DFLT_IIO_DIR};
use std::{
    fmt,
    io::{self, Write},
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

// With no sleep between reads the loop tops out around 20 kHz; redrawing
// the display on every sample would itself bottleneck throughput.
const UNTHROTTLED_REFRESH: u64 = 2000;

// With a sleep, one display refresh per 800 ms worth of delay, capped so
// display overhead stays bounded at small delays.
const REFRESH_BUDGET_US: u64 = 800_000;
const MAX_REFRESH: u64 = 800;

/// The number of read iterations between display refreshes for a given
/// inter-read delay.
pub fn refresh_period(delay_us: u64) -> u64 {
    if delay_us == 0 {
        UNTHROTTLED_REFRESH
    }
    else {
        (REFRESH_BUDGET_US / delay_us).clamp(1, MAX_REFRESH)
    }
}

// --------------------------------------------------------------------------

/// The most recent reading from one channel.
///
/// A failed read is tagged rather than folded into the value domain, so it
/// can never be confused with a legitimate extreme ADC reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A successfully read raw value
    Value(i32),
    /// The last read attempt failed
    Failed,
}

impl Default for Sample {
    fn default() -> Self {
        Sample::Value(0)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sample::Value(val) => fmt::Display::fmt(val, f),
            Sample::Failed => f.pad("ERR"),
        }
    }
}

// --------------------------------------------------------------------------

/// The poll loop: repeatedly samples the selected channels and refreshes a
/// single status line until cancelled.
///
/// Cancellation is cooperative. The caller hands in a shared flag, normally
/// set from a SIGINT handler, and the loop checks it once per iteration.
#[derive(Debug)]
pub struct PollLoop {
    base: PathBuf,
    delay_us: u64,
    channels: ChannelSelection,
    quit: Arc<AtomicBool>,
}

impl PollLoop {
    /// Creates a loop over the default IIO device directory.
    pub fn new(channels: ChannelSelection, delay_us: u64, quit: Arc<AtomicBool>) -> Self {
        Self::with_base(DFLT_IIO_DIR, channels, delay_us, quit)
    }

    /// Creates a loop over an explicit device directory.
    pub fn with_base<P: Into<PathBuf>>(
        base: P,
        channels: ChannelSelection,
        delay_us: u64,
        quit: Arc<AtomicBool>,
    ) -> Self {
        Self {
            base: base.into(),
            delay_us,
            channels,
            quit,
        }
    }

    /// Runs the loop, writing the display to stdout.
    pub fn run(&self) -> Result<u64> {
        self.run_to(&mut io::stdout().lock())
    }

    /// Runs the loop, writing the display to the given sink.
    ///
    /// Returns the number of completed iterations, which is zero if any
    /// channel fails to open. Read failures during an iteration are
    /// reported to stderr and shown as [`Sample::Failed`] but do not stop
    /// the loop.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<u64> {
        let period = refresh_period(self.delay_us);

        writeln!(out, "\n(use ctrl-c to stop)\n")?;
        write!(out, "ADC          ")?;
        for chan in self.channels.iter() {
            write!(out, "      {}", chan)?;
        }
        writeln!(out)?;

        // Open in ascending channel order. The first failure abandons the
        // run; handles opened so far are dropped on return.
        let mut readers: [Option<ChannelReader>; CHANNEL_COUNT] = Default::default();
        for chan in self.channels.iter() {
            match ChannelReader::open(&self.base, chan) {
                Ok(rdr) => readers[chan] = Some(rdr),
                Err(err) => {
                    eprintln!(
                        "open {}: {}",
                        ChannelReader::sysfs_path(&self.base, chan).display(),
                        err
                    );
                    return Ok(0);
                }
            }
        }

        let mut vals = [Sample::default(); CHANNEL_COUNT];
        let mut count = 0u64;

        // Primed so the first completed read triggers a redraw.
        let mut update = 1;

        while !self.quit.load(Ordering::SeqCst) {
            for (chan, rdr) in readers.iter_mut().enumerate() {
                if let Some(rdr) = rdr {
                    match rdr.read() {
                        Ok(val) => vals[chan] = Sample::Value(val),
                        Err(err) => {
                            eprintln!("read voltage{}: {}", chan, err);
                            vals[chan] = Sample::Failed;
                            // Skip the remaining channels this pass.
                            break;
                        }
                    }
                }
            }

            update -= 1;

            if update == 0 {
                update = period;

                write!(out, "\rRead {:8}: ", count + 1)?;

                for chan in self.channels.iter() {
                    write!(out, " {:>4}  ", vals[chan])?;
                }

                out.flush()?;
            }

            count += 1;

            if self.delay_us > 0 {
                thread::sleep(Duration::from_micros(self.delay_us));
            }
        }

        write!(out, "\n\n")?;
        Ok(count)
    }
}

// --------------------------------------------------------------------------
