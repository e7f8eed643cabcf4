// adc-poll/src/lib.rs
//
// Copyright (c) 2026, the adc-poll authors
//
// Licensed under the MIT license:
//   <LICENSE or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according
// to those terms.
//
//!
//! Raw ADC polling over the Linux Industrial I/O sysfs interface.
//!
//! The kernel's IIO subsystem exposes each ADC channel of a device as a
//! `in_voltageN_raw` pseudo-file that yields a fresh conversion on every
//! read from offset zero. This crate polls a selected set of those
//! channels in a tight loop, throttles a single-line console display, and
//! reports the achieved sample rate at the end of the run.
//!
//! For more information, see:
//!
//!   [IIO Wiki](https://wiki.analog.com/software/linux/docs/iio/iio)
//!

// Lints
// This may be overkill.
#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub use crate::channel::*;
pub use crate::errors::*;
pub use crate::poll::*;
pub use crate::selection::*;
pub use crate::stats::*;

pub mod channel;
pub mod errors;
pub mod poll;
pub mod selection;
pub mod stats;

/// The number of ADC channels on the target device.
pub const CHANNEL_COUNT: usize = 8;

/// The sysfs directory of the target IIO device.
pub const DFLT_IIO_DIR: &str = "/sys/bus/iio/devices/iio:device0/";

/// The default microsecond delay between read iterations.
pub const DFLT_DELAY_US: u64 = 10_000;
