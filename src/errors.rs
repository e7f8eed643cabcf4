// adc-poll/src/errors.rs
//
// Copyright (c) 2026, the adc-poll authors
//
// Licensed under the MIT license:
//   <LICENSE or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according
// to those terms.
//
//!
//! Error definitions for the ADC poller.

use std::{io, num};
use thiserror::Error;

/// The Error type for the ADC poller
#[derive(Error, Debug)]
pub enum Error {
    /// A low-level I/O error
    #[error("{0}")]
    Io(#[from] io::Error),
    /// A low-level Unix-style error
    #[error("{0}")]
    Nix(#[from] nix::Error),
    /// The sysfs attribute text did not parse as a decimal integer.
    #[error("{0}")]
    ParseInt(#[from] num::ParseIntError),
    /// The sysfs attribute contained non-UTF-8 bytes.
    #[error("String conversion error")]
    StringConversionError,
    /// A channel index outside the range of the device's ADC channels.
    #[error("channel {0} is out of range")]
    InvalidIndex(usize),
    /// A channel index requested more than once.
    #[error("channel {0} listed more than once")]
    DuplicateChannel(usize),
}

/// The default result type for the ADC poller
pub type Result<T> = std::result::Result<T, Error>;
