// adc-poll/src/channel.rs
//
// Copyright (c) 2026, the adc-poll authors
//
// Licensed under the MIT license:
//   <LICENSE or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according
// to those terms.
//
//! Readers for the per-channel raw-value sysfs attributes.
//!

use crate::{Error, Result, CHANNEL_COUNT};
use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
    str,
};

/// The raw attribute value is a small decimal integer and a newline.
const SAMPLE_BUF_SIZE: usize = 8;

/// An open handle to one ADC channel's raw-value attribute.
///
/// The kernel produces a fresh conversion each time the attribute is read
/// from offset zero, so the handle rewinds itself after every read attempt.
#[derive(Debug)]
pub struct ChannelReader {
    file: File,
}

impl ChannelReader {
    /// The sysfs path of a channel's raw-value attribute under a device
    /// directory.
    pub fn sysfs_path<P: AsRef<Path>>(base: P, channel: usize) -> PathBuf {
        base.as_ref().join(format!("in_voltage{}_raw", channel))
    }

    /// Opens the raw-value attribute for the channel, read-only.
    pub fn open<P: AsRef<Path>>(base: P, channel: usize) -> Result<Self> {
        if channel >= CHANNEL_COUNT {
            return Err(Error::InvalidIndex(channel));
        }
        let file = File::open(Self::sysfs_path(base, channel))?;
        Ok(Self { file })
    }

    /// Reads the channel's current raw value.
    ///
    /// The file position is rewound to the start after every attempt,
    /// success or not, so the next read observes a fresh conversion rather
    /// than stale bytes or end-of-stream.
    pub fn read(&mut self) -> Result<i32> {
        let mut buf = [0u8; SAMPLE_BUF_SIZE];
        let res = self.file.read(&mut buf);
        self.file.seek(SeekFrom::Start(0))?;

        let n = res?;
        let text = str::from_utf8(&buf[..n]).map_err(|_| Error::StringConversionError)?;
        Ok(text.trim().parse()?)
    }
}

// --------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_device() -> TempDir {
        TempDir::new().unwrap()
    }

    fn write_raw(dir: &TempDir, channel: usize, text: &str) {
        fs::write(ChannelReader::sysfs_path(dir.path(), channel), text).unwrap();
    }

    #[test]
    fn path_layout() {
        let path = ChannelReader::sysfs_path("/sys/bus/iio/devices/iio:device0/", 5);
        assert!(path.ends_with("in_voltage5_raw"));
    }

    #[test]
    fn rejects_out_of_range_channel() {
        let dir = fake_device();
        let res = ChannelReader::open(dir.path(), CHANNEL_COUNT);
        assert!(matches!(res, Err(Error::InvalidIndex(_))));
    }

    #[test]
    fn open_fails_on_missing_attribute() {
        let dir = fake_device();
        assert!(matches!(
            ChannelReader::open(dir.path(), 0),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn reads_decimal_value() {
        let dir = fake_device();
        write_raw(&dir, 0, "1234\n");
        let mut rdr = ChannelReader::open(dir.path(), 0).unwrap();
        assert_eq!(rdr.read().unwrap(), 1234);
    }

    // The rewind after each read means repeated reads keep producing
    // values instead of hitting end-of-stream.
    #[test]
    fn rereads_after_rewind() {
        let dir = fake_device();
        write_raw(&dir, 2, "42\n");
        let mut rdr = ChannelReader::open(dir.path(), 2).unwrap();
        assert_eq!(rdr.read().unwrap(), 42);
        assert_eq!(rdr.read().unwrap(), 42);
    }

    #[test]
    fn sees_updated_value() {
        let dir = fake_device();
        write_raw(&dir, 1, "7\n");
        let mut rdr = ChannelReader::open(dir.path(), 1).unwrap();
        assert_eq!(rdr.read().unwrap(), 7);
        write_raw(&dir, 1, "999\n");
        assert_eq!(rdr.read().unwrap(), 999);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let dir = fake_device();
        write_raw(&dir, 0, "bogus\n");
        let mut rdr = ChannelReader::open(dir.path(), 0).unwrap();
        assert!(matches!(rdr.read(), Err(Error::ParseInt(_))));
    }

    // A directory opens fine but read(2) on it fails, which stands in for
    // a sysfs read error. The failure must not poison subsequent reads.
    #[test]
    fn read_failure_is_reported_not_sticky() {
        let dir = fake_device();
        fs::create_dir(ChannelReader::sysfs_path(dir.path(), 4)).unwrap();
        let mut rdr = ChannelReader::open(dir.path(), 4).unwrap();
        assert!(rdr.read().is_err());
        assert!(rdr.read().is_err());
    }
}
