// adc-poll/src/selection.rs
//
// Copyright (c) 2026, the adc-poll authors
//
// Licensed under the MIT license:
//   <LICENSE or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according
// to those terms.
//
//! The set of ADC channels selected for polling.
//!

use crate::{Error, Result, CHANNEL_COUNT};

/// A fixed-capacity set of ADC channel indices.
///
/// One slot per channel on the device. A channel can be selected at most
/// once; out-of-range indices are rejected. Iteration is always in
/// ascending channel order, regardless of the order of selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSelection {
    selected: [bool; CHANNEL_COUNT],
}

impl ChannelSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel to the selection.
    ///
    /// Fails if the index is outside the device's channel range or the
    /// channel is already selected.
    pub fn select(&mut self, channel: usize) -> Result<()> {
        if channel >= CHANNEL_COUNT {
            return Err(Error::InvalidIndex(channel));
        }
        if self.selected[channel] {
            return Err(Error::DuplicateChannel(channel));
        }
        self.selected[channel] = true;
        Ok(())
    }

    /// Determines if the channel is in the selection.
    pub fn contains(&self, channel: usize) -> bool {
        channel < CHANNEL_COUNT && self.selected[channel]
    }

    /// The number of selected channels.
    pub fn len(&self) -> usize {
        self.selected.iter().filter(|&&sel| sel).count()
    }

    /// Determines if no channels are selected.
    pub fn is_empty(&self) -> bool {
        !self.selected.iter().any(|&sel| sel)
    }

    /// Iterates over the selected channel indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CHANNEL_COUNT).filter(move |&chan| self.selected[chan])
    }
}

// --------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let sel = ChannelSelection::new();
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
        assert_eq!(sel.iter().count(), 0);
    }

    #[test]
    fn select_and_contains() {
        let mut sel = ChannelSelection::new();
        sel.select(3).unwrap();
        sel.select(0).unwrap();
        assert!(sel.contains(0));
        assert!(sel.contains(3));
        assert!(!sel.contains(1));
        assert_eq!(sel.len(), 2);
        assert!(!sel.is_empty());
    }

    #[test]
    fn rejects_out_of_range() {
        let mut sel = ChannelSelection::new();
        assert!(matches!(sel.select(8), Err(Error::InvalidIndex(8))));
        assert!(matches!(sel.select(9), Err(Error::InvalidIndex(9))));
        assert!(sel.is_empty());
    }

    #[test]
    fn rejects_duplicates() {
        let mut sel = ChannelSelection::new();
        sel.select(0).unwrap();
        assert!(matches!(sel.select(0), Err(Error::DuplicateChannel(0))));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn iterates_ascending() {
        let mut sel = ChannelSelection::new();
        for chan in [5, 1, 7, 2] {
            sel.select(chan).unwrap();
        }
        let order: Vec<usize> = sel.iter().collect();
        assert_eq!(order, vec![1, 2, 5, 7]);
    }
}
