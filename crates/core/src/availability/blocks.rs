use serde::{Deserialize, Serialize};

use super::time::{Time, TimeRange};

/// A maximal run of back-to-back time slots, shown as one contiguous block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub ranges: Vec<TimeRange>,
}

impl TimeBlock {
    /// Start of the first slot in the block.
    pub fn start(&self) -> Option<Time> {
        self.ranges.first().map(TimeRange::start)
    }

    /// End of the last slot in the block.
    pub fn end(&self) -> Option<Time> {
        self.ranges.last().map(TimeRange::end)
    }

    /// One `HH:MM` label per slot, each marking the slot's start.
    pub fn start_labels(&self) -> Vec<String> {
        self.ranges.iter().map(|r| r.start().to_string()).collect()
    }

    /// Label closing the block.
    pub fn end_label(&self) -> Option<String> {
        self.end().map(|t| t.to_string())
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Groups ascending time slots into blocks of adjacent slots.
///
/// A new block starts whenever the previous block's last end differs from the
/// current slot's start. This only drives display labels; it has no effect on
/// what can be selected.
///
/// # Examples
///
/// ```
/// use slotsync_core::availability::merge_time_blocks;
///
/// let times = ["09:00-10:00", "10:00-11:00", "13:00-14:00"]
///     .iter()
///     .map(|t| t.parse().unwrap())
///     .collect::<Vec<_>>();
/// let blocks = merge_time_blocks(&times);
///
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].start_labels(), ["09:00", "10:00"]);
/// assert_eq!(blocks[0].end_label().as_deref(), Some("11:00"));
/// ```
pub fn merge_time_blocks(times: &[TimeRange]) -> Vec<TimeBlock> {
    let mut blocks: Vec<TimeBlock> = Vec::new();

    for time in times {
        match blocks.last_mut() {
            Some(block) if block.end() == Some(time.start()) => block.ranges.push(*time),
            _ => blocks.push(TimeBlock {
                ranges: vec![*time],
            }),
        }
    }

    blocks
}
