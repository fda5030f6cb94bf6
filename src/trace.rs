//! Block-access trace replay against a modeled 1-D disk.
//!
//! The disk is a flat array of slots, one per distinct LBA. Slots are
//! assigned in first-touch order, so a freshly loaded trace occupies
//! slots `0..n` and any two layouts of the same trace are directly
//! comparable. Layout quality is scored by total seek distance: the sum
//! over consecutive accesses of the absolute slot difference.
//!
//! [`Trace::apply_layout`] packs a run of LBAs (an organ-pipe ordering of
//! the hot set, typically) into consecutive slots while the remaining
//! LBAs close ranks around it in their prior slot order.

use crate::error::OrganPipeError;
use std::collections::{HashMap, HashSet};
use std::io::BufRead;

/// An access trace plus the current LBA-to-slot assignment.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    sequence: Vec<u64>,
    locations: HashMap<u64, u64>,
    next_slot: u64,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one access, assigning the next free slot on first touch.
    pub fn insert(&mut self, lba: u64) {
        if !self.locations.contains_key(&lba) {
            self.locations.insert(lba, self.next_slot);
            self.next_slot += 1;
        }
        self.sequence.push(lba);
    }

    /// Load a trace from a reader, one LBA per line.
    pub fn read_from(reader: impl BufRead) -> Result<Self, OrganPipeError> {
        let mut trace = Trace::new();
        for lba in LbaLines::new(reader) {
            trace.insert(lba?);
        }
        Ok(trace)
    }

    /// Total accesses in the trace, repeats included.
    pub fn accesses(&self) -> usize {
        self.sequence.len()
    }

    /// Distinct LBAs touched by the trace.
    pub fn unique_lbas(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Slot currently assigned to an LBA, if it appears in the trace.
    pub fn location_of(&self, lba: u64) -> Option<u64> {
        self.locations.get(&lba).copied()
    }

    fn slot(&self, lba: u64) -> u64 {
        // Every LBA in `sequence` was assigned a slot by `insert`.
        self.locations.get(&lba).copied().unwrap_or(lba)
    }

    /// Sum of absolute slot differences between consecutive accesses.
    pub fn total_seek_distance(&self) -> u64 {
        self.sequence
            .windows(2)
            .map(|pair| self.slot(pair[0]).abs_diff(self.slot(pair[1])))
            .sum()
    }

    /// Pack `run` into consecutive slots beginning at `start`.
    ///
    /// The remaining LBAs keep their relative slot order and fill the
    /// slots on either side of the run: `start` of them before it, the
    /// rest after. Every LBA ends up with a unique slot in `0..n`.
    ///
    /// Errors when `run` repeats an LBA, names one the trace never
    /// touches, or when `start` exceeds the number of LBAs outside the
    /// run.
    pub fn apply_layout(&mut self, run: &[u64], start: usize) -> Result<(), OrganPipeError> {
        let mut run_set = HashSet::with_capacity(run.len());
        for &lba in run {
            if !run_set.insert(lba) {
                return Err(OrganPipeError::Layout(format!("LBA {lba} repeats in the run")));
            }
            if !self.locations.contains_key(&lba) {
                return Err(OrganPipeError::Layout(format!("LBA {lba} does not appear in the trace")));
            }
        }

        let mut others: Vec<(u64, u64)> = self
            .locations
            .iter()
            .filter(|(lba, _)| !run_set.contains(lba))
            .map(|(&lba, &slot)| (lba, slot))
            .collect();
        others.sort_by_key(|&(_, slot)| slot);

        if start > others.len() {
            return Err(OrganPipeError::Layout(format!(
                "start slot {start} is out of range, only {} LBAs sit outside the run",
                others.len()
            )));
        }

        let mut slot = 0u64;
        for &(lba, _) in &others[..start] {
            self.locations.insert(lba, slot);
            slot += 1;
        }
        for &lba in run {
            self.locations.insert(lba, slot);
            slot += 1;
        }
        for &(lba, _) in &others[start..] {
            self.locations.insert(lba, slot);
            slot += 1;
        }
        Ok(())
    }
}

/// Parse a layout or hot-list file, one LBA per line.
pub fn read_lbas(reader: impl BufRead) -> Result<Vec<u64>, OrganPipeError> {
    LbaLines::new(reader).collect()
}

/// Line iterator yielding parsed LBAs. Blank lines are skipped; anything
/// else that fails to parse reports its line number.
struct LbaLines<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LbaLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for LbaLines<R> {
    type Item = Result<u64, OrganPipeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_no += 1;
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            return Some(token.parse::<u64>().map_err(|_| {
                OrganPipeError::Parse(format!("line {}: invalid LBA '{token}'", self.line_no))
            }));
        }
    }
}
