//! Core logic for the organpipe disk-layout toolkit.
//!
//! A block-access trace is a newline-delimited list of LBAs. The crate
//! covers the three stages of a layout experiment:
//!
//! * [`freq`] counts accesses and ranks LBAs most-to-least frequent.
//! * [`reorder`] rewrites a ranked sequence into organ-pipe order, hottest
//!   tokens in the middle and coldest at the two ends.
//! * [`trace`] replays a trace against a modeled 1-D disk and scores a
//!   layout by total seek distance.

pub mod error;
pub mod freq;
pub mod io_utils;
pub mod reorder;
pub mod stats;
pub mod trace;

pub use error::OrganPipeError;
pub use freq::{FreqTable, RankedLba};
pub use reorder::{organ_pipe, strip_terminator, try_organ_pipe, Placement};
pub use trace::{read_lbas, Trace};
