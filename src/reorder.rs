//! Organ-pipe reordering of a frequency-ranked sequence.
//!
//! Input tokens arrive most-to-least frequent. Each token is inserted at
//! alternating ends of a double-ended result:
//!
//! ```text
//! A B C D E  ->  [E C A B D]
//! ```
//!
//! Front insertions stack in reverse arrival order, so frequency rises from
//! both ends toward a peak at or near the center, like the silhouette of an
//! organ's pipes. The pass is O(N) time and space; a `VecDeque` keeps front
//! insertion constant-time.

use std::collections::VecDeque;

/// Side of the result the next token is inserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

impl Placement {
    /// The opposite side.
    pub fn flip(self) -> Self {
        match self {
            Placement::Front => Placement::Back,
            Placement::Back => Placement::Front,
        }
    }
}

/// Rearrange a most-to-least-frequent sequence into organ-pipe order.
///
/// The first token goes to the front, the second to the back, and so on.
/// Tokens are never compared or inspected; arrival order alone drives
/// placement, so ties in the caller's ranking keep the caller's order.
pub fn organ_pipe<T>(tokens: impl IntoIterator<Item = T>) -> VecDeque<T> {
    let mut result = VecDeque::new();
    let mut side = Placement::Front;
    for token in tokens {
        match side {
            Placement::Front => result.push_front(token),
            Placement::Back => result.push_back(token),
        }
        side = side.flip();
    }
    result
}

/// Same pass over fallible tokens, aborting on the first error.
///
/// Used to fold a line reader directly into the result without materializing
/// the input first. A mid-stream read error discards the partial result.
pub fn try_organ_pipe<T, E>(
    tokens: impl IntoIterator<Item = Result<T, E>>,
) -> Result<VecDeque<T>, E> {
    let mut result = VecDeque::new();
    let mut side = Placement::Front;
    for token in tokens {
        match side {
            Placement::Front => result.push_front(token?),
            Placement::Back => result.push_back(token?),
        }
        side = side.flip();
    }
    Ok(result)
}

/// Drop a trailing `\r` left behind when a CRLF line is split on `\n`.
///
/// The terminator is not part of the token; everything else is preserved
/// byte-for-byte.
pub fn strip_terminator(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}
