//! Mutable generator state guarded by the generator's mutex

use crate::layout::MAX_SEQUENCE;

/// Last accepted clock reading plus the next sequence to hand out in it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    last_timestamp: i64,
    next_sequence: u16,
}

impl State {
    #[inline(always)]
    pub(crate) const fn new(last_timestamp: i64) -> Self {
        Self {
            last_timestamp,
            next_sequence: 0,
        }
    }

    #[inline(always)]
    pub(crate) const fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    #[cfg(test)]
    pub(crate) const fn next_sequence(&self) -> u16 {
        self.next_sequence
    }

    /// True once every sequence of `last_timestamp` has been used
    #[inline(always)]
    pub(crate) const fn is_exhausted(&self) -> bool {
        self.next_sequence > MAX_SEQUENCE
    }

    /// Take the next sequence in `now`, starting over at 0 when `now` is a
    /// new millisecond. Callers must not pass an exhausted millisecond.
    #[inline]
    pub(crate) fn advance(&mut self, now: i64) -> u16 {
        let sequence = if now == self.last_timestamp {
            self.next_sequence
        } else {
            0
        };
        self.last_timestamp = now;
        self.next_sequence = sequence + 1;
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_same_millisecond() {
        let mut state = State::new(100);
        assert_eq!(state.advance(100), 0);
        assert_eq!(state.advance(100), 1);
        assert_eq!(state.advance(100), 2);
        assert_eq!(state.last_timestamp(), 100);
        assert_eq!(state.next_sequence(), 3);
    }

    #[test]
    fn test_state_new_millisecond_resets() {
        let mut state = State::new(100);
        state.advance(100);
        state.advance(100);
        assert_eq!(state.advance(101), 0);
        assert_eq!(state.advance(101), 1);
        assert_eq!(state.last_timestamp(), 101);
    }

    #[test]
    fn test_state_exhaustion() {
        let mut state = State::new(7);
        for expected in 0..=MAX_SEQUENCE {
            assert!(!state.is_exhausted());
            assert_eq!(state.advance(7), expected);
        }
        assert!(state.is_exhausted());
        assert_eq!(state.advance(8), 0);
        assert!(!state.is_exhausted());
    }
}
