//! Conversation memory window: the last K message pairs sent as context.
//!
//! The window is rebuilt from the full session history on every turn, so a change
//! to K applies to the whole history rather than only to future turns.

use std::collections::VecDeque;
use std::fmt;

use crate::core::message::MessagePair;

/// Smallest accepted window size.
pub const MIN_MEMORY_LENGTH: u8 = 1;
/// Largest accepted window size.
pub const MAX_MEMORY_LENGTH: u8 = 10;
/// Window size used when none is configured.
pub const DEFAULT_MEMORY_LENGTH: u8 = 5;

/// Errors when initializing the memory window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    #[error(
        "memory length {0} is out of range ({min}..={max})",
        min = MIN_MEMORY_LENGTH,
        max = MAX_MEMORY_LENGTH
    )]
    OutOfRange(i64),
}

/// Window capacity K, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MemoryLength(u8);

impl MemoryLength {
    pub fn new(k: i64) -> Result<Self, MemoryError> {
        if (MIN_MEMORY_LENGTH as i64..=MAX_MEMORY_LENGTH as i64).contains(&k) {
            Ok(Self(k as u8))
        } else {
            Err(MemoryError::OutOfRange(k))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// One step up, saturating at the maximum.
    pub fn increment(self) -> Self {
        Self((self.0 + 1).min(MAX_MEMORY_LENGTH))
    }

    /// One step down, saturating at the minimum.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_MEMORY_LENGTH))
    }
}

impl Default for MemoryLength {
    fn default() -> Self {
        Self(DEFAULT_MEMORY_LENGTH)
    }
}

impl fmt::Display for MemoryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// FIFO window over the most recent message pairs.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    capacity: MemoryLength,
    pairs: VecDeque<MessagePair>,
}

impl MemoryWindow {
    pub fn new(capacity: MemoryLength) -> Self {
        Self {
            capacity,
            pairs: VecDeque::with_capacity(capacity.get()),
        }
    }

    /// Reset to `capacity` and append every pair of the full history.
    pub fn replay(&mut self, capacity: MemoryLength, history: &[MessagePair]) {
        self.reset(capacity);
        for pair in history {
            self.append(pair.clone());
        }
    }

    /// Clear all pairs and set a new capacity.
    pub fn reset(&mut self, capacity: MemoryLength) {
        self.capacity = capacity;
        self.pairs.clear();
    }

    /// Push a pair, evicting the oldest when over capacity.
    pub fn append(&mut self, pair: MessagePair) {
        self.pairs.push_back(pair);
        while self.pairs.len() > self.capacity.get() {
            self.pairs.pop_front();
        }
    }

    /// Retained pairs, oldest first.
    pub fn render(&self) -> impl Iterator<Item = &MessagePair> {
        self.pairs.iter()
    }

    pub fn capacity(&self) -> MemoryLength {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<MessagePair> {
        (1..=n)
            .map(|i| MessagePair::new(format!("h{}", i), format!("a{}", i)))
            .collect()
    }

    fn k(n: i64) -> MemoryLength {
        MemoryLength::new(n).unwrap()
    }

    fn replayed(cap: MemoryLength, hist: &[MessagePair]) -> MemoryWindow {
        let mut window = MemoryWindow::new(MemoryLength::default());
        window.replay(cap, hist);
        window
    }

    #[test]
    fn memory_length_bounds() {
        assert!(MemoryLength::new(0).is_err());
        assert!(MemoryLength::new(11).is_err());
        assert_eq!(MemoryLength::new(-3), Err(MemoryError::OutOfRange(-3)));
        assert_eq!(k(1).get(), 1);
        assert_eq!(k(10).get(), 10);
        assert_eq!(MemoryLength::default().get(), 5);
    }

    #[test]
    fn memory_length_steps_saturate() {
        assert_eq!(k(10).increment(), k(10));
        assert_eq!(k(1).decrement(), k(1));
        assert_eq!(k(4).increment(), k(5));
        assert_eq!(k(4).decrement(), k(3));
    }

    #[test]
    fn replay_keeps_min_k_n_most_recent_in_order() {
        for cap in 1..=10 {
            for n in 0..15 {
                let hist = history(n);
                let window = replayed(k(cap), &hist);
                let expected = n.min(cap as usize);
                assert_eq!(window.len(), expected, "K={} N={}", cap, n);
                let rendered: Vec<&MessagePair> = window.render().collect();
                let suffix: Vec<&MessagePair> = hist[n - expected..].iter().collect();
                assert_eq!(rendered, suffix, "K={} N={}", cap, n);
            }
        }
    }

    #[test]
    fn window_of_two_over_three_pairs() {
        let hist = history(3);
        let window = replayed(k(2), &hist);
        let rendered: Vec<_> = window.render().cloned().collect();
        assert_eq!(
            rendered,
            vec![MessagePair::new("h2", "a2"), MessagePair::new("h3", "a3")]
        );
    }

    #[test]
    fn append_to_full_window_evicts_only_oldest() {
        let mut window = replayed(k(3), &history(3));
        window.append(MessagePair::new("h4", "a4"));
        let humans: Vec<&str> = window.render().map(|p| p.human()).collect();
        assert_eq!(humans, vec!["h2", "h3", "h4"]);
    }

    #[test]
    fn reset_clears_and_changes_capacity() {
        let mut window = replayed(k(5), &history(4));
        window.reset(k(1));
        assert_eq!(window.len(), 0);
        assert_eq!(window.capacity(), k(1));
        window.append(MessagePair::new("x", "y"));
        window.append(MessagePair::new("z", "w"));
        let humans: Vec<&str> = window.render().map(|p| p.human()).collect();
        assert_eq!(humans, vec!["z"]);
    }

    #[test]
    fn capacity_change_applies_to_whole_history() {
        let hist = history(8);
        assert_eq!(replayed(k(2), &hist).len(), 2);
        let wider = replayed(k(6), &hist);
        assert_eq!(wider.len(), 6);
        assert_eq!(wider.render().next().map(|p| p.human()), Some("h3"));
    }
}
