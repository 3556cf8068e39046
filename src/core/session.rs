//! Session store: every message pair exchanged during one user session.

use crate::core::message::MessagePair;

/// Ordered, append-only history for the active session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<MessagePair>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, pair: MessagePair) {
        self.history.push(pair);
    }

    /// Full history, oldest first.
    pub fn all(&self) -> &[MessagePair] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop the history when a new session starts.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.all().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut session = Session::new();
        session.append(MessagePair::new("one", "1"));
        session.append(MessagePair::new("two", "2"));
        session.append(MessagePair::new("three", "3"));
        let humans: Vec<&str> = session.all().iter().map(|p| p.human()).collect();
        assert_eq!(humans, vec!["one", "two", "three"]);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn clear_starts_over() {
        let mut session = Session::new();
        session.append(MessagePair::new("q", "a"));
        session.clear();
        assert!(session.is_empty());
    }
}
