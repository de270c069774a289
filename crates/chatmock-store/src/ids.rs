use chatmock_shared::MessageId;
use chrono::Utc;

/// Hands out message ids derived from the creation time.
///
/// Ids are the creation time in milliseconds, bumped past the last issued
/// value when the clock has not advanced, so a batch created within one tick
/// still gets distinct, increasing ids.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> MessageId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn next_at(&mut self, now_millis: i64) -> MessageId {
        self.last = now_millis.max(self.last + 1);
        MessageId(self.last.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_tick_ids_are_distinct() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(1_000);
        assert_eq!(a.as_str(), "1000");
        assert_eq!(b.as_str(), "1001");
        assert_eq!(c.as_str(), "1002");
    }

    #[test]
    fn clock_going_backwards_does_not_collide() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(5_000);
        let b = ids.next_at(4_000);
        assert_ne!(a, b);
        assert_eq!(b.as_str(), "5001");
    }

    #[test]
    fn rapid_ids_are_unique() {
        let mut ids = IdGenerator::new();
        let set: HashSet<_> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(set.len(), 500);
    }
}
