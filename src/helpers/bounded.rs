//! Bounded deque
//!
//! Fixed-capacity FIFO buffer: pushing onto a full deque evicts the oldest
//! item. Backs the toast queue.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// A capacity of 0 turns `push` into a no-op
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(64)),
        }
    }

    /// Push a value; returns the evicted oldest item if the deque was full
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.cap == 0 {
            return None;
        }
        let evicted = if self.buf.len() == self.cap {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(value);
        evicted
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Keep only items accepted by `keep`; returns how many were dropped
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.buf.len();
        self.buf.retain(keep);
        before - self.buf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest_at_capacity() {
        let mut deque = BoundedDeque::new(3);
        assert_eq!(deque.push(1), None);
        deque.push(2);
        deque.push(3);
        assert_eq!(deque.push(4), Some(1));
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert!(deque.is_empty());
    }

    #[test]
    fn test_retain_reports_dropped() {
        let mut deque = BoundedDeque::new(5);
        for n in 1..=5 {
            deque.push(n);
        }
        assert_eq!(deque.retain(|n| n % 2 == 1), 2);
        assert_eq!(deque.len(), 3);
    }
}
