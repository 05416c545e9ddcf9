//! Bounded position history drawn behind each planet

use std::collections::VecDeque;

use crate::simulation::vector::NVec2;

/// FIFO of recent render positions, oldest first, newest last.
///
/// Once `capacity` entries are stored every push evicts the oldest one, so
/// the length never exceeds the capacity and never drops below it again.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `position`, evicting the oldest entry when full
    pub fn push(&mut self, position: NVec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &NVec2> + ExactSizeIterator + '_ {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<NVec2> {
        self.points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> NVec2 {
        NVec2::new(i as f64, -(i as f64))
    }

    #[test]
    fn grows_until_capacity() {
        let mut trail = TrailBuffer::new(70);
        for i in 0..69 {
            trail.push(p(i));
        }
        assert_eq!(trail.len(), 69);
        assert_eq!(trail.oldest(), Some(&p(0)));
        assert_eq!(trail.newest(), Some(&p(68)));
    }

    #[test]
    fn seventy_first_push_evicts_the_first() {
        let mut trail = TrailBuffer::new(70);
        for i in 1..=71 {
            trail.push(p(i));
        }
        assert_eq!(trail.len(), 70);
        let kept = trail.to_vec();
        let expected: Vec<NVec2> = (2..=71).map(p).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn stays_at_capacity() {
        let mut trail = TrailBuffer::new(5);
        for i in 0..1000 {
            trail.push(p(i));
            assert!(trail.len() <= 5);
        }
        assert_eq!(trail.len(), 5);
        assert_eq!(trail.oldest(), Some(&p(995)));
    }
}
