//! Deferred one-shot actions keyed by simulation time.
//!
//! Actions are drained at the start of a tick against the session clock, so
//! a paused session never fires them and tests need no real waiting.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    RespawnPickup,
    ClearMuzzleFlash,
    ClearDamageFlash,
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    at: f32,
    seq: u64,
    action: DeferredAction,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    // Reversed so the max-heap pops the earliest entry; ties keep insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other.at.total_cmp(&self.at).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: f32, action: DeferredAction) {
        self.heap.push(Entry { at, seq: self.seq, action });
        self.seq += 1;
    }

    /// Pops every action due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f32) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        while let Some(entry) = self.heap.peek() {
            if entry.at > now {
                break;
            }
            if let Some(entry) = self.heap.pop() {
                due.push(entry.action);
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
