//! Scheduled-event queue replacing the host engine's timer/tween callbacks.
//!
//! Entries are explicit (fire-tick, action) pairs held in a min-heap and
//! drained once per tick by the engine. Repeating entries re-arm themselves
//! on fire. Every entry carries a `TimerId` so phase changes and teardown
//! can cancel in-flight timers before they touch a frozen or freed run.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use arcade_core::enums::Phase;

/// Handle to a scheduled entry, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// What to do when an entry fires. Interpreted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Inject one hostile entity per the current phase's spawn table.
    SpawnHostile,
    /// Advance the run to the given phase.
    AdvancePhase(Phase),
}

#[derive(Debug, Clone)]
struct Entry {
    fire_tick: u64,
    /// Insertion sequence; breaks ties FIFO among entries due together.
    seq: u64,
    id: TimerId,
    action: TimerAction,
    /// Re-arm interval in ticks. None = one-shot.
    repeat_every: Option<u64>,
}

impl Entry {
    fn key(&self) -> (u64, u64) {
        (self.fire_tick, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Cooperative timer queue drained once per tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<Reverse<Entry>>,
    cancelled: HashSet<TimerId>,
    next_id: u64,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot entry.
    pub fn schedule_once(&mut self, fire_tick: u64, action: TimerAction) -> TimerId {
        self.push(fire_tick, action, None)
    }

    /// Schedule a repeating entry that first fires at `fire_tick` and
    /// re-arms every `interval` ticks thereafter.
    pub fn schedule_repeating(
        &mut self,
        fire_tick: u64,
        interval: u64,
        action: TimerAction,
    ) -> TimerId {
        self.push(fire_tick, action, Some(interval.max(1)))
    }

    /// Cancel a scheduled entry. Cancelling an already-fired or unknown
    /// id is a no-op.
    pub fn cancel(&mut self, id: TimerId) {
        self.cancelled.insert(id);
    }

    /// Cancel everything. Used on restart, on terminal transitions, and
    /// when a game instance is torn down.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.cancelled.clear();
    }

    /// Number of live (non-cancelled) entries.
    pub fn pending(&self) -> usize {
        self.heap
            .iter()
            .filter(|Reverse(e)| !self.cancelled.contains(&e.id))
            .count()
    }

    /// Pop every entry due at `tick` into `out`, in (fire-tick, insertion)
    /// order, re-arming repeating entries.
    pub fn drain_due(&mut self, tick: u64, out: &mut Vec<TimerAction>) {
        while let Some(Reverse(entry)) = self.heap.peek() {
            if entry.fire_tick > tick {
                break;
            }
            let entry = match self.heap.pop() {
                Some(Reverse(e)) => e,
                None => break,
            };
            if self.cancelled.remove(&entry.id) {
                continue;
            }
            out.push(entry.action);
            if let Some(interval) = entry.repeat_every {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.heap.push(Reverse(Entry {
                    fire_tick: entry.fire_tick + interval,
                    seq,
                    id: entry.id,
                    action: entry.action,
                    repeat_every: entry.repeat_every,
                }));
            }
        }
    }

    fn push(&mut self, fire_tick: u64, action: TimerAction, repeat_every: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            fire_tick,
            seq,
            id,
            action,
            repeat_every,
        }));
        id
    }
}
