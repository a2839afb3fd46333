use crate::storage::{self, KeyValueStore};
use crate::tracking::{EventSink, TrackingEvent};

/// Thresholds that fire a `spots_alert`, highest first.
const ALERT_THRESHOLDS: [u32; 3] = [20, 10, 5];

/// Synthetic scarcity counter. Decays by one per tick down to the floor and
/// persists every decrement, so a reload resumes where the decay left off.
/// Threshold alerts are edge-triggered: each fires at most once per session,
/// no matter how many ticks sit at or below the threshold.
pub struct SpotsCounter {
    floor: u32,
    fired: [bool; ALERT_THRESHOLDS.len()],
}

impl SpotsCounter {
    pub fn new(floor: u32) -> Self {
        SpotsCounter {
            floor,
            fired: [false; ALERT_THRESHOLDS.len()],
        }
    }

    /// One decay step. Returns the counter value after the tick.
    pub fn tick(&mut self, store: &dyn KeyValueStore, sink: &dyn EventSink) -> u32 {
        let current = storage::spots_left(store);
        if current <= self.floor {
            return current;
        }
        let next = current - 1;
        storage::set_spots_left(store, next);
        for (index, &threshold) in ALERT_THRESHOLDS.iter().enumerate() {
            if next == threshold && !self.fired[index] {
                self.fired[index] = true;
                sink.push(TrackingEvent::spots_alert(next));
            }
        }
        next
    }
}
