use crate::storage::{KeyValueStore, TIMER_START_KEY};

/// Remaining seconds in the urgency window. The first call in a browser
/// persists `now_ms` as the window start and returns the full window; every
/// later call (including after reloads) derives the remainder from that
/// persisted start, so reloading never resets the deadline.
pub fn remaining_seconds(store: &dyn KeyValueStore, now_ms: u64, window_seconds: u32) -> u32 {
    if let Some(start_ms) = store.get(TIMER_START_KEY).and_then(|raw| raw.parse::<u64>().ok()) {
        let elapsed = now_ms.saturating_sub(start_ms) / 1000;
        return u64::from(window_seconds).saturating_sub(elapsed) as u32;
    }
    store.set(TIMER_START_KEY, &now_ms.to_string());
    window_seconds
}

/// `M:SS` display: minutes un-padded, seconds zero-padded.
pub fn format_mmss(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fake::MemoryStore;

    const WINDOW: u32 = 2820;

    #[test]
    fn first_call_returns_full_window_and_persists_start() {
        let store = MemoryStore::new();
        assert_eq!(remaining_seconds(&store, 1_000_000, WINDOW), WINDOW);
        assert_eq!(store.get(TIMER_START_KEY).as_deref(), Some("1000000"));
    }

    #[test]
    fn remaining_is_non_increasing_across_reloads() {
        let store = MemoryStore::new();
        let mut previous = remaining_seconds(&store, 0, WINDOW);
        // Each read simulates a fresh page load sharing the same store.
        for now_ms in [15_000, 15_000, 60_000, 600_000, 2_820_000, 9_999_999] {
            let remaining = remaining_seconds(&store, now_ms, WINDOW);
            assert!(remaining <= previous, "remaining grew after reload");
            previous = remaining;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn elapsed_time_is_floored_to_whole_seconds() {
        let store = MemoryStore::new();
        remaining_seconds(&store, 0, WINDOW);
        assert_eq!(remaining_seconds(&store, 1999, WINDOW), WINDOW - 1);
    }

    #[test]
    fn exact_window_exhaustion_reaches_zero_not_negative() {
        let store = MemoryStore::new();
        remaining_seconds(&store, 0, WINDOW);
        assert_eq!(remaining_seconds(&store, u64::from(WINDOW) * 1000, WINDOW), 0);
        assert_eq!(remaining_seconds(&store, u64::from(WINDOW) * 1000 + 1, WINDOW), 0);
        assert_eq!(format_mmss(0), "0:00");
    }

    #[test]
    fn clock_rewind_does_not_extend_the_window() {
        let store = MemoryStore::new();
        remaining_seconds(&store, 50_000, WINDOW);
        assert_eq!(remaining_seconds(&store, 10_000, WINDOW), WINDOW);
    }

    #[test]
    fn corrupted_start_restarts_the_window() {
        let store = MemoryStore::new();
        store.set(TIMER_START_KEY, "not-a-number");
        assert_eq!(remaining_seconds(&store, 42_000, WINDOW), WINDOW);
        assert_eq!(store.get(TIMER_START_KEY).as_deref(), Some("42000"));
    }

    #[test]
    fn format_is_unpadded_minutes_padded_seconds() {
        assert_eq!(format_mmss(2820), "47:00");
        assert_eq!(format_mmss(605), "10:05");
        assert_eq!(format_mmss(59), "0:59");
        assert_eq!(format_mmss(9), "0:09");
    }
}
