use chrono::{DateTime, Local};
use log::info;

/// Snapshot handed to a progress observer when the search begins exploring
/// a new top-level starting integer.
#[derive(Debug, Clone)]
pub struct StartEvent {
    /// The integer the next batch of paths starts from.
    pub start: u32,
    /// Domain size n of the running computation.
    pub domain: u32,
    /// Paths counted before this start's subtree is explored.
    pub found_so_far: u64,
    /// Wall-clock time at which the subtree was entered.
    pub at: DateTime<Local>,
}

/// Capability for watching search progress.
///
/// Invoked synchronously once per top-level starting integer. Observers
/// receive the event by reference and may only mutate themselves; the
/// search result does not depend on what they do.
pub trait ProgressObserver {
    fn on_start(&mut self, _event: &StartEvent) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Observer that logs each start at info level and keeps the transcript,
/// so longer computations can be tracked while they run and written out
/// afterwards (see [`crate::report::write_progress_csv`]).
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    events: Vec<StartEvent>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, in the order they were observed.
    pub fn events(&self) -> &[StartEvent] {
        &self.events
    }
}

impl ProgressObserver for ProgressLog {
    fn on_start(&mut self, event: &StartEvent) {
        info!(
            "Starting number: {}/{}  {}  ({} permutations found so far)",
            event.start,
            event.domain,
            event.at.format("%H:%M:%S"),
            event.found_so_far
        );
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: u32, found: u64) -> StartEvent {
        StartEvent {
            start,
            domain: 8,
            found_so_far: found,
            at: Local::now(),
        }
    }

    #[test]
    fn test_progress_log_records_in_order() {
        let mut log = ProgressLog::new();
        log.on_start(&event(1, 0));
        log.on_start(&event(2, 0));
        log.on_start(&event(3, 1));

        let starts: Vec<u32> = log.events().iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![1, 2, 3]);
        assert_eq!(log.events()[2].found_so_far, 1);
    }

    #[test]
    fn test_no_progress_accepts_events() {
        let mut silent = NoProgress;
        silent.on_start(&event(5, 0));
    }
}
