//! Coalescing debounce for watch subscriptions.
//!
//! Each subscription owns one debouncer. Incoming batches merge into the
//! pending set and push the deadline out by the full window; a single
//! waiter fires once the window elapses with no further events, so a burst
//! of filesystem events collapses into one downstream invocation.

use std::path::PathBuf;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Delay used to collapse a burst of filesystem events into one downstream
/// callback invocation.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(350);

enum State {
    Idle,
    Pending { deadline: Instant, files: Vec<PathBuf> },
}

/// A per-subscription debounce state machine: idle, or pending with a
/// deadline and the files accumulated so far.
pub struct Debouncer {
    state: Mutex<State>,
    signal: Condvar,
    window: Duration,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            state: Mutex::new(State::Idle),
            signal: Condvar::new(),
            window,
        }
    }

    /// Feeds a batch of changed files: merges them into the pending set
    /// (deduplicating) and resets the deadline to a full window from now.
    pub fn extend(&self, batch: &[PathBuf]) {
        let mut state = self.lock();
        let deadline = Instant::now() + self.window;

        match &mut *state {
            State::Pending { deadline: pending, files } => {
                *pending = deadline;
                for path in batch {
                    if !files.contains(path) {
                        files.push(path.clone());
                    }
                }
            }
            State::Idle => {
                *state = State::Pending { deadline, files: batch.to_vec() };
            }
        }

        self.signal.notify_all();
    }

    /// Blocks until a pending deadline elapses untouched, then drains the
    /// accumulated files and returns to idle.
    pub fn next_batch(&self) -> Vec<PathBuf> {
        let mut state = self.lock();

        loop {
            let deadline = match &*state {
                State::Idle => None,
                State::Pending { deadline, .. } => Some(*deadline),
            };

            match deadline {
                None => {
                    state = self
                        .signal
                        .wait(state)
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                }
                Some(deadline) => {
                    let now = Instant::now();

                    if now >= deadline {
                        if let State::Pending { files, .. } =
                            std::mem::replace(&mut *state, State::Idle)
                        {
                            return files;
                        }
                        continue;
                    }

                    let (guard, _) = self
                        .signal
                        .wait_timeout(state, deadline - now)
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                    state = guard;
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_burst_coalesces_into_one_batch() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(30)));

        let feeder = Arc::clone(&debouncer);
        let handle = thread::spawn(move || {
            for _ in 0..5 {
                feeder.extend(&paths(&["a.rs"]));
                feeder.extend(&paths(&["b.rs", "a.rs"]));
                thread::sleep(Duration::from_millis(2));
            }
        });

        let batch = debouncer.next_batch();
        handle.join().unwrap();

        assert_eq!(batch, paths(&["a.rs", "b.rs"]));
    }

    #[test]
    fn test_returns_to_idle_after_draining() {
        let debouncer = Debouncer::new(Duration::from_millis(5));

        debouncer.extend(&paths(&["first.rs"]));
        assert_eq!(debouncer.next_batch(), paths(&["first.rs"]));

        debouncer.extend(&paths(&["second.rs"]));
        assert_eq!(debouncer.next_batch(), paths(&["second.rs"]));
    }

    #[test]
    fn test_events_reset_the_deadline() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(40)));

        let feeder = Arc::clone(&debouncer);
        let start = Instant::now();
        let handle = thread::spawn(move || {
            for _ in 0..3 {
                feeder.extend(&paths(&["x.rs"]));
                thread::sleep(Duration::from_millis(15));
            }
        });

        let batch = debouncer.next_batch();
        handle.join().unwrap();

        // Three events 15ms apart keep pushing a 40ms deadline out.
        assert!(start.elapsed() >= Duration::from_millis(60));
        assert_eq!(batch, paths(&["x.rs"]));
    }
}
