//! Fan-out of one OS filesystem-event stream to many subscribers.
//!
//! One OS-level watch handle is expensive and often rate-limited per
//! process, so a single recursive stream is multiplexed to every logical
//! watcher. The dispatcher applies no filtering or debouncing; each
//! subscriber layers its own on top.

use crate::error::WatchResult;
use crate::ui;
use crate::utils::normalize_path;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::env;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex, MutexGuard};
use std::thread;

/// The kind of filesystem change carried by an event batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Any,
    Access,
    Create,
    Modify,
    Remove,
}

impl From<&EventKind> for ChangeKind {
    fn from(kind: &EventKind) -> Self {
        match kind {
            EventKind::Access(_) => ChangeKind::Access,
            EventKind::Create(_) => ChangeKind::Create,
            EventKind::Modify(_) => ChangeKind::Modify,
            EventKind::Remove(_) => ChangeKind::Remove,
            EventKind::Any | EventKind::Other => ChangeKind::Any,
        }
    }
}

type Subscriber = Arc<dyn Fn(&[PathBuf], ChangeKind) + Send + Sync>;

struct Shared {
    subscribers: Mutex<Vec<Subscriber>>,
    root: PathBuf,
}

impl Shared {
    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<Subscriber>> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn deliver(&self, paths: &[PathBuf], kind: ChangeKind) {
        let normalized: Vec<PathBuf> = paths
            .iter()
            .map(|path| normalize_path(path, &self.root))
            .collect();

        // Snapshot under the lock, invoke outside it. A subscriber added
        // during delivery sees the next batch.
        let snapshot: Vec<Subscriber> = self.lock_subscribers().clone();
        for subscriber in snapshot {
            subscriber(&normalized, kind);
        }
    }
}

/// Multiplexes a single recursive filesystem watch to every subscriber.
///
/// The dispatcher is idle until the first subscription, which starts the
/// OS stream; stream and subscriptions then live until process exit. There
/// is no unsubscribe.
pub struct WatchDispatcher {
    shared: Arc<Shared>,
    autostart: bool,
}

impl WatchDispatcher {
    /// A dispatcher rooted at the working directory; the OS watch starts
    /// lazily on the first subscription.
    pub fn new() -> Self {
        Self::rooted(env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// A dispatcher rooted at a specific directory.
    pub fn rooted(root: PathBuf) -> Self {
        WatchDispatcher {
            shared: Arc::new(Shared { subscribers: Mutex::new(Vec::new()), root }),
            autostart: true,
        }
    }

    /// A dispatcher that never starts an OS stream. Batches arrive only
    /// through [`dispatch`](Self::dispatch); embedders that need bounded
    /// lifetimes feed events themselves.
    pub fn detached() -> Self {
        WatchDispatcher {
            shared: Arc::new(Shared {
                subscribers: Mutex::new(Vec::new()),
                root: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            }),
            autostart: false,
        }
    }

    /// Registers a callback for every future event batch. The first
    /// subscription starts the underlying recursive watch.
    pub fn subscribe<F>(&self, callback: F) -> WatchResult<()>
    where
        F: Fn(&[PathBuf], ChangeKind) + Send + Sync + 'static,
    {
        let first = {
            let mut subscribers = self.shared.lock_subscribers();
            subscribers.push(Arc::new(callback));
            subscribers.len() == 1
        };

        if first && self.autostart {
            self.start()?;
        }

        Ok(())
    }

    /// Delivers one batch to every subscriber in registration order, paths
    /// normalized relative to the dispatcher root.
    pub fn dispatch(&self, paths: &[PathBuf], kind: ChangeKind) {
        self.shared.deliver(paths, kind);
    }

    fn start(&self) -> WatchResult<()> {
        let (tx, rx) = mpsc::channel::<notify::Result<Event>>();

        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(&self.shared.root, RecursiveMode::Recursive)?;

        let shared = Arc::clone(&self.shared);
        thread::spawn(move || {
            // The watcher moves into the reader thread: the OS handle lives
            // exactly as long as the stream is consumed.
            let _watcher = watcher;

            for event in rx {
                match event {
                    Ok(event) => shared.deliver(&event.paths, ChangeKind::from(&event.kind)),
                    Err(error) => ui::error(&format!("watch stream error: {}", error)),
                }
            }
        });

        Ok(())
    }
}

impl Default for WatchDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
