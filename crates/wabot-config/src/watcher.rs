//! Self-reload watcher for the override file.

use crate::manager::ConfigManager;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;
use tracing::warn;
use wabot_common::{Result, WabotError};

enum Msg {
    Fs(notify::Result<Event>),
    Shutdown,
}

/// Watches the manager's override file and republishes the table on change.
///
/// The watcher alternates between two states. Active: armed on the override
/// file's parent directory, waiting for events. Reloading: entered when a
/// modification touches the backing file; the watch is disarmed, the manager
/// rebuilds and swaps the table, queued events are discarded, and the watch
/// is re-armed. The cycle repeats until the handle is dropped, which shuts
/// the worker thread down.
///
/// Single-process only; nothing here coordinates reloads across instances
/// sharing the same override file.
pub struct ConfigWatcher {
    control: Sender<Msg>,
    handle: Option<JoinHandle<()>>,
}

impl ConfigWatcher {
    /// Arm a watch for `manager`'s override file and start the reload loop.
    ///
    /// The parent directory is watched rather than the file itself, so
    /// editors that replace the file (and even deletion followed by
    /// re-creation) keep triggering events.
    pub fn spawn(manager: Arc<ConfigManager>) -> Result<Self> {
        let path = manager.path().to_path_buf();
        let dir = watch_dir(&path);

        let (tx, rx) = mpsc::channel();
        let fs_tx = tx.clone();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = fs_tx.send(Msg::Fs(res));
        })
        .map_err(|e| WabotError::watch_with_source("cannot create file watcher", e))?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                WabotError::watch_with_source(format!("cannot watch {}", dir.display()), e)
            })?;

        let handle = std::thread::Builder::new()
            .name("wabot-config-watch".into())
            .spawn(move || watch_loop(watcher, &rx, &manager, &path, &dir))?;

        Ok(Self {
            control: tx,
            handle: Some(handle),
        })
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        let _ = self.control.send(Msg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn watch_loop(
    mut watcher: RecommendedWatcher,
    rx: &Receiver<Msg>,
    manager: &ConfigManager,
    path: &Path,
    dir: &Path,
) {
    while let Ok(msg) = rx.recv() {
        match msg {
            Msg::Shutdown => break,
            Msg::Fs(Err(err)) => warn!(error = %err, "file watch error"),
            Msg::Fs(Ok(event)) => {
                if !touches_backing_file(&event, path) {
                    continue;
                }
                // Reloading: disarm so writes observed while rebuilding
                // cannot re-enter the cycle.
                if let Err(err) = watcher.unwatch(dir) {
                    warn!(error = %err, "could not disarm watch");
                }
                manager.reload();
                if discard_queued(rx) {
                    break;
                }
                if let Err(err) = watcher.watch(dir, RecursiveMode::NonRecursive) {
                    warn!(error = %err, dir = %dir.display(), "could not re-arm watch");
                }
            }
        }
    }
}

/// Drop events that queued up during a reload. Returns true on shutdown.
fn discard_queued(rx: &Receiver<Msg>) -> bool {
    loop {
        match rx.try_recv() {
            Ok(Msg::Shutdown) => return true,
            Ok(Msg::Fs(_)) => continue,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => return true,
        }
    }
}

fn touches_backing_file(event: &Event, path: &Path) -> bool {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
        return false;
    }
    let Some(name) = path.file_name() else {
        return false;
    };
    event.paths.iter().any(|p| p.file_name() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_modify_of_backing_file_matches() {
        let e = event(
            EventKind::Modify(ModifyKind::Data(DataChange::Any)),
            "/tmp/wabot/.env",
        );
        assert!(touches_backing_file(&e, Path::new(".env")));
    }

    #[test]
    fn test_create_counts_as_change() {
        let e = event(EventKind::Create(CreateKind::File), "/tmp/wabot/.env");
        assert!(touches_backing_file(&e, Path::new("/tmp/wabot/.env")));
    }

    #[test]
    fn test_other_files_are_ignored() {
        let e = event(
            EventKind::Modify(ModifyKind::Data(DataChange::Any)),
            "/tmp/wabot/notes.txt",
        );
        assert!(!touches_backing_file(&e, Path::new("/tmp/wabot/.env")));
    }

    #[test]
    fn test_removal_is_ignored() {
        let e = event(EventKind::Remove(RemoveKind::File), "/tmp/wabot/.env");
        assert!(!touches_backing_file(&e, Path::new("/tmp/wabot/.env")));
    }

    #[test]
    fn test_watch_dir_falls_back_to_cwd() {
        assert_eq!(watch_dir(Path::new(".env")), PathBuf::from("."));
        assert_eq!(watch_dir(Path::new("/tmp/wabot/.env")), PathBuf::from("/tmp/wabot"));
    }
}
