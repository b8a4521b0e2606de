//! Settings file watcher for hot-reloading interaction settings.
//!
//! Hosts poll the watcher from their event loop and reload
//! [`crate::settings::SelectionSettings`] into each column when it reports a change.

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

pub use crate::settings::default_settings_path;

/// Change to the watched settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    // Held so the OS watch stays registered.
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl SettingsWatcher {
    /// Watch the directory containing `path` and filter events for the file.
    pub fn new(path: PathBuf) -> Result<Self> {
        let (tx, rx) = channel::<notify::Result<Event>>();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })
        .context("Failed to create settings watcher")?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;

        tracing::debug!(path = %path.display(), "Watching calendar settings");
        Ok(Self {
            path,
            _watcher: watcher,
            rx,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the most significant pending event for the settings file, if any.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !event.paths.iter().any(|p| p == &self.path) {
                        continue;
                    }
                    let mapped = match event.kind {
                        EventKind::Create(_) => Some(SettingsEvent::Created),
                        EventKind::Modify(_) => Some(SettingsEvent::Modified),
                        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
                        _ => None,
                    };
                    if mapped.is_some() {
                        latest = mapped;
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error("Settings watcher disconnected".to_string()));
                }
            }
        }
        latest
    }
}
