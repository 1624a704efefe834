// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hall size persistence.
//!
//! Hall dimensions live in a per-event document owned by an external store.
//! Loading is debounced and runs on a background thread; saving is fire and
//! forget. Neither ever blocks the editor: failures are logged and the plan
//! falls back to the default hall.

use crate::models::document::HallSize;
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Remote per-event storage of hall dimensions.
pub trait HallStore: Send + Sync {
    /// `Ok(None)` when the event has no stored hall yet.
    fn load_hall(&self, event_id: &str) -> Result<Option<HallSize>>;

    /// Merge the hall size into the event document (last writer wins).
    fn save_hall(&self, event_id: &str, size: HallSize) -> Result<()>;
}

/// One JSON document per event under a directory.
///
/// Saving rewrites only the `hall` key; any other keys in the document are
/// preserved.
#[derive(Debug, Clone)]
pub struct FileHallStore {
    dir: PathBuf,
}

impl FileHallStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, event_id: &str) -> PathBuf {
        let name: String = event_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }

    fn read_document(path: &Path) -> Result<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match serde_json::from_str(&text)? {
            Value::Object(map) => Ok(map),
            _ => Err(anyhow!("{} is not a JSON object", path.display())),
        }
    }
}

impl HallStore for FileHallStore {
    fn load_hall(&self, event_id: &str) -> Result<Option<HallSize>> {
        let document = Self::read_document(&self.document_path(event_id))?;
        match document.get("hall") {
            Some(hall) => Ok(Some(serde_json::from_value(hall.clone())?)),
            None => Ok(None),
        }
    }

    fn save_hall(&self, event_id: &str, size: HallSize) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.document_path(event_id);
        let mut document = Self::read_document(&path)?;
        document.insert("hall".to_string(), serde_json::to_value(size)?);

        // One scratch file per write; overlapping saves each persist their own.
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("Failed to create scratch file in {}", self.dir.display()))?;
        serde_json::to_writer_pretty(&mut tmp, &Value::Object(document))?;
        tmp.flush()?;
        tmp.persist(&path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}

/// In-process store for offline sessions.
#[derive(Debug, Default)]
pub struct MemoryHallStore {
    halls: Mutex<HashMap<String, HallSize>>,
}

impl HallStore for MemoryHallStore {
    fn load_hall(&self, event_id: &str) -> Result<Option<HallSize>> {
        let halls = self.halls.lock().map_err(|_| anyhow!("hall store lock poisoned"))?;
        Ok(halls.get(event_id).copied())
    }

    fn save_hall(&self, event_id: &str, size: HallSize) -> Result<()> {
        let mut halls = self.halls.lock().map_err(|_| anyhow!("hall store lock poisoned"))?;
        halls.insert(event_id.to_string(), size);
        Ok(())
    }
}

/// Outcome of a background hall load.
#[derive(Debug, Clone, PartialEq)]
pub enum HallLoad {
    Loaded(HallSize),
    Missing,
    Failed(String),
}

impl HallLoad {
    /// The loaded size if it is drawable, otherwise `default`.
    pub fn hall_or(&self, default: HallSize) -> HallSize {
        match self {
            HallLoad::Loaded(size) if size.is_usable() => *size,
            _ => default,
        }
    }
}

/// Debounced background loader for hall dimensions.
///
/// Every `request` supersedes the previous one. A request only hits the
/// store if no newer request arrived during the debounce delay, and results
/// are dropped once the loader is cancelled or dropped.
pub struct HallLoader {
    store: Arc<dyn HallStore>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
    sender: Sender<(u64, HallLoad)>,
    receiver: Receiver<(u64, HallLoad)>,
}

impl HallLoader {
    pub fn new(store: Arc<dyn HallStore>, debounce: Duration) -> Self {
        let (sender, receiver) = channel();
        Self {
            store,
            debounce,
            generation: Arc::new(AtomicU64::new(0)),
            cancelled: Arc::new(AtomicBool::new(false)),
            sender,
            receiver,
        }
    }

    /// Schedule a load of `event_id` after the debounce delay.
    pub fn request(&self, event_id: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let cancelled = Arc::clone(&self.cancelled);
        let store = Arc::clone(&self.store);
        let sender = self.sender.clone();
        let event_id = event_id.to_string();
        let debounce = self.debounce;

        // Spawn background thread for loading
        std::thread::spawn(move || {
            std::thread::sleep(debounce);
            if cancelled.load(Ordering::SeqCst) || current.load(Ordering::SeqCst) != generation {
                log::debug!("Hall load for {} superseded", event_id);
                return;
            }

            let outcome = match store.load_hall(&event_id) {
                Ok(Some(size)) => {
                    log::info!("Loaded hall for {}: {}x{}", event_id, size.width, size.height);
                    HallLoad::Loaded(size)
                }
                Ok(None) => {
                    log::info!("No stored hall for {}", event_id);
                    HallLoad::Missing
                }
                Err(e) => {
                    log::error!("Failed to load hall for {}: {:#}", event_id, e);
                    HallLoad::Failed(e.to_string())
                }
            };

            if !cancelled.load(Ordering::SeqCst) {
                let _ = sender.send((generation, outcome));
            }
        });
    }

    /// Latest result of the newest request, if it has arrived.
    pub fn poll(&self) -> Option<HallLoad> {
        let mut latest = None;
        while let Ok((generation, outcome)) = self.receiver.try_recv() {
            if generation == self.generation.load(Ordering::SeqCst) {
                latest = Some(outcome);
            }
        }
        if self.is_cancelled() {
            return None;
        }
        latest
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for HallLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Save on a background thread; failures are only logged.
pub fn save_hall_in_background(
    store: Arc<dyn HallStore>,
    event_id: String,
    size: HallSize,
) -> JoinHandle<()> {
    std::thread::spawn(move || match store.save_hall(&event_id, size) {
        Ok(()) => log::info!("Saved hall for {}: {}x{}", event_id, size.width, size.height),
        Err(e) => log::error!("Failed to save hall for {}: {:#}", event_id, e),
    })
}
