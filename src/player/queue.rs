use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

use super::properties::PlayableEntry;

/// The local player's music queue.
pub trait LocalQueue: Send + Sync {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&self);

    /// Place `entry` at `position`, replacing what is there. Positions past the
    /// end append.
    fn put(&self, position: usize, entry: PlayableEntry);

    /// Position of the item that is playing, if any.
    fn position(&self) -> Option<usize>;
}

/// In-memory queue for hosts without a native queue object
pub struct MirrorQueue {
    items: RwLock<Vec<PlayableEntry>>,
    current_index: RwLock<Option<usize>>,
}

impl MirrorQueue {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn get_items(&self) -> Vec<PlayableEntry> {
        self.items.read().clone()
    }

    pub fn get_item(&self, index: usize) -> Option<PlayableEntry> {
        self.items.read().get(index).cloned()
    }

    pub fn get_stream_urls(&self) -> Vec<String> {
        self.items
            .read()
            .iter()
            .map(|item| item.stream_url.clone())
            .collect()
    }

    pub fn get_current_item(&self) -> Option<PlayableEntry> {
        let index = *self.current_index.read();
        let items = self.items.read();
        index.and_then(|i| items.get(i).cloned())
    }

    /// Set the playing position
    pub fn set_current_index(&self, index: usize) -> bool {
        let items = self.items.read();
        if index >= items.len() {
            debug!("Cannot set queue position to {}: out of bounds", index);
            return false;
        }
        *self.current_index.write() = Some(index);
        true
    }
}

impl LocalQueue for MirrorQueue {
    fn len(&self) -> usize {
        self.items.read().len()
    }

    fn clear(&self) {
        info!("Clearing local queue");
        self.items.write().clear();
        *self.current_index.write() = None;
    }

    fn put(&self, position: usize, entry: PlayableEntry) {
        let mut items = self.items.write();
        if position < items.len() {
            items[position] = entry;
        } else {
            if position > items.len() {
                debug!(
                    "Queue position {} past the end ({}), appending",
                    position,
                    items.len()
                );
            }
            items.push(entry);
        }
    }

    fn position(&self) -> Option<usize> {
        *self.current_index.read()
    }
}

impl Default for MirrorQueue {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            current_index: RwLock::new(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> PlayableEntry {
        PlayableEntry::new(name, format!("http://127.0.0.1:1/track/{}", name))
    }

    #[test]
    fn test_put_appends_and_overwrites() {
        let queue = MirrorQueue::new();
        queue.put(0, entry("a"));
        queue.put(1, entry("b"));
        assert_eq!(queue.len(), 2);

        queue.put(0, entry("c"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.get_items()[0].label, "c");
        assert_eq!(queue.get_items()[1].label, "b");
    }

    #[test]
    fn test_put_past_end_appends() {
        let queue = MirrorQueue::new();
        queue.put(5, entry("a"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get_item(0).unwrap().label, "a");
    }

    #[test]
    fn test_current_index() {
        let queue = MirrorQueue::new();
        queue.put(0, entry("a"));
        queue.put(1, entry("b"));

        assert_eq!(queue.position(), None);
        assert!(queue.set_current_index(1));
        assert_eq!(queue.get_current_item().unwrap().label, "b");
        assert!(!queue.set_current_index(2));
        assert_eq!(queue.position(), Some(1));
    }

    #[test]
    fn test_clear() {
        let queue = MirrorQueue::new();
        queue.put(0, entry("a"));
        queue.set_current_index(0);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.position(), None);
    }
}
