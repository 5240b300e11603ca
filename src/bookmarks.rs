// src/bookmarks.rs

/// Scheme ids the user has bookmarked during this session.
///
/// Kept in the order they were added so the bookmark list renders stably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    ids: Vec<u32>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether it is now bookmarked.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&b| b == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
