//! Ring storage, insertion, navigation and removal

use crate::model::Track;

/// Which way to step through the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// One ring entry. `next` and `prev` are slot indices into the arena.
#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) track: Track,
    pub(super) next: usize,
    pub(super) prev: usize,
}

/// Playlist container with O(1) next/previous navigation that wraps at both ends
#[derive(Debug, Clone, Default)]
pub struct PlaylistRing {
    /// Node arena; `None` marks a free slot
    pub(super) slots: Vec<Option<Node>>,

    /// Free slots available for reuse
    pub(super) free: Vec<usize>,

    /// First-inserted node still present
    pub(super) head: Option<usize>,

    /// Currently selected node
    pub(super) current: Option<usize>,

    /// Number of live nodes
    pub(super) len: usize,

    /// Whether the ring order has been randomised since the last restore
    pub(super) shuffled: bool,

    /// Order to go back to on restore; frozen while `shuffled` is set
    pub(super) original_order: Vec<Track>,
}

impl PlaylistRing {
    /// Create an empty ring
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track at the ring's tail (just before `head`).
    ///
    /// The first track into an empty ring becomes both head and current.
    pub fn insert(&mut self, track: Track) {
        let idx = self.alloc(track);

        match self.head {
            None => {
                self.head = Some(idx);
                self.current = Some(idx);
            }
            Some(head) => {
                let tail = self.node(head).prev;
                {
                    let node = self.node_mut(idx);
                    node.prev = tail;
                    node.next = head;
                }
                self.node_mut(tail).next = idx;
                self.node_mut(head).prev = idx;
            }
        }

        self.len += 1;
        if !self.shuffled {
            self.refresh_snapshot();
        }
    }

    /// Step the current selection one node and return the new current track.
    ///
    /// Returns `None` only when the ring is empty.
    pub fn advance(&mut self, direction: Direction) -> Option<&Track> {
        let current = self.current?;
        let node = self.node(current);
        let target = match direction {
            Direction::Forward => node.next,
            Direction::Backward => node.prev,
        };
        self.current = Some(target);
        Some(&self.node(target).track)
    }

    /// Make the first track with `id` (in ring order from head) current.
    ///
    /// On a miss the current selection is left alone.
    pub fn select_by_id(&mut self, id: &str) -> Option<&Track> {
        let idx = self.find(id)?;
        self.current = Some(idx);
        Some(&self.node(idx).track)
    }

    /// Unlink and drop the first track with `id`. Returns `false` if absent.
    ///
    /// When the removed node was head or current, that reference moves to the
    /// removed node's successor.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.find(id) else {
            return false;
        };

        if self.len == 1 {
            log::debug!("Removing last track {}, ring is now empty", id);
            self.clear();
            if !self.shuffled {
                self.original_order.clear();
            }
            return true;
        }

        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;

        if self.head == Some(idx) {
            self.head = Some(next);
        }
        if self.current == Some(idx) {
            self.current = Some(next);
        }

        self.slots[idx] = None;
        self.free.push(idx);
        self.len -= 1;

        log::debug!("Removed track {} ({} left)", id, self.len);

        if !self.shuffled {
            self.refresh_snapshot();
        }
        true
    }

    /// Drop every node. The shuffle flag and restore snapshot are untouched.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.current = None;
        self.len = 0;
    }

    /// Clear the ring and forget the shuffle state and restore snapshot
    pub fn reset(&mut self) {
        self.clear();
        self.shuffled = false;
        self.original_order.clear();
    }

    /// The currently selected track
    pub fn current(&self) -> Option<&Track> {
        self.current.map(|idx| &self.node(idx).track)
    }

    /// The first track in ring order
    pub fn head(&self) -> Option<&Track> {
        self.head.map(|idx| &self.node(idx).track)
    }

    /// Whether the current track is the last one before wrapping back to head
    pub fn at_tail(&self) -> bool {
        match (self.current, self.head) {
            (Some(current), Some(head)) => self.node(current).next == head,
            _ => false,
        }
    }

    /// Number of tracks in the ring
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the ring holds no tracks
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the ring is in shuffled order
    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// The order [`PlaylistRing::restore_order`] goes back to
    pub fn original_order(&self) -> &[Track] {
        &self.original_order
    }

    /// Whether the first track with `id` (the one `remove` would drop) is current
    pub fn is_current(&self, id: &str) -> bool {
        self.current.is_some() && self.find(id) == self.current
    }

    /// Check whether a track with `id` is present
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Iterate the tracks in ring order, starting at head
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ring: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Linear search from head, at most `len` steps
    pub(super) fn find(&self, id: &str) -> Option<usize> {
        let mut cursor = self.head?;
        for _ in 0..self.len {
            let node = self.node(cursor);
            if node.track.id == id {
                return Some(cursor);
            }
            cursor = node.next;
        }
        None
    }

    pub(super) fn node(&self, idx: usize) -> &Node {
        match self.slots.get(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("ring link points at free slot {}", idx),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        match self.slots.get_mut(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("ring link points at free slot {}", idx),
        }
    }

    /// Place a self-linked node in a free slot (or a new one)
    fn alloc(&mut self, track: Track) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(Node {
                    track,
                    next: idx,
                    prev: idx,
                });
                idx
            }
            None => {
                let idx = self.slots.len();
                self.slots.push(Some(Node {
                    track,
                    next: idx,
                    prev: idx,
                }));
                idx
            }
        }
    }

    fn refresh_snapshot(&mut self) {
        self.original_order = self.iter().cloned().collect();
    }
}

/// Borrowing iterator over a [`PlaylistRing`], head first
pub struct Iter<'a> {
    ring: &'a PlaylistRing,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.ring.node(self.cursor?);
        self.cursor = Some(node.next);
        self.remaining -= 1;
        Some(&node.track)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PlaylistRing {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Track> for PlaylistRing {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        for track in iter {
            self.insert(track);
        }
    }
}

impl FromIterator<Track> for PlaylistRing {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}
